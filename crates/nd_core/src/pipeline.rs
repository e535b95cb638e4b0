use std::sync::Arc;
use tracing::info;
use crate::collector::collect_all;
use crate::error::Stage;
use crate::models::{FeedSource, Notifier, Summarizer};
use crate::prompt::compose_prompt;
use crate::types::{Article, RunReport};
use crate::Result;

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub feed_urls: Vec<String>,
    pub max_items: usize,
}

/// fetch → compose → summarize → notify, strictly in sequence.
pub struct Pipeline {
    feeds: Arc<dyn FeedSource>,
    summarizer: Arc<dyn Summarizer>,
    notifier: Arc<dyn Notifier>,
    settings: PipelineSettings,
}

impl Pipeline {
    pub fn new(
        feeds: Arc<dyn FeedSource>,
        summarizer: Arc<dyn Summarizer>,
        notifier: Arc<dyn Notifier>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            feeds,
            summarizer,
            notifier,
            settings,
        }
    }

    pub async fn collect(&self) -> Vec<Article> {
        info!("🦗 Collecting from {} feed(s)", self.settings.feed_urls.len());
        collect_all(self.feeds.as_ref(), self.settings.feed_urls.as_slice(), self.settings.max_items).await
    }

    pub fn compose(&self, articles: &[Article]) -> String {
        compose_prompt(articles)
    }

    /// Runs one pass. Feed failures only shrink the article list; a failed
    /// summarization or notification aborts the run.
    pub async fn run(&self) -> Result<RunReport> {
        let articles = self.collect().await;
        info!("📰 Collected {} article(s)", articles.len());

        let summary = self.deliver(&articles).await?;
        Ok(RunReport {
            article_count: articles.len(),
            summary,
        })
    }

    async fn deliver(&self, articles: &[Article]) -> Result<String> {
        let prompt = self.compose(articles);

        info!("🧠 Summarizing with {}", self.summarizer.name());
        let summary = self
            .summarizer
            .summarize(&prompt)
            .await
            .map_err(|e| e.in_stage(Stage::Summarize))?;

        info!("📣 Sending summary via {}", self.notifier.name());
        self.notifier
            .notify(&summary)
            .await
            .map_err(|e| e.in_stage(Stage::Notify))?;

        Ok(summary)
    }
}
