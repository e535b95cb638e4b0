use std::io::Write;
use std::sync::Arc;
use anyhow::Context;
use clap::Parser;
use nd_core::{Notifier, Pipeline, RunReport};
use nd_feeds::HttpFeedSource;
use nd_notify::{SlackWebhook, StdoutNotifier};
use tracing::{error, info};

mod config;
mod duration;
mod logging;

use config::{AppConfig, Cli};

fn build_pipeline(config: &AppConfig) -> anyhow::Result<Pipeline> {
    let feeds = Arc::new(HttpFeedSource::new().context("failed to build HTTP client")?);
    let summarizer = nd_inference::create_model(&config.inference)?;
    let notifier: Arc<dyn Notifier> = if config.dry_run {
        Arc::new(StdoutNotifier)
    } else {
        Arc::new(SlackWebhook::new(config.webhook_url.clone()))
    };

    Ok(Pipeline::new(feeds, summarizer, notifier, config.pipeline.clone()))
}

/// One delivering pass. The article count and the confirmation line go to
/// `out` only after the digest was delivered.
async fn run_once<W: Write>(pipeline: &Pipeline, dry_run: bool, out: &mut W) -> anyhow::Result<RunReport> {
    let report = pipeline.run().await?;

    writeln!(out, "Collected {} articles", report.article_count)?;
    if dry_run {
        writeln!(out, "Printed digest (dry run) ✅")?;
    } else {
        writeln!(out, "Sent to webhook ✅")?;
    }
    Ok(report)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose());

    let config = AppConfig::from_cli(cli)?;
    info!("Loaded configuration: {:?}", config);

    let pipeline = build_pipeline(&config)?;

    if config.print_prompt {
        let articles = pipeline.collect().await;
        print!("{}", pipeline.compose(&articles));
        return Ok(());
    }

    match config.interval {
        None => {
            run_once(&pipeline, config.dry_run, &mut std::io::stdout()).await?;
        }
        Some(interval) => {
            info!("Running in periodic mode with {}s interval", interval.as_secs());
            loop {
                info!("Starting run");
                if let Err(e) = run_once(&pipeline, config.dry_run, &mut std::io::stdout()).await {
                    error!("Run failed: {}", e);
                }
                info!("Waiting {}s before next run", interval.as_secs());
                tokio::time::sleep(interval).await;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_core::testing::{RecordingNotifier, RecordingSummarizer, StaticFeeds};
    use nd_core::{Error, PipelineSettings, Stage};

    fn pipeline(
        summarizer: Arc<RecordingSummarizer>,
        notifier: Arc<RecordingNotifier>,
    ) -> Pipeline {
        let urls = vec![
            "https://a.example/rss".to_string(),
            "https://b.example/rss".to_string(),
            "https://down.example/rss".to_string(),
        ];
        let feeds = StaticFeeds::new()
            .with_feed(&urls[0], 3)
            .with_feed(&urls[1], 1)
            .with_failing(&urls[2]);
        Pipeline::new(
            Arc::new(feeds),
            summarizer,
            notifier,
            PipelineSettings { feed_urls: urls, max_items: 1 },
        )
    }

    #[tokio::test]
    async fn test_run_once_reports_count_and_confirmation() {
        let summarizer = Arc::new(RecordingSummarizer::replying("digest"));
        let notifier = Arc::new(RecordingNotifier::new());
        let pipeline = pipeline(summarizer.clone(), notifier.clone());
        let mut out = Vec::new();

        let report = run_once(&pipeline, false, &mut out).await.unwrap();

        assert_eq!(report.article_count, 2);
        assert_eq!(summarizer.prompts().len(), 1);
        assert_eq!(notifier.sent(), vec!["digest".to_string()]);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Collected 2 articles\nSent to webhook ✅\n"
        );
    }

    #[tokio::test]
    async fn test_run_once_summarize_failure_skips_notifier() {
        let summarizer = Arc::new(RecordingSummarizer::failing("invalid api key"));
        let notifier = Arc::new(RecordingNotifier::new());
        let pipeline = pipeline(summarizer.clone(), notifier.clone());
        let mut out = Vec::new();

        let err = run_once(&pipeline, false, &mut out).await.unwrap_err();

        let err = err.downcast_ref::<Error>().unwrap();
        assert_eq!(err.stage(), Some(Stage::Summarize));
        assert_eq!(summarizer.prompts().len(), 1);
        assert!(notifier.sent().is_empty());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_run_once_notify_failure_is_an_error() {
        let summarizer = Arc::new(RecordingSummarizer::replying("digest"));
        let notifier = Arc::new(RecordingNotifier::failing());
        let pipeline = pipeline(summarizer, notifier.clone());
        let mut out = Vec::new();

        let err = run_once(&pipeline, true, &mut out).await.unwrap_err();

        assert_eq!(err.downcast_ref::<Error>().and_then(Error::stage), Some(Stage::Notify));
        assert!(out.is_empty());
    }
}
