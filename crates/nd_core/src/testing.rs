//! In-memory stand-ins for the pipeline stages.

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use crate::models::{FeedSource, Notifier, Summarizer};
use crate::types::FeedEntry;
use crate::{Error, Result};

/// Feeds keyed by URL. `None` marks a feed that fails to fetch.
#[derive(Default)]
pub struct StaticFeeds {
    feeds: HashMap<String, Option<usize>>,
    fetched: Mutex<Vec<String>>,
}

impl StaticFeeds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, url: &str, entries: usize) -> Self {
        self.feeds.insert(url.to_string(), Some(entries));
        self
    }

    pub fn with_failing(mut self, url: &str) -> Self {
        self.feeds.insert(url.to_string(), None);
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for StaticFeeds {
    async fn fetch_entries(&self, url: &str) -> Result<Vec<FeedEntry>> {
        self.fetched.lock().unwrap().push(url.to_string());
        match self.feeds.get(url) {
            Some(Some(count)) => Ok((0..*count)
                .map(|i| FeedEntry {
                    title: Some(format!("{} #{}", url, i)),
                    link: Some(format!("{}/{}", url, i)),
                    summary: Some(format!("summary {}", i)),
                    description: None,
                })
                .collect()),
            _ => Err(Error::Feed(format!("unreachable feed: {}", url))),
        }
    }
}

/// Returns a canned reply (or error) and remembers every prompt it saw.
pub struct RecordingSummarizer {
    reply: std::result::Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingSummarizer {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for RecordingSummarizer {
    fn name(&self) -> &str {
        "recording"
    }

    async fn summarize(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(Error::Inference)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    fail: bool,
    sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &str {
        "recording"
    }

    async fn notify(&self, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(Error::Notification("webhook returned 500".to_string()));
        }
        Ok(())
    }
}
