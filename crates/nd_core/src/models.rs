use async_trait::async_trait;
use crate::types::FeedEntry;
use crate::Result;

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch every entry of the feed at `url`, in the feed's native order
    async fn fetch_entries(&self, url: &str) -> Result<Vec<FeedEntry>>;
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    fn name(&self) -> &str;

    /// Send the composed prompt to the model and return its raw text output
    async fn summarize(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &str;

    /// Deliver the text as a single message
    async fn notify(&self, text: &str) -> Result<()>;
}
