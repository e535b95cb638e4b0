use std::fmt;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use nd_core::{Error, Notifier, Result};
use tracing::debug;

#[derive(Serialize)]
struct WebhookMessage<'a> {
    text: &'a str,
}

/// Posts messages to a Slack-style incoming webhook.
pub struct SlackWebhook {
    client: Client,
    url: Option<String>,
}

impl SlackWebhook {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

impl fmt::Debug for SlackWebhook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the webhook URL is itself the credential
        f.debug_struct("SlackWebhook")
            .field("url", &self.url.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl Notifier for SlackWebhook {
    fn name(&self) -> &str {
        "slack"
    }

    async fn notify(&self, text: &str) -> Result<()> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| Error::Notification("webhook URL is not configured".to_string()))?;

        debug!("📤 Posting {} bytes to webhook", text.len());
        let response = self.client
            .post(url)
            .json(&WebhookMessage { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Notification(format!("webhook returned {}: {}", status, body)));
        }

        Ok(())
    }
}
