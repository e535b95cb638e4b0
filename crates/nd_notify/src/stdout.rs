use std::io::Write;
use async_trait::async_trait;
use nd_core::{Error, Notifier, Result};

/// Prints the message instead of delivering it. Used for dry runs.
#[derive(Debug, Default)]
pub struct StdoutNotifier;

#[async_trait]
impl Notifier for StdoutNotifier {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn notify(&self, text: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", text).map_err(|e| Error::Notification(e.to_string()))?;
        out.flush().map_err(|e| Error::Notification(e.to_string()))
    }
}
