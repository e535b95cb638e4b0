use std::fmt;
use async_trait::async_trait;
use nd_core::{Result, Summarizer, PROMPT_PREAMBLE};

/// Offline model: lists every article of the prompt under the "other news"
/// heading without contacting any endpoint.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Summarizer for DummyModel {
    fn name(&self) -> &str {
        "dummy"
    }

    async fn summarize(&self, prompt: &str) -> Result<String> {
        let listing = prompt.strip_prefix(PROMPT_PREAMBLE).unwrap_or(prompt);
        let items: Vec<String> = listing
            .lines()
            .filter_map(|line| line.strip_prefix("- "))
            .map(|item| format!("📌 {}", item.trim_end()))
            .collect();

        Ok(format!("### その他ニュース\n{}", items.join("\n")))
    }
}
