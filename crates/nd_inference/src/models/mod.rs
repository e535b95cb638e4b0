use std::sync::Arc;
use nd_core::{Error, Result, Summarizer};
use tracing::info;
use url::Url;
use crate::InferenceConfig;

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use openai::ChatCompletionModel;

/// Builds the summarizer named by `config.model` (`openai` or `dummy`).
pub fn create_model(config: &InferenceConfig) -> Result<Arc<dyn Summarizer>> {
    match config.model.as_str() {
        "openai" => {
            Url::parse(&config.api_base)
                .map_err(|e| Error::InvalidUrl(format!("{}: {}", config.api_base, e)))?;
            info!("🧠 Using chat-completion model {} at {}", config.model_name, config.api_base);
            Ok(Arc::new(ChatCompletionModel::new(
                config.api_key.clone(),
                &config.api_base,
                &config.model_name,
                config.temperature,
            )))
        }
        "dummy" => {
            info!("🧠 Using offline dummy model");
            Ok(Arc::new(DummyModel::new()))
        }
        other => Err(Error::Config(format!(
            "Unknown model '{}'. Available models: openai, dummy",
            other
        ))),
    }
}
