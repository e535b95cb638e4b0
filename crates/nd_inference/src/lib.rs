pub mod models;

pub const DEFAULT_MODEL_NAME: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Clone)]
pub struct InferenceConfig {
    /// Which summarizer to build: `openai` or `dummy`
    pub model: String,
    pub api_key: Option<String>,
    pub model_name: String,
    pub temperature: f64,
    pub api_base: String,
}

impl std::fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("temperature", &self.temperature)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            model: "openai".to_string(),
            api_key: None,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

pub mod prelude {
    pub use super::InferenceConfig;
    pub use super::models::create_model;
    pub use nd_core::{Summarizer, Result, Error};
}

pub use models::create_model;
