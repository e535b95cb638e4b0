use std::fmt;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use nd_core::{Error, Result, Summarizer};
use tracing::debug;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

/// Client for an OpenAI-compatible chat-completion endpoint.
pub struct ChatCompletionModel {
    client: Client,
    api_key: String,
    base_url: String,
    model_name: String,
    temperature: f64,
}

impl ChatCompletionModel {
    /// A missing key is sent as an empty bearer token; the endpoint decides
    /// whether the request is authorized.
    pub fn new(api_key: Option<String>, base_url: &str, model_name: &str, temperature: f64) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name: model_name.to_string(),
            temperature,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl fmt::Debug for ChatCompletionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatCompletionModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .field("temperature", &self.temperature)
            .finish()
    }
}

#[async_trait]
impl Summarizer for ChatCompletionModel {
    fn name(&self) -> &str {
        &self.model_name
    }

    async fn summarize(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model_name,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        debug!("🤖 POST {} ({} prompt bytes)", self.endpoint(), prompt.len());
        let response = self.client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(Error::Inference(format!("{} returned {}: {}", self.endpoint(), status, message)));
        }

        let response = response.json::<ChatResponse>().await?;
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Inference("response contained no choices".to_string()))?;

        choice
            .message
            .content
            .ok_or_else(|| Error::Inference("first choice has no message content".to_string()))
    }
}
