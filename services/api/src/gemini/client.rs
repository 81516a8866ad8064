use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use veracity_analysis::CompletionClient;
use veracity_common::error::{VeracityError, VeracityResult};
use veracity_config::env::{get_var, get_var_or};

use super::models::{GenerateContentRequest, GenerateContentResponse};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

#[derive(Clone)]
pub struct GeminiClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl GeminiClientConfig {
    /// Load Gemini config from environment.
    ///
    /// `GEMINI_API_KEY` is mandatory; the service cannot answer anything without it.
    pub fn from_env() -> VeracityResult<Self> {
        let api_key = get_var("GEMINI_API_KEY")?;
        let timeout_secs = get_var_or("GEMINI_TIMEOUT_SECS", "120")
            .parse()
            .map_err(|e| VeracityError::Config(format!("invalid GEMINI_TIMEOUT_SECS: {e}")))?;

        Ok(Self {
            base_url: get_var_or("GEMINI_BASE_URL", DEFAULT_BASE_URL),
            api_key,
            model: get_var_or("GEMINI_MODEL", DEFAULT_MODEL),
            timeout_secs,
        })
    }
}

// Keeps the API key out of logs and panic messages.
impl fmt::Debug for GeminiClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiClientConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiClientError {
    #[error("HTTP {status}: {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("empty model response: {0}")]
    EmptyResponse(String),
}

impl GeminiClient {
    pub fn new(config: GeminiClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// For testing: create a client pointing at a specific base URL (e.g., wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send one prompt and return the model's text reply. No retries.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiClientError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiClientError::HttpError { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed
            .text()
            .ok_or_else(|| GeminiClientError::EmptyResponse(parsed.empty_reason()))
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, prompt: &str) -> VeracityResult<String> {
        self.generate(prompt).await.map_err(|e| {
            tracing::error!(model = %self.config.model, error = %e, "gemini request failed");
            VeracityError::Upstream(e.to_string())
        })
    }
}
