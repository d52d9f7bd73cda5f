//! Gemini generateContent provider implementation.

use super::LLMProvider;
use crate::client::Client;
use crate::configuration::{Configuration, DEFAULT_GEMINI_API_URL};
use crate::error::{Result, ScrapeError};
use async_trait::async_trait;

/// Gemini provider over the public REST API.
///
/// # Example
/// ```ignore
/// use form_spider::llm::{GeminiProvider, LLMProvider};
///
/// let provider = GeminiProvider::new("AIza...", "gemini-2.5-flash");
/// let client = form_spider::Client::new();
///
/// let text = provider.complete("Context:\n...\nUser Prompt:\nsummarize", &client).await?;
/// println!("{}", text);
/// ```
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_GEMINI_API_URL.to_string(),
            model: model.into(),
        }
    }

    /// Provider from the configuration. The api key is required.
    pub fn from_configuration(configuration: &Configuration) -> Result<Self> {
        let api_key = configuration
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ScrapeError::NotConfigured("GEMINI_API_KEY"))?;

        Ok(Self::new(api_key, &configuration.model).with_api_url(&configuration.api_url))
    }

    /// Use a custom API base url.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// The generateContent endpoint for the model.
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn complete(&self, content: &str, client: &Client) -> Result<String> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": content }] }],
        });

        let response = client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ScrapeError::Llm("Authentication failed".to_string()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ScrapeError::RateLimited);
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ScrapeError::Llm(format!("HTTP {}: {}", status, error_text)));
        }

        let json: serde_json::Value = serde_json::from_str(&response.text().await?)?;

        let parts = json
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .ok_or(ScrapeError::MissingField("candidates[0].content.parts"))?;

        let texts: Vec<&str> = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
            .collect();

        if texts.is_empty() {
            return Err(ScrapeError::MissingField("candidates[0].content.parts[].text"));
        }

        Ok(texts.concat())
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
