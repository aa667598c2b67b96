//! OpenAI backed generator and moderator

use super::prompt::DECK_INSTRUCTIONS;
use super::{ContentModerator, DeckGenerator};
use crate::deck::{DECK_SCHEMA_NAME, Deck, deck_schema};
use crate::error::{DeckError, DeckResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MODERATION_MODEL: &str = "omni-moderation-latest";

const UNAVAILABLE: &str = "Generation service temporarily unavailable";

/// Connection settings for the OpenAI API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// Falls back to `OPENAI_API_KEY`
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub moderation_model: String,
    /// Screen input with the moderation endpoint before generating
    pub moderation: bool,
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            moderation_model: DEFAULT_MODERATION_MODEL.to_string(),
            moderation: true,
            timeout_secs: 120,
        }
    }
}

impl OpenAiConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// API key if one is configured and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Client for the Responses and Moderations endpoints
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: OpenAiConfig,
    http_client: Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Build a client with its own HTTP connection pool
    pub fn from_config(config: OpenAiConfig) -> DeckResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DeckError::config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::new(config, http_client))
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    fn api_key(&self) -> DeckResult<&str> {
        self.config.api_key().ok_or_else(|| {
            error!("OpenAI API key not configured");
            DeckError::config(UNAVAILABLE)
        })
    }

    async fn post(&self, path: &str, body: &Value) -> DeckResult<Value> {
        let api_key = self.api_key()?;
        let url = self.config.endpoint(path);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| DeckError::upstream(format!("OpenAI request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(DeckError::upstream(format!(
                "OpenAI API error (status {}): {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DeckError::upstream(format!("Failed to parse OpenAI response: {}", e)))
    }

    fn generation_request(&self, input: &str) -> Value {
        json!({
            "model": self.config.model,
            "instructions": DECK_INSTRUCTIONS,
            "input": input,
            "text": {
                "format": {
                    "type": "json_schema",
                    "name": DECK_SCHEMA_NAME,
                    "schema": deck_schema(),
                    "strict": true
                }
            }
        })
    }
}

#[async_trait]
impl DeckGenerator for OpenAiClient {
    #[instrument(skip(self, input), level = "debug")]
    async fn generate(&self, input: &str) -> DeckResult<Deck> {
        let body = self.generation_request(input);
        let response = self.post("responses", &body).await?;
        let deck = parse_responses_output(&response)?;
        debug!("Generated deck with {} slides", deck.slides.len());
        Ok(deck)
    }
}

#[async_trait]
impl ContentModerator for OpenAiClient {
    #[instrument(skip(self, input), level = "debug")]
    async fn moderate(&self, input: &str) -> DeckResult<()> {
        if !self.config.moderation {
            return Ok(());
        }

        let body = json!({
            "model": self.config.moderation_model,
            "input": input,
        });
        let response = self.post("moderations", &body).await?;
        match flagged_categories(&response)? {
            None => Ok(()),
            Some(categories) => {
                warn!("Input flagged by moderation: {}", categories.join(", "));
                Err(DeckError::Moderation { categories })
            }
        }
    }
}

/// Extract the structured deck from a Responses API payload
fn parse_responses_output(response: &Value) -> DeckResult<Deck> {
    let status = response["status"].as_str().unwrap_or("unknown");
    if status != "completed" {
        return Err(DeckError::upstream(format!("Responses API error: {}", status)));
    }

    let parts = response["output"]
        .as_array()
        .into_iter()
        .flatten()
        .filter(|item| item["type"] == "message")
        .filter_map(|item| item["content"].as_array())
        .flatten();

    for part in parts {
        match part["type"].as_str() {
            Some("output_text") => {
                let text = part["text"].as_str().unwrap_or_default();
                return Deck::from_json(text).map_err(|e| {
                    DeckError::upstream(format!("Model returned an unusable deck: {}", e))
                });
            }
            Some("refusal") => {
                let reason = part["refusal"].as_str().unwrap_or("no reason given");
                return Err(DeckError::upstream(format!("Model refused: {}", reason)));
            }
            _ => {}
        }
    }

    Err(DeckError::upstream("Responses API returned no output text"))
}

/// Categories set in the first moderation result, `None` when it is not flagged.
///
/// A flagged result with no readable categories yields `Some(vec![])`.
fn flagged_categories(response: &Value) -> DeckResult<Option<Vec<String>>> {
    let result = response["results"]
        .get(0)
        .ok_or_else(|| DeckError::upstream("Moderation response contained no results"))?;

    if !result["flagged"].as_bool().unwrap_or(false) {
        return Ok(None);
    }

    let categories = result["categories"]
        .as_object()
        .map(|map| {
            map.iter()
                .filter(|(_, flagged)| flagged.as_bool().unwrap_or(false))
                .map(|(name, _)| name.clone())
                .collect()
        })
        .unwrap_or_default();
    Ok(Some(categories))
}
