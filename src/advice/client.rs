//! Client interface to the advice generation service
//!
//! The service is an external, non-deterministic text generator reached
//! over HTTP. The engine talks to it through [`AdviceService`] so tests can
//! substitute a canned double; nothing here is global state.

use crate::advice::payload::{ImprovementTips, LearningPath};
use crate::advice::prompts;
use crate::config::AdviceConfig;
use crate::error::{Result, SkillGapError};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// Per-call failure from the advice service. Always soft: the caller
/// records it against the skill and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdviceError {
    #[error("service error: {0}")]
    Service(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("call timed out")]
    Timeout,
}

pub type AdviceResult<T> = std::result::Result<T, AdviceError>;

pub trait AdviceService {
    /// Generate a learning path from `current_level` (0 for a missing
    /// skill) up to `target_level`.
    fn learning_path(
        &self,
        skill: &str,
        current_level: u8,
        target_level: u8,
    ) -> impl Future<Output = AdviceResult<LearningPath>> + Send;

    /// Generate next-level tips for a skill already at `current_level`.
    fn improvement_tips(
        &self,
        skill: &str,
        current_level: u8,
    ) -> impl Future<Output = AdviceResult<ImprovementTips>> + Send;
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    text: Option<String>,
}

/// HTTP client for a prompt-in, text-out generation endpoint.
pub struct HttpAdviceClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl HttpAdviceClient {
    /// Build from configuration; the API key is read from the configured
    /// environment variable and may be absent for unauthenticated
    /// endpoints.
    pub fn new(config: &AdviceConfig) -> Result<Self> {
        if config.endpoint.is_empty() {
            return Err(SkillGapError::Configuration(
                "advice service endpoint is not configured".to_string(),
            ));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: std::env::var(&config.api_key_env).ok(),
        })
    }

    async fn generate(&self, prompt: &str) -> AdviceResult<String> {
        let request = GenerationRequest {
            model: &self.model,
            prompt,
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AdviceError::Service(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AdviceError::Service(format!(
                "generation endpoint returned {}",
                response.status()
            )));
        }

        let body: GenerationResponse = response
            .json()
            .await
            .map_err(|e| AdviceError::Malformed(e.to_string()))?;

        body.text
            .ok_or_else(|| AdviceError::Malformed("response carries no text".to_string()))
    }
}

impl AdviceService for HttpAdviceClient {
    async fn learning_path(
        &self,
        skill: &str,
        current_level: u8,
        target_level: u8,
    ) -> AdviceResult<LearningPath> {
        debug!(
            "Requesting learning path for '{}' ({} -> {})",
            skill, current_level, target_level
        );
        let prompt = prompts::render_learning_path(skill, current_level, target_level);
        let text = self.generate(&prompt).await?;
        parse_payload(&text)
    }

    async fn improvement_tips(&self, skill: &str, current_level: u8) -> AdviceResult<ImprovementTips> {
        debug!("Requesting improvement tips for '{}'", skill);
        let prompt = prompts::render_improvement_tips(skill, current_level);
        let text = self.generate(&prompt).await?;
        parse_payload(&text)
    }
}

/// Parse a generated JSON payload, tolerating Markdown code fences around
/// it. Any parse failure is a malformed-response error, never a panic.
fn parse_payload<T: DeserializeOwned>(text: &str) -> AdviceResult<T> {
    let cleaned = strip_code_fences(text);
    serde_json::from_str(&cleaned).map_err(|e| AdviceError::Malformed(e.to_string()))
}

fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences() {
        let fenced = "```json\n{\"skill\": \"Python\"}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"skill\": \"Python\"}");
        assert_eq!(strip_code_fences("{}"), "{}");
    }

    #[test]
    fn test_parse_payload_from_fenced_response() {
        let fenced = "```json\n{\"skill\": \"SQL\", \"tips\": [\"Read the manual\"]}\n```";
        let tips: ImprovementTips = parse_payload(fenced).unwrap();
        assert_eq!(tips.skill, "SQL");
        assert_eq!(tips.tips.len(), 1);
    }

    #[test]
    fn test_parse_payload_rejects_garbage() {
        let result: AdviceResult<LearningPath> = parse_payload("I am not JSON at all");
        assert!(matches!(result, Err(AdviceError::Malformed(_))));
    }

    #[test]
    fn test_client_requires_endpoint() {
        let config = AdviceConfig {
            endpoint: String::new(),
            ..AdviceConfig::default()
        };
        assert!(HttpAdviceClient::new(&config).is_err());
    }
}
