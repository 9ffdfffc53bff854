//! Configuration management for the skill gap analyzer

use crate::error::{Result, SkillGapError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ontology: OntologyConfig,
    pub advice: AdviceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OntologyConfig {
    /// JSON file with the skill ontology. A missing file is not an error;
    /// recognition degrades to an empty vocabulary.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceConfig {
    /// Generation endpoint URL. Empty disables the advice step.
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Per-call timeout in seconds; a timed-out call is a soft failure for
    /// that skill only.
    pub timeout_secs: u64,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        let ontology_path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skill-gap-analyzer")
            .join("skill_ontology.json");

        Self {
            ontology: OntologyConfig {
                path: ontology_path,
            },
            advice: AdviceConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            model: "gemini-2.0-flash".to_string(),
            api_key_env: "SKILL_GAP_API_KEY".to_string(),
            timeout_secs: 30,
            enabled: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| SkillGapError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillGapError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-gap-analyzer")
            .join("config.toml")
    }

    pub fn ontology_path(&self) -> &PathBuf {
        &self.ontology.path
    }

    pub fn advice_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.advice.timeout_secs)
    }

    /// Advice calls are attempted only when enabled and an endpoint is set.
    pub fn advice_available(&self) -> bool {
        self.advice.enabled && !self.advice.endpoint.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.output.color_output);
        assert_eq!(config.output.format, OutputFormat::Console);
        assert_eq!(config.advice.timeout_secs, 30);
        // no endpoint configured out of the box
        assert!(!config.advice_available());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let reparsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(reparsed.advice.model, config.advice.model);
        assert_eq!(reparsed.ontology.path, config.ontology.path);
    }
}
