//! Configuration management for the resume analyzer

use crate::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub embedding: EmbeddingConfig,
    pub feedback: FeedbackConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// HuggingFace repo id or local path of the Model2Vec model
    pub model_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    pub api_base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
    /// Plaintext file holding the API key. Missing file disables feedback.
    pub api_key_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embedding: EmbeddingConfig {
                model_id: "minishlab/potion-base-8M".to_string(),
            },
            feedback: FeedbackConfig {
                api_base_url: "https://api.openai.com/v1".to_string(),
                model: "gpt-3.5-turbo".to_string(),
                max_tokens: 300,
                temperature: 0.7,
                timeout_secs: 30,
                api_key_file: PathBuf::from("openai_api_key.txt"),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist; a missing file there is an error, not a
    /// silent fallback. The implicit default location is auto-created with
    /// defaults on first run.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(AnalyzerError::Configuration(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                Self::read_from(p)
            }
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    Self::read_from(&config_path)
                } else {
                    let config = Self::default();
                    config.save()?;
                    Ok(config)
                }
            }
        }
    }

    fn read_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AnalyzerError::Configuration(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            AnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    /// Read the API key from the configured plaintext file.
    ///
    /// Returns `None` when the file is absent, which disables the feedback
    /// path without affecting score and skill computation.
    pub fn read_api_key(&self) -> Option<String> {
        match std::fs::read_to_string(&self.feedback.api_key_file) {
            Ok(content) => {
                let key = content.trim().to_string();
                if key.is_empty() {
                    None
                } else {
                    Some(key)
                }
            }
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.feedback.model, "gpt-3.5-turbo");
        assert_eq!(config.feedback.max_tokens, 300);
        assert_eq!(config.feedback.temperature, 0.7);
        assert!(matches!(config.output.format, OutputFormat::Console));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.embedding.model_id, config.embedding.model_id);
        assert_eq!(parsed.feedback.timeout_secs, config.feedback.timeout_secs);
    }

    #[test]
    fn test_load_explicit_path_missing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-config.toml");

        let result = Config::load(Some(&missing));
        assert!(matches!(
            result,
            Err(crate::error::AnalyzerError::Configuration(_))
        ));
        // The typo'd path must not be created as a side effect
        assert!(!missing.exists());
    }

    #[test]
    fn test_load_explicit_path_existing_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.embedding.model_id = "minishlab/M2V_base_output".to_string();
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.embedding.model_id, "minishlab/M2V_base_output");
    }

    #[test]
    fn test_read_api_key_missing_file() {
        let mut config = Config::default();
        config.feedback.api_key_file = PathBuf::from("does-not-exist.txt");
        assert!(config.read_api_key().is_none());
    }

    #[test]
    fn test_read_api_key_trims_whitespace() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sk-test-key  ").unwrap();

        let mut config = Config::default();
        config.feedback.api_key_file = file.path().to_path_buf();
        assert_eq!(config.read_api_key().as_deref(), Some("sk-test-key"));
    }

    #[test]
    fn test_read_api_key_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.feedback.api_key_file = file.path().to_path_buf();
        assert!(config.read_api_key().is_none());
    }
}
