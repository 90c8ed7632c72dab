//! Config file loading
//!
//! ```toml
//! [parser]
//! heading_max_chars = 80
//! numbered_heading_max_chars = 60
//! front_matter_chars = 4000
//!
//! [llm]
//! provider = "ollama"
//! model = "llama3"
//! base_url = "http://localhost:11434"
//! temperature = 0.0
//! max_tokens = 1024
//! ```
//!
//! Both tables are optional. `[llm]` values override the environment.

use std::path::{Path, PathBuf};

use papercast_core::ParserConfig;
use papercast_llm::LlmOverrides;
use serde::{Deserialize, Serialize};

/// Errors that can occur when loading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub llm: LlmOverrides,
}

/// `<config_dir>/papercast/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("papercast").join("config.toml"))
}

impl AppConfig {
    /// Load `path`, or the default location when `path` is `None`.
    ///
    /// An explicit path must exist; a missing default file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.heading_max_chars == 0 {
            return Err(ConfigError::Invalid(
                "parser.heading_max_chars must be positive".to_string(),
            ));
        }
        if self.parser.front_matter_chars == 0 {
            return Err(ConfigError::Invalid(
                "parser.front_matter_chars must be positive".to_string(),
            ));
        }
        if let Some(temperature) = self.llm.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ConfigError::Invalid(
                    "llm.temperature must be between 0.0 and 2.0".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_file_is_default() {
        let file = write_config("");
        assert_eq!(AppConfig::from_file(file.path()).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            r#"
[parser]
front_matter_chars = 2000

[llm]
provider = "ollama"
model = "llama3"
temperature = 0.0
"#,
        );
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.parser.front_matter_chars, 2000);
        assert_eq!(config.parser.heading_max_chars, 80);
        assert_eq!(config.llm.provider.as_deref(), Some("ollama"));
        assert_eq!(config.llm.model.as_deref(), Some("llama3"));
        assert_eq!(config.llm.max_tokens, None);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[parser\nheading_max_chars = ");
        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_wrong_type_is_a_parse_error() {
        assert!(matches!(
            AppConfig::from_toml("[parser]\nheading_max_chars = \"eighty\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            AppConfig::from_toml("[parser]\nheading_max_chars = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_toml("[llm]\ntemperature = 3.5"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_default_path_is_under_papercast() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("papercast/config.toml"));
        }
    }
}
