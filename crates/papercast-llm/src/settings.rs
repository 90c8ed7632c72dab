//! Provider selection and sampling settings
//!
//! Settings are read from the environment with the variable names papercast
//! has always used (`LLM_BACKEND`, `GROQ_API_KEY`, `OLLAMA_BASE_URL`, ...)
//! and layered under a config file's `[llm]` table. A provider named in the
//! file decides whose key, model and URL variables are read.

use serde::{Deserialize, Serialize};

use crate::provider::get_provider;
use crate::types::{LLMError, LLMMessage, LLMRequest};

const DEFAULT_PROVIDER: &str = "groq";
const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Resolved settings for front-matter completions.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettings {
    pub provider: String,
    /// Explicit model; `None` uses the provider's default
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Optional overrides, as found in the `[llm]` table of a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmOverrides {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            model: None,
            api_key: None,
            base_url: None,
            // Extraction must be deterministic
            temperature: 0.0,
            max_tokens: 1024,
        }
    }
}

impl LlmSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings from the process environment under config-file
    /// overrides.
    pub fn from_env_with(overrides: &LlmOverrides) -> Self {
        Self::layered(overrides, |name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its
    /// value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::layered(&LlmOverrides::default(), lookup)
    }

    /// Pick the provider (override, then `LLM_BACKEND`, then groq), read
    /// that provider's variables through `lookup`, then apply the remaining
    /// overrides on top.
    pub fn layered<F>(overrides: &LlmOverrides, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let provider = overrides
            .provider
            .clone()
            .filter(|p| !p.trim().is_empty())
            .or_else(|| get("LLM_BACKEND"))
            .map(|p| p.trim().to_lowercase())
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

        let mut settings = Self {
            provider,
            ..Self::default()
        };

        if let Some(info) = get_provider(&settings.provider) {
            settings.api_key = get(info.api_key_env);
            settings.model = get(info.model_env);
        }
        if settings.provider == "ollama" {
            settings.base_url =
                Some(get("OLLAMA_BASE_URL").unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string()));
        }

        if let Some(model) = &overrides.model {
            settings.model = Some(model.clone());
        }
        if let Some(api_key) = &overrides.api_key {
            settings.api_key = Some(api_key.clone());
        }
        if let Some(base_url) = &overrides.base_url {
            settings.base_url = Some(base_url.clone());
        }
        if let Some(temperature) = overrides.temperature {
            settings.temperature = temperature;
        }
        if let Some(max_tokens) = overrides.max_tokens {
            settings.max_tokens = max_tokens;
        }
        settings
    }

    /// The model to request: the explicit one, else the provider default.
    pub fn resolved_model(&self) -> Result<String, LLMError> {
        if let Some(model) = &self.model {
            return Ok(model.clone());
        }
        get_provider(&self.provider)
            .map(|info| info.default_model.to_string())
            .ok_or_else(|| LLMError::ProviderNotFound {
                provider: self.provider.clone(),
            })
    }

    /// Check that the provider exists and has the credentials it needs.
    pub fn validate(&self) -> Result<(), LLMError> {
        let info = get_provider(&self.provider).ok_or_else(|| LLMError::ProviderNotFound {
            provider: self.provider.clone(),
        })?;
        if info.requires_api_key && self.api_key.is_none() {
            return Err(LLMError::InvalidApiKey {
                provider: self.provider.clone(),
            });
        }
        Ok(())
    }

    /// Build a completion request of `instructions` followed by `content`.
    pub fn request(&self, instructions: &str, content: &str) -> Result<LLMRequest, LLMError> {
        Ok(LLMRequest {
            provider: self.provider.clone(),
            model: self.resolved_model()?,
            messages: vec![LLMMessage::system(instructions), LLMMessage::user(content)],
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
        })
    }
}
