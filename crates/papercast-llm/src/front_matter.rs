//! Front-matter model backed by a chat-completion provider

use papercast_core::{FrontMatterError, FrontMatterModel};
use tracing::debug;

use crate::provider::complete_sync;
use crate::settings::LlmSettings;
use crate::types::LLMError;

/// [`FrontMatterModel`] that sends the instructions and snippet to the
/// configured provider in one blocking call.
#[derive(Debug, Clone)]
pub struct LlmFrontMatterModel {
    settings: LlmSettings,
}

impl LlmFrontMatterModel {
    /// Fails when the provider is unknown or its API key is missing.
    pub fn new(settings: LlmSettings) -> Result<Self, LLMError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &LlmSettings {
        &self.settings
    }
}

impl FrontMatterModel for LlmFrontMatterModel {
    fn complete(&self, instructions: &str, snippet: &str) -> Result<String, FrontMatterError> {
        let request = self.settings.request(instructions, snippet)?;
        let response = complete_sync(&request)?;
        if let Some(tokens) = response.tokens_used {
            debug!("Front matter from {} used {} tokens", response.model, tokens);
        }
        Ok(response.content)
    }
}

impl From<LLMError> for FrontMatterError {
    fn from(err: LLMError) -> Self {
        FrontMatterError::Model {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_missing_key() {
        let result = LlmFrontMatterModel::new(LlmSettings::default());
        assert!(matches!(result, Err(LLMError::InvalidApiKey { .. })));
    }

    #[test]
    fn test_new_accepts_local_provider() {
        let settings = LlmSettings {
            provider: "ollama".into(),
            ..LlmSettings::default()
        };
        let model = LlmFrontMatterModel::new(settings).unwrap();
        assert_eq!(model.settings().provider, "ollama");
    }

    #[test]
    fn test_llm_errors_become_model_errors() {
        let err: FrontMatterError = LLMError::NetworkError {
            message: "timed out".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Model call failed: Network error: timed out");
    }
}
