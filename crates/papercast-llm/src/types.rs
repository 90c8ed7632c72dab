//! Request, response and error types for chat completions

/// Message role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LLMRole {
    System,
    User,
}

/// A single message in a conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LLMMessage {
    pub role: LLMRole,
    pub content: String,
}

impl LLMMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: LLMRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: LLMRole::User,
            content: content.into(),
        }
    }
}

/// Request to complete a conversation
#[derive(Debug, Clone, PartialEq)]
pub struct LLMRequest {
    /// Provider identifier ("groq", "openai", "anthropic", "ollama")
    pub provider: String,
    /// Model identifier (e.g., "llama-3.3-70b-versatile")
    pub model: String,
    /// Conversation messages
    pub messages: Vec<LLMMessage>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// API key; local providers need none
    pub api_key: Option<String>,
    /// Endpoint override, used for self-hosted Ollama
    pub base_url: Option<String>,
}

/// Response from a completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LLMResponse {
    /// Generated content
    pub content: String,
    /// Number of tokens used, when the provider reports it
    pub tokens_used: Option<u32>,
    /// Model that generated the response
    pub model: String,
}

/// Information about a supported provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    /// Unique identifier for the provider
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Whether the provider requires an API key
    pub requires_api_key: bool,
    /// Default model for this provider
    pub default_model: &'static str,
    /// Environment variable holding the API key
    pub api_key_env: &'static str,
    /// Environment variable overriding the model
    pub model_env: &'static str,
}

/// Error types for LLM operations
#[derive(Debug, thiserror::Error)]
pub enum LLMError {
    #[error("Provider not found: {provider}")]
    ProviderNotFound { provider: String },

    #[error("Missing or invalid API key for {provider}")]
    InvalidApiKey { provider: String },

    #[error("Rate limited: retry after {retry_after_seconds:?} seconds")]
    RateLimited { retry_after_seconds: Option<u32> },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("API error: {message}")]
    ApiError { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Context length exceeded: {message}")]
    ContextLengthExceeded { message: String },

    #[error("Unknown error: {message}")]
    Unknown { message: String },
}
