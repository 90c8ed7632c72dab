//! Provider implementations wrapping graniet/llm backends

use crate::types::*;
use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::ChatMessage;
use llm::error::LLMError as LLMLibError;
use tracing::info;

// ============================================================================
// Provider Registry
// ============================================================================

/// Get information about all supported providers
pub fn get_providers() -> Vec<ProviderInfo> {
    vec![
        ProviderInfo {
            id: "groq",
            name: "Groq",
            requires_api_key: true,
            default_model: "llama-3.3-70b-versatile",
            api_key_env: "GROQ_API_KEY",
            model_env: "GROQ_MODEL",
        },
        ProviderInfo {
            id: "openai",
            name: "OpenAI",
            requires_api_key: true,
            default_model: "gpt-4o-mini",
            api_key_env: "OPENAI_API_KEY",
            model_env: "OPENAI_MODEL",
        },
        ProviderInfo {
            id: "anthropic",
            name: "Anthropic",
            requires_api_key: true,
            default_model: "claude-3-haiku-20240307",
            api_key_env: "ANTHROPIC_API_KEY",
            model_env: "ANTHROPIC_MODEL",
        },
        ProviderInfo {
            id: "ollama",
            name: "Ollama",
            requires_api_key: false,
            default_model: "mistral",
            api_key_env: "OLLAMA_API_KEY",
            model_env: "OLLAMA_MODEL",
        },
    ]
}

/// Get provider info by ID (case-insensitive)
pub fn get_provider(provider_id: &str) -> Option<ProviderInfo> {
    get_providers()
        .into_iter()
        .find(|p| p.id.eq_ignore_ascii_case(provider_id))
}

// ============================================================================
// Completion Implementation
// ============================================================================

/// Map our provider ID to llm backend
fn get_backend(provider: &str) -> Result<LLMBackend, LLMError> {
    match provider {
        "groq" => Ok(LLMBackend::Groq),
        "openai" => Ok(LLMBackend::OpenAI),
        "anthropic" => Ok(LLMBackend::Anthropic),
        "ollama" => Ok(LLMBackend::Ollama),
        _ => Err(LLMError::ProviderNotFound {
            provider: provider.to_string(),
        }),
    }
}

/// Execute a completion request, blocking the calling thread
pub fn complete_sync(request: &LLMRequest) -> Result<LLMResponse, LLMError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| LLMError::Unknown {
            message: format!("Failed to create tokio runtime: {}", e),
        })?;
    runtime.block_on(complete_async(request))
}

/// Execute a completion request (async)
pub async fn complete_async(request: &LLMRequest) -> Result<LLMResponse, LLMError> {
    let backend = get_backend(&request.provider)?;

    let mut builder = LLMBuilder::new().backend(backend).model(&request.model);

    if let Some(api_key) = &request.api_key {
        builder = builder.api_key(api_key);
    }
    if let Some(base_url) = &request.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(max_tokens) = request.max_tokens {
        builder = builder.max_tokens(max_tokens);
    }
    if let Some(temp) = request.temperature {
        builder = builder.temperature(temp);
    }

    let llm = builder
        .build()
        .map_err(|e: LLMLibError| LLMError::InvalidRequest {
            message: e.to_string(),
        })?;

    let chat_messages: Vec<ChatMessage> = fold_system_prompt(&request.messages)
        .iter()
        .map(|msg| ChatMessage::user().content(&msg.content).build())
        .collect();

    info!(
        "LLM [{}/{}] <- {} messages",
        request.provider,
        request.model,
        chat_messages.len()
    );

    let response = llm
        .chat(&chat_messages)
        .await
        .map_err(|e: LLMLibError| classify_error(&request.provider, &e.to_string()))?;

    let content = response.text().unwrap_or_default().trim().to_string();
    let tokens_used = response.usage().map(|u| u.total_tokens as u32);

    info!(
        "LLM [{}/{}] -> {} chars",
        request.provider,
        request.model,
        content.len()
    );

    Ok(LLMResponse {
        content,
        tokens_used,
        model: request.model.clone(),
    })
}

/// Fold system messages into the following user message.
///
/// graniet/llm chat messages have no system role, so each system prompt is
/// prepended to the next user message. A trailing system prompt with no
/// user message after it is sent as a user message of its own.
fn fold_system_prompt(messages: &[LLMMessage]) -> Vec<LLMMessage> {
    let mut folded = Vec::with_capacity(messages.len());
    let mut system_prompt: Option<String> = None;

    for msg in messages {
        match msg.role {
            LLMRole::System => {
                system_prompt = Some(match system_prompt.take() {
                    Some(previous) => format!("{}\n\n{}", previous, msg.content),
                    None => msg.content.clone(),
                });
            }
            LLMRole::User => {
                let content = match system_prompt.take() {
                    Some(sys) => format!("{}\n\n{}", sys, msg.content),
                    None => msg.content.clone(),
                };
                folded.push(LLMMessage::user(content));
            }
        }
    }

    if let Some(sys) = system_prompt {
        folded.push(LLMMessage::user(sys));
    }

    folded
}

/// Map a provider error message onto our error kinds
fn classify_error(provider: &str, message: &str) -> LLMError {
    let lower = message.to_lowercase();
    if lower.contains("rate limit") || lower.contains("429") {
        LLMError::RateLimited {
            retry_after_seconds: Some(60),
        }
    } else if lower.contains("unauthorized")
        || lower.contains("401")
        || lower.contains("invalid api key")
        || lower.contains("invalid_api_key")
    {
        LLMError::InvalidApiKey {
            provider: provider.to_string(),
        }
    } else if lower.contains("network") || lower.contains("connection") {
        LLMError::NetworkError {
            message: message.to_string(),
        }
    } else if lower.contains("context") && lower.contains("length") {
        LLMError::ContextLengthExceeded {
            message: message.to_string(),
        }
    } else {
        LLMError::ApiError {
            message: message.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
