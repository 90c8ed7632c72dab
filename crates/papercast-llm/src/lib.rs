//! papercast-llm - chat-completion providers for papercast
//!
//! Bridges the core's [`papercast_core::FrontMatterModel`] to hosted and
//! local language models through the graniet/llm library.
//!
//! # Supported Providers
//!
//! - **Groq**: fast hosted inference (default)
//! - **OpenAI**: GPT models
//! - **Anthropic**: Claude models
//! - **Ollama**: local models, no API key
//!
//! # Architecture
//!
//! All calls are blocking. Each completion runs on a short-lived
//! current-thread tokio runtime, so callers need no runtime of their own
//! and must not call in from inside one.

pub mod front_matter;
pub mod provider;
pub mod settings;
pub mod types;

pub use front_matter::LlmFrontMatterModel;
pub use provider::{complete_async, complete_sync, get_provider, get_providers};
pub use settings::{LlmOverrides, LlmSettings};
pub use types::*;
