//! Error types for the front-matter collaborator boundary
//!
//! These never escape the pipeline: the extractor logs them and falls back.

/// Failure of the model-assisted front-matter path.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    #[error("Model call failed: {message}")]
    Model { message: String },

    #[error("Malformed front-matter reply: {0}")]
    MalformedReply(#[from] serde_json::Error),
}

impl From<String> for FrontMatterError {
    fn from(message: String) -> Self {
        FrontMatterError::Model { message }
    }
}
