//! Text processing module
//!
//! - Math span extraction into indexed placeholders
//! - Header, citation and reference cleanup

mod extractor;
mod normalizer;

pub use extractor::{extract_expressions, placeholder, placeholder_indices, Document};
pub(crate) use extractor::PLACEHOLDER_RE;
pub use normalizer::normalize_text;
