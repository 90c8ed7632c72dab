//! papercast-core: turn raw academic-paper text into narration-ready sections
//!
//! The pipeline runs in four stages:
//! - Math extraction: `$...$`, `$$...$$`, `\(...\)` and `\[...\]` spans become
//!   `<<LATEX:n>>` placeholders, with the formula sources kept aside
//! - Cleanup: citations, figure/table/equation references and running
//!   headers are stripped
//! - Section splitting: front matter (model-assisted or heuristic), then
//!   heading classification line by line
//! - Resolution: placeholders are replaced with spoken English
//!
//! Everything here is synchronous and infallible. The only external call is
//! the optional [`FrontMatterModel`], whose failures fall back to the
//! heuristic scan.
//!
//! ```
//! use papercast_core::{parse_paper_text, SectionKey};
//!
//! let paper = parse_paper_text("A Paper\n\nAbstract\nWe show $x^2$ works.");
//! assert_eq!(paper.spoken(SectionKey::Abstract), "We show x squared works.");
//! ```

pub mod config;
pub mod error;
pub mod math;
pub mod paper;
pub mod sections;
pub mod text;

pub use config::ParserConfig;
pub use error::FrontMatterError;
pub use math::{latex_to_spoken, resolve_placeholders};
pub use paper::{parse_paper_text, ParsedPaper, PaperParser};
pub use sections::{
    classify_heading, classify_heading_with, extract_front_matter, heuristic_front_matter,
    parse_front_matter_reply, split_sections, split_with_front_matter, FrontMatter,
    FrontMatterModel, FrontMatterOutcome, HeuristicFrontMatter, SectionKey, StructuredPaper,
    FRONT_MATTER_INSTRUCTIONS,
};
pub use text::{extract_expressions, normalize_text, placeholder, placeholder_indices, Document};
