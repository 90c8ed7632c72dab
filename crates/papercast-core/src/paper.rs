//! End-to-end pipeline: raw text to structured, speakable sections.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ParserConfig;
use crate::math::resolve_placeholders;
use crate::sections::{split_sections, FrontMatterModel, SectionKey, StructuredPaper};
use crate::text::{normalize_text, Document};

/// A parsed paper: sections still carry `<<LATEX:n>>` placeholders that
/// index into `expressions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPaper {
    #[serde(skip_serializing)]
    #[serde(default)]
    pub raw_text: String,
    pub sections: StructuredPaper,
    pub expressions: Vec<String>,
}

impl ParsedPaper {
    /// Text of `key` with every placeholder replaced by spoken math.
    pub fn spoken(&self, key: SectionKey) -> String {
        resolve_placeholders(self.sections.get(key), &self.expressions)
    }

    /// Every present section with placeholders resolved.
    pub fn speakable(&self) -> StructuredPaper {
        self.sections
            .map_text(|text| resolve_placeholders(text, &self.expressions))
    }

    /// Body sections in presentation order, resolved, with absent sections
    /// as empty strings. This is what dialogue generation consumes.
    pub fn dialogue_sections(&self) -> Vec<(SectionKey, String)> {
        SectionKey::BODY
            .iter()
            .map(|key| (*key, self.spoken(*key)))
            .collect()
    }
}

/// Paper parser with an optional front-matter model.
pub struct PaperParser {
    config: ParserConfig,
    model: Option<Box<dyn FrontMatterModel>>,
}

impl PaperParser {
    /// Heuristic-only parser.
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            model: None,
        }
    }

    /// Parser that asks `model` for title, authors and abstract first.
    pub fn with_model(config: ParserConfig, model: Box<dyn FrontMatterModel>) -> Self {
        Self {
            config,
            model: Some(model),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Extract math, clean, then split into sections.
    pub fn parse(&self, raw_text: &str) -> ParsedPaper {
        let document = Document::from_raw(raw_text);
        let cleaned = normalize_text(&document.tagged_text);
        let sections = split_sections(
            &cleaned,
            &document.raw_text,
            self.model.as_deref(),
            &self.config,
        );
        debug!(
            "Parsed {} sections and {} expressions",
            sections.len(),
            document.expressions.len()
        );

        ParsedPaper {
            raw_text: document.raw_text,
            sections,
            expressions: document.expressions,
        }
    }
}

impl Default for PaperParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

/// Parse `raw_text` with the heuristic front-matter scan and default settings.
pub fn parse_paper_text(raw_text: &str) -> ParsedPaper {
    PaperParser::default().parse(raw_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialogue_sections_default_to_empty() {
        let paper = parse_paper_text("A Title\n\nIntroduction\nWe use $\\alpha$ here.");
        let body = paper.dialogue_sections();
        assert_eq!(body.len(), 7);
        assert_eq!(body[0], (SectionKey::Abstract, String::new()));
        assert_eq!(
            body[1],
            (SectionKey::Introduction, "We use alpha here.".to_string())
        );
        assert_eq!(body[6].0, SectionKey::Conclusion);
    }

    #[test]
    fn test_speakable_resolves_title_math() {
        let paper = parse_paper_text("On $\\sqrt{x}$ Growth\n\nResults\nNone.");
        assert_eq!(
            paper.speakable().get(SectionKey::Title),
            "On the square root of x Growth"
        );
        assert_eq!(paper.sections.get(SectionKey::Title), "On <<LATEX:0>> Growth");
    }

    #[test]
    fn test_raw_text_is_kept_but_not_serialized() {
        let paper = parse_paper_text("T\n\nResults\nOk.");
        assert_eq!(paper.raw_text, "T\n\nResults\nOk.");
        let json = serde_json::to_value(&paper).unwrap();
        assert!(json.get("raw_text").is_none());
        assert_eq!(json["sections"]["results"], "Ok.");
    }
}
