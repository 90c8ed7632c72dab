//! Section model and section splitting
//!
//! This module turns cleaned paper text into a [`StructuredPaper`]:
//! - Canonical section keys and the structured paper map
//! - Heading classification for single lines
//! - Front-matter extraction (model-assisted with heuristic fallback)
//! - The section splitter state machine

mod front_matter;
mod headings;
mod splitter;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub use front_matter::{
    extract_front_matter, heuristic_front_matter, parse_front_matter_reply, FrontMatter,
    FrontMatterModel, FrontMatterOutcome, HeuristicFrontMatter, FRONT_MATTER_INSTRUCTIONS,
};
pub use headings::{classify_heading, classify_heading_with};
pub use splitter::{split_sections, split_with_front_matter};

/// Canonical section category a line of paper text can be sorted into.
///
/// Declaration order is presentation order. `References` and `Appendix`
/// are discard keys: headings recognise them, but their content is never kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Title,
    Authors,
    Abstract,
    Introduction,
    RelatedWork,
    Methodology,
    Results,
    Discussion,
    Conclusion,
    References,
    Appendix,
}

impl SectionKey {
    /// Retained keys in presentation order.
    pub const ALL: [SectionKey; 9] = [
        SectionKey::Title,
        SectionKey::Authors,
        SectionKey::Abstract,
        SectionKey::Introduction,
        SectionKey::RelatedWork,
        SectionKey::Methodology,
        SectionKey::Results,
        SectionKey::Discussion,
        SectionKey::Conclusion,
    ];

    /// Body sections handed to dialogue generation, in presentation order.
    pub const BODY: [SectionKey; 7] = [
        SectionKey::Abstract,
        SectionKey::Introduction,
        SectionKey::RelatedWork,
        SectionKey::Methodology,
        SectionKey::Results,
        SectionKey::Discussion,
        SectionKey::Conclusion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Title => "title",
            SectionKey::Authors => "authors",
            SectionKey::Abstract => "abstract",
            SectionKey::Introduction => "introduction",
            SectionKey::RelatedWork => "related_work",
            SectionKey::Methodology => "methodology",
            SectionKey::Results => "results",
            SectionKey::Discussion => "discussion",
            SectionKey::Conclusion => "conclusion",
            SectionKey::References => "references",
            SectionKey::Appendix => "appendix",
        }
    }

    /// Whether content under this key is dropped rather than kept.
    pub fn is_discarded(&self) -> bool {
        matches!(self, SectionKey::References | SectionKey::Appendix)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from canonical section key to section text.
///
/// Holds at most one value per key and never holds a discard key.
/// Missing keys read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StructuredPaper {
    sections: BTreeMap<SectionKey, String>,
}

impl StructuredPaper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for `key`, or `""` when the section is absent.
    pub fn get(&self, key: SectionKey) -> &str {
        self.sections.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: SectionKey) -> bool {
        self.sections.contains_key(&key)
    }

    /// Store `text` under `key`, replacing any previous value.
    ///
    /// Discard keys are ignored.
    pub fn insert(&mut self, key: SectionKey, text: impl Into<String>) {
        if key.is_discarded() {
            tracing::debug!("Ignoring content for discarded section {}", key);
            return;
        }
        self.sections.insert(key, text.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = SectionKey> + '_ {
        self.sections.keys().copied()
    }

    /// Sections in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &str)> {
        self.sections.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Apply `f` to every section's text, keeping the keys.
    pub fn map_text<F>(&self, mut f: F) -> StructuredPaper
    where
        F: FnMut(&str) -> String,
    {
        StructuredPaper {
            sections: self
                .sections
                .iter()
                .map(|(k, v)| (*k, f(v)))
                .collect(),
        }
    }
}

impl FromIterator<(SectionKey, String)> for StructuredPaper {
    fn from_iter<I: IntoIterator<Item = (SectionKey, String)>>(iter: I) -> Self {
        let mut paper = StructuredPaper::new();
        for (key, text) in iter {
            paper.insert(key, text);
        }
        paper
    }
}

// Goes through `insert` so discard keys never get in.
impl<'de> Deserialize<'de> for StructuredPaper {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let sections = BTreeMap::<SectionKey, String>::deserialize(deserializer)?;
        Ok(sections.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_empty() {
        let paper = StructuredPaper::new();
        assert_eq!(paper.get(SectionKey::Results), "");
        assert!(!paper.contains(SectionKey::Results));
    }

    #[test]
    fn test_discard_keys_are_never_stored() {
        let mut paper = StructuredPaper::new();
        paper.insert(SectionKey::References, "[1] Someone");
        paper.insert(SectionKey::Appendix, "Proofs");
        assert!(paper.is_empty());
    }

    #[test]
    fn test_iteration_follows_presentation_order() {
        let mut paper = StructuredPaper::new();
        paper.insert(SectionKey::Conclusion, "c");
        paper.insert(SectionKey::Title, "t");
        paper.insert(SectionKey::RelatedWork, "r");
        let keys: Vec<_> = paper.keys().collect();
        assert_eq!(
            keys,
            vec![SectionKey::Title, SectionKey::RelatedWork, SectionKey::Conclusion]
        );
    }

    #[test]
    fn test_serializes_with_snake_case_keys() {
        let mut paper = StructuredPaper::new();
        paper.insert(SectionKey::RelatedWork, "prior art");
        let json = serde_json::to_string(&paper).unwrap();
        assert_eq!(json, r#"{"related_work":"prior art"}"#);
    }

    #[test]
    fn test_deserializing_drops_discard_keys() {
        let paper: StructuredPaper = serde_json::from_str(
            r#"{"title": "T", "references": "[1] Someone", "appendix": "Proofs"}"#,
        )
        .unwrap();
        assert_eq!(paper.keys().collect::<Vec<_>>(), vec![SectionKey::Title]);
        assert_eq!(paper.get(SectionKey::Title), "T");
    }
}
