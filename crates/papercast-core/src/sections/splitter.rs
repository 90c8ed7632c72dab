//! Section splitter
//!
//! Walks cleaned lines once. Front matter seeds the map first, then each
//! line is either a heading (moves the cursor) or body text (appended to the
//! section under the cursor).

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::front_matter::{
    extract_front_matter, heuristic_front_matter, FrontMatterModel, FrontMatterOutcome,
};
use super::headings::classify_heading_with;
use super::{SectionKey, StructuredPaper};
use crate::config::ParserConfig;

/// Where body lines currently go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Before the first heading: lines are dropped.
    Idle,
    Collecting(SectionKey),
    /// Under references, appendix or a duplicate abstract.
    Discarding,
}

/// Split cleaned paper text into sections.
///
/// With a `model`, front matter is requested for the opening of `raw_text`
/// (or of `text` when `raw_text` is empty); without one, or when the model
/// comes back empty, the heuristic scan is used.
pub fn split_sections(
    text: &str,
    raw_text: &str,
    model: Option<&dyn FrontMatterModel>,
    config: &ParserConfig,
) -> StructuredPaper {
    let outcome = match model {
        Some(model) => {
            let source = if raw_text.is_empty() { text } else { raw_text };
            extract_front_matter(model, source, config.front_matter_chars)
        }
        None => FrontMatterOutcome::Empty,
    };
    split_with_front_matter(text, outcome, config)
}

/// Split cleaned paper text given an already-computed front-matter outcome.
pub fn split_with_front_matter(
    text: &str,
    front_matter: FrontMatterOutcome,
    config: &ParserConfig,
) -> StructuredPaper {
    let lines: Vec<&str> = text.split('\n').collect();
    let headings: Vec<Option<SectionKey>> = lines
        .iter()
        .map(|line| classify_heading_with(line, config))
        .collect();

    let heuristic;
    let mut sections: BTreeMap<SectionKey, Vec<&str>> = BTreeMap::new();

    let start = match &front_matter {
        FrontMatterOutcome::Extracted(front) => {
            sections.insert(SectionKey::Title, vec![front.title.as_str()]);
            sections.insert(SectionKey::Authors, vec![front.authors.as_str()]);
            let has_abstract = !front.abstract_text.is_empty();
            if has_abstract {
                sections.insert(SectionKey::Abstract, vec![front.abstract_text.as_str()]);
            }
            resume_after_abstract(&headings, has_abstract)
        }
        FrontMatterOutcome::Empty => {
            info!("Falling back to heuristic title/author extraction");
            heuristic = heuristic_front_matter(&lines, config);
            sections.insert(SectionKey::Title, vec![heuristic.title.as_str()]);
            sections.insert(SectionKey::Authors, vec![heuristic.authors.as_str()]);
            heuristic.resume_at
        }
    };

    let mut cursor = Cursor::Idle;
    for (idx, (line, heading)) in lines.iter().zip(&headings).enumerate().skip(start) {
        cursor = match *heading {
            Some(key) if key.is_discarded() => Cursor::Discarding,
            Some(SectionKey::Abstract) if sections.contains_key(&SectionKey::Abstract) => {
                Cursor::Discarding
            }
            Some(key) => {
                sections.entry(key).or_default();
                Cursor::Collecting(key)
            }
            None => {
                if let Cursor::Collecting(key) = cursor {
                    sections.entry(key).or_default().push(*line);
                }
                continue;
            }
        };
        debug!("Line {} is a heading, now {:?}", idx, cursor);
    }

    let mut paper = StructuredPaper::new();
    for (key, body) in sections {
        paper.insert(key, body.join("\n").trim());
    }
    paper
}

/// First line to scan when the model supplied the front matter.
///
/// With an abstract from the model, skip to the first non-abstract heading
/// after the abstract heading so its body is not collected twice. Without
/// one, resume at the abstract heading itself.
fn resume_after_abstract(headings: &[Option<SectionKey>], has_abstract: bool) -> usize {
    let Some(abstract_at) = headings
        .iter()
        .position(|h| *h == Some(SectionKey::Abstract))
    else {
        return 0;
    };

    if !has_abstract {
        return abstract_at;
    }

    headings[abstract_at + 1..]
        .iter()
        .position(|h| h.is_some_and(|key| key != SectionKey::Abstract))
        .map_or(abstract_at + 1, |offset| abstract_at + 1 + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::FrontMatter;

    fn extracted(title: &str, authors: &str, abstract_text: &str) -> FrontMatterOutcome {
        FrontMatterOutcome::Extracted(FrontMatter {
            title: title.into(),
            authors: authors.into(),
            abstract_text: abstract_text.into(),
        })
    }

    const PAPER: &str = "Title Line\nJane Doe, John Smith\n\nAbstract\nShort abstract.\n\n1. Introduction\nIntro text.\nMore intro.\n\n2. Methods\nWe did it.\n\nReferences\n[1] Someone. 2020.\n\nAppendix\nProofs.";

    #[test]
    fn test_heuristic_split() {
        let paper = split_with_front_matter(PAPER, FrontMatterOutcome::Empty, &ParserConfig::default());
        assert_eq!(paper.get(SectionKey::Title), "Title Line");
        assert_eq!(paper.get(SectionKey::Authors), "Jane Doe, John Smith");
        assert_eq!(paper.get(SectionKey::Abstract), "Short abstract.");
        assert_eq!(paper.get(SectionKey::Introduction), "Intro text.\nMore intro.");
        assert_eq!(paper.get(SectionKey::Methodology), "We did it.");
        assert!(!paper.contains(SectionKey::References));
        assert!(!paper.contains(SectionKey::Appendix));
        assert!(paper.keys().all(|key| !key.is_discarded()));
    }

    #[test]
    fn test_model_abstract_is_not_duplicated() {
        let outcome = extracted("T", "A", "Model abstract.");
        let paper = split_with_front_matter(PAPER, outcome, &ParserConfig::default());
        assert_eq!(paper.get(SectionKey::Title), "T");
        assert_eq!(paper.get(SectionKey::Abstract), "Model abstract.");
        assert_eq!(paper.get(SectionKey::Introduction), "Intro text.\nMore intro.");
    }

    #[test]
    fn test_model_without_abstract_collects_abstract_body() {
        let outcome = extracted("T", "A", "");
        let paper = split_with_front_matter(PAPER, outcome, &ParserConfig::default());
        assert_eq!(paper.get(SectionKey::Abstract), "Short abstract.");
    }

    #[test]
    fn test_model_without_abstract_heading_scans_from_start() {
        let text = "Some preamble\n1. Introduction\nHello.";
        let paper = split_with_front_matter(text, extracted("T", "A", "X"), &ParserConfig::default());
        assert_eq!(paper.get(SectionKey::Introduction), "Hello.");
        assert_eq!(paper.get(SectionKey::Abstract), "X");
    }

    #[test]
    fn test_second_abstract_heading_is_discarded() {
        let text = "T\n\nAbstract\nFirst.\nAbstract\nSecond.\nConclusion\nDone.";
        let paper = split_with_front_matter(text, FrontMatterOutcome::Empty, &ParserConfig::default());
        assert_eq!(paper.get(SectionKey::Abstract), "First.");
        assert_eq!(paper.get(SectionKey::Conclusion), "Done.");
    }

    #[test]
    fn test_repeated_heading_appends() {
        let text = "T\n\nResults\nOne.\nDiscussion\nTwo.\nResults\nThree.";
        let paper = split_with_front_matter(text, FrontMatterOutcome::Empty, &ParserConfig::default());
        assert_eq!(paper.get(SectionKey::Results), "One.\nThree.");
    }

    #[test]
    fn test_no_headings_keeps_front_matter_only() {
        let text = "Just a Title\n\nsome body text without any headings";
        let paper = split_with_front_matter(text, FrontMatterOutcome::Empty, &ParserConfig::default());
        assert_eq!(paper.get(SectionKey::Title), "Just a Title");
        assert_eq!(paper.keys().collect::<Vec<_>>(), vec![SectionKey::Title, SectionKey::Authors]);
    }

    #[test]
    fn test_heading_with_empty_body_is_present() {
        let text = "T\n\nDiscussion\n\nConclusion\nEnd.";
        let paper = split_with_front_matter(text, FrontMatterOutcome::Empty, &ParserConfig::default());
        assert!(paper.contains(SectionKey::Discussion));
        assert_eq!(paper.get(SectionKey::Discussion), "");
    }

    #[test]
    fn test_split_sections_without_model_is_heuristic() {
        let paper = split_sections(PAPER, PAPER, None, &ParserConfig::default());
        assert_eq!(paper.get(SectionKey::Title), "Title Line");
    }
}
