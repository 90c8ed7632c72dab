//! Heading classification
//!
//! A line is a heading when it matches one of the anchored section patterns,
//! optionally behind an arabic or roman section number ("3.", "IV."). Short
//! numbered lines that match none of them ("5. Data") are scored against a
//! keyword table instead.

use lazy_static::lazy_static;
use regex::Regex;

use super::SectionKey;
use crate::config::ParserConfig;

/// Optional section number: "2", "2.", "IV.", "IV "
const NUMBER_PREFIX: &str = r"^\s*(?:\d+\.?\s*|[IVX]+\.?\s+)?";

lazy_static! {
    /// Tried in order; the first match wins.
    static ref HEADING_PATTERNS: Vec<(SectionKey, Regex)> = [
        (SectionKey::Abstract, r"abstract"),
        (SectionKey::Introduction, r"introduction"),
        (
            SectionKey::Methodology,
            r"method(?:ology|s)?|approach|model|framework|proposed\s+(?:method|approach|system)",
        ),
        (SectionKey::Results, r"results?|experiments?|evaluation|findings"),
        (SectionKey::Discussion, r"discussion|analysis|limitations?"),
        (
            SectionKey::Conclusion,
            r"conclusions?|summary|concluding\s+remarks|future\s+work",
        ),
        (SectionKey::References, r"references|bibliography"),
        (SectionKey::Appendix, r"appendix|appendices|supplementary"),
        (
            SectionKey::RelatedWork,
            r"related\s+work|background|literature\s+review|prior\s+work",
        ),
    ]
    .into_iter()
    .map(|(key, words)| {
        let pattern = format!(r"{}(?i:{})\s*$", NUMBER_PREFIX, words);
        (key, Regex::new(&pattern).unwrap())
    })
    .collect();

    /// "4. Data", "7 Acknowledging Reviewers"
    static ref NUMBERED_HEADING_RE: Regex = Regex::new(r"^\s*\d+\.?\s+\S").unwrap();

    /// Keyword table for numbered headings, in tie-break order.
    static ref SECTION_KEYWORDS: Vec<(SectionKey, Vec<&'static str>)> = vec![
        (SectionKey::Introduction, vec!["introduction", "overview", "motivation", "background"]),
        (SectionKey::Methodology, vec![
            "method", "model", "framework", "approach", "formulation",
            "simulation", "setup", "implementation", "algorithm", "data",
            "observations", "numerical", "equations", "formalism",
            "architecture", "design", "procedure", "technique",
        ]),
        (SectionKey::Results, vec![
            "result", "experiment", "evaluation", "finding", "performance",
            "outcome", "comparison", "benchmark", "ablation", "analysis",
            "measurement",
        ]),
        (SectionKey::Discussion, vec![
            "discussion", "interpretation", "implication", "limitation",
            "caveat", "consideration",
        ]),
        (SectionKey::Conclusion, vec![
            "conclusion", "summary", "future", "outlook", "closing", "concluding",
        ]),
        (SectionKey::RelatedWork, vec![
            "related", "prior", "literature", "previous", "review",
            "context", "state of the art",
        ]),
    ];
}

/// Classify `line` with the default thresholds.
pub fn classify_heading(line: &str) -> Option<SectionKey> {
    classify_heading_with(line, &ParserConfig::default())
}

/// Classify `line` as a section heading, or `None` for body text.
pub fn classify_heading_with(line: &str, config: &ParserConfig) -> Option<SectionKey> {
    let stripped = line.trim();
    if stripped.is_empty() || stripped.chars().count() > config.heading_max_chars {
        return None;
    }

    if let Some((key, _)) = HEADING_PATTERNS.iter().find(|(_, re)| re.is_match(stripped)) {
        return Some(*key);
    }

    if NUMBERED_HEADING_RE.is_match(stripped)
        && stripped.chars().count() < config.numbered_heading_max_chars
    {
        return Some(guess_section_key(stripped));
    }

    None
}

/// Best keyword match for an unrecognised numbered heading.
///
/// Keywords count as substrings of the lowercased heading. Ties keep the
/// earlier key; no hits at all means methodology.
fn guess_section_key(heading: &str) -> SectionKey {
    let lower = heading.to_lowercase();
    let mut best = (SectionKey::Methodology, 0);
    for (key, keywords) in SECTION_KEYWORDS.iter() {
        let score = keywords.iter().filter(|kw| lower.contains(*kw)).count();
        if score > best.1 {
            best = (*key, score);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Abstract", Some(SectionKey::Abstract))]
    #[case("  ABSTRACT  ", Some(SectionKey::Abstract))]
    #[case("1. Introduction", Some(SectionKey::Introduction))]
    #[case("1 Introduction", Some(SectionKey::Introduction))]
    #[case("I. INTRODUCTION", Some(SectionKey::Introduction))]
    #[case("2. Related Work", Some(SectionKey::RelatedWork))]
    #[case("Background", Some(SectionKey::RelatedWork))]
    #[case("3. Proposed Method", Some(SectionKey::Methodology))]
    #[case("III. Methods", Some(SectionKey::Methodology))]
    #[case("4 Experiments", Some(SectionKey::Results))]
    #[case("Limitations", Some(SectionKey::Discussion))]
    #[case("6. Concluding Remarks", Some(SectionKey::Conclusion))]
    #[case("References", Some(SectionKey::References))]
    #[case("Bibliography", Some(SectionKey::References))]
    #[case("Appendix", Some(SectionKey::Appendix))]
    fn test_named_headings(#[case] line: &str, #[case] expected: Option<SectionKey>) {
        assert_eq!(classify_heading(line), expected);
    }

    #[rstest]
    #[case("9. Foobar", SectionKey::Methodology)]
    #[case("4. Data and Simulation Setup", SectionKey::Methodology)]
    #[case("5. Benchmark Performance", SectionKey::Results)]
    #[case("7 Outlook and Future Directions", SectionKey::Conclusion)]
    #[case("2 Previous Literature", SectionKey::RelatedWork)]
    fn test_numbered_headings_use_keywords(#[case] line: &str, #[case] expected: SectionKey) {
        assert_eq!(classify_heading(line), Some(expected));
    }

    #[test]
    fn test_keyword_ties_keep_table_order() {
        // "analysis" scores results, "limitation" scores discussion
        assert_eq!(
            classify_heading("8. Analysis of Limitation Cases"),
            Some(SectionKey::Results)
        );
    }

    #[rstest]
    #[case("")]
    #[case("We introduce a new model for parsing.")]
    #[case("The results are summarised below")]
    #[case("Introduction to the problem of long inputs")]
    fn test_body_text_is_not_a_heading(#[case] line: &str) {
        assert_eq!(classify_heading(line), None);
    }

    #[test]
    fn test_long_lines_are_rejected() {
        let line = format!("1. Introduction {}", "x".repeat(80));
        assert_eq!(classify_heading(&line), None);
    }

    #[test]
    fn test_numbered_fallback_has_its_own_limit() {
        let line = format!("3. {}", "word ".repeat(12));
        assert!(line.trim().chars().count() >= 60);
        assert_eq!(classify_heading(&line), None);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = ParserConfig {
            heading_max_chars: 10,
            ..ParserConfig::default()
        };
        assert_eq!(classify_heading_with("Introduction", &config), None);
        assert_eq!(classify_heading_with("Abstract", &config), Some(SectionKey::Abstract));
    }
}
