//! Property-based tests for the text and math stages

use papercast_core::{
    extract_expressions, latex_to_spoken, normalize_text, parse_paper_text, placeholder_indices,
    SectionKey,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalizer_is_idempotent(text in "[a-zA-Z0-9 .,;\\[\\]()\\n\\t-]{0,120}") {
        let once = normalize_text(&text);
        prop_assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn test_placeholder_count_matches_expressions(text in "[a-z $\\\\()\\[\\]\\n^_{}]{0,80}") {
        let (tagged, expressions) = extract_expressions(&text);
        let indices = placeholder_indices(&tagged);
        prop_assert_eq!(indices.len(), expressions.len());
        prop_assert_eq!(indices, (0..expressions.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_conversion_is_deterministic(latex in "[a-zA-Z0-9 \\\\{}\\[\\]^_+=,()-]{0,60}") {
        prop_assert_eq!(latex_to_spoken(&latex), latex_to_spoken(&latex));
    }

    #[test]
    fn test_conversion_never_leaves_markup(latex in "[a-z0-9 \\\\{}^_+=]{0,60}") {
        let spoken = latex_to_spoken(&latex);
        prop_assert!(!spoken.contains('{'), "brace in {:?}", spoken);
        prop_assert!(!spoken.contains('}'), "brace in {:?}", spoken);
        prop_assert!(!spoken.contains('^'), "caret in {:?}", spoken);
        prop_assert!(!spoken.contains('_'), "underscore in {:?}", spoken);
        prop_assert_eq!(spoken.trim(), spoken.as_str());
    }

    #[test]
    fn test_conversion_handles_arbitrary_text(latex in "\\PC{0,40}") {
        let _ = latex_to_spoken(&latex);
    }

    #[test]
    fn test_sections_never_hold_discard_keys(
        lines in prop::collection::vec(
            prop_oneof![
                Just("References".to_string()),
                Just("Appendix".to_string()),
                Just("Abstract".to_string()),
                Just("2. Results".to_string()),
                Just(String::new()),
                "[a-z ]{1,20}",
            ],
            0..20,
        )
    ) {
        let paper = parse_paper_text(&lines.join("\n"));
        prop_assert!(paper.sections.keys().all(|key| !key.is_discarded()));
        prop_assert!(paper.sections.keys().all(|key| SectionKey::ALL.contains(&key)));
    }
}
