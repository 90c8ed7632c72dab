//! Paper text cleanup
//!
//! Strips running headers/footers, citation markers and figure/table/equation
//! references, then collapses whitespace. Runs after math extraction, so
//! formula sources are already out of the text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// arXiv stamps and journal banners repeated on every page
    static ref HEADER_FOOTER_RE: Regex = Regex::new(
        r"(?im)^(arXiv:\d{4}\.\d{4,5}|Preprint\.?\s*Under\s+review|Published\s+.+).*$"
    ).unwrap();

    /// [1], [1,2], [3-5], [1; 4]
    static ref CITATION_BRACKET_RE: Regex = Regex::new(r"\[[\d,;\s\x{2013}\-]+\]").unwrap();

    /// (Smith, 2020), (Smith et al., 2020a), (Smith and Jones 2019)
    static ref CITATION_PAREN_RE: Regex = Regex::new(
        r"\(\p{Lu}\p{Ll}+(?:\s+(?:et\s+al\.?|and|&)\s*(?:\p{Lu}\p{Ll}+)?)*,?\s*\d{4}[a-z]?\)"
    ).unwrap();

    /// Fig. 3, Figure 2b, Table 1, Equation 3.2
    static ref FIGURE_REF_RE: Regex = Regex::new(
        r"(?i)\b(Fig(ure|\.)?|Table|Eq(uation|\.)?)\s*\.?\s*\d+(\.\d+)*[a-z]?"
    ).unwrap();

    static ref MULTIPLE_SPACES_RE: Regex = Regex::new(r"[ \t]{2,}").unwrap();
    static ref TRAILING_SPACES_RE: Regex = Regex::new(r"(?m)[ \t]+$").unwrap();
    static ref LEADING_SPACES_RE: Regex = Regex::new(r"(?m)^[ \t]+").unwrap();
    static ref MULTIPLE_NEWLINES_RE: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Clean paper text for section splitting.
///
/// Idempotent: every pass only removes or collapses characters, and passes
/// repeat until the text stops changing.
pub fn normalize_text(text: &str) -> String {
    let mut current = normalize_once(text);
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(text: &str) -> String {
    // Headers first: footers can carry bracketed text
    let mut result = HEADER_FOOTER_RE.replace_all(text, "").into_owned();
    result = CITATION_BRACKET_RE.replace_all(&result, "").into_owned();
    result = CITATION_PAREN_RE.replace_all(&result, "").into_owned();
    result = FIGURE_REF_RE.replace_all(&result, "").into_owned();
    result = MULTIPLE_SPACES_RE.replace_all(&result, " ").into_owned();
    result = TRAILING_SPACES_RE.replace_all(&result, "").into_owned();
    result = LEADING_SPACES_RE.replace_all(&result, "").into_owned();
    result = MULTIPLE_NEWLINES_RE.replace_all(&result, "\n\n").into_owned();
    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_numeric_citations() {
        assert_eq!(
            normalize_text("as shown before [1, 2] and later [3-5]."),
            "as shown before and later ."
        );
    }

    #[test]
    fn test_strips_author_year_citations() {
        assert_eq!(
            normalize_text("Transformers (Vaswani et al., 2017) dominate."),
            "Transformers dominate."
        );
    }

    #[test]
    fn test_strips_figure_and_table_refs() {
        assert_eq!(
            normalize_text("See Fig. 3 and Table 2 for details."),
            "See and for details."
        );
    }

    #[test]
    fn test_figure_ref_needs_word_boundary() {
        assert_eq!(normalize_text("high freq1 noise"), "high freq1 noise");
    }

    #[test]
    fn test_removes_header_lines() {
        let text = "arXiv:2301.07041v2 [cs.CL] 12 Jan 2023\nReal content here.";
        assert_eq!(normalize_text(text), "Real content here.");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_text("a   b\t\tc  \n\n\n\nd"), "a b c\n\nd");
    }

    #[test]
    fn test_strips_line_indent() {
        assert_eq!(normalize_text("chosen by\n <<LATEX:3>> \nafter"), "chosen by\n<<LATEX:3>>\nafter");
    }

    #[test]
    fn test_leaves_placeholders_alone() {
        assert_eq!(
            normalize_text("We show  <<LATEX:0>>  works [2]."),
            "We show <<LATEX:0>> works ."
        );
    }

    #[test]
    fn test_idempotent_on_nested_leftovers() {
        let once = normalize_text("eq eq 1 1 and [1[2]] done");
        assert_eq!(normalize_text(&once), once);
    }
}
