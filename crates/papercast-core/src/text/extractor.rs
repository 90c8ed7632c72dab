//! Math span extraction
//!
//! Replaces display and inline math in raw paper text with indexed
//! `<<LATEX:n>>` placeholders and collects the formula sources.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;

lazy_static! {
    /// `$$...$$` and `\[...\]`, may span lines
    static ref DISPLAY_MATH_RE: Regex =
        Regex::new(r"(?s)\$\$(.+?)\$\$|\\\[(.+?)\\\]").unwrap();

    /// `$...$` and `\(...\)`, single line only
    static ref INLINE_MATH_RE: Regex =
        Regex::new(r"\$([^$\n]+?)\$|\\\(([^\n]+?)\\\)").unwrap();

    /// Placeholder token
    pub(crate) static ref PLACEHOLDER_RE: Regex = Regex::new(r"<<LATEX:(\d+)>>").unwrap();
}

/// Raw paper text together with its math-tagged form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub raw_text: String,
    /// `raw_text` with every math span replaced by a placeholder
    pub tagged_text: String,
    /// Trimmed formula sources, indexed by placeholder number
    pub expressions: Vec<String>,
}

impl Document {
    pub fn from_raw(raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let (tagged_text, expressions) = extract_expressions(&raw_text);
        Self {
            raw_text,
            tagged_text,
            expressions,
        }
    }
}

/// Placeholder token for expression `index`.
pub fn placeholder(index: usize) -> String {
    format!("<<LATEX:{}>>", index)
}

/// Indices of all placeholder tokens in `text`, in order of appearance.
pub fn placeholder_indices(text: &str) -> Vec<usize> {
    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|cap| cap.get(1)?.as_str().parse().ok())
        .collect()
}

/// Replace math spans with placeholders.
///
/// Display spans are chosen first; inline spans are only searched in the
/// text between them, so a display span is never split. Indices follow
/// position in the input.
pub fn extract_expressions(text: &str) -> (String, Vec<String>) {
    let mut spans: Vec<(Range<usize>, String)> = DISPLAY_MATH_RE
        .captures_iter(text)
        .filter_map(span_of)
        .collect();

    let mut gaps = Vec::with_capacity(spans.len() + 1);
    let mut cursor = 0;
    for (range, _) in &spans {
        gaps.push(cursor..range.start);
        cursor = range.end;
    }
    gaps.push(cursor..text.len());

    for gap in gaps {
        let offset = gap.start;
        spans.extend(
            INLINE_MATH_RE
                .captures_iter(&text[gap])
                .filter_map(span_of)
                .map(|(range, expr)| (range.start + offset..range.end + offset, expr)),
        );
    }

    if spans.is_empty() {
        return (text.to_string(), Vec::new());
    }

    spans.sort_by_key(|(range, _)| range.start);

    let mut tagged = String::with_capacity(text.len());
    let mut expressions = Vec::with_capacity(spans.len());
    let mut cursor = 0;
    for (range, expr) in spans {
        tagged.push_str(&text[cursor..range.start]);
        tagged.push(' ');
        tagged.push_str(&placeholder(expressions.len()));
        tagged.push(' ');
        expressions.push(expr);
        cursor = range.end;
    }
    tagged.push_str(&text[cursor..]);

    (tagged, expressions)
}

fn span_of(cap: regex::Captures<'_>) -> Option<(Range<usize>, String)> {
    let whole = cap.get(0)?;
    let inner = cap.get(1).or_else(|| cap.get(2))?;
    Some((whole.range(), inner.as_str().trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_math_is_unchanged() {
        let (tagged, exprs) = extract_expressions("Plain prose, costs 5 dollars.");
        assert_eq!(tagged, "Plain prose, costs 5 dollars.");
        assert!(exprs.is_empty());
    }

    #[test]
    fn test_inline_math() {
        let (tagged, exprs) = extract_expressions("We show $x^2$ works.");
        assert_eq!(tagged, "We show  <<LATEX:0>>  works.");
        assert_eq!(exprs, vec!["x^2"]);
    }

    #[test]
    fn test_display_math_spans_lines() {
        let (tagged, exprs) = extract_expressions("Energy:\n$$\nE = mc^2\n$$\nDone.");
        assert_eq!(exprs, vec!["E = mc^2"]);
        assert!(tagged.contains("<<LATEX:0>>"));
        assert!(!tagged.contains('$'));
    }

    #[test]
    fn test_display_is_not_split_into_inline_spans() {
        let (_, exprs) = extract_expressions("$$a + b$$");
        assert_eq!(exprs, vec!["a + b"]);
    }

    #[test]
    fn test_indices_follow_position() {
        let (tagged, exprs) = extract_expressions("First $a$ then $$b$$ and $c$.");
        assert_eq!(exprs, vec!["a", "b", "c"]);
        assert_eq!(placeholder_indices(&tagged), vec![0, 1, 2]);
    }

    #[test]
    fn test_inline_does_not_cross_newlines() {
        let (tagged, exprs) = extract_expressions("costs $5\nand $6 total");
        assert!(exprs.is_empty());
        assert_eq!(tagged, "costs $5\nand $6 total");
    }

    #[test]
    fn test_bracket_delimiters() {
        let (_, exprs) = extract_expressions(r"Inline \(a_i\) and display \[ \sum_i a_i \]");
        assert_eq!(exprs, vec!["a_i", r"\sum_i a_i"]);
    }

    #[test]
    fn test_document_from_raw() {
        let doc = Document::from_raw("Let $n$ be large.");
        assert_eq!(doc.raw_text, "Let $n$ be large.");
        assert_eq!(doc.expressions, vec!["n"]);
        assert_eq!(placeholder_indices(&doc.tagged_text).len(), 1);
    }
}
