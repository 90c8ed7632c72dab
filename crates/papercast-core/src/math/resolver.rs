use crate::text::PLACEHOLDER_RE;
use regex::Captures;

use super::latex_to_spoken;

/// Replace every `<<LATEX:n>>` in `text` with the spoken form of
/// `expressions[n]`. Tokens with no matching expression are removed.
pub fn resolve_placeholders(text: &str, expressions: &[String]) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |cap: &Captures<'_>| {
            cap[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| expressions.get(index))
                .map(|expr| latex_to_spoken(expr))
                .unwrap_or_default()
        })
        .into_owned()
}
