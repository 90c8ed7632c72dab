//! Parser tuning knobs
//!
//! Deserializable from the `[parser]` table of a papercast config file.
//! Every field has a default, so an empty table is valid.

use serde::{Deserialize, Serialize};

/// Thresholds used by the heading classifier and front-matter extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Lines longer than this are never headings.
    #[serde(default = "default_heading_max_chars")]
    pub heading_max_chars: usize,
    /// Generic numbered headings ("4. Data") must be shorter than this.
    #[serde(default = "default_numbered_heading_max_chars")]
    pub numbered_heading_max_chars: usize,
    /// Number of leading raw-text characters sent to the front-matter model.
    #[serde(default = "default_front_matter_chars")]
    pub front_matter_chars: usize,
}

fn default_heading_max_chars() -> usize {
    80
}
fn default_numbered_heading_max_chars() -> usize {
    60
}
fn default_front_matter_chars() -> usize {
    4000
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            heading_max_chars: default_heading_max_chars(),
            numbered_heading_max_chars: default_numbered_heading_max_chars(),
            front_matter_chars: default_front_matter_chars(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_uses_defaults() {
        let config: ParserConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ParserConfig::default());
        assert_eq!(config.heading_max_chars, 80);
        assert_eq!(config.numbered_heading_max_chars, 60);
        assert_eq!(config.front_matter_chars, 4000);
    }

    #[test]
    fn test_partial_override() {
        let config: ParserConfig = serde_json::from_str(r#"{"front_matter_chars": 2000}"#).unwrap();
        assert_eq!(config.front_matter_chars, 2000);
        assert_eq!(config.heading_max_chars, 80);
    }
}
