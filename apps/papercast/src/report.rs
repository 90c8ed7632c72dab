//! JSON output shapes

use papercast_core::{ParsedPaper, StructuredPaper};
use serde::Serialize;

/// What the CLI prints.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report<'a> {
    /// Sections with placeholders, plus the expression list.
    Parsed(&'a ParsedPaper),
    /// Sections with math spoken in place.
    Spoken { sections: StructuredPaper },
}

impl<'a> Report<'a> {
    pub fn new(paper: &'a ParsedPaper, speak: bool) -> Self {
        if speak {
            Report::Spoken {
                sections: paper.speakable(),
            }
        } else {
            Report::Parsed(paper)
        }
    }

    pub fn to_json(&self, compact: bool) -> Result<String, serde_json::Error> {
        if compact {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        }
    }
}
