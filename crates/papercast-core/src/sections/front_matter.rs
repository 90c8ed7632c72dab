//! Title, author and abstract extraction
//!
//! The primary path hands the opening of the raw text to a language model
//! and expects a single JSON object back. Any failure there produces
//! [`FrontMatterOutcome::Empty`] and the splitter switches to
//! [`heuristic_front_matter`], a blank-line scan over the cleaned lines.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::headings::classify_heading_with;
use crate::config::ParserConfig;
use crate::error::FrontMatterError;

/// System instructions sent with the front-matter snippet.
pub const FRONT_MATTER_INSTRUCTIONS: &str = r#"You extract bibliographic front matter from academic papers.
The user message holds the raw text of the first pages of one paper.
Identify its title, its authors and its abstract.

Rules:
- The title is the research title itself. Journal names, "Preprint",
  "Draft version ..." and typesetting notes are never the title.
- List author names only, separated by commas. Leave out affiliations,
  emails and footnote markers.
- The abstract is the paragraph after the "Abstract" heading, or after the
  author block when the paper has no such heading.
- Use an empty string for any field you cannot identify with confidence.

Reply with one JSON object and nothing else, no prose and no code fences:
{"title": "...", "authors": "...", "abstract": "..."}"#;

lazy_static! {
    static ref FENCE_OPEN_RE: Regex = Regex::new(r"^```(?:json)?\s*").unwrap();
    static ref FENCE_CLOSE_RE: Regex = Regex::new(r"\s*```$").unwrap();
}

/// Text-in/text-out model used for front-matter extraction.
///
/// Implementations block until the model replies. Retries and timeouts are
/// theirs to handle.
pub trait FrontMatterModel: Send + Sync {
    /// Run one completion of `snippet` under `instructions`, returning the
    /// raw reply text.
    fn complete(&self, instructions: &str, snippet: &str) -> Result<String, FrontMatterError>;
}

/// Title, authors and abstract of a paper. All three keys are required in a
/// model reply; values are trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub authors: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

/// Result of the model-assisted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterOutcome {
    /// The model produced a non-empty title.
    Extracted(FrontMatter),
    /// The call failed, the reply was unusable, or the title was empty.
    Empty,
}

impl FrontMatterOutcome {
    pub fn is_extracted(&self) -> bool {
        matches!(self, FrontMatterOutcome::Extracted(_))
    }
}

/// Front matter found by the blank-line scan, plus the line index where
/// section scanning should resume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeuristicFrontMatter {
    pub title: String,
    pub authors: String,
    pub resume_at: usize,
}

/// Ask `model` for the front matter of `raw_text`.
///
/// Only the first `snippet_chars` characters are sent. Never fails: every
/// problem is logged and reported as [`FrontMatterOutcome::Empty`].
pub fn extract_front_matter(
    model: &dyn FrontMatterModel,
    raw_text: &str,
    snippet_chars: usize,
) -> FrontMatterOutcome {
    let snippet = match raw_text.char_indices().nth(snippet_chars) {
        Some((end, _)) => &raw_text[..end],
        None => raw_text,
    };

    let reply = match model.complete(FRONT_MATTER_INSTRUCTIONS, snippet) {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Front-matter extraction failed: {}", e);
            return FrontMatterOutcome::Empty;
        }
    };

    match parse_front_matter_reply(&reply) {
        Ok(front) if front.title.is_empty() => {
            info!("Front-matter reply had no title");
            FrontMatterOutcome::Empty
        }
        Ok(front) => {
            info!("Front-matter extraction succeeded");
            FrontMatterOutcome::Extracted(front)
        }
        Err(e) => {
            warn!("Front-matter extraction failed: {}", e);
            FrontMatterOutcome::Empty
        }
    }
}

/// Parse a model reply, tolerating a surrounding code fence.
pub fn parse_front_matter_reply(reply: &str) -> Result<FrontMatter, FrontMatterError> {
    let mut body = reply.trim().to_string();
    if body.starts_with("```") {
        body = FENCE_OPEN_RE.replace(&body, "").into_owned();
        body = FENCE_CLOSE_RE.replace(&body, "").into_owned();
    }

    let front: FrontMatter = serde_json::from_str(&body)?;
    Ok(FrontMatter {
        title: front.title.trim().to_string(),
        authors: front.authors.trim().to_string(),
        abstract_text: front.abstract_text.trim().to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Title,
    Authors,
}

/// Blank-line scan for title and authors.
///
/// The first block of non-blank lines is the title and the next one the
/// authors. A title line after the first that looks like a list of names
/// starts the author block early. The scan stops at the blank line closing
/// the author block or at the first heading, whichever comes first;
/// `resume_at` points at that line.
pub fn heuristic_front_matter(lines: &[&str], config: &ParserConfig) -> HeuristicFrontMatter {
    let mut title_lines: Vec<&str> = Vec::new();
    let mut author_lines: Vec<&str> = Vec::new();
    let mut block = Block::Title;
    let mut resume_at = lines.len();

    for (i, line) in lines.iter().enumerate() {
        let stripped = line.trim();

        if classify_heading_with(stripped, config).is_some() {
            resume_at = i;
            break;
        }

        match block {
            Block::Title if stripped.is_empty() => {
                if !title_lines.is_empty() {
                    block = Block::Authors;
                }
            }
            Block::Title => {
                if !title_lines.is_empty() && looks_like_author_line(stripped) {
                    block = Block::Authors;
                    author_lines.push(stripped);
                } else {
                    title_lines.push(stripped);
                }
            }
            Block::Authors if stripped.is_empty() => {
                if !author_lines.is_empty() {
                    resume_at = i;
                    break;
                }
            }
            Block::Authors => author_lines.push(stripped),
        }
    }

    HeuristicFrontMatter {
        title: title_lines.join(" "),
        authors: author_lines.join(", "),
        resume_at,
    }
}

/// Lowercase words allowed inside a surname.
const NAME_PARTICLES: &[&str] = &["van", "von", "de", "der", "den", "di", "da", "du", "la", "le"];

/// Whether `line` reads like a list of person names.
///
/// Every part between commas or "and" must look like a name, so a title
/// line such as "Memory, Speed, and Accuracy" stays in the title.
fn looks_like_author_line(line: &str) -> bool {
    // "Jane Doe* John Smith†"
    if line.contains(['*', '†', '‡']) {
        return capitalized_count(&line.split_whitespace().collect::<Vec<_>>()) >= 2;
    }

    // "Jane Doe, John Smith, and Ada Lovelace"
    let parts: Vec<&str> = line
        .split(',')
        .flat_map(|part| part.split(" and "))
        .map(|part| {
            let part = part.trim();
            part.strip_prefix("and ").unwrap_or(part).trim()
        })
        .filter(|part| !part.is_empty())
        .collect();
    parts.len() >= 2 && parts.iter().all(|part| looks_like_name(part))
}

/// Two to four tokens, each capitalised or an initial, allowing surname
/// particles after the first.
fn looks_like_name(part: &str) -> bool {
    let tokens: Vec<&str> = part.split_whitespace().collect();
    (2..=4).contains(&tokens.len())
        && starts_uppercase(tokens[0])
        && tokens[1..]
            .iter()
            .all(|token| starts_uppercase(token) || NAME_PARTICLES.contains(token))
}

fn starts_uppercase(token: &str) -> bool {
    token
        .trim_start_matches(|c: char| !c.is_alphabetic())
        .chars()
        .next()
        .is_some_and(char::is_uppercase)
}

fn capitalized_count(words: &[&str]) -> usize {
    words
        .iter()
        .filter(|word| {
            let mut chars = word.chars();
            chars.next().is_some_and(char::is_uppercase) && chars.next().is_some()
        })
        .count()
}
