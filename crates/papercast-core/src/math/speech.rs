//! LaTeX math to spoken English
//!
//! A single left-to-right scan over the formula. Commands are looked up in
//! the tables in [`super::symbols`]; structural commands (fractions, roots,
//! accents, scripts) pull their arguments with [`next_argument`] and speak
//! them recursively. Every recursive call receives a strict substring of its
//! input, so the scan always terminates, and no input makes it fail.

use super::symbols::{ACCENTS, MATH_STYLES, SILENT, SIZING, SYMBOLS, TEXT_STYLES};

/// How bare letters are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Each letter is its own symbol: `xy` is "x y".
    Math,
    /// Letters form words, as inside `\text{...}`.
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Super,
    Sub,
}

/// Convert one LaTeX expression into spoken English.
///
/// ```
/// use papercast_core::latex_to_spoken;
///
/// assert_eq!(latex_to_spoken("x^2 + y^2 = z^2"), "x squared plus y squared equals z squared");
/// assert_eq!(latex_to_spoken(r"\frac{a}{b}"), "a divided by b");
/// ```
pub fn latex_to_spoken(expr: &str) -> String {
    speak(expr, Mode::Math).trim().to_string()
}

/// Spoken words, joined with single spaces on output.
#[derive(Debug, Default)]
struct Words(Vec<String>);

impl Words {
    fn push(&mut self, phrase: impl AsRef<str>) {
        let phrase = phrase.as_ref().trim();
        if !phrase.is_empty() {
            self.0.push(phrase.to_string());
        }
    }

    /// Punctuation attaches to the preceding word; leading punctuation is
    /// dropped.
    fn push_punct(&mut self, mark: char) {
        if let Some(last) = self.0.last_mut() {
            last.push(mark);
        }
    }

    fn finish(self) -> String {
        self.0.join(" ")
    }
}

fn speak(latex: &str, mode: Mode) -> String {
    let mut words = Words::default();
    let mut pos = 0;

    while let Some(ch) = latex[pos..].chars().next() {
        pos = match ch {
            '\\' => speak_command(latex, pos + 1, mode, &mut words),
            '^' => speak_script(latex, pos + 1, Script::Super, mode, &mut words),
            '_' => speak_script(latex, pos + 1, Script::Sub, mode, &mut words),
            '{' => {
                let (group, next) = braced_group(latex, pos);
                words.push(speak(group, mode));
                next
            }
            ',' | ';' | ':' => {
                words.push_punct(ch);
                pos + 1
            }
            c if c.is_whitespace() => pos + c.len_utf8(),
            // Alignment, ties, grouping delimiters and stray closers
            '&' | '~' | '(' | ')' | '[' | ']' | '|' | '}' | '.' => pos + 1,
            c if c.is_ascii_digit() => {
                let end = number_end(latex, pos);
                words.push(&latex[pos..end]);
                end
            }
            c if mode == Mode::Text && c.is_alphanumeric() => {
                let end = word_end(latex, pos);
                words.push(&latex[pos..end]);
                end
            }
            c => {
                match infix_word(c) {
                    Some(word) => words.push(word),
                    None => words.push(c.to_string()),
                }
                pos + c.len_utf8()
            }
        };
    }

    words.finish()
}

fn infix_word(c: char) -> Option<&'static str> {
    match c {
        '+' => Some("plus"),
        '-' => Some("minus"),
        '=' => Some("equals"),
        '<' => Some("less than"),
        '>' => Some("greater than"),
        '*' => Some("times"),
        '/' => Some("over"),
        '!' => Some("factorial"),
        '\'' => Some("prime"),
        _ => None,
    }
}

/// Speak the command whose name starts at `start` (just past the backslash).
/// Returns the position after everything the command consumed.
fn speak_command(latex: &str, start: usize, mode: Mode, words: &mut Words) -> usize {
    let name_len = latex[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    if name_len == 0 {
        return speak_control_symbol(latex, start, words);
    }

    let name = &latex[start..start + name_len];
    let pos = start + name_len;

    if let Some(word) = SYMBOLS.get(name) {
        words.push(word);
        return pos;
    }

    if let Some(accent) = ACCENTS.get(name) {
        let (arg, next) = next_argument(latex, pos);
        words.push(format!("{} {}", speak(arg, mode), accent));
        return next;
    }

    match name {
        "frac" | "dfrac" | "tfrac" | "cfrac" => {
            let (num, next) = next_argument(latex, pos);
            let (den, next) = next_argument(latex, next);
            words.push(format!(
                "{} divided by {}",
                speak(num, mode),
                speak(den, mode)
            ));
            next
        }
        "binom" | "dbinom" | "tbinom" => {
            let (n, next) = next_argument(latex, pos);
            let (k, next) = next_argument(latex, next);
            words.push(format!("{} choose {}", speak(n, mode), speak(k, mode)));
            next
        }
        "sqrt" => speak_root(latex, pos, mode, words),
        "sum" => {
            words.push("the sum");
            pos
        }
        "prod" => {
            words.push("the product");
            pos
        }
        "int" | "iint" | "iiint" | "oint" => {
            words.push("the integral");
            pos
        }
        _ if TEXT_STYLES.contains(name) => {
            let (arg, next) = next_argument(latex, pos);
            words.push(speak(arg, Mode::Text));
            next
        }
        _ if MATH_STYLES.contains(name) => {
            let (arg, next) = next_argument(latex, pos);
            words.push(speak(arg, mode));
            next
        }
        _ if SIZING.contains(name) => skip_delimiter(latex, pos),
        _ if SILENT.contains(name) => pos,
        "begin" | "end" => {
            let (env, next) = next_argument(latex, pos);
            if name == "begin" && matches!(env.trim(), "array" | "tabular") {
                // Column spec such as {cc|l}
                next_argument(latex, next).1
            } else {
                next
            }
        }
        _ => {
            words.push(name);
            pos
        }
    }
}

/// Backslash followed by a non-letter: `\,` `\{` `\\` `\%` and friends.
fn speak_control_symbol(latex: &str, start: usize, words: &mut Words) -> usize {
    let Some(c) = latex[start..].chars().next() else {
        return start;
    };
    match c {
        // Row break in matrices and aligned equations
        '\\' => words.push_punct(','),
        '%' => words.push("percent"),
        '&' => words.push("and"),
        _ => {}
    }
    start + c.len_utf8()
}

/// `\sqrt{x}` or `\sqrt[n]{x}`; `pos` is just past the command name.
fn speak_root(latex: &str, pos: usize, mode: Mode, words: &mut Words) -> usize {
    let pos = skip_whitespace(latex, pos);
    let (degree, pos) = if latex[pos..].starts_with('[') {
        let (degree, next) = bracketed_group(latex, pos);
        (Some(degree), next)
    } else {
        (None, pos)
    };

    let (radicand, next) = next_argument(latex, pos);
    let radicand = speak(radicand, mode);
    match degree.map(|d| speak(d, mode)).filter(|d| !d.is_empty()) {
        Some(degree) => words.push(format!("the {} root of {}", degree, radicand)),
        None => words.push(format!("the square root of {}", radicand)),
    }
    next
}

/// Superscript or subscript; `pos` is just past the `^` or `_`.
fn speak_script(latex: &str, pos: usize, script: Script, mode: Mode, words: &mut Words) -> usize {
    let (arg, next) = next_argument(latex, pos);
    match script {
        Script::Super => match arg.trim() {
            "2" => words.push("squared"),
            "3" => words.push("cubed"),
            "T" | "\\top" => words.push("transpose"),
            "-1" => words.push("inverse"),
            "*" | "\\ast" => words.push("star"),
            "\\prime" | "'" => words.push("prime"),
            _ => {
                let power = speak(arg, mode);
                if !power.is_empty() {
                    words.push(format!("to the power of {}", power));
                }
            }
        },
        Script::Sub => {
            let index = speak(arg, mode);
            if !index.is_empty() {
                words.push(format!("sub {}", index));
            }
        }
    }
    next
}

/// Swallow the delimiter after `\left`, `\big` and the like.
fn skip_delimiter(latex: &str, pos: usize) -> usize {
    let pos = skip_whitespace(latex, pos);
    let mut chars = latex[pos..].chars();
    match chars.next() {
        Some('\\') => {
            let name_len = latex[pos + 1..]
                .chars()
                .take_while(|c| c.is_ascii_alphabetic())
                .count();
            if name_len > 0 {
                // \langle, \lvert, ...
                pos + 1 + name_len
            } else {
                // \{, \|, ...
                pos + 1 + chars.next().map_or(0, char::len_utf8)
            }
        }
        Some(c) if "()[]{}|./<>".contains(c) => pos + c.len_utf8(),
        _ => pos,
    }
}

/// The next command argument: a brace group, a single command, or a single
/// character. Leading whitespace is skipped. Returns the argument source and
/// the position after it.
fn next_argument(latex: &str, pos: usize) -> (&str, usize) {
    let pos = skip_whitespace(latex, pos);
    let mut chars = latex[pos..].chars();
    match chars.next() {
        None => ("", pos),
        Some('{') => braced_group(latex, pos),
        Some('\\') => {
            let name_len = latex[pos + 1..]
                .chars()
                .take_while(|c| c.is_ascii_alphabetic())
                .count();
            let end = if name_len > 0 {
                pos + 1 + name_len
            } else {
                pos + 1 + chars.next().map_or(0, char::len_utf8)
            };
            (&latex[pos..end], end)
        }
        Some(c) => (&latex[pos..pos + c.len_utf8()], pos + c.len_utf8()),
    }
}

/// Contents of the brace group opening at `open`, matched by depth counting.
/// Escaped braces do not count. An unmatched group runs to the end of input.
fn braced_group(latex: &str, open: usize) -> (&str, usize) {
    matched_group(latex, open, '{', '}')
}

fn bracketed_group(latex: &str, open: usize) -> (&str, usize) {
    matched_group(latex, open, '[', ']')
}

fn matched_group(latex: &str, open: usize, opener: char, closer: char) -> (&str, usize) {
    let body = open + opener.len_utf8();
    let mut depth = 1usize;
    let mut chars = latex[body..].char_indices();

    while let Some((offset, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == opener {
            depth += 1;
        } else if c == closer {
            depth -= 1;
            if depth == 0 {
                let close = body + offset;
                return (&latex[body..close], close + closer.len_utf8());
            }
        }
    }

    (&latex[body..], latex.len())
}

fn skip_whitespace(latex: &str, pos: usize) -> usize {
    let skipped: usize = latex[pos..]
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    pos + skipped
}

/// End of a number starting at `pos`: digits with at most one interior
/// decimal point.
fn number_end(latex: &str, pos: usize) -> usize {
    let bytes = latex.as_bytes();
    let mut end = pos;
    let mut seen_point = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_point && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) => {
                seen_point = true;
                end += 1;
            }
            _ => break,
        }
    }
    end
}

/// End of a text-mode word starting at `pos`.
fn word_end(latex: &str, pos: usize) -> usize {
    let len: usize = latex[pos..]
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '-' || *c == '\'')
        .map(char::len_utf8)
        .sum();
    pos + len
}
