//! Caption tokenizer.
//!
//! Splits one caption into an ordered list of statements: sentences and
//! hashtags. Hashtags are always emitted on their own, never merged with the
//! prose around them, and fragments without a single word character are
//! dropped.

use std::sync::OnceLock;

use regex::{Captures, Regex};

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
static BOUNDARY_REGEX: OnceLock<Regex> = OnceLock::new();
static WORD_REGEX: OnceLock<Regex> = OnceLock::new();

// Alternation is leftmost-first, so a hashtag wins over a bare `#`.
// The final `#` branch keeps the classification total.
fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| {
        Regex::new(r"(?P<hashtag>#\w+)|(?P<punct>[.!?]+)|[^#.!?]+|#")
            .expect("token pattern is valid")
    })
}

fn boundary_regex() -> &'static Regex {
    BOUNDARY_REGEX
        .get_or_init(|| Regex::new(r"[.!?]\s+").expect("boundary pattern is valid"))
}

fn word_regex() -> &'static Regex {
    WORD_REGEX.get_or_init(|| Regex::new(r"\w").expect("word pattern is valid"))
}

/// The three token classes a caption is partitioned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// `#` followed by one or more word characters.
    Hashtag,
    /// One or more of `.`, `!`, `?`.
    Punctuation,
    /// Anything else.
    Other,
}

/// A classified slice of the normalized caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub class: TokenClass,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let whole = caps.get(0)?;
        let class = if caps.name("hashtag").is_some() {
            TokenClass::Hashtag
        } else if caps.name("punct").is_some() {
            TokenClass::Punctuation
        } else {
            TokenClass::Other
        };
        Some(Token {
            class,
            text: whole.as_str(),
        })
    }
}

/// Returns true when `text` contains at least one word character
/// (letter, mark, digit or connector punctuation such as `_`).
pub fn has_word_char(text: &str) -> bool {
    word_regex().is_match(text)
}

/// Newlines become spaces, then surrounding whitespace is trimmed.
pub fn normalize(caption: &str) -> String {
    caption.replace('\n', " ").trim().to_string()
}

/// Partition already-normalized text into tokens.
///
/// Concatenating the `text` of every token yields `normalized` again.
pub fn classify(normalized: &str) -> Vec<Token<'_>> {
    token_regex()
        .captures_iter(normalized)
        .filter_map(|caps| Token::from_captures(&caps))
        .collect()
}

/// Split buffered plain text after terminal punctuation that is followed by
/// whitespace, keeping trimmed pieces that carry a word character.
pub fn split_sentences(buffer: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in boundary_regex().find_iter(buffer) {
        // Terminators are single-byte ASCII.
        push_piece(&mut sentences, &buffer[start..boundary.start() + 1]);
        start = boundary.end();
    }
    push_piece(&mut sentences, &buffer[start..]);

    sentences
}

fn push_piece(sentences: &mut Vec<String>, piece: &str) {
    if has_word_char(piece) {
        sentences.push(piece.trim().to_string());
    }
}

/// Tokenize a caption into statements.
///
/// Total over every input; an empty or punctuation-only caption yields an
/// empty list.
pub fn tokenize(caption: &str) -> Vec<String> {
    let text = normalize(caption);
    if text.is_empty() {
        return Vec::new();
    }

    let mut statements = Vec::new();
    let mut buffer = String::new();

    for token in classify(&text) {
        match token.class {
            TokenClass::Hashtag => {
                if !buffer.trim().is_empty() {
                    statements.extend(split_sentences(&buffer));
                }
                buffer.clear();
                statements.push(token.text.trim().to_string());
            }
            TokenClass::Punctuation | TokenClass::Other => buffer.push_str(token.text),
        }
    }

    if !buffer.trim().is_empty() {
        statements.extend(split_sentences(&buffer));
    }

    statements.retain(|s| has_word_char(s));
    statements
}

/// Like [`tokenize`], with a missing caption treated as empty.
pub fn tokenize_opt(caption: Option<&str>) -> Vec<String> {
    caption.map(tokenize).unwrap_or_default()
}

/// Seam for swapping the statement splitting strategy.
pub trait StatementSplitter {
    fn split(&self, caption: &str) -> Vec<String>;
}

/// Sentence splitting with hashtags pulled out as standalone statements.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashtagSentenceSplitter;

impl StatementSplitter for HashtagSentenceSplitter {
    fn split(&self, caption: &str) -> Vec<String> {
        tokenize(caption)
    }
}
