//! Word tokenizer using nom
//!
//! A word is a maximal run of ASCII letters and digits. Every other byte,
//! including non-ASCII bytes, is a separator:
//! ```text
//! "Doc1 has: apple, Apple!"  ->  doc1 has apple apple
//! ```

use nom::{
    bytes::complete::{take_while, take_while1},
    sequence::preceded,
    IResult,
};

/// Longest word kept by default; longer runs are truncated
pub const DEFAULT_MAX_WORD_LEN: usize = 255;

/// Check whether a byte belongs to a word (locale-independent)
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Lowercase a word byte (locale-independent)
pub fn to_lower(b: u8) -> u8 {
    b.to_ascii_lowercase()
}

/// Tokenizer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Maximum bytes kept per word. The rest of a longer run is dropped
    /// silently. `None` keeps words of any length.
    pub max_word_len: Option<usize>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            max_word_len: Some(DEFAULT_MAX_WORD_LEN),
        }
    }
}

/// Splits byte streams into normalized words
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a tokenizer from configuration
    pub fn new(config: TokenizerConfig) -> Self {
        assert!(
            config.max_word_len != Some(0),
            "Maximum word length must be greater than 0"
        );

        Self { config }
    }

    /// Get the tokenizer configuration
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Lazily iterate over the normalized words of `input`
    ///
    /// Calling this again on the same input starts over from the beginning.
    pub fn tokens<'a>(&self, input: &'a [u8]) -> Tokens<'a> {
        Tokens {
            rest: input,
            max_word_len: self.config.max_word_len,
        }
    }

    /// Normalize raw user input into a single query word
    ///
    /// Non-word bytes are removed rather than treated as boundaries, so
    /// `"New-York"` becomes `"newyork"`. Returns an empty string when the
    /// input has no letters or digits.
    pub fn normalize(&self, raw: &str) -> String {
        let limit = self.config.max_word_len.unwrap_or(usize::MAX);
        raw.bytes()
            .filter(|&b| is_word_byte(b))
            .take(limit)
            .map(|b| to_lower(b) as char)
            .collect()
    }
}

/// Iterator over normalized words, see [`Tokenizer::tokens`]
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a [u8],
    max_word_len: Option<usize>,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match next_word(self.rest) {
            Ok((rest, raw)) => {
                self.rest = rest;
                let len = match self.max_word_len {
                    Some(max) => raw.len().min(max),
                    None => raw.len(),
                };
                Some(raw[..len].iter().map(|&b| to_lower(b) as char).collect())
            }
            Err(_) => {
                // Only separators (or nothing) left
                self.rest = &[];
                None
            }
        }
    }
}

fn separators(input: &[u8]) -> IResult<&[u8], &[u8]> {
    take_while(|b: u8| !is_word_byte(b))(input)
}

fn word(input: &[u8]) -> IResult<&[u8], &[u8]> {
    take_while1(is_word_byte)(input)
}

/// Parse the next raw word, skipping any leading separators
fn next_word(input: &[u8]) -> IResult<&[u8], &[u8]> {
    preceded(separators, word)(input)
}
