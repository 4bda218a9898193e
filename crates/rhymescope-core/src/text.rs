//! Tokenization and word normalization.
//!
//! Splits raw lyric text into positioned [`WordToken`]s and reduces each
//! surface form to the lowercase lookup key used for dictionary lookups
//! and rhyme-claim tracking.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Regex matching everything that is not a word character.
static NON_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]").expect("valid regex"));

/// Minimum normalized length for a token to participate in clustering.
pub const MIN_KEY_LENGTH: usize = 2;

/// One occurrence of a word in the input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordToken {
    /// Raw surface text as it appeared, casing and punctuation intact.
    pub original: String,
    /// Lowercase, punctuation-stripped lookup key.
    pub normalized: String,
    /// 0-based line coordinate in the input.
    pub line_index: usize,
    /// 0-based word coordinate within the line.
    pub position_index: usize,
    /// First phonetic transcription for `normalized`, if in vocabulary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonemes: Option<Vec<String>>,
}

impl WordToken {
    /// Stable identity key used by the highlight lookup.
    pub fn key(&self) -> String {
        format!("{}_{}", self.line_index, self.position_index)
    }
}

/// Reduce a raw token to its dictionary lookup key.
///
/// Multi-word phrases keep the last whitespace-delimited piece, and a
/// single-hyphen compound keeps the segment after the hyphen — rhyme
/// relevance lives in the final syllable-bearing segment. Everything that
/// is not a word character is then stripped and the rest lowercased.
///
/// An all-punctuation input yields an empty key; callers discard keys
/// shorter than [`MIN_KEY_LENGTH`].
pub fn normalize_word(raw: &str) -> String {
    let mut word = raw;

    if word.trim().contains(char::is_whitespace) {
        if let Some(last) = word.split_whitespace().next_back() {
            word = last;
        }
    }

    let hyphen_parts: Vec<&str> = word.split('-').collect();
    if hyphen_parts.len() == 2 && !hyphen_parts[1].is_empty() {
        word = hyphen_parts[1];
    }

    NON_WORD_PATTERN.replace_all(word, "").to_lowercase()
}

/// Split input text into lines, preserving blank lines and order.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Extract positioned word tokens from the input.
///
/// Tokens whose normalized key is shorter than [`MIN_KEY_LENGTH`] are
/// discarded. Phonemes are left unset; the analysis pass attaches them
/// from the dictionary.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> Vec<WordToken> {
    let mut tokens = Vec::new();

    for (line_index, line) in text.split('\n').enumerate() {
        for (position_index, word) in line.split_whitespace().enumerate() {
            let normalized = normalize_word(word);
            if normalized.len() >= MIN_KEY_LENGTH {
                tokens.push(WordToken {
                    original: word.to_string(),
                    normalized,
                    line_index,
                    position_index,
                    phonemes: None,
                });
            }
        }
    }

    tokens
}
