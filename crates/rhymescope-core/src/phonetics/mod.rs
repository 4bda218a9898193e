//! Phonetic dictionary boundary and ARPABET helpers.
//!
//! The core never talks to a concrete phonetic data source directly; it
//! consumes the [`PhoneticDictionary`] trait so tests can substitute a
//! deterministic fake. Two implementations ship with the crate: a built-in
//! static table ([`builtin`]) and a CMU-format file loader ([`cmu`]).
//!
//! Transcriptions are ARPABET phonemes with stress digits on vowels
//! (`T R IH1 P IH0 NG`), the encoding the CMU Pronouncing Dictionary uses.

pub mod builtin;
pub mod cmu;

use std::collections::{HashMap, HashSet};

/// ARPABET vowel symbols, stress digits stripped.
pub const VOWELS: &[&str] = &[
    "AA", "AE", "AH", "AO", "AW", "AY", "EH", "ER", "EY", "IH", "IY", "OW", "OY", "UH", "UW",
];

/// Remove the trailing stress digit from a phoneme, if present.
pub fn strip_stress(phoneme: &str) -> &str {
    phoneme.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// Whether a phoneme is a vowel (stress marker ignored).
pub fn is_vowel(phoneme: &str) -> bool {
    VOWELS.contains(&strip_stress(phoneme))
}

/// Rhyming suffix of a transcription: the phonemes from the last
/// primary- or secondary-stressed vowel onward.
///
/// A transcription with no stressed vowel rhymes on its whole length.
pub fn rhyming_suffix(transcription: &[String]) -> Vec<String> {
    let start = transcription
        .iter()
        .rposition(|p| p.ends_with('1') || p.ends_with('2'))
        .unwrap_or(0);
    transcription[start..].to_vec()
}

/// External phonetic dictionary capability.
///
/// Implementations must be deterministic: identical queries always return
/// identical results. Missing words are a normal state, not an error —
/// `phonemes_for` returns an empty list and the word simply stays out of
/// clustering.
pub trait PhoneticDictionary {
    /// All known transcriptions for a normalized word, best-known first.
    /// Empty when the word is out of vocabulary.
    fn phonemes_for(&self, word: &str) -> Vec<Vec<String>>;

    /// Dictionary words sharing an identical rhyming suffix with any
    /// transcription of `word`, excluding `word` itself.
    fn exact_rhymes_of(&self, word: &str) -> HashSet<String>;

    /// Rhyme-determining tail of a transcription.
    fn rhyming_suffix(&self, transcription: &[String]) -> Vec<String> {
        rhyming_suffix(transcription)
    }
}

/// Per-request memoization of dictionary lookups.
///
/// Within one analysis no normalized key is looked up twice. The cache is
/// built fresh for each request and never outlives it, so a dictionary
/// swapped between requests is always observed.
pub struct DictCache<'a, D: PhoneticDictionary + ?Sized> {
    dict: &'a D,
    phonemes: HashMap<String, Option<Vec<String>>>,
    rhymes: HashMap<String, HashSet<String>>,
}

impl<'a, D: PhoneticDictionary + ?Sized> DictCache<'a, D> {
    /// Wrap a dictionary for one analysis request.
    pub fn new(dict: &'a D) -> Self {
        Self {
            dict,
            phonemes: HashMap::new(),
            rhymes: HashMap::new(),
        }
    }

    /// First transcription for a word, or `None` when out of vocabulary.
    pub fn first_phonemes(&mut self, word: &str) -> Option<Vec<String>> {
        if let Some(cached) = self.phonemes.get(word) {
            return cached.clone();
        }
        let result = self.dict.phonemes_for(word).into_iter().next();
        self.phonemes.insert(word.to_string(), result.clone());
        result
    }

    /// Exact-rhyme set for a word, memoized.
    pub fn exact_rhymes(&mut self, word: &str) -> &HashSet<String> {
        if !self.rhymes.contains_key(word) {
            let set = self.dict.exact_rhymes_of(word);
            self.rhymes.insert(word.to_string(), set);
        }
        &self.rhymes[word]
    }
}

#[cfg(test)]
pub(crate) fn phones(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}
