//! CMU Pronouncing Dictionary file loader.
//!
//! Parses the standard CMU format: one entry per line, `WORD  PH1 PH2 …`,
//! comment lines starting with `;;;`, and alternate pronunciations marked
//! `WORD(2)`. Words are stored lowercased to match normalized lookup keys.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{DictionaryError, DictionaryResult};

use super::{PhoneticDictionary, rhyming_suffix};

/// Phonetic dictionary loaded from a CMU-format file.
#[derive(Debug, Clone)]
pub struct CmuDictionary {
    entries: HashMap<String, Vec<Vec<String>>>,
    /// Rhyming suffix (stress digits preserved) → words sharing it.
    rhyme_index: HashMap<String, HashSet<String>>,
}

impl CmuDictionary {
    /// Load a dictionary from a CMU-format file.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path<P: AsRef<Path>>(path: P) -> DictionaryResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dict = Self::parse(&data);
        if dict.entries.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.display().to_string(),
            });
        }
        tracing::info!(words = dict.entries.len(), "phonetic dictionary loaded");
        Ok(dict)
    }

    /// Parse CMU-format dictionary text.
    pub fn parse(data: &str) -> Self {
        let mut entries: HashMap<String, Vec<Vec<String>>> = HashMap::new();

        for line in data.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let Some((word_raw, phones_str)) = line.split_once(' ') else {
                continue;
            };

            // Strip variant marker: WORD(2) -> WORD
            let word = word_raw
                .split('(')
                .next()
                .unwrap_or(word_raw)
                .to_lowercase();

            let phonemes: Vec<String> = phones_str
                .split_whitespace()
                .map(str::to_string)
                .collect();
            if !word.is_empty() && !phonemes.is_empty() {
                entries.entry(word).or_default().push(phonemes);
            }
        }

        let mut rhyme_index: HashMap<String, HashSet<String>> = HashMap::new();
        for (word, transcriptions) in &entries {
            for transcription in transcriptions {
                let suffix = rhyming_suffix(transcription).join(" ");
                if !suffix.is_empty() {
                    rhyme_index.entry(suffix).or_default().insert(word.clone());
                }
            }
        }

        Self {
            entries,
            rhyme_index,
        }
    }

    /// Number of distinct words loaded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PhoneticDictionary for CmuDictionary {
    fn phonemes_for(&self, word: &str) -> Vec<Vec<String>> {
        self.entries.get(word).cloned().unwrap_or_default()
    }

    fn exact_rhymes_of(&self, word: &str) -> HashSet<String> {
        let Some(transcriptions) = self.entries.get(word) else {
            return HashSet::new();
        };
        let mut rhymes = HashSet::new();
        for transcription in transcriptions {
            let suffix = rhyming_suffix(transcription).join(" ");
            if let Some(words) = self.rhyme_index.get(&suffix) {
                rhymes.extend(words.iter().filter(|w| *w != word).cloned());
            }
        }
        rhymes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
;;; comment line
BEST  B EH1 S T
TEST  T EH1 S T
REST  R EH1 S T
READ  R IY1 D
READ(2)  R EH1 D
RED  R EH1 D
";

    #[test]
    fn parses_entries_and_lowercases() {
        let dict = CmuDictionary::parse(SAMPLE);
        assert_eq!(dict.len(), 5);
        assert_eq!(dict.phonemes_for("best")[0].join(" "), "B EH1 S T");
    }

    #[test]
    fn variant_pronunciations_accumulate() {
        let dict = CmuDictionary::parse(SAMPLE);
        assert_eq!(dict.phonemes_for("read").len(), 2);
    }

    #[test]
    fn exact_rhymes_cover_all_variants() {
        let dict = CmuDictionary::parse(SAMPLE);
        let rhymes = dict.exact_rhymes_of("read");
        // Second pronunciation of "read" rhymes with "red".
        assert!(rhymes.contains("red"));
        let rhymes = dict.exact_rhymes_of("best");
        assert!(rhymes.contains("test"));
        assert!(rhymes.contains("rest"));
        assert!(!rhymes.contains("red"));
    }

    #[test]
    fn comments_and_blank_lines_ignored() {
        let dict = CmuDictionary::parse(";;; only a comment\n\n");
        assert!(dict.is_empty());
    }

    #[test]
    fn missing_file_errors() {
        let err = CmuDictionary::from_path("/nonexistent/cmudict.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }

    #[test]
    fn empty_file_errors() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), ";;; nothing here\n").unwrap();
        let err = CmuDictionary::from_path(tmp.path()).unwrap_err();
        assert!(matches!(err, DictionaryError::Empty { .. }));
    }
}
