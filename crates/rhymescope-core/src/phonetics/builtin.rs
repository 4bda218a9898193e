//! Built-in phonetic dictionary.
//!
//! A curated table of common lyric vocabulary with ARPABET transcriptions,
//! so the analyzer works out of the box with no external data file. Point
//! the configuration at a full CMU-format file (see [`super::cmu`]) for
//! real coverage; out-of-vocabulary words are simply left unclustered.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::{PhoneticDictionary, rhyming_suffix};

/// Word → space-separated ARPABET transcription.
static ENTRIES: &[(&str, &str)] = &[
    // -est / -essed family
    ("best", "B EH1 S T"),
    ("test", "T EH1 S T"),
    ("rest", "R EH1 S T"),
    ("west", "W EH1 S T"),
    ("nest", "N EH1 S T"),
    ("guest", "G EH1 S T"),
    ("chest", "CH EH1 S T"),
    ("quest", "K W EH1 S T"),
    ("vest", "V EH1 S T"),
    ("zest", "Z EH1 S T"),
    ("jest", "JH EH1 S T"),
    ("pest", "P EH1 S T"),
    ("crest", "K R EH1 S T"),
    ("blessed", "B L EH1 S T"),
    ("dressed", "D R EH1 S T"),
    ("pressed", "P R EH1 S T"),
    ("stressed", "S T R EH1 S T"),
    ("guessed", "G EH1 S T"),
    ("messed", "M EH1 S T"),
    ("arrest", "ER0 EH1 S T"),
    ("request", "R IH0 K W EH1 S T"),
    // -ipping family
    ("tripping", "T R IH1 P IH0 NG"),
    ("dripping", "D R IH1 P IH0 NG"),
    ("stripping", "S T R IH1 P IH0 NG"),
    ("slipping", "S L IH1 P IH0 NG"),
    ("flipping", "F L IH1 P IH0 NG"),
    ("gripping", "G R IH1 P IH0 NG"),
    ("pimping", "P IH1 M P IH0 NG"),
    ("spitting", "S P IH1 T IH0 NG"),
    ("sitting", "S IH1 T IH0 NG"),
    ("hitting", "HH IH1 T IH0 NG"),
    // -iner / -inder family
    ("grinder", "G R AY1 N D ER0"),
    ("finder", "F AY1 N D ER0"),
    ("blinder", "B L AY1 N D ER0"),
    ("miner", "M AY1 N ER0"),
    ("minor", "M AY1 N ER0"),
    ("diner", "D AY1 N ER0"),
    ("signer", "S AY1 N ER0"),
    ("niner", "N AY1 N ER0"),
    ("liner", "L AY1 N ER0"),
    ("shiner", "SH AY1 N ER0"),
    ("designer", "D IH0 Z AY1 N ER0"),
    ("china", "CH AY1 N AH0"),
    // -eat family
    ("beat", "B IY1 T"),
    ("meat", "M IY1 T"),
    ("heat", "HH IY1 T"),
    ("sweet", "S W IY1 T"),
    ("street", "S T R IY1 T"),
    ("neat", "N IY1 T"),
    ("feet", "F IY1 T"),
    ("seat", "S IY1 T"),
    ("complete", "K AH0 M P L IY1 T"),
    ("repeat", "R IH0 P IY1 T"),
    // -uble family
    ("trouble", "T R AH1 B AH0 L"),
    ("double", "D AH1 B AH0 L"),
    ("bubble", "B AH1 B AH0 L"),
    ("stubble", "S T AH1 B AH0 L"),
    ("rubble", "R AH1 B AH0 L"),
    // -ent / -ant family
    ("magnificent", "M AE0 G N IH1 F AH0 S AH0 N T"),
    ("different", "D IH1 F ER0 AH0 N T"),
    ("president", "P R EH1 Z AH0 D AH0 N T"),
    ("evident", "EH1 V AH0 D AH0 N T"),
    ("hesitant", "HH EH1 Z IH0 T AH0 N T"),
    ("resident", "R EH1 Z AH0 D AH0 N T"),
    // -at family
    ("cat", "K AE1 T"),
    ("hat", "HH AE1 T"),
    ("bat", "B AE1 T"),
    ("mat", "M AE1 T"),
    ("rat", "R AE1 T"),
    ("flat", "F L AE1 T"),
    ("that", "DH AE1 T"),
    // -og family
    ("dog", "D AO1 G"),
    ("log", "L AO1 G"),
    ("fog", "F AO1 G"),
    ("frog", "F R AO1 G"),
    // -ay family
    ("day", "D EY1"),
    ("way", "W EY1"),
    ("say", "S EY1"),
    ("play", "P L EY1"),
    ("stay", "S T EY1"),
    ("gray", "G R EY1"),
    ("away", "AH0 W EY1"),
    ("okay", "OW2 K EY1"),
    // -ight family
    ("night", "N AY1 T"),
    ("light", "L AY1 T"),
    ("right", "R AY1 T"),
    ("fight", "F AY1 T"),
    ("tight", "T AY1 T"),
    ("bright", "B R AY1 T"),
    ("sight", "S AY1 T"),
    ("flight", "F L AY1 T"),
    // -ow family
    ("flow", "F L OW1"),
    ("go", "G OW1"),
    ("know", "N OW1"),
    ("show", "SH OW1"),
    ("low", "L OW1"),
    ("slow", "S L OW1"),
    ("blow", "B L OW1"),
    ("grow", "G R OW1"),
    // -ind family
    ("mind", "M AY1 N D"),
    ("find", "F AY1 N D"),
    ("grind", "G R AY1 N D"),
    ("blind", "B L AY1 N D"),
    ("kind", "K AY1 N D"),
    ("behind", "B IH0 HH AY1 N D"),
    ("kinda", "K AY1 N D AH0"),
    // -ime family
    ("time", "T AY1 M"),
    ("rhyme", "R AY1 M"),
    ("climb", "K L AY1 M"),
    ("dime", "D AY1 M"),
    ("crime", "K R AY1 M"),
    ("prime", "P R AY1 M"),
    // -ine family
    ("line", "L AY1 N"),
    ("mine", "M AY1 N"),
    ("shine", "SH AY1 N"),
    ("fine", "F AY1 N"),
    ("sign", "S AY1 N"),
    ("nine", "N AY1 N"),
    ("wine", "W AY1 N"),
    // -oney family
    ("money", "M AH1 N IY0"),
    ("honey", "HH AH1 N IY0"),
    ("funny", "F AH1 N IY0"),
    ("sunny", "S AH1 N IY0"),
    // -ove family
    ("love", "L AH1 V"),
    ("above", "AH0 B AH1 V"),
    ("dove", "D AH1 V"),
    ("glove", "G L AH1 V"),
    // -eel / -eal family
    ("real", "R IY1 L"),
    ("feel", "F IY1 L"),
    ("steel", "S T IY1 L"),
    ("deal", "D IY1 L"),
    ("steal", "S T IY1 L"),
    ("wheel", "W IY1 L"),
    // -ame family
    ("game", "G EY1 M"),
    ("name", "N EY1 M"),
    ("same", "S EY1 M"),
    ("fame", "F EY1 M"),
    ("flame", "F L EY1 M"),
    ("shame", "SH EY1 M"),
    // -ire family
    ("fire", "F AY1 ER0"),
    ("desire", "D IH0 Z AY1 ER0"),
    ("higher", "HH AY1 ER0"),
    ("wire", "W AY1 ER0"),
    ("liar", "L AY1 ER0"),
    // assorted fillers seen in verse
    ("soft", "S AO1 F T"),
    ("script", "S K R IH1 P T"),
    ("off", "AO1 F"),
    ("with", "W IH1 DH"),
    ("the", "DH AH0"),
    ("was", "W AA1 Z"),
    ("her", "HH ER0"),
    ("his", "HH IH1 Z"),
    ("and", "AH0 N D"),
    ("you", "Y UW1"),
    ("true", "T R UW1"),
    ("blue", "B L UW1"),
    ("through", "TH R UW1"),
    ("crew", "K R UW1"),
    ("new", "N UW1"),
];

/// Lookup map built from [`ENTRIES`].
static LOOKUP: LazyLock<HashMap<&'static str, Vec<String>>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|(word, phones)| {
            (
                *word,
                phones.split_whitespace().map(str::to_string).collect(),
            )
        })
        .collect()
});

/// Rhyming-suffix → words sharing it, for exact-rhyme queries.
static RHYME_INDEX: LazyLock<HashMap<String, Vec<&'static str>>> = LazyLock::new(|| {
    let mut index: HashMap<String, Vec<&'static str>> = HashMap::new();
    for (word, _) in ENTRIES {
        if let Some(transcription) = LOOKUP.get(word) {
            let suffix = rhyming_suffix(transcription).join(" ");
            if !suffix.is_empty() {
                index.entry(suffix).or_default().push(word);
            }
        }
    }
    index
});

/// Dictionary backed by the embedded table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// Number of words in the embedded table.
    pub fn len(&self) -> usize {
        LOOKUP.len()
    }

    /// Whether the table is empty (it never is; present for API symmetry).
    pub fn is_empty(&self) -> bool {
        LOOKUP.is_empty()
    }
}

impl PhoneticDictionary for BuiltinDictionary {
    fn phonemes_for(&self, word: &str) -> Vec<Vec<String>> {
        LOOKUP.get(word).map(|p| vec![p.clone()]).unwrap_or_default()
    }

    fn exact_rhymes_of(&self, word: &str) -> HashSet<String> {
        let Some(transcription) = LOOKUP.get(word) else {
            return HashSet::new();
        };
        let suffix = rhyming_suffix(transcription).join(" ");
        RHYME_INDEX
            .get(&suffix)
            .map(|words| {
                words
                    .iter()
                    .filter(|w| **w != word)
                    .map(|w| (*w).to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_word_has_phonemes() {
        let dict = BuiltinDictionary;
        let phones = dict.phonemes_for("best");
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].join(" "), "B EH1 S T");
    }

    #[test]
    fn unknown_word_is_out_of_vocabulary() {
        let dict = BuiltinDictionary;
        assert!(dict.phonemes_for("xyzzy").is_empty());
        assert!(dict.exact_rhymes_of("xyzzy").is_empty());
    }

    #[test]
    fn est_family_rhymes_exactly() {
        let dict = BuiltinDictionary;
        let rhymes = dict.exact_rhymes_of("best");
        assert!(rhymes.contains("test"));
        assert!(rhymes.contains("rest"));
        assert!(rhymes.contains("dressed"));
        assert!(!rhymes.contains("best"));
    }

    #[test]
    fn homophones_share_a_rhyme_class() {
        let dict = BuiltinDictionary;
        assert!(dict.exact_rhymes_of("miner").contains("minor"));
    }

    #[test]
    fn cross_vowel_words_do_not_rhyme_exactly() {
        let dict = BuiltinDictionary;
        assert!(!dict.exact_rhymes_of("cat").contains("dog"));
    }
}
