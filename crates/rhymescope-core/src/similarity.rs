//! Phonetic similarity scoring and sensitivity mapping.
//!
//! The scorer compares two ARPABET transcriptions on their rhyming
//! suffixes and yields a score in `[0, 1]`. Vowel agreement is a hard
//! gate: if the final vowels differ and are not a known near-rhyme
//! family, the pair is not a slant rhyme at any threshold.

use crate::phonetics::{is_vowel, rhyming_suffix, strip_stress};

/// Sensitivity used when the caller does not specify one.
pub const DEFAULT_SENSITIVITY: u8 = 70;

/// Near-rhyme vowel families accepted by the slant-rhyme gate.
///
/// Checked top-to-bottom, either order. Ordering is policy: specific
/// families stay ahead of the looser ones.
const SIMILAR_VOWELS: &[(&str, &str)] = &[
    ("IH", "IY"), // bit / beat
    ("EH", "AE"), // bed / bad
    ("AH", "UH"), // cut / could
    ("OW", "AO"), // low / law
    ("AY", "EY"), // time / tame
    ("AW", "OW"), // now / know
];

/// Weight of the vowel-agreement term.
const VOWEL_WEIGHT: f64 = 0.5;
/// Weight of the trailing-phoneme-match term.
const ENDING_WEIGHT: f64 = 0.3;
/// Weight of the final consonant-cluster term.
const CLUSTER_WEIGHT: f64 = 0.2;
/// Credit for vowels in the same family rather than identical.
const SIMILAR_VOWEL_CREDIT: f64 = 0.7;
/// Credit when exactly one side has trailing consonants.
const LONE_CLUSTER_CREDIT: f64 = 0.3;

/// Map a user-facing sensitivity (0–100) to a similarity threshold.
///
/// Piecewise linear and decreasing: 0.95 at sensitivity 0, 0.70 at 50,
/// 0.40 at 100. Higher sensitivity accepts looser rhymes. Values above
/// 100 are clamped.
pub fn sensitivity_to_threshold(sensitivity: u8) -> f64 {
    let s = f64::from(sensitivity.min(100));
    if s <= 50.0 {
        (s / 50.0).mul_add(-0.25, 0.95)
    } else {
        ((s - 50.0) / 50.0).mul_add(-0.30, 0.70)
    }
}

/// Score the phonetic closeness of two transcriptions, 0 to 1.
///
/// Pure and deterministic: identical inputs always yield the identical
/// score.
pub fn similarity(phonemes_a: &[String], phonemes_b: &[String]) -> f64 {
    let suffix_a = rhyming_suffix(phonemes_a);
    let suffix_b = rhyming_suffix(phonemes_b);
    if suffix_a.is_empty() || suffix_b.is_empty() {
        return 0.0;
    }
    if suffix_a == suffix_b {
        return 1.0;
    }

    let Some(vowel_a) = last_vowel(&suffix_a) else {
        return 0.0;
    };
    let Some(vowel_b) = last_vowel(&suffix_b) else {
        return 0.0;
    };

    // Vowel agreement gates slant rhymes outright.
    let vowel_term = if vowel_a == vowel_b {
        1.0
    } else if vowels_similar(vowel_a, vowel_b) {
        SIMILAR_VOWEL_CREDIT
    } else {
        return 0.0;
    };

    let mut score = vowel_term * VOWEL_WEIGHT;
    score += ending_match(&suffix_a, &suffix_b) * ENDING_WEIGHT;
    score += cluster_match(&suffix_a, &suffix_b) * CLUSTER_WEIGHT;

    let (longer, shorter) = if suffix_a.len() >= suffix_b.len() {
        (suffix_a.len(), suffix_b.len())
    } else {
        (suffix_b.len(), suffix_a.len())
    };
    if longer > shorter * 2 {
        score *= 0.5;
    }

    score.min(1.0)
}

/// Last vowel phoneme of a sequence, stress marker stripped.
fn last_vowel(phonemes: &[String]) -> Option<&str> {
    phonemes
        .iter()
        .rev()
        .find(|p| is_vowel(p))
        .map(|p| strip_stress(p))
}

fn vowels_similar(a: &str, b: &str) -> bool {
    SIMILAR_VOWELS
        .iter()
        .any(|(x, y)| (a == *x && b == *y) || (a == *y && b == *x))
}

/// Fraction of trailing phonemes matching from the end, stress ignored.
///
/// Counts until the first mismatch; needs at least 2 matches to score,
/// except that a single match earns half credit when both sequences are
/// two phonemes or shorter.
fn ending_match(a: &[String], b: &[String]) -> f64 {
    let matches = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| strip_stress(x) == strip_stress(y))
        .count();

    let longer = a.len().max(b.len());
    if matches >= 2 {
        matches as f64 / longer as f64
    } else if matches == 1 && a.len() <= 2 && b.len() <= 2 {
        0.5
    } else {
        0.0
    }
}

/// Position-aligned match fraction of the consonants after each side's
/// last vowel.
fn cluster_match(a: &[String], b: &[String]) -> f64 {
    let cluster_a = trailing_consonants(a);
    let cluster_b = trailing_consonants(b);

    match (cluster_a.is_empty(), cluster_b.is_empty()) {
        (true, true) => 1.0,
        (true, false) | (false, true) => LONE_CLUSTER_CREDIT,
        (false, false) => {
            let matches = cluster_a
                .iter()
                .zip(cluster_b.iter())
                .filter(|(x, y)| x == y)
                .count();
            matches as f64 / cluster_a.len().max(cluster_b.len()) as f64
        }
    }
}

fn trailing_consonants(phonemes: &[String]) -> Vec<&str> {
    let last_vowel_pos = phonemes.iter().rposition(|p| is_vowel(p));
    let start = last_vowel_pos.map_or(0, |i| i + 1);
    phonemes[start..].iter().map(|p| strip_stress(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetics::phones;

    #[test]
    fn threshold_endpoints() {
        assert!((sensitivity_to_threshold(0) - 0.95).abs() < 1e-9);
        assert!((sensitivity_to_threshold(50) - 0.70).abs() < 1e-9);
        assert!((sensitivity_to_threshold(100) - 0.40).abs() < 1e-9);
    }

    #[test]
    fn threshold_is_decreasing() {
        let mut previous = f64::INFINITY;
        for s in 0..=100 {
            let t = sensitivity_to_threshold(s);
            assert!(t <= previous, "threshold rose at sensitivity {s}");
            previous = t;
        }
    }

    #[test]
    fn default_sensitivity_lands_mid_slant_range() {
        let t = sensitivity_to_threshold(DEFAULT_SENSITIVITY);
        assert!((t - 0.58).abs() < 1e-9);
    }

    #[test]
    fn overflow_sensitivity_clamps() {
        assert!((sensitivity_to_threshold(200) - 0.40).abs() < 1e-9);
    }

    #[test]
    fn identical_suffixes_score_one() {
        // best / test share the suffix EH1 S T
        let a = phones("B EH1 S T");
        let b = phones("T EH1 S T");
        assert!((similarity(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn vowel_mismatch_scores_zero() {
        // cat / dog: AE vs AO is not a near-rhyme family
        let cat = phones("K AE1 T");
        let dog = phones("D AO1 G");
        assert!(similarity(&cat, &dog).abs() < 1e-9);
    }

    #[test]
    fn grinder_miner_is_a_strong_slant_rhyme() {
        let grinder = phones("G R AY1 N D ER0");
        let miner = phones("M AY1 N ER0");
        let score = similarity(&grinder, &miner);
        // Same final vowel (ER), one trailing match, no trailing clusters.
        assert!((score - 0.7).abs() < 1e-9);
        assert!(score >= sensitivity_to_threshold(100));
        assert!(score < sensitivity_to_threshold(0));
    }

    #[test]
    fn short_near_rhyme_gets_single_match_credit() {
        // bit / beat: IH vs IY family, T matches, both suffixes length 2
        let bit = phones("B IH1 T");
        let beat = phones("B IY1 T");
        let score = similarity(&bit, &beat);
        // 0.7*0.5 + 0.5*0.3 + 1.0*0.2
        assert!((score - 0.70).abs() < 1e-9);
    }

    #[test]
    fn length_mismatch_halves_score() {
        let short = phones("B EH1 D");
        let long = phones("B EH1 D Z D Z D");
        let with_penalty = similarity(&short, &long);
        // Same vowel, but the longer suffix is more than double the length.
        assert!(with_penalty > 0.0);
        assert!(with_penalty < 0.5);
    }

    #[test]
    fn empty_transcription_scores_zero() {
        let best = phones("B EH1 S T");
        assert!(similarity(&best, &[]).abs() < 1e-9);
        assert!(similarity(&[], &[]).abs() < 1e-9);
    }

    #[test]
    fn scoring_is_symmetric_for_these_pairs() {
        let a = phones("G R AY1 N D ER0");
        let b = phones("M AY1 N ER0");
        assert!((similarity(&a, &b) - similarity(&b, &a)).abs() < 1e-9);
    }
}
