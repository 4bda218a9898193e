//! Composite rhyme quality scoring.
//!
//! Aggregates the clustered groups and the raw text into a 0–100 score:
//! rhyme density scaled by syllable complexity, rhyme quality (perfect vs
//! slant), vocabulary diversity, and a pattern-sophistication term.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clustering::RhymeGroup;
use crate::phonetics::{DictCache, PhoneticDictionary};

/// Raw counting statistics behind a [`QualityScore`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RhymeStats {
    /// Whitespace-delimited tokens in the raw text.
    pub total_words: usize,
    /// Non-blank lines in the raw text.
    pub total_lines: usize,
    /// Tokens that belong to some rhyme group.
    pub rhyming_words: usize,
    /// Distinct case-folded whitespace tokens.
    pub unique_words: usize,
    /// Number of rhyme groups.
    pub group_count: usize,
    /// Non-anchor members in their anchor's exact-rhyme set.
    pub perfect_rhymes: usize,
    /// Non-anchor members accepted by similarity only.
    pub slant_rhymes: usize,
    /// Mean estimated syllables per rhyming word.
    pub avg_syllables: f64,
    /// Rhyming words as a percentage of all words.
    pub density_percent: f64,
    /// Unique words as a percentage of all words.
    pub diversity_percent: f64,
}

/// Composite quality score with its sub-metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QualityScore {
    /// Final score, capped at 100.
    pub overall_score: f64,
    /// Rhyme density before multipliers.
    pub base_density: f64,
    /// Bonus for multisyllabic rhymes.
    pub syllable_multiplier: f64,
    /// Perfect-vs-slant quality factor.
    pub quality_factor: f64,
    /// Vocabulary diversity bonus.
    pub diversity_bonus: f64,
    /// Pattern sophistication term.
    pub pattern_score: f64,
    /// Underlying counts.
    pub stats: RhymeStats,
}

/// Score the analyzed text.
///
/// An input with no whitespace-delimited words returns the all-zero
/// score. Perfect/slant classification reuses the per-request dictionary
/// cache, so anchors looked up during clustering are not fetched again.
#[tracing::instrument(skip_all, fields(groups = groups.len()))]
pub fn score<D: PhoneticDictionary + ?Sized>(
    full_text: &str,
    groups: &[RhymeGroup],
    cache: &mut DictCache<'_, D>,
) -> QualityScore {
    let total_words = full_text.split_whitespace().count();
    if total_words == 0 {
        return QualityScore::default();
    }
    let total_lines = full_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count();

    let mut rhyming_words = 0usize;
    let mut perfect_rhymes = 0usize;
    let mut slant_rhymes = 0usize;
    let mut syllable_points = 0usize;

    for group in groups {
        rhyming_words += group.members.len();
        for member in &group.members {
            syllable_points += estimate_syllables(&member.normalized);
        }
        let Some(anchor) = group.members.first() else {
            continue;
        };
        let exact = cache.exact_rhymes(&anchor.normalized);
        for member in &group.members[1..] {
            if exact.contains(&member.normalized) {
                perfect_rhymes += 1;
            } else {
                slant_rhymes += 1;
            }
        }
    }

    let unique_words = full_text
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<HashSet<_>>()
        .len();

    let base_density = rhyming_words as f64 / total_words as f64 * 100.0;

    let syllable_multiplier = 1.0
        + 0.2 * (syllable_points as f64 - rhyming_words as f64) / rhyming_words.max(1) as f64;

    let scored_pairs = perfect_rhymes + slant_rhymes;
    let quality_factor = if scored_pairs == 0 {
        1.0
    } else {
        (perfect_rhymes as f64).mul_add(1.0, slant_rhymes as f64 * 0.7) / scored_pairs as f64
    };

    let diversity_bonus = 1.0 + 0.3 * unique_words as f64 / total_words as f64;

    let pattern_score = groups.len() as f64
        * (rhyming_words as f64 / groups.len().max(1) as f64)
        / total_lines.max(1) as f64
        * 10.0;

    let overall_score =
        (base_density * syllable_multiplier * quality_factor * diversity_bonus + pattern_score)
            .min(100.0);

    QualityScore {
        overall_score,
        base_density,
        syllable_multiplier,
        quality_factor,
        diversity_bonus,
        pattern_score,
        stats: RhymeStats {
            total_words,
            total_lines,
            rhyming_words,
            unique_words,
            group_count: groups.len(),
            perfect_rhymes,
            slant_rhymes,
            avg_syllables: syllable_points as f64 / rhyming_words.max(1) as f64,
            density_percent: base_density,
            diversity_percent: unique_words as f64 / total_words as f64 * 100.0,
        },
    }
}

/// Estimate syllables by counting vowel-letter runs.
///
/// Consecutive vowel letters count once; a trailing silent `e` is
/// dropped when the count exceeds one; floor of one.
pub fn estimate_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let vowels = ['a', 'e', 'i', 'o', 'u', 'y'];

    let mut syllables = 0usize;
    let mut previous_was_vowel = false;
    for ch in word.chars() {
        let is_vowel = vowels.contains(&ch);
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with('e') && syllables > 1 {
        syllables -= 1;
    }

    syllables.max(1)
}
