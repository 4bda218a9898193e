//! Full rhyme analysis.
//!
//! Orchestrates the pure modules into one pass: tokenize, attach
//! phonemes, cluster, highlight, score. The entry point is [`analyze`];
//! it is total — any text and sensitivity yield a valid report, with zero
//! groups in the worst case.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clustering::{RhymeGroup, cluster};
use crate::highlight::{SyllableSpan, highlight};
use crate::phonetics::{DictCache, PhoneticDictionary};
use crate::quality::{QualityScore, score};
use crate::similarity::sensitivity_to_threshold;
use crate::text::{split_lines, tokenize};

/// Highlight breakdown for one grouped token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HighlightedWord {
    /// Original surface text.
    pub word: String,
    /// Normalized lookup key.
    pub normalized: String,
    /// Ordered display spans; their texts concatenate to `word`.
    pub spans: Vec<SyllableSpan>,
}

/// Complete analysis of one input text.
///
/// The map fields are `BTreeMap`s so serialization is byte-stable:
/// analyzing the same text twice produces identical JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Input lines, order and blanks preserved.
    pub lines: Vec<String>,
    /// Rhyme groups in discovery order.
    pub groups: Vec<RhymeGroup>,
    /// Label → group lookup.
    pub rhyme_groups: BTreeMap<String, RhymeGroup>,
    /// Token key (`"line_position"`) → highlight breakdown, grouped
    /// tokens only.
    pub syllable_highlights: BTreeMap<String, HighlightedWord>,
    /// Composite quality score.
    pub quality: QualityScore,
    /// Sensitivity the analysis ran with, clamped to 100.
    pub sensitivity: u8,
}

/// Analyze a block of text at the given sensitivity (0–100).
///
/// Deterministic for a deterministic dictionary, and total: malformed or
/// empty input yields an empty-but-valid report, never an error. Each
/// distinct normalized key is looked up in the dictionary at most once
/// per call.
#[tracing::instrument(skip(text, dict), fields(text_len = text.len(), sensitivity))]
pub fn analyze<D: PhoneticDictionary + ?Sized>(
    text: &str,
    sensitivity: u8,
    dict: &D,
) -> AnalysisReport {
    let sensitivity = sensitivity.min(100);
    let threshold = sensitivity_to_threshold(sensitivity);
    let mut cache = DictCache::new(dict);

    let mut tokens = tokenize(text);
    for token in &mut tokens {
        token.phonemes = cache.first_phonemes(&token.normalized);
    }

    let groups = cluster(&tokens, threshold, &mut cache);
    let quality = score(text, &groups, &mut cache);

    let mut syllable_highlights = BTreeMap::new();
    for group in &groups {
        for member in &group.members {
            syllable_highlights.insert(
                member.key(),
                HighlightedWord {
                    word: member.original.clone(),
                    normalized: member.normalized.clone(),
                    spans: highlight(
                        &member.original,
                        &member.normalized,
                        &group.rhyme_sound,
                        &group.color,
                    ),
                },
            );
        }
    }

    let rhyme_groups = groups
        .iter()
        .map(|group| (group.label.clone(), group.clone()))
        .collect();

    tracing::debug!(
        groups = groups.len(),
        rhyming_words = quality.stats.rhyming_words,
        overall = quality.overall_score,
        "analysis complete"
    );

    AnalysisReport {
        lines: split_lines(text),
        groups,
        rhyme_groups,
        syllable_highlights,
        quality,
        sensitivity,
    }
}
