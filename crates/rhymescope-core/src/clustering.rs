//! Greedy rhyme clustering.
//!
//! A single forward pass over tokens in input order. Each unclaimed token
//! with phonetic data anchors a candidate group; every other unclaimed
//! token joins if it is an exact dictionary rhyme of the anchor or scores
//! at or above the threshold against the anchor. Membership is judged
//! against the anchor only, never pairwise between members.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::phonetics::{DictCache, PhoneticDictionary, rhyming_suffix};
use crate::similarity::similarity;
use crate::text::WordToken;

/// Display palette for rhyme groups, hex RGB.
pub const PALETTE: &[&str] = &[
    "#C0392B", "#138D75", "#1F618D", "#27AE60", "#F39C12", "#8E44AD", "#E74C3C", "#16A085",
    "#2980B9", "#229954", "#E67E22", "#9B59B6", "#CB4335", "#17A2B8", "#28A745", "#FFC107",
    "#6F42C1", "#DC3545",
];

/// Contrast-maximizing walk over [`PALETTE`] indices.
///
/// The first six are distinct hue families; yellow, cyan, and violet
/// follow before any shade of an already-used hue repeats. Fixed policy,
/// checked top-to-bottom.
const CONTRAST_ORDER: &[usize] = &[
    0, 1, 2, 3, 4, 5, 15, 13, 16, 6, 7, 8, 9, 10, 11, 12, 14, 17,
];

/// A cluster of mutually-claimed rhyming tokens.
///
/// The first member is the anchor that seeded the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RhymeGroup {
    /// Sequential letter identifier in discovery order (A, B, … Z, AA, …).
    pub label: String,
    /// Display color assigned for contrast against earlier groups.
    pub color: String,
    /// Member tokens in scan order, anchor first.
    pub members: Vec<WordToken>,
    /// Rhyming phoneme suffix of the anchor, for display and debugging.
    pub rhyme_sound: String,
}

/// Sequential group label: `A`–`Z`, then `AA`, `AB`, … spreadsheet style.
pub fn group_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = String::new();
    while n > 0 {
        n -= 1;
        label.insert(0, char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    label
}

/// Pick the next display color given the colors already assigned.
///
/// While the palette is not exhausted, walk [`CONTRAST_ORDER`] and return
/// the first unused color; afterwards cycle the palette by assignment
/// count. The first `PALETTE.len()` groups therefore get maximally
/// distinct colors before any repetition.
pub fn next_color(assigned: &[&str]) -> &'static str {
    if assigned.len() < PALETTE.len() {
        for &index in CONTRAST_ORDER {
            let color = PALETTE[index];
            if !assigned.contains(&color) {
                return color;
            }
        }
    }
    PALETTE[assigned.len() % PALETTE.len()]
}

/// Cluster tokens into rhyme groups at the given similarity threshold.
///
/// Tokens without phonetic data are never anchors and never candidates.
/// A group is kept only with two or more members; a matchless anchor is
/// left unclaimed and simply never appears in any group.
#[tracing::instrument(skip_all, fields(tokens = tokens.len(), threshold))]
pub fn cluster<D: PhoneticDictionary + ?Sized>(
    tokens: &[WordToken],
    threshold: f64,
    cache: &mut DictCache<'_, D>,
) -> Vec<RhymeGroup> {
    let mut groups: Vec<RhymeGroup> = Vec::new();
    let mut claimed: HashSet<String> = HashSet::new();
    let mut assigned_colors: Vec<&str> = Vec::new();

    for anchor in tokens {
        if claimed.contains(&anchor.normalized) {
            continue;
        }
        let Some(anchor_phonemes) = anchor.phonemes.as_ref() else {
            continue;
        };

        let exact = cache.exact_rhymes(&anchor.normalized);
        let mut members = vec![anchor.clone()];

        for candidate in tokens {
            if candidate.normalized == anchor.normalized
                || claimed.contains(&candidate.normalized)
            {
                continue;
            }
            let Some(candidate_phonemes) = candidate.phonemes.as_ref() else {
                continue;
            };
            if exact.contains(&candidate.normalized)
                || similarity(anchor_phonemes, candidate_phonemes) >= threshold
            {
                members.push(candidate.clone());
            }
        }

        if members.len() >= 2 {
            for member in &members {
                claimed.insert(member.normalized.clone());
            }
            let color = next_color(&assigned_colors);
            assigned_colors.push(color);
            groups.push(RhymeGroup {
                label: group_label(groups.len()),
                color: color.to_string(),
                members,
                rhyme_sound: rhyming_suffix(anchor_phonemes).join(" "),
            });
        }
    }

    groups
}
