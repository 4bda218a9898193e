//! Syllable-level highlight spans.
//!
//! Splits a grouped word's surface text into a non-rhyming prefix and a
//! rhyming suffix so a renderer can color the rhyming portion. Pure text
//! splitting over an ordered ending table; it never fails and always
//! yields at least one span whose texts concatenate back to the original
//! surface.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Words whose spelling resists suffix splitting; always highlighted whole.
const SHORT_WORD_EXCEPTIONS: &[&str] = &["through", "though", "straight", "queue", "rhythm"];

/// Known rhyme-bearing English endings, most specific first.
///
/// Checked top-to-bottom; the multi-letter clusters must stay ahead of
/// the generic endings they contain (`ipping` before `ing`, `inder` and
/// `iner` before `ner` before `er`). Ordering is policy, not data.
const RHYME_ENDINGS: &[&str] = &[
    "ipping", "inder", "igner", "iner", "uble", "ation", "tion", "sion", "ness", "ight", "ing",
    "est", "ent", "ant", "ner", "er", "ed", "ly", "ty", "cy",
];

/// A highlighted fragment of a token's original surface text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SyllableSpan {
    /// Fragment text, exactly as it appears in the surface form.
    pub text: String,
    /// Whether this fragment carries the rhyme.
    pub is_rhyming: bool,
    /// Owning group's display color, rhyming spans only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Owning group's rhyme sound, rhyming spans only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhyme_sound: Option<String>,
}

impl SyllableSpan {
    fn prefix(text: String) -> Self {
        Self {
            text,
            is_rhyming: false,
            color: None,
            rhyme_sound: None,
        }
    }

    fn rhyming(text: String, color: &str, rhyme_sound: &str) -> Self {
        Self {
            text,
            is_rhyming: true,
            color: Some(color.to_string()),
            rhyme_sound: Some(rhyme_sound.to_string()),
        }
    }
}

/// Split a grouped word into display spans.
///
/// Exception-list words and normalized keys of four characters or fewer
/// are highlighted whole. Longer words split at the first matching entry
/// of the ending table, measured in characters against the original
/// surface; words with no table match fall back to a generic trailing
/// split (two characters for `-er`, otherwise three).
pub fn highlight(
    original: &str,
    normalized: &str,
    rhyme_sound: &str,
    color: &str,
) -> Vec<SyllableSpan> {
    if SHORT_WORD_EXCEPTIONS.contains(&normalized) || normalized.len() <= 4 {
        return vec![SyllableSpan::rhyming(
            original.to_string(),
            color,
            rhyme_sound,
        )];
    }

    let suffix_len = RHYME_ENDINGS
        .iter()
        .find(|ending| normalized.ends_with(*ending))
        .map_or_else(
            || {
                if normalized.ends_with("er") {
                    2
                } else {
                    3
                }
            },
            |ending| ending.len(),
        );

    split_at_tail(original, suffix_len, color, rhyme_sound)
}

/// Split the surface into prefix + trailing `suffix_len` characters.
///
/// Falls back to a single whole-word rhyming span when the split would
/// leave an empty prefix.
fn split_at_tail(
    original: &str,
    suffix_len: usize,
    color: &str,
    rhyme_sound: &str,
) -> Vec<SyllableSpan> {
    let chars: Vec<char> = original.chars().collect();
    if chars.len() <= suffix_len {
        return vec![SyllableSpan::rhyming(
            original.to_string(),
            color,
            rhyme_sound,
        )];
    }

    let split = chars.len() - suffix_len;
    let prefix: String = chars[..split].iter().collect();
    let suffix: String = chars[split..].iter().collect();
    vec![
        SyllableSpan::prefix(prefix),
        SyllableSpan::rhyming(suffix, color, rhyme_sound),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOR: &str = "#C0392B";
    const SOUND: &str = "IH1 P IH0 NG";

    fn texts(spans: &[SyllableSpan]) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn ipping_words_split_before_the_cluster() {
        let spans = highlight("tripping", "tripping", SOUND, COLOR);
        assert_eq!(texts(&spans), vec!["tr", "ipping"]);
        assert!(!spans[0].is_rhyming);
        assert!(spans[1].is_rhyming);
        assert_eq!(spans[1].color.as_deref(), Some(COLOR));
        assert_eq!(spans[1].rhyme_sound.as_deref(), Some(SOUND));

        let spans = highlight("dripping", "dripping", SOUND, COLOR);
        assert_eq!(texts(&spans), vec!["dr", "ipping"]);
    }

    #[test]
    fn specific_ending_wins_over_generic() {
        // "inder" must fire before "er" or the generic split.
        let spans = highlight("grinder", "grinder", "AY1 N D ER0", COLOR);
        assert_eq!(texts(&spans), vec!["gr", "inder"]);
    }

    #[test]
    fn short_words_highlight_whole() {
        let spans = highlight("best", "best", "EH1 S T", COLOR);
        assert_eq!(texts(&spans), vec!["best"]);
        assert!(spans[0].is_rhyming);
    }

    #[test]
    fn exception_words_highlight_whole() {
        let spans = highlight("through", "through", "UW1", COLOR);
        assert_eq!(texts(&spans), vec!["through"]);
        assert!(spans[0].is_rhyming);
    }

    #[test]
    fn generic_split_takes_trailing_three() {
        // No table ending matches "cobalt"; generic split takes 3.
        let spans = highlight("cobalt", "cobalt", "AO1 L T", COLOR);
        assert_eq!(texts(&spans), vec!["cob", "alt"]);
    }

    #[test]
    fn prefix_spans_carry_no_color() {
        let spans = highlight("stripping", "stripping", SOUND, COLOR);
        assert_eq!(spans[0].color, None);
        assert_eq!(spans[0].rhyme_sound, None);
    }

    #[test]
    fn spans_reconstruct_the_surface_exactly() {
        for (original, normalized) in [
            ("Tripping", "tripping"),
            ("grinder,", "grinder"),
            ("magnificent", "magnificent"),
            ("soft", "soft"),
            ("president", "president"),
        ] {
            let spans = highlight(original, normalized, SOUND, COLOR);
            let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
            assert_eq!(joined, original);
            assert!(spans.last().is_some_and(|s| s.is_rhyming));
        }
    }

    #[test]
    fn split_length_applies_to_the_surface_not_the_key() {
        // Trailing punctuation lands inside the highlighted span.
        let spans = highlight("grinder,", "grinder", "AY1 N D ER0", COLOR);
        assert_eq!(texts(&spans), vec!["gri", "nder,"]);
    }

    #[test]
    fn casing_is_preserved_in_spans() {
        let spans = highlight("Tripping", "tripping", SOUND, COLOR);
        assert_eq!(texts(&spans), vec!["Tr", "ipping"]);
    }
}
