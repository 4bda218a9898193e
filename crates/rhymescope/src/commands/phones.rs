//! Phones command — phonetic lookup for one or more words.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use rhymescope_core::{Config, PhoneticDictionary, normalize_word};

use super::open_dictionary;

/// Arguments for the `phones` subcommand.
#[derive(Args, Debug)]
pub struct PhonesArgs {
    /// Words to look up.
    #[arg(required = true)]
    pub words: Vec<String>,

    /// CMU-format dictionary file (overrides config).
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct PhonesReport {
    word: String,
    normalized: String,
    in_vocabulary: bool,
    transcriptions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rhyming_suffix: Option<String>,
    exact_rhymes: Vec<String>,
}

impl PhonesReport {
    fn look_up(word: &str, dict: &dyn PhoneticDictionary) -> Self {
        let normalized = normalize_word(word);
        let transcriptions = dict.phonemes_for(&normalized);
        let rhyming_suffix = transcriptions
            .first()
            .map(|t| dict.rhyming_suffix(t).join(" "));
        let mut exact_rhymes: Vec<String> = dict.exact_rhymes_of(&normalized).into_iter().collect();
        exact_rhymes.sort();

        Self {
            word: word.to_string(),
            normalized,
            in_vocabulary: !transcriptions.is_empty(),
            transcriptions: transcriptions.iter().map(|t| t.join(" ")).collect(),
            rhyming_suffix,
            exact_rhymes,
        }
    }
}

/// Look up transcriptions and rhyming suffixes for the given words.
#[instrument(name = "cmd_phones", skip_all, fields(words = args.words.len()))]
pub fn cmd_phones(args: PhonesArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(words = ?args.words, "executing phones command");

    let dict_path = args.dictionary.as_deref().or(config.dictionary.as_deref());
    let dict = open_dictionary(dict_path)?;

    let reports: Vec<PhonesReport> = args
        .words
        .iter()
        .map(|word| PhonesReport::look_up(word, dict.as_ref()))
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!("{}", report.word.bold());
        if report.normalized != report.word {
            println!("  {} {}", "Normalized:".cyan(), report.normalized);
        }
        if !report.in_vocabulary {
            println!("  {}", "not in dictionary".yellow());
            continue;
        }
        for transcription in &report.transcriptions {
            println!("  {} {}", "Phones:".cyan(), transcription);
        }
        if let Some(ref suffix) = report.rhyming_suffix {
            println!("  {} {}", "Rhyme sound:".cyan(), suffix);
        }
        if !report.exact_rhymes.is_empty() {
            println!(
                "  {} {}",
                "Exact rhymes:".cyan(),
                report.exact_rhymes.join(", "),
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhymescope_core::phonetics::builtin::BuiltinDictionary;

    #[test]
    fn lookup_normalizes_and_finds_rhymes() {
        let report = PhonesReport::look_up("Tripping,", &BuiltinDictionary);
        assert_eq!(report.normalized, "tripping");
        assert!(report.in_vocabulary);
        assert_eq!(report.rhyming_suffix.as_deref(), Some("IH1 P IH0 NG"));
        assert!(report.exact_rhymes.contains(&"dripping".to_string()));
    }

    #[test]
    fn unknown_word_is_not_an_error() {
        let args = PhonesArgs {
            words: vec!["zzyzzx".to_string(), "time".to_string()],
            dictionary: None,
        };
        assert!(cmd_phones(args, true, &Config::default()).is_ok());
    }
}
