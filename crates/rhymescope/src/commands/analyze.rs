//! Analyze command — rhyme detection and scoring.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use rhymescope_core::{Config, DEFAULT_SENSITIVITY, analyze};

use super::{open_dictionary, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Rhyme sensitivity (0 = strict, 100 = loose).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub sensitivity: Option<u8>,

    /// CMU-format dictionary file (overrides config).
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<Utf8PathBuf>,
}

/// Run rhyme analysis on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let sensitivity = args
        .sensitivity
        .or(config.sensitivity)
        .unwrap_or(DEFAULT_SENSITIVITY)
        .min(100);
    debug!(file = %args.file, sensitivity, "executing analyze command");

    let content = read_input_file(&args.file, max_input)?;
    let dict_path = args.dictionary.as_deref().or(config.dictionary.as_deref());
    let dict = open_dictionary(dict_path)?;

    let report = analyze(&content, sensitivity, dict.as_ref());

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Text output — summary, then one block per group
    println!("{}", args.file.bold());

    let stats = &report.quality.stats;
    println!(
        "\n  {} {:.1}/100 (sensitivity {})",
        "Score:".cyan(),
        report.quality.overall_score,
        report.sensitivity,
    );
    println!(
        "  {} {} of {} words rhyme ({:.0}%), {} groups",
        "Rhymes:".cyan(),
        stats.rhyming_words,
        stats.total_words,
        stats.density_percent,
        stats.group_count,
    );
    if stats.perfect_rhymes + stats.slant_rhymes > 0 {
        println!(
            "  {} {} perfect, {} slant",
            "Quality:".cyan(),
            stats.perfect_rhymes,
            stats.slant_rhymes,
        );
    }

    if report.groups.is_empty() {
        println!("\n  {}", "no rhyme groups found".yellow());
        return Ok(());
    }

    for group in &report.groups {
        let members: Vec<&str> = group
            .members
            .iter()
            .map(|m| m.original.as_str())
            .collect();
        println!(
            "\n  {} [{}] {}",
            format!("Group {}:", group.label).bold(),
            group.rhyme_sound.dimmed(),
            members.join(", "),
        );
    }

    Ok(())
}
