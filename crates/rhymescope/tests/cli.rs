//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

fn write_lyrics(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn log_level_flag_accepted() {
    cmd()
        .args(["--log-level", "debug", "info"])
        .assert()
        .success();
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_reports_rhyme_group() {
    let dir = tempfile::tempdir().unwrap();
    let lyrics = write_lyrics(&dir, "verse.txt", "the night was bright\nwalking toward the light");

    cmd()
        .args(["analyze", lyrics.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score:"))
        .stdout(predicate::str::contains("Group A:"));
}

#[test]
fn analyze_json_has_report_shape() {
    let dir = tempfile::tempdir().unwrap();
    let lyrics = write_lyrics(&dir, "verse.txt", "shine bright in the light tonight");

    let output = cmd()
        .args(["--json", "analyze", lyrics.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("analyze --json should output valid JSON");
    assert!(json["lines"].is_array());
    assert!(json["rhyme_groups"].is_object());
    assert!(json["quality"]["overall_score"].is_number());
}

#[test]
fn analyze_no_rhymes_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let lyrics = write_lyrics(&dir, "verse.txt", "orange purple");

    cmd()
        .args(["analyze", lyrics.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("no rhyme groups found"));
}

#[test]
fn analyze_sensitivity_out_of_range_fails() {
    let dir = tempfile::tempdir().unwrap();
    let lyrics = write_lyrics(&dir, "verse.txt", "day way");

    cmd()
        .args(["analyze", lyrics.to_str().unwrap(), "--sensitivity", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("150"));
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/verse.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn analyze_respects_input_limit_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_lyrics(&dir, "rhymescope.toml", "max_input_bytes = 8\n");
    let lyrics = write_lyrics(&dir, "verse.txt", "day way stay play");

    cmd()
        .args([
            "--config",
            config.to_str().unwrap(),
            "analyze",
            lyrics.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn analyze_with_custom_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let dict = write_lyrics(
        &dir,
        "tiny.dict",
        "ZIG  Z IH1 G\nRIG  R IH1 G\nBIG  B IH1 G\n",
    );
    let lyrics = write_lyrics(&dir, "verse.txt", "zig rig");

    cmd()
        .args([
            "--json",
            "analyze",
            lyrics.to_str().unwrap(),
            "--dictionary",
            dict.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rhyme_sound\": \"IH1 G\""));
}

// =============================================================================
// Phones Command
// =============================================================================

#[test]
fn phones_known_word_shows_transcription() {
    cmd()
        .args(["phones", "time"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phones:"))
        .stdout(predicate::str::contains("Rhyme sound:"));
}

#[test]
fn phones_unknown_word_reports_out_of_vocabulary() {
    cmd()
        .args(["phones", "zzyzzx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not in dictionary"));
}

#[test]
fn phones_json_reports_vocabulary_flag() {
    let output = cmd()
        .args(["--json", "phones", "time"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("phones --json should output valid JSON");
    assert_eq!(json[0]["in_vocabulary"], true);
    assert!(json[0]["transcriptions"].is_array());
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
