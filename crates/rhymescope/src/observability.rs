//! Logging and tracing setup.
//!
//! Console logging goes to stderr so stdout stays clean for command
//! output. File logging is optional and controlled by config or the
//! `RHYMESCOPE_LOG_PATH` / `RHYMESCOPE_LOG_DIR` environment variables.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Where log output should go.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path. Takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's log
    /// directory as a fallback.
    ///
    /// Precedence: `RHYMESCOPE_LOG_PATH`, then `RHYMESCOPE_LOG_DIR`, then
    /// the config value.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("RHYMESCOPE_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("RHYMESCOPE_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the log filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` forces `error`, each
/// `-v` steps the level up from the config default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global tracing subscriber.
///
/// Returns the appender guard when file logging is active; the caller
/// must hold it for the process lifetime or buffered lines are lost.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    if let Some(ref path) = config.log_path {
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr.and(writer))
            .with_ansi(false)
            .init();
        return Ok(Some(guard));
    }

    if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, "rhymescope.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr.and(writer))
            .with_ansi(false)
            .init();
        return Ok(Some(guard));
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        let filter = env_filter(true, 3, "info");
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn verbose_steps_up_from_config() {
        assert_eq!(env_filter(false, 0, "warn").to_string(), "warn");
        assert_eq!(env_filter(false, 1, "warn").to_string(), "debug");
        assert_eq!(env_filter(false, 2, "warn").to_string(), "trace");
    }
}
