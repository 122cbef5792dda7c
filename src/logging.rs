//! Logging initialization for signup-wizard.
//!
//! The interactive wizard owns the terminal, so it logs to
//! `<paths.logs>/signup-wizard-{datetime}.log`. Subcommands log to stderr.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Installed subscriber state; keep it alive until the program is done logging
pub struct LoggingHandle {
    /// Flushes the non-blocking file writer when dropped
    guard: Option<WorkerGuard>,
    log_file_path: Option<PathBuf>,
}

impl LoggingHandle {
    /// Flush and close the session log.
    ///
    /// Returns the log path only when something was written to it.
    pub fn finish(self) -> Option<PathBuf> {
        let LoggingHandle {
            guard,
            log_file_path,
        } = self;
        drop(guard);
        log_file_path.filter(|path| has_content(path))
    }
}

/// Filter directive for the subscriber.
///
/// `--debug` wins over everything, then `RUST_LOG`, then `logging.level`.
pub fn filter_directive(config: &Config, debug_override: bool, rust_log: Option<String>) -> String {
    if debug_override {
        return "debug".to_string();
    }
    rust_log
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| config.logging.level.clone())
}

/// Whether this run writes to a session log file instead of stderr
pub fn logs_to_file(config: &Config, is_tui_mode: bool) -> bool {
    is_tui_mode && config.logging.to_file
}

/// Install the global subscriber for this run
pub fn init_logging(
    config: &Config,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let directive = filter_directive(config, debug_override, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter '{directive}'"))?;

    if !logs_to_file(config, is_tui_mode) {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();

        return Ok(LoggingHandle {
            guard: None,
            log_file_path: None,
        });
    }

    let logs_dir = config.logs_path();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let file_name = log_file_name(chrono::Utc::now());
    let log_file_path = logs_dir.join(&file_name);
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&logs_dir, &file_name));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    Ok(LoggingHandle {
        guard: Some(guard),
        log_file_path: Some(log_file_path),
    })
}

/// Session log file name with an ISO8601 basic timestamp
pub fn log_file_name(now: chrono::DateTime<chrono::Utc>) -> String {
    format!("signup-wizard-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

/// Whether a session log was actually written to
pub fn has_content(path: &Path) -> bool {
    path.metadata().map(|m| m.len() > 0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn config_with_level(level: &str) -> Config {
        let mut config = Config::default();
        config.logging.level = level.to_string();
        config
    }

    // ─── Filter Precedence ──────────────────────────────────────────────────

    #[test]
    fn test_debug_flag_beats_rust_log() {
        let config = config_with_level("info");
        let directive = filter_directive(&config, true, Some("warn".to_string()));
        assert_eq!(directive, "debug");
        assert!(EnvFilter::try_new(&directive).is_ok());
    }

    #[test]
    fn test_rust_log_beats_config_level() {
        let config = config_with_level("info");
        assert_eq!(
            filter_directive(&config, false, Some("signup_wizard=trace".to_string())),
            "signup_wizard=trace"
        );
    }

    #[test]
    fn test_config_level_is_the_fallback() {
        let config = config_with_level("warn");
        assert_eq!(filter_directive(&config, false, None), "warn");
        assert_eq!(filter_directive(&config, false, Some("  ".to_string())), "warn");
    }

    // ─── Targets & Files ────────────────────────────────────────────────────

    #[test]
    fn test_only_tui_mode_logs_to_file() {
        let mut config = Config::default();
        assert!(logs_to_file(&config, true));
        assert!(!logs_to_file(&config, false));

        config.logging.to_file = false;
        assert!(!logs_to_file(&config, true));
    }

    #[test]
    fn test_log_file_name_format() {
        let now = chrono::Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 5).unwrap();
        assert_eq!(log_file_name(now), "signup-wizard-20261016T093005Z.log");
    }

    #[test]
    fn test_has_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.log");
        assert!(!has_content(&path));

        std::fs::write(&path, "").unwrap();
        assert!(!has_content(&path));

        std::fs::write(&path, "line\n").unwrap();
        assert!(has_content(&path));
    }

    #[test]
    fn test_finish_flushes_guard_before_reporting_path() {
        let temp_dir = TempDir::new().unwrap();
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(temp_dir.path(), "s.log"));
        let path = temp_dir.path().join("s.log");

        {
            use std::io::Write;
            let mut writer = writer;
            writer.write_all(b"started\n").unwrap();
        }

        let handle = LoggingHandle {
            guard: Some(guard),
            log_file_path: Some(path.clone()),
        };
        assert_eq!(handle.finish(), Some(path));
    }

    #[test]
    fn test_finish_skips_empty_or_missing_log() {
        let temp_dir = TempDir::new().unwrap();
        let handle = LoggingHandle {
            guard: None,
            log_file_path: Some(temp_dir.path().join("never-written.log")),
        };
        assert_eq!(handle.finish(), None);

        let stderr_handle = LoggingHandle {
            guard: None,
            log_file_path: None,
        };
        assert_eq!(stderr_handle.finish(), None);
    }
}
