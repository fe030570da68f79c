//! Logging setup and the optional outcome record.
//!
//! The CLI builds a [`LogConfig`] once at startup and hands it to [`init`];
//! nothing below the CLI reads environment variables to decide verbosity.

use std::io::Write;

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::config::Settings;
use crate::eval::Outcome;

/// Variables that switch on debug output when set to `1`, `true` or `on`.
pub const DEBUG_ENV_VARS: &[&str] = &["HOOKGUARD_DEBUG", "DEBUG_MODE", "DEBUG"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub record_outcomes: bool,
}

impl LogConfig {
    /// Resolve the level from the `--verbose` flag, the debug variables and
    /// the configured `log_level`, in that order.
    pub fn resolve(verbose: bool, debug_env: bool, settings: &Settings) -> Self {
        let level = if verbose || debug_env {
            LevelFilter::Debug
        } else {
            parse_level(&settings.log_level)
        };
        Self {
            level,
            record_outcomes: settings.record_outcomes,
        }
    }
}

/// True when any debug variable in `lookup` holds a truthy value.
pub fn debug_requested(lookup: impl Fn(&str) -> Option<String>) -> bool {
    DEBUG_ENV_VARS.iter().any(|&name| {
        lookup(name)
            .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "on"))
    })
}

fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. A second call is ignored.
pub fn init(config: &LogConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .build();
    let _ = TermLogger::init(
        config.level,
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Append an outcome record to ~/.local/share/hookguard/outcomes.log.
/// Best-effort: failures are silently ignored (recording must never block the hook).
pub fn record_outcome(config: &LogConfig, hook: &str, subject: &str, outcome: &Outcome) {
    if !config.record_outcomes {
        return;
    }
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let log_dir = std::path::Path::new(&home).join(".local/share/hookguard");
    let _ = std::fs::create_dir_all(&log_dir);

    let Ok(mut file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("outcomes.log"))
    else {
        return;
    };
    let _ = writeln!(file, "{}", record_line(hook, subject, outcome, &timestamp_now()));
}

/// One tab-separated record: timestamp, hook, status, subject, message.
fn record_line(hook: &str, subject: &str, outcome: &Outcome, ts: &str) -> String {
    let subject: String = subject.replace(['\n', '\t'], " ").chars().take(200).collect();
    let message = outcome.message.trim_end().replace('\n', "; ").replace('\t', " ");
    format!(
        "{ts}\t{hook}\t{status}\t{subject}\t{message}",
        status = outcome.status.as_str()
    )
}

/// UTC timestamp in RFC 3339 form, second precision.
fn timestamp_now() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format_timestamp(secs)
}

fn format_timestamp(secs: u64) -> String {
    let (year, month, day) = civil_from_days(secs / 86400);
    let rem = secs % 86400;
    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}Z",
        rem / 3600,
        (rem % 3600) / 60,
        rem % 60
    )
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let z = days + 719468;
    let era = z / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(level: &str) -> Settings {
        Settings {
            record_outcomes: false,
            log_level: level.into(),
        }
    }

    #[test]
    fn verbose_wins() {
        let c = LogConfig::resolve(true, false, &settings("error"));
        assert_eq!(c.level, LevelFilter::Debug);
    }

    #[test]
    fn env_debug_wins() {
        let c = LogConfig::resolve(false, true, &settings("warn"));
        assert_eq!(c.level, LevelFilter::Debug);
    }

    #[test]
    fn configured_level() {
        assert_eq!(LogConfig::resolve(false, false, &settings("info")).level, LevelFilter::Info);
        assert_eq!(LogConfig::resolve(false, false, &settings("bogus")).level, LevelFilter::Warn);
        assert_eq!(LogConfig::resolve(false, false, &settings("")).level, LevelFilter::Warn);
    }

    #[test]
    fn debug_vars() {
        assert!(debug_requested(|k| (k == "DEBUG").then(|| "1".into())));
        assert!(debug_requested(|k| (k == "HOOKGUARD_DEBUG").then(|| "True".into())));
        assert!(debug_requested(|k| (k == "DEBUG_MODE").then(|| "on".into())));
        assert!(!debug_requested(|k| (k == "DEBUG").then(|| "0".into())));
        assert!(!debug_requested(|_| None));
    }

    #[test]
    fn timestamps() {
        assert_eq!(format_timestamp(0), "1970-01-01T00:00:00Z");
        assert_eq!(format_timestamp(951_782_400), "2000-02-29T00:00:00Z");
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn record_is_single_line() {
        let out = Outcome::failure(" - Can not be WIP\n\n:: Permitted syntaxes:\n");
        let line = record_line("validate-branchname", "wip", &out, "T");
        assert_eq!(line.lines().count(), 1);
        assert!(line.starts_with("T\tvalidate-branchname\tfailure\twip\t"));
    }
}
