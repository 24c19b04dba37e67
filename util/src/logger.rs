//! # Robot logging
//!
//! All executables log through the `log` facade. [`logger_init`] routes the records to stdout and
//! to the log file of the current [`Session`], one line per record:
//!
//! ```text
//! [    12.3456 INF] Robot mode change: Some(Disabled) -> Autonomous
//! [    12.3556 DBG] robot_lib::auto::actions::drive: DriveToDistanceAction: ...
//! ```
//!
//! The number is robot time, the seconds since the session epoch, so log lines can be matched
//! against pose history timestamps. Debug and trace lines also name the module they came from.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use colored::{ColoredString, Colorize};
use log::{info, Level};
use thiserror::Error;

// Internal imports
use crate::session::{self, Session};

// Re-exports
pub use log::LevelFilter;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors associated with initialising the logger.
#[derive(Debug, Error)]
pub enum LoggerInitError {
    #[error("Expected a log level of at least `INFO`, found `{0}`")]
    InvalidMinLogLevel(LevelFilter),

    #[error("Error initialising the log file: {0}")]
    LogFileInitError(std::io::Error),

    #[error("An error occured while setting up the logger: {0}")]
    FernInitError(log::SetLoggerError),
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Start logging for this execution.
///
/// `min_level` must let `info!` records through, mode changes and routine progress are logged at
/// that level. Only one logger can be installed per process, a second call returns
/// [`LoggerInitError::FernInitError`].
pub fn logger_init(min_level: LevelFilter, session: &Session) -> Result<(), LoggerInitError> {
    check_min_level(min_level)?;

    let log_file = fern::log_file(&session.log_file_path)
        .map_err(LoggerInitError::LogFileInitError)?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            let stamp = format_stamp(session::get_elapsed_seconds(), record.level());

            if show_target(record.level()) {
                out.finish(format_args!("{} {}: {}", stamp, record.target(), message))
            } else {
                out.finish(format_args!("{} {}", stamp, message))
            }
        })
        .level(min_level)
        .chain(std::io::stdout())
        .chain(log_file)
        .apply()
        .map_err(LoggerInitError::FernInitError)?;

    info!("Logging to {:?} at {:?}", session.log_file_path, min_level);
    info!("Robot time is measured from {}", session::get_epoch());

    Ok(())
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn check_min_level(min_level: LevelFilter) -> Result<(), LoggerInitError> {
    if min_level < Level::Info {
        Err(LoggerInitError::InvalidMinLogLevel(min_level))
    } else {
        Ok(())
    }
}

/// Targets are only worth the width when chasing down debug output.
fn show_target(level: Level) -> bool {
    level > Level::Info
}

/// The `[time LVL]` prefix of a log line.
fn format_stamp(robot_time_s: f64, level: Level) -> String {
    format!("[{:11.4} {}]", robot_time_s, level_tag(level))
}

fn level_tag(level: Level) -> ColoredString {
    match level {
        Level::Trace => "TRC".dimmed().italic(),
        Level::Debug => "DBG".dimmed(),
        Level::Info => "INF".normal(),
        Level::Warn => "WRN".yellow(),
        Level::Error => "ERR".red().bold(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_check_min_level() {
        assert!(check_min_level(LevelFilter::Trace).is_ok());
        assert!(check_min_level(LevelFilter::Info).is_ok());
        assert!(matches!(
            check_min_level(LevelFilter::Warn),
            Err(LoggerInitError::InvalidMinLogLevel(LevelFilter::Warn))
        ));
        assert!(check_min_level(LevelFilter::Off).is_err());
    }

    #[test]
    fn test_format_stamp() {
        colored::control::set_override(false);

        assert_eq!(format_stamp(12.34567, Level::Info), "[    12.3457 INF]");
        assert_eq!(format_stamp(0.0, Level::Warn), "[     0.0000 WRN]");
    }

    #[test]
    fn test_show_target() {
        assert!(show_target(Level::Debug));
        assert!(show_target(Level::Trace));
        assert!(!show_target(Level::Info));
        assert!(!show_target(Level::Error));
    }
}
