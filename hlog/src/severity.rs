/// Severity levels and the threshold gate
use std::fmt;
use strum_macros::{EnumString, VariantNames};

use crate::error::Error;

/// Ordered log severity, from the most permissive to the one that silences
/// everything.
///
/// `Silent` is only meaningful as a threshold: a logger set to `Silent`
/// emits nothing, not even `Fatal` records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, EnumString, VariantNames,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[repr(u8)]
pub enum Severity {
    Verbose = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
    Silent = 6,
}

impl Severity {
    /// Five column tag written into every record.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Verbose => "VERB ",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO ",
            Severity::Warn => "WARN ",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Silent => "     ",
        }
    }

    /// Terminal color sequence used when colored output is enabled.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Verbose | Severity::Silent => "",
            Severity::Debug => "\x1b[37m",
            Severity::Info => "\x1b[32m",
            Severity::Warn => "\x1b[33m",
            Severity::Error => "\x1b[31m",
            Severity::Fatal => "\x1b[41;37m",
        }
    }

    /// Parse a level name case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        name.trim()
            .parse()
            .map_err(|_| Error::InvalidLevel(name.to_string()))
    }

    pub(crate) fn from_u8_lossy(value: u8) -> Self {
        Severity::try_from(i64::from(value)).unwrap_or(Severity::Silent)
    }
}

/// Decide whether a record at `level` passes a logger set to `threshold`.
pub fn should_emit(threshold: Severity, level: Severity) -> bool {
    threshold != Severity::Silent && level != Severity::Silent && level >= threshold
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Verbose => write!(f, "VERBOSE"),
            Severity::Debug => write!(f, "DEBUG"),
            Severity::Info => write!(f, "INFO"),
            Severity::Warn => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
            Severity::Silent => write!(f, "SILENT"),
        }
    }
}

impl TryFrom<i64> for Severity {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, String> {
        match value {
            0 => Ok(Severity::Verbose),
            1 => Ok(Severity::Debug),
            2 => Ok(Severity::Info),
            3 => Ok(Severity::Warn),
            4 => Ok(Severity::Error),
            5 => Ok(Severity::Fatal),
            6 => Ok(Severity::Silent),
            _ => Err(format!("Invalid log severity: {value}")),
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Severity::Verbose,
            log::Level::Debug => Severity::Debug,
            log::Level::Info => Severity::Info,
            log::Level::Warn => Severity::Warn,
            log::Level::Error => Severity::Error,
        }
    }
}

impl From<Severity> for log::LevelFilter {
    fn from(threshold: Severity) -> Self {
        match threshold {
            Severity::Verbose => log::LevelFilter::Trace,
            Severity::Debug => log::LevelFilter::Debug,
            Severity::Info => log::LevelFilter::Info,
            Severity::Warn => log::LevelFilter::Warn,
            // log has no fatal level, errors are the closest it can get
            Severity::Error | Severity::Fatal => log::LevelFilter::Error,
            Severity::Silent => log::LevelFilter::Off,
        }
    }
}
