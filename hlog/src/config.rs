/// Logger settings and their defaults
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::severity::Severity;

pub const DEFAULT_LOG_FILE: &str = "libhv";
pub const DEFAULT_LOG_LEVEL: Severity = Severity::Info;
pub const DEFAULT_LOG_REMAIN_DAYS: u32 = 1;
pub const DEFAULT_LOG_MAX_BUFSIZE: usize = 1 << 14;
pub const DEFAULT_LOG_MAX_FILESIZE: u64 = 1 << 24;

/// Settings of the file sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    /// Directory and name prefix of the log files; a trailing `.log` is
    /// ignored.
    pub base_path: PathBuf,
    /// A file is rotated before a record would push it past this size.
    pub max_file_size: u64,
    /// Files dated more than this many days before today are deleted.
    pub remain_days: u32,
    /// Synchronize to disk after every record.
    pub fsync: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_LOG_FILE),
            max_file_size: DEFAULT_LOG_MAX_FILESIZE,
            remain_days: DEFAULT_LOG_REMAIN_DAYS,
            fsync: false,
        }
    }
}

/// Everything a [`Logger`](crate::Logger) can be configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level: Severity,
    /// Largest rendered record in bytes; longer records are truncated.
    pub buffer_size: usize,
    pub color: bool,
    pub file: FileConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            buffer_size: DEFAULT_LOG_MAX_BUFSIZE,
            color: false,
            file: FileConfig::default(),
        }
    }
}

impl LoggerConfig {
    /// Set the level from its name, leaving it untouched on error.
    pub fn apply_level_name(&mut self, name: &str) -> Result<()> {
        self.level = Severity::from_name(name)?;
        Ok(())
    }

    /// Set the maximum file size from a string such as `16M` or `512KB`,
    /// leaving it untouched on error.
    pub fn apply_max_file_size_str(&mut self, size: &str) -> Result<()> {
        self.file.max_file_size = parse_size(size)?;
        Ok(())
    }
}

/// Parse a human readable byte size: digits followed by an optional `K`, `M`
/// or `G` (powers of 1024) and an optional `B`, case-insensitive.
pub fn parse_size(input: &str) -> Result<u64> {
    let invalid = || Error::InvalidSize(input.to_string());

    let s = input.trim();
    let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (digits, unit) = s.split_at(split);
    if digits.is_empty() {
        return Err(invalid());
    }
    let value: u64 = digits.parse().map_err(|_| invalid())?;

    let multiplier: u64 = match unit.trim().to_ascii_uppercase().as_str() {
        "" | "B" => 1,
        "K" | "KB" => 1 << 10,
        "M" | "MB" => 1 << 20,
        "G" | "GB" => 1 << 30,
        _ => return Err(invalid()),
    };

    value.checked_mul(multiplier).ok_or_else(invalid)
}
