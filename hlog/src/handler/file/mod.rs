//! Size and day rotated log files with a retention window.
//!
//! Every record goes through the same steps, all on the calling thread:
//!
//! 1. **Day check.** With no file open, or when the record's date differs
//!    from the day of the open file, the sink switches to today's file. It
//!    resumes the highest sequence already on disk for today, appending to
//!    it, or starts at sequence 0.
//! 2. **Size check.** When the open file is not empty and the record would
//!    push it past `max_file_size`, the sink moves on to the next sequence.
//!    The check happens before the write, so a record is never split over
//!    two files. Once a day reaches sequence 9999 its last file keeps
//!    growing.
//! 3. **Retention.** After every successful switch, files dated before
//!    `today - remain_days` are deleted. A file that can not be removed is
//!    skipped and reported once, until a later pass no longer fails on it.
//! 4. **Write.** The record is appended and, with fsync enabled, synced to
//!    disk before returning.
//!
//! When the next file can not be opened the sink keeps appending to the one
//! it has (temporarily exceeding the size limit rather than dropping
//! records), reports the failure once on stderr and tries again on the next
//! record.

mod naming;
mod retention;

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::FileConfig;
use crate::error::{Error, Result};
use crate::handler::{report, LogHandler};
use crate::severity::Severity;

use naming::{FileNaming, MAX_SEQ};

/// The file handler: owns the open log file and its rotation state.
pub struct FileSink {
    config: FileConfig,
    naming: FileNaming,
    clock: Arc<dyn Clock>,
    file: Option<File>,
    current_path: Option<PathBuf>,
    current_size: u64,
    current_day: Option<NaiveDate>,
    current_seq: u32,
    open_failure_reported: bool,
    reported_prune_failures: HashSet<PathBuf>,
}

impl FileSink {
    /// Create a sink; no file is touched until the first record.
    pub fn new(config: FileConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: FileConfig, clock: Arc<dyn Clock>) -> Self {
        let naming = FileNaming::new(&config.base_path);
        Self {
            config,
            naming,
            clock,
            file: None,
            current_path: None,
            current_size: 0,
            current_day: None,
            current_seq: 0,
            open_failure_reported: false,
            reported_prune_failures: HashSet::new(),
        }
    }

    pub fn config(&self) -> &FileConfig {
        &self.config
    }

    /// Path of the file records currently go to; changes at every rotation.
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    pub fn current_day(&self) -> Option<NaiveDate> {
        self.current_day
    }

    /// Point the sink at a new base path. The open file is closed and the
    /// next record opens one under the new name.
    pub fn set_base_path(&mut self, base_path: impl Into<PathBuf>) {
        self.config.base_path = base_path.into();
        self.naming = FileNaming::new(&self.config.base_path);
        self.close();
    }

    pub fn set_max_file_size(&mut self, max_file_size: u64) {
        self.config.max_file_size = max_file_size;
    }

    pub fn set_remain_days(&mut self, remain_days: u32) {
        self.config.remain_days = remain_days;
    }

    pub fn set_fsync(&mut self, fsync: bool) {
        self.config.fsync = fsync;
    }

    /// Append one record, rotating and pruning first when needed.
    pub fn write_record(&mut self, data: &[u8]) -> Result<()> {
        self.write_record_at(self.clock.now(), data)
    }

    /// Like [`FileSink::write_record`] for a record stamped `now`, which
    /// picks the day's file.
    pub fn write_record_at(&mut self, now: NaiveDateTime, data: &[u8]) -> Result<()> {
        let today = now.date();
        let len = data.len() as u64;

        if self.file.is_none() || self.current_day != Some(today) {
            let seq = self.naming.latest_seq(today).unwrap_or(0);
            self.switch_to(today, seq);
        }

        // Only size-rotate within today's sequence; a failed day switch keeps
        // writing to the old day's file until a retry succeeds.
        if self.current_day == Some(today)
            && self.current_seq < MAX_SEQ
            && self.current_size > 0
            && self.current_size.saturating_add(len) > self.config.max_file_size
        {
            self.switch_to(today, self.current_seq.saturating_add(1));
        }

        let file = self.file.as_mut().ok_or(Error::NoActiveFile)?;
        file.write_all(data)?;
        self.current_size = self.current_size.saturating_add(len);
        if self.config.fsync {
            file.sync_all()?;
        }
        Ok(())
    }

    /// Sync the open file to disk, whatever the fsync setting.
    pub fn sync(&mut self) -> Result<()> {
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
            file.sync_all()?;
        }
        Ok(())
    }

    fn close(&mut self) {
        self.file = None;
        self.current_path = None;
        self.current_size = 0;
        self.current_day = None;
        self.current_seq = 0;
    }

    /// Open `day`/`seq` and make it the current file. On failure the current
    /// file, if any, stays in place.
    fn switch_to(&mut self, day: NaiveDate, seq: u32) {
        let path = self.naming.path(day, seq);
        let (file, size) = match open_append(&path) {
            Ok(opened) => opened,
            Err(e) => {
                if !self.open_failure_reported {
                    report(format_args!(
                        "cannot open log file {}: {e}; retrying on the next record",
                        path.display()
                    ));
                    self.open_failure_reported = true;
                }
                return;
            }
        };

        if self.open_failure_reported {
            report(format_args!("log file {} opened", path.display()));
            self.open_failure_reported = false;
        }

        // Replacing the handle closes the previous file.
        self.file = Some(file);
        self.current_path = Some(path);
        self.current_size = size;
        self.current_day = Some(day);
        self.current_seq = seq;

        self.prune(day);
    }

    fn prune(&mut self, today: NaiveDate) {
        let pruned = retention::prune(&self.naming, today, self.config.remain_days);
        let fresh = self.fresh_prune_failures(&pruned.failed);
        if fresh.is_empty() {
            return;
        }

        let details = fresh
            .iter()
            .map(|(path, e)| format!("{}: {e}", path.display()))
            .collect::<Vec<_>>()
            .join(", ");
        report(format_args!(
            "could not remove {} expired log file(s): {details}",
            fresh.len()
        ));
    }

    /// The failures of this pass not already reported by an earlier one.
    /// Paths that stopped failing are forgotten.
    fn fresh_prune_failures<'a>(
        &mut self,
        failed: &'a [(PathBuf, io::Error)],
    ) -> Vec<&'a (PathBuf, io::Error)> {
        let fresh = failed
            .iter()
            .filter(|(path, _)| !self.reported_prune_failures.contains(path))
            .collect();
        self.reported_prune_failures = failed.iter().map(|(path, _)| path.clone()).collect();
        fresh
    }
}

fn open_append(path: &Path) -> io::Result<(File, u64)> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let size = file.metadata()?.len();
    Ok((file, size))
}

impl LogHandler for FileSink {
    fn write(&mut self, _level: Severity, data: &[u8]) -> Result<()> {
        self.write_record(data)
    }

    fn write_at(&mut self, now: NaiveDateTime, _level: Severity, data: &[u8]) -> Result<()> {
        self.write_record_at(now, data)
    }

    fn fsync(&mut self) -> Result<()> {
        self.sync()
    }
}

impl std::fmt::Debug for FileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSink")
            .field("config", &self.config)
            .field("current_path", &self.current_path)
            .field("current_size", &self.current_size)
            .field("current_day", &self.current_day)
            .field("current_seq", &self.current_seq)
            .finish_non_exhaustive()
    }
}
