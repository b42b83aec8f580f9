use chrono::{Days, NaiveDate};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::handler::file::naming::FileNaming;

/// What one pruning pass did.
#[derive(Debug, Default)]
pub(crate) struct PruneReport {
    pub(crate) failed: Vec<(PathBuf, io::Error)>,
}

/// Oldest day that is kept when today is `today`.
pub(crate) fn cutoff(today: NaiveDate, remain_days: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(remain_days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Delete every file of `naming` dated strictly before `today - remain_days`.
///
/// Failures to remove a file are collected and the pass continues with the
/// next one. A file that vanished in the meantime is not a failure. Files of today are never candidates, so the file being written
/// is safe.
pub(crate) fn prune(naming: &FileNaming, today: NaiveDate, remain_days: u32) -> PruneReport {
    let mut report = PruneReport::default();
    let oldest_kept = cutoff(today, remain_days);

    let files = match naming.scan() {
        Ok(files) => files,
        Err(e) => {
            report.failed.push((naming.dir().to_path_buf(), e));
            return report;
        }
    };

    // The scan is sorted, so expired files form a prefix.
    for file in files.into_iter().take_while(|file| file.day < oldest_kept) {
        if let Err(e) = fs::remove_file(&file.path) {
            if e.kind() != io::ErrorKind::NotFound {
                report.failed.push((file.path, e));
            }
        }
    }

    report
}
