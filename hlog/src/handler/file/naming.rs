use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_LOG_FILE;

const EXTENSION: &str = ".log";
const DATE_FORMAT: &str = "%Y%m%d";
const DATE_LEN: usize = 8;
const SEQ_WIDTH: usize = 4;

/// Highest sequence that still fits the fixed width suffix. A day that runs
/// out of sequences keeps appending to this one.
pub(crate) const MAX_SEQ: u32 = 9999;

/// A log file found on disk.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct LogFile {
    pub(crate) day: NaiveDate,
    pub(crate) seq: u32,
    pub(crate) path: PathBuf,
}

/// Maps a base path to the files of each day and sequence:
/// `<dir>/<stem>.<YYYYMMDD>.<NNNN>.log`.
///
/// Sorting the parsed `(day, seq)` pairs gives creation order, which the
/// fixed width date and sequence also give to a plain name sort. Sequences
/// never go past [`MAX_SEQ`], so the width holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileNaming {
    dir: PathBuf,
    stem: String,
}

impl FileNaming {
    pub(crate) fn new(base_path: &Path) -> Self {
        let dir = match base_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let name = base_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = name.strip_suffix(EXTENSION).unwrap_or(&name);
        let stem = if stem.is_empty() {
            DEFAULT_LOG_FILE.to_string()
        } else {
            stem.to_string()
        };

        Self { dir, stem }
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    pub(crate) fn file_name(&self, day: NaiveDate, seq: u32) -> String {
        format!(
            "{}.{}.{seq:0width$}{EXTENSION}",
            self.stem,
            day.format(DATE_FORMAT),
            width = SEQ_WIDTH
        )
    }

    pub(crate) fn path(&self, day: NaiveDate, seq: u32) -> PathBuf {
        self.dir.join(self.file_name(day, seq))
    }

    /// Recover the day and sequence from a file name produced by this
    /// naming; anything else yields `None`.
    pub(crate) fn parse(&self, file_name: &str) -> Option<(NaiveDate, u32)> {
        let rest = file_name
            .strip_prefix(self.stem.as_str())?
            .strip_prefix('.')?
            .strip_suffix(EXTENSION)?;
        let (date, seq) = rest.split_once('.')?;

        if date.len() != DATE_LEN || !date.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if seq.len() != SEQ_WIDTH || !seq.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let day = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
        let seq = seq.parse().ok()?;
        Some((day, seq))
    }

    /// Every file in the directory that belongs to this naming, oldest first.
    pub(crate) fn scan(&self) -> io::Result<Vec<LogFile>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some((day, seq)) = self.parse(name) {
                files.push(LogFile {
                    day,
                    seq,
                    path: entry.path(),
                });
            }
        }
        files.sort();
        Ok(files)
    }

    /// Highest sequence already on disk for `day`.
    pub(crate) fn latest_seq(&self, day: NaiveDate) -> Option<u32> {
        self.scan()
            .ok()?
            .into_iter()
            .filter(|file| file.day == day)
            .map(|file| file.seq)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_bare_name_uses_current_dir() {
        let naming = FileNaming::new(Path::new("libhv"));
        assert_eq!(naming.dir(), Path::new("."));
        assert_eq!(naming.file_name(day(19), 0), "libhv.20261019.0000.log");
    }

    #[test]
    fn test_log_extension_is_stripped() {
        let naming = FileNaming::new(Path::new("logs/server.log"));
        assert_eq!(naming.dir(), Path::new("logs"));
        assert_eq!(
            naming.path(day(3), 12),
            PathBuf::from("logs/server.20261003.0012.log")
        );
    }

    #[test]
    fn test_empty_stem_falls_back_to_default() {
        let naming = FileNaming::new(Path::new("logs/.log"));
        assert_eq!(naming.file_name(day(1), 0), "libhv.20261001.0000.log");
    }

    #[test]
    fn test_parse_roundtrip() {
        let naming = FileNaming::new(Path::new("app"));
        let name = naming.file_name(day(19), 7);
        assert_eq!(naming.parse(&name), Some((day(19), 7)));
    }

    #[test]
    fn test_parse_rejects_foreign_names() {
        let naming = FileNaming::new(Path::new("app"));
        for name in [
            "app.log",
            "other.20261019.0000.log",
            "app.2026101.0000.log",
            "app.20261019.log",
            "app.20261019.00x0.log",
            "app.20261332.0000.log",
            "app.20261019.0000.log.bak",
            "appx.20261019.0000.log",
            "app.20261019.10000.log",
            "app.20261019.000.log",
        ] {
            assert_eq!(naming.parse(name), None, "{name}");
        }
    }

    #[test]
    fn test_names_sort_chronologically() {
        let naming = FileNaming::new(Path::new("app"));
        let mut names = vec![
            naming.file_name(day(20), 0),
            naming.file_name(day(19), 10),
            naming.file_name(day(19), 2),
        ];
        names.sort();
        assert_eq!(
            names,
            vec![
                "app.20261019.0002.log",
                "app.20261019.0010.log",
                "app.20261020.0000.log",
            ]
        );
    }

    #[test]
    fn test_last_sequence_keeps_the_width() {
        let naming = FileNaming::new(Path::new("app"));
        let name = naming.file_name(day(19), MAX_SEQ);
        assert_eq!(name, "app.20261019.9999.log");
        assert_eq!(naming.parse(&name), Some((day(19), MAX_SEQ)));
    }

    #[test]
    fn test_scan_and_latest_seq() {
        let dir = tempdir().unwrap();
        let naming = FileNaming::new(&dir.path().join("app"));
        for (d, seq) in [(19, 0), (20, 1), (20, 0), (18, 4)] {
            File::create(naming.path(day(d), seq)).unwrap();
        }
        File::create(dir.path().join("unrelated.txt")).unwrap();

        let found: Vec<_> = naming
            .scan()
            .unwrap()
            .into_iter()
            .map(|f| (f.day, f.seq))
            .collect();
        assert_eq!(
            found,
            vec![(day(18), 4), (day(19), 0), (day(20), 0), (day(20), 1)]
        );
        assert_eq!(naming.latest_seq(day(20)), Some(1));
        assert_eq!(naming.latest_seq(day(21)), None);
    }

    #[test]
    fn test_latest_seq_missing_dir() {
        let dir = tempdir().unwrap();
        let naming = FileNaming::new(&dir.path().join("missing").join("app"));
        assert_eq!(naming.latest_seq(day(1)), None);
    }
}
