#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Base path of the log files (directory and name prefix)
    #[clap(short, long, env = "HLOG_FILE", default_value = "logs/logger-rotate")]
    pub file: std::path::PathBuf,

    /// Threshold: VERBOSE, DEBUG, INFO, WARN, ERROR, FATAL or SILENT
    #[clap(long, env = "HLOG_LEVEL", default_value = "INFO")]
    pub level: String,

    /// Rotate files at this size, e.g. 16M or 512KB
    #[clap(long, env = "HLOG_MAX_FILE_SIZE", default_value = "16M")]
    pub max_file_size: String,

    /// Delete files older than this many days
    #[clap(long, env = "HLOG_REMAIN_DAYS", default_value_t = 1)]
    pub remain_days: u32,

    /// Sync every record to disk
    #[clap(long, env = "HLOG_FSYNC")]
    pub fsync: bool,

    /// Number of records to write; 0 writes until interrupted.
    #[clap(short = 'n', long, default_value_t = 1000)]
    pub count: u64,

    /// Delay between records in milliseconds.
    #[clap(long, default_value_t = 0)]
    pub interval: u64,
}

impl Args {
    pub fn file(&self) -> &std::path::Path {
        &self.file
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn max_file_size(&self) -> &str {
        &self.max_file_size
    }

    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.interval)
    }
}
