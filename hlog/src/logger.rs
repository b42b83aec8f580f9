//! The logger: level gate, record rendering and dispatch to the active
//! handler.
//!
//! # Exclusive access
//!
//! Each logger renders into a single reusable buffer, so rendering and
//! handing the bytes to the handler happen under one mutex. The same mutex
//! guards the handler and all file sink state. Records therefore reach the
//! sink whole and in the order callers acquired the lock; a slow disk stalls
//! every thread logging through the same instance.
//!
//! The threshold lives outside the mutex. Rejected records return before the
//! lock is touched.

use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

use crate::clock::{Clock, SystemClock};
use crate::config::{FileConfig, LoggerConfig};
use crate::error::{Error, Result};
use crate::handler::{FileSink, Handler, LogHandler};
use crate::record::{self, CallSite, MIN_BUFSIZE};
use crate::severity::{should_emit, Severity};
use crate::util::LockOrRecover;

/// What a print call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Below the threshold; nothing was rendered or written.
    Filtered,
    /// The handler accepted `bytes` bytes. `truncated` is set when the
    /// message had to be cut to fit the buffer.
    Written { bytes: usize, truncated: bool },
}

impl Delivery {
    pub fn bytes(&self) -> Option<usize> {
        match self {
            Delivery::Filtered => None,
            Delivery::Written { bytes, .. } => Some(*bytes),
        }
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self, Delivery::Filtered)
    }

    /// Bytes written, or `-1` when the record was filtered or failed.
    pub fn return_code(result: &Result<Delivery>) -> isize {
        match result {
            Ok(Delivery::Written { bytes, .. }) => isize::try_from(*bytes).unwrap_or(isize::MAX),
            Ok(Delivery::Filtered) | Err(_) => -1,
        }
    }
}

struct Inner {
    handler: Handler,
    buf: Vec<u8>,
    capacity: usize,
    color: bool,
    file: FileConfig,
}

/// A thread-safe logger writing to one handler at a time.
pub struct Logger {
    level: AtomicU8,
    clock: Arc<dyn Clock>,
    inner: Mutex<Inner>,
}

impl Logger {
    /// A logger with default settings writing to `libhv.<date>.<seq>.log` in
    /// the working directory. No file is opened until the first record.
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    pub fn with_config(config: LoggerConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Like [`Logger::with_config`], reading time from `clock` for both the
    /// record timestamps and file rotation.
    pub fn with_clock(config: LoggerConfig, clock: Arc<dyn Clock>) -> Self {
        let capacity = config.buffer_size.max(MIN_BUFSIZE);
        let handler = Handler::File(FileSink::with_clock(
            config.file.clone(),
            Arc::clone(&clock),
        ));

        Self {
            level: AtomicU8::new(config.level as u8),
            clock,
            inner: Mutex::new(Inner {
                handler,
                buf: Vec::with_capacity(capacity),
                capacity,
                color: config.color,
                file: config.file,
            }),
        }
    }

    pub fn level(&self) -> Severity {
        Severity::from_u8_lossy(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: Severity) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Set the threshold from a case-insensitive name. An unknown name keeps
    /// the current threshold, is returned as an error and is also logged at
    /// WARN.
    pub fn set_level_by_name(&self, name: &str) -> Result<()> {
        match Severity::from_name(name) {
            Ok(level) => {
                self.set_level(level);
                Ok(())
            }
            Err(e) => Err(self.config_rejected(e)),
        }
    }

    pub fn is_enabled(&self, level: Severity) -> bool {
        should_emit(self.level(), level)
    }

    /// Replace the active handler. The previous one is dropped without being
    /// flushed.
    pub fn set_handler(&self, handler: Handler) {
        self.inner.lock_or_recover().handler = handler;
    }

    /// Go back to the file handler, configured with the current file
    /// settings.
    pub fn use_file_handler(&self) {
        let mut inner = self.inner.lock_or_recover();
        inner.handler = Handler::File(FileSink::with_clock(
            inner.file.clone(),
            Arc::clone(&self.clock),
        ));
    }

    /// Largest rendered record in bytes. Values below the minimum are raised
    /// to it.
    pub fn set_max_bufsize(&self, bufsize: usize) {
        let capacity = bufsize.max(MIN_BUFSIZE);
        let mut inner = self.inner.lock_or_recover();
        inner.capacity = capacity;
        inner.buf = Vec::with_capacity(capacity);
    }

    pub fn max_bufsize(&self) -> usize {
        self.inner.lock_or_recover().capacity
    }

    /// Color records by level. Only applies when the handler is a terminal.
    pub fn enable_color(&self, on: bool) {
        self.inner.lock_or_recover().color = on;
    }

    pub fn color_enabled(&self) -> bool {
        self.inner.lock_or_recover().color
    }

    pub fn file_config(&self) -> FileConfig {
        self.inner.lock_or_recover().file.clone()
    }

    /// Change the base path of the log files. Closes the open file.
    pub fn set_file(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.update_file(|config| config.base_path = path.clone(), |sink| {
            sink.set_base_path(path.clone())
        });
    }

    pub fn set_max_file_size(&self, size: u64) {
        self.update_file(
            |config| config.max_file_size = size,
            |sink| sink.set_max_file_size(size),
        );
    }

    /// Set the maximum file size from a string such as `16M`. An invalid
    /// string keeps the current size, is returned as an error and is also
    /// logged at WARN.
    pub fn set_max_file_size_by_str(&self, size: &str) -> Result<()> {
        match crate::config::parse_size(size) {
            Ok(size) => {
                self.set_max_file_size(size);
                Ok(())
            }
            Err(e) => Err(self.config_rejected(e)),
        }
    }

    pub fn set_remain_days(&self, days: u32) {
        self.update_file(
            |config| config.remain_days = days,
            |sink| sink.set_remain_days(days),
        );
    }

    /// Sync every record to disk before the print call returns.
    pub fn enable_fsync(&self, on: bool) {
        self.update_file(|config| config.fsync = on, |sink| sink.set_fsync(on));
    }

    /// Sync whatever the handler has written, regardless of the fsync
    /// setting.
    pub fn fsync(&self) -> Result<()> {
        self.inner.lock_or_recover().handler.fsync()
    }

    /// Path of the file being written, if the file handler is active and has
    /// opened one. It changes at every rotation.
    pub fn current_file(&self) -> Option<PathBuf> {
        let inner = self.inner.lock_or_recover();
        inner
            .handler
            .file_sink()
            .and_then(|sink| sink.current_path())
            .map(|path| path.to_path_buf())
    }

    /// Render and deliver one record.
    ///
    /// ```no_run
    /// use hlog::{Logger, Severity};
    ///
    /// let logger = Logger::new();
    /// let _ = logger.print(Severity::Info, format_args!("listening on {}", 8080));
    /// ```
    pub fn print(&self, level: Severity, args: fmt::Arguments<'_>) -> Result<Delivery> {
        self.print_at(level, None, args)
    }

    /// Like [`Logger::print`], appending `site` to the record.
    pub fn print_at(
        &self,
        level: Severity,
        site: Option<&CallSite<'_>>,
        args: fmt::Arguments<'_>,
    ) -> Result<Delivery> {
        if !self.is_enabled(level) {
            return Ok(Delivery::Filtered);
        }

        let mut guard = self.inner.lock_or_recover();
        let inner = &mut *guard;
        let now = self.clock.now();
        let color = inner.color && inner.handler.is_terminal();

        let rendered = record::render(
            &mut inner.buf,
            inner.capacity,
            now,
            level,
            color,
            site,
            args,
        );
        inner.handler.write_at(now, level, &inner.buf)?;

        Ok(Delivery::Written {
            bytes: rendered.len,
            truncated: rendered.truncated,
        })
    }

    fn update_file(&self, config: impl FnOnce(&mut FileConfig), sink: impl FnOnce(&mut FileSink)) {
        let mut inner = self.inner.lock_or_recover();
        config(&mut inner.file);
        if let Some(active) = inner.handler.file_sink_mut() {
            sink(active);
        }
    }

    /// Surface a rejected setting through the logger itself. The guard is not
    /// held here, and printing never changes settings, so this can not
    /// recurse.
    fn config_rejected(&self, err: Error) -> Error {
        let _ = self.print(
            Severity::Warn,
            format_args!("ignoring configuration change: {err}"),
        );
        err
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}
