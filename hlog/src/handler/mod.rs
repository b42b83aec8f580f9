//! Record sinks.
//!
//! A logger owns exactly one [`Handler`] at a time. Replacing it drops the
//! previous one on the spot: records already handed to the old handler are
//! wherever its I/O left them, and nothing is drained or flushed across the
//! swap. Call [`Logger::fsync`](crate::Logger::fsync) first if that matters.

mod console;
mod custom;
pub mod file;

use chrono::NaiveDateTime;
use enum_dispatch::enum_dispatch;

use crate::error::Result;
use crate::severity::Severity;

pub use console::{ConsoleHandler, ConsoleTarget};
pub(crate) use console::report;
pub use custom::CustomHandler;
pub use file::FileSink;

/// The capability every sink provides: consume one rendered record.
#[enum_dispatch]
pub trait LogHandler {
    /// Deliver `data`, a complete newline-terminated record, at `level`.
    fn write(&mut self, level: Severity, data: &[u8]) -> Result<()>;

    /// Deliver a record rendered with the timestamp `now`. Sinks that route
    /// records by time use it instead of reading the clock again.
    fn write_at(&mut self, _now: NaiveDateTime, level: Severity, data: &[u8]) -> Result<()> {
        self.write(level, data)
    }

    /// Whether the sink is an interactive terminal, which is the only place
    /// colored records are sent.
    fn is_terminal(&self) -> bool {
        false
    }

    /// Push everything written so far down to durable storage.
    fn fsync(&mut self) -> Result<()> {
        Ok(())
    }
}

/// The active sink of a logger.
#[enum_dispatch(LogHandler)]
#[derive(Debug)]
pub enum Handler {
    Console(ConsoleHandler),
    File(FileSink),
    Custom(CustomHandler),
}

impl Handler {
    pub fn stdout() -> Self {
        Handler::Console(ConsoleHandler::new(ConsoleTarget::Stdout))
    }

    pub fn stderr() -> Self {
        Handler::Console(ConsoleHandler::new(ConsoleTarget::Stderr))
    }

    /// Wrap a closure called with every accepted record.
    pub fn custom<F>(f: F) -> Self
    where
        F: FnMut(Severity, &[u8]) + Send + 'static,
    {
        Handler::Custom(CustomHandler::new(f))
    }

    pub fn file_sink(&self) -> Option<&FileSink> {
        match self {
            Handler::File(sink) => Some(sink),
            _ => None,
        }
    }

    pub fn file_sink_mut(&mut self) -> Option<&mut FileSink> {
        match self {
            Handler::File(sink) => Some(sink),
            _ => None,
        }
    }
}
