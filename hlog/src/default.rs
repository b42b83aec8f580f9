//! The process-wide default logger.
//!
//! Components should take a [`Logger`] reference; this instance exists for
//! the `hlog*!` macros and for code that has nowhere to thread one through.
//! It is created on first use and lives until the process exits.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::error::Result;
use crate::handler::Handler;
use crate::logger::Logger;
use crate::severity::Severity;

static DEFAULT_LOGGER: OnceLock<Arc<Logger>> = OnceLock::new();

fn shared() -> &'static Arc<Logger> {
    DEFAULT_LOGGER.get_or_init(|| Arc::new(Logger::new()))
}

pub fn default_logger() -> &'static Logger {
    shared()
}

/// A counted handle to the default logger, for owners that need `'static`
/// data such as [`LogBridge`](crate::LogBridge).
pub fn shared_default_logger() -> Arc<Logger> {
    Arc::clone(shared())
}

pub fn set_handler(handler: Handler) {
    default_logger().set_handler(handler)
}

pub fn set_file(path: impl Into<PathBuf>) {
    default_logger().set_file(path)
}

pub fn set_level(level: Severity) {
    default_logger().set_level(level)
}

pub fn set_level_by_name(name: &str) -> Result<()> {
    default_logger().set_level_by_name(name)
}

pub fn set_max_file_size(size: u64) {
    default_logger().set_max_file_size(size)
}

pub fn set_max_file_size_by_str(size: &str) -> Result<()> {
    default_logger().set_max_file_size_by_str(size)
}

pub fn set_remain_days(days: u32) {
    default_logger().set_remain_days(days)
}

pub fn enable_fsync() {
    default_logger().enable_fsync(true)
}

pub fn disable_fsync() {
    default_logger().enable_fsync(false)
}

pub fn fsync() -> Result<()> {
    default_logger().fsync()
}

pub fn current_file() -> Option<PathBuf> {
    default_logger().current_file()
}
