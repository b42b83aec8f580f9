#![forbid(unsafe_code)]

//! An embeddable, thread-safe logging core.
//!
//! Callers print levelled messages; the [`Logger`] drops those below its
//! threshold, renders the rest into a reusable fixed-size buffer and hands
//! them to exactly one [`Handler`]: the console, a user closure, or the
//! default [`FileSink`], which rotates files by size and calendar day and
//! deletes those past a retention window.
//!
//! ```no_run
//! use hlog::{hlogi, Logger, Severity};
//!
//! hlog::set_file("logs/server");
//! hlog::set_max_file_size_by_str("16M").ok();
//! hlogi!("listening on port {}", 8080);
//!
//! let logger = Logger::new();
//! logger.set_level(Severity::Debug);
//! let _ = logger.print(Severity::Debug, format_args!("explicit instance"));
//! ```

mod bridge;
mod clock;
mod config;
mod default;
mod error;
pub mod handler;
mod logger;
mod macros;
mod record;
mod severity;
mod util;

pub use bridge::LogBridge;
pub use clock::{Clock, SystemClock};
pub use config::{
    parse_size, FileConfig, LoggerConfig, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL,
    DEFAULT_LOG_MAX_BUFSIZE, DEFAULT_LOG_MAX_FILESIZE, DEFAULT_LOG_REMAIN_DAYS,
};
pub use default::{
    current_file, default_logger, disable_fsync, enable_fsync, fsync, set_file, set_handler,
    set_level, set_level_by_name, set_max_file_size, set_max_file_size_by_str, set_remain_days,
    shared_default_logger,
};
pub use error::{Error, Result};
pub use handler::{
    ConsoleHandler, ConsoleTarget, CustomHandler, FileSink, Handler, LogHandler,
};
pub use logger::{Delivery, Logger};
pub use record::{CallSite, COLOR_RESET, MIN_BUFSIZE};
pub use severity::{should_emit, Severity};

///
/// Everything needed to log through an explicit instance
///
/// ```
/// use hlog::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{logger_print, CallSite, Delivery, Handler, Logger, LoggerConfig, Severity};
}
