//! `log` facade integration.
//!
//! ```no_run
//! use hlog::LogBridge;
//!
//! LogBridge::for_default().install().ok();
//! log::info!("routed through the default hlog logger");
//! ```

use std::sync::Arc;

use crate::default::shared_default_logger;
use crate::logger::Logger;
use crate::record::CallSite;
use crate::severity::Severity;

/// Forwards `log` records to a [`Logger`], tagging each with its call site.
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    pub fn for_default() -> Self {
        Self::new(shared_default_logger())
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Make this the global `log` logger.
    ///
    /// `log`'s maximum level is taken from the logger's threshold at this
    /// point; lowering the threshold later does not widen it.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let max_level = log::LevelFilter::from(self.logger.level());
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.logger.is_enabled(Severity::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let site = match (record.file(), record.line()) {
            (Some(file), Some(line)) => Some(CallSite::new(
                file,
                line,
                record.module_path().unwrap_or(record.target()),
            )),
            _ => None,
        };

        // log::Log has no way to report failure.
        let _ = self.logger.print_at(
            Severity::from(record.level()),
            site.as_ref(),
            *record.args(),
        );
    }

    fn flush(&self) {
        let _ = self.logger.fsync();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Handler, LoggerConfig};
    use log::Log;
    use std::sync::Mutex;

    fn bridge() -> (LogBridge, Arc<Mutex<Vec<(Severity, String)>>>) {
        let logger = Logger::with_config(LoggerConfig::default());
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);
        logger.set_handler(Handler::custom(move |level, data| {
            sink.lock()
                .unwrap()
                .push((level, String::from_utf8_lossy(data).into_owned()));
        }));
        (LogBridge::new(Arc::new(logger)), captured)
    }

    #[test]
    fn test_bridge_forwards_record_with_call_site() {
        let (bridge, captured) = bridge();

        bridge.log(
            &log::Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("disk {}% full", 91))
                .file(Some("src/storage/disk.rs"))
                .line(Some(17))
                .module_path(Some("app::storage"))
                .build(),
        );

        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].0, Severity::Warn);
        assert!(captured[0]
            .1
            .ends_with("disk 91% full [disk.rs:17:app::storage]\n"));
    }

    #[test]
    fn test_bridge_respects_threshold() {
        let (bridge, captured) = bridge();
        bridge.logger().set_level(Severity::Error);

        assert!(!bridge.enabled(&log::Metadata::builder().level(log::Level::Info).build()));
        bridge.log(
            &log::Record::builder()
                .level(log::Level::Info)
                .args(format_args!("dropped"))
                .build(),
        );

        assert!(captured.lock().unwrap().is_empty());
    }

    #[test]
    fn test_bridge_without_location() {
        let (bridge, captured) = bridge();
        bridge.log(
            &log::Record::builder()
                .level(log::Level::Error)
                .args(format_args!("bare"))
                .build(),
        );
        assert!(captured.lock().unwrap()[0].1.ends_with("] bare\n"));
    }
}
