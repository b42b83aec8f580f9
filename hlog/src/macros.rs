/// Print to an explicit logger, tagging the record with the call site.
///
/// Evaluates to the [`Result`](crate::Result) of
/// [`Logger::print_at`](crate::Logger::print_at).
///
/// ```no_run
/// use hlog::{logger_print, Logger, Severity};
///
/// let logger = Logger::new();
/// let _ = logger_print!(logger, Severity::Warn, "retrying in {}s", 5);
/// ```
#[macro_export]
macro_rules! logger_print {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.print_at(
            $level,
            ::core::option::Option::Some(&$crate::CallSite::new(
                ::core::file!(),
                ::core::line!(),
                ::core::module_path!(),
            )),
            ::core::format_args!($($arg)+),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __hlog_default {
    ($level:ident, $($arg:tt)+) => {{
        let _ = $crate::logger_print!(
            $crate::default_logger(),
            $crate::Severity::$level,
            $($arg)+
        );
    }};
}

/// Log at VERBOSE through the default logger.
#[macro_export]
macro_rules! hlogv {
    ($($arg:tt)+) => { $crate::__hlog_default!(Verbose, $($arg)+) };
}

/// Log at DEBUG through the default logger.
#[macro_export]
macro_rules! hlogd {
    ($($arg:tt)+) => { $crate::__hlog_default!(Debug, $($arg)+) };
}

/// Log at INFO through the default logger.
#[macro_export]
macro_rules! hlogi {
    ($($arg:tt)+) => { $crate::__hlog_default!(Info, $($arg)+) };
}

/// Log at WARN through the default logger.
#[macro_export]
macro_rules! hlogw {
    ($($arg:tt)+) => { $crate::__hlog_default!(Warn, $($arg)+) };
}

/// Log at ERROR through the default logger.
#[macro_export]
macro_rules! hloge {
    ($($arg:tt)+) => { $crate::__hlog_default!(Error, $($arg)+) };
}

/// Log at FATAL through the default logger. Does not abort.
#[macro_export]
macro_rules! hlogf {
    ($($arg:tt)+) => { $crate::__hlog_default!(Fatal, $($arg)+) };
}
