use std::fmt;
use std::io;

use crate::error::Result;
use crate::handler::LogHandler;
use crate::severity::Severity;

type Callback = Box<dyn FnMut(Severity, &[u8]) -> io::Result<()> + Send>;

/// A user supplied sink.
///
/// The closure runs with the logger's guard held, so it must not log through
/// the same logger.
pub struct CustomHandler {
    callback: Callback,
}

impl CustomHandler {
    pub fn new<F>(mut f: F) -> Self
    where
        F: FnMut(Severity, &[u8]) + Send + 'static,
    {
        Self {
            callback: Box::new(move |level: Severity, data: &[u8]| {
                f(level, data);
                Ok(())
            }),
        }
    }

    /// A sink whose failures are reported back to the print call.
    pub fn fallible<F>(f: F) -> Self
    where
        F: FnMut(Severity, &[u8]) -> io::Result<()> + Send + 'static,
    {
        Self {
            callback: Box::new(f),
        }
    }
}

impl LogHandler for CustomHandler {
    fn write(&mut self, level: Severity, data: &[u8]) -> Result<()> {
        (self.callback)(level, data)?;
        Ok(())
    }
}

impl fmt::Debug for CustomHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomHandler").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_fallible_handler_propagates_io_error() {
        let mut handler = CustomHandler::fallible(|_, _| {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer went away"))
        });

        let err = handler.write(Severity::Error, b"x\n").unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_handler_receives_level_and_bytes() {
        let seen = std::sync::Arc::new(std::sync::Mutex::new(None));
        let slot = std::sync::Arc::clone(&seen);
        let mut handler = CustomHandler::new(move |level, data| {
            *slot.lock().unwrap() = Some((level, data.len()));
        });
        assert!(handler.write(Severity::Debug, b"abc\n").is_ok());
        assert_eq!(*seen.lock().unwrap(), Some((Severity::Debug, 4)));
    }

    #[test]
    fn test_debug_does_not_expose_closure() {
        let handler = CustomHandler::new(|_, _| {});
        assert_eq!(format!("{handler:?}"), "CustomHandler { .. }");
    }
}
