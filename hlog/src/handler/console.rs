use std::fmt;
use std::io::{self, IsTerminal, Write};

use crate::error::Result;
use crate::handler::LogHandler;
use crate::severity::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

/// Writes records to the process's standard output or standard error.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleHandler {
    target: ConsoleTarget,
}

impl ConsoleHandler {
    pub fn new(target: ConsoleTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl LogHandler for ConsoleHandler {
    fn write(&mut self, _level: Severity, data: &[u8]) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(data)?;
                out.flush()?;
            }
            ConsoleTarget::Stderr => io::stderr().lock().write_all(data)?,
        }
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        match self.target {
            ConsoleTarget::Stdout => io::stdout().is_terminal(),
            ConsoleTarget::Stderr => io::stderr().is_terminal(),
        }
    }

    fn fsync(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => io::stdout().flush()?,
            ConsoleTarget::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}

/// Last-resort diagnostics for failures inside the logger itself.
///
/// Goes straight to stderr and never through a logger, so a broken sink can
/// not recurse into itself. Write errors are ignored.
pub(crate) fn report(args: fmt::Arguments<'_>) {
    let mut err = io::stderr().lock();
    let _ = writeln!(err, "hlog: {args}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_target() {
        assert_eq!(
            ConsoleHandler::new(ConsoleTarget::Stderr).target(),
            ConsoleTarget::Stderr
        );
    }

    #[test]
    fn test_console_write_and_flush() {
        let mut handler = ConsoleHandler::new(ConsoleTarget::Stderr);
        assert!(handler.write(Severity::Info, b"console handler test\n").is_ok());
        assert!(handler.fsync().is_ok());
    }
}
