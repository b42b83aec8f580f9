use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid log level: {0:?}")]
    InvalidLevel(String),

    #[error("Invalid file size: {0:?}")]
    InvalidSize(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("No log file could be opened")]
    NoActiveFile,
}

impl Error {
    /// Configuration errors leave the previous setting in place.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::InvalidLevel(_) | Error::InvalidSize(_))
    }
}
