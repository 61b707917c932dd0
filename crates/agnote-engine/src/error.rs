use std::fmt;

/// Result type for agnote-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed (export destination)
    Io(std::io::Error),

    /// Reading the transcript failed
    Provider(agnote_providers::Error),

    /// Destination path cannot hold a file
    InvalidPath(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Provider(err) => write!(f, "{}", err),
            Error::InvalidPath(path) => write!(f, "Invalid output path: {}", path),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Provider(err) => Some(err),
            Error::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<agnote_providers::Error> for Error {
    fn from(err: agnote_providers::Error) -> Self {
        Error::Provider(err)
    }
}
