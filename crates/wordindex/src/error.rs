//! Error types for wordindex

use std::collections::TryReserveError;
use std::fmt;
use std::io;

/// Result type alias for wordindex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for indexing and query operations
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading a document
    Io(io::Error),

    /// Allocation failed while growing the index
    OutOfMemory,

    /// Query contains no letters or digits
    InvalidQuery(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::OutOfMemory => write!(f, "Out of memory while growing the index"),
            Error::InvalidQuery(raw) => {
                write!(f, "Invalid query {:?}: no letters or digits", raw)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::OutOfMemory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_source() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_try_reserve_failure() {
        let err: Error = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err().into();
        assert!(matches!(err, Error::OutOfMemory));
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_invalid_query_display() {
        let err = Error::InvalidQuery("!!!".to_string());
        assert_eq!(err.to_string(), "Invalid query \"!!!\": no letters or digits");
    }
}
