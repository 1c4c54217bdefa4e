//! Unified error type.

use std::fmt;

/// The error type returned by ekho's fallible operations.
///
/// Content-level malformations (absent variables, non-integer lengths,
/// `=`-less query pairs) never reach this type: the renderer substitutes
/// placeholders or skips rows. `Error` surfaces transport failures only:
/// the body stream breaking mid-read, or the output refusing writes.
#[derive(Debug)]
pub enum Error {
    /// The input or output stream failed.
    Io(std::io::Error),
    /// The body stream ended before the declared `CONTENT_LENGTH` bytes
    /// arrived.
    BodyTruncated { declared: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::BodyTruncated { declared } => {
                write!(f, "body ended before the declared {declared} bytes")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::BodyTruncated { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
