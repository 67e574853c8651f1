//! Error types for the text box engine.
//!
//! Editing operations never fail: out-of-range positions clamp and impossible
//! edits are no-ops. Errors only come from the surroundings of the engine,
//! such as resolving a font that was never registered.

use std::fmt;
use std::io;

/// Result type alias for text box operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for text box operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while loading an external resource.
    Io(io::Error),
    /// A required resource (font, asset) could not be loaded.
    ResourceLoad { resource: String, reason: String },
    /// Configuration values that cannot be laid out.
    InvalidOptions(String),
}

impl Error {
    /// Build a resource load error.
    #[must_use]
    pub fn resource_load(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResourceLoad {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ResourceLoad { resource, reason } => {
                write!(f, "failed to load resource '{resource}': {reason}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid text box options: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
