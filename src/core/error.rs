//! Custom error types for the motion layer.
//!
//! Every error here is recoverable. Callers degrade to "show content without
//! animation" instead of propagating:
//!
//! - [`StorageError`] - localStorage operations for motion preferences
//! - [`ConfigImportError`] - Restoring an exported configuration string

use thiserror::Error;

/// localStorage errors for preference persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available (private mode, sandboxed iframe, ...).
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to write an entry (quota exceeded, storage disabled).
    #[error("failed to write '{0}' to localStorage")]
    WriteFailed(String),
    /// Failed to serialize the configuration blob.
    #[error("failed to serialize motion config: {0}")]
    Serialize(String),
}

/// Errors importing a configuration string.
///
/// On any of these the existing configuration is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigImportError {
    /// Input is not JSON of the expected shape.
    #[error("malformed motion config: {0}")]
    Parse(String),
    /// Blob was written by an unknown format version.
    #[error("unsupported motion config version {0}")]
    UnsupportedVersion(u32),
    /// A visibility threshold lies outside `[0, 1]`.
    #[error("visibility threshold for '{0}' must be within 0..=1")]
    InvalidThreshold(&'static str),
}
