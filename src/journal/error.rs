//! Journal error types.

use thiserror::Error;

/// Errors that can occur when exporting or importing a journal.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Journal version is not supported by this version of the crate
    #[error("Unsupported journal version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
