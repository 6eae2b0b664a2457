//! # Error Types
//!
//! Shared error type for the foundational crate. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! Domain-specific failures (registry uniqueness violations, policy batch
//! rejection, credential payload rejection) live in their owning crates and
//! compose with `CoreError` via `#[from]` where construction of a core type
//! is involved.

use thiserror::Error;

/// Errors produced while constructing or serializing foundational values.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A caller-supplied value failed validation (empty name, unpaired
    /// coordinates, malformed timestamp, ...). Rejected before any mutation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A coordinate is non-finite or outside its valid range.
    #[error("coordinate out of range: {axis} = {value}")]
    CoordinateOutOfRange {
        /// Which axis failed validation (`"latitude"` or `"longitude"`).
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Float values are not permitted in canonical credential payloads.
    /// Payload fields are identifiers; a float indicates a malformed payload.
    #[error("float values are not permitted in credential payloads: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
