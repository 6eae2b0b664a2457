//! # Canonical Byte Production
//!
//! Defines `CanonicalBytes`, the sole construction path for the bytes a
//! credential token is encoded from.
//!
//! ## Invariant
//!
//! Credential issuance must be reproducible: encoding the same payload twice
//! yields byte-identical tokens, because staff tooling compares the scanned
//! token against the one the registry stored at registration time. The
//! `CanonicalBytes` newtype has a private inner field and a single
//! constructor that serializes through RFC 8785 (JSON Canonicalization
//! Scheme): sorted keys, compact separators, deterministic byte sequence.
//! Any function that needs reproducible bytes must accept `&CanonicalBytes`,
//! so a non-canonical serialization path cannot exist.
//!
//! Floats are rejected outright. Credential payload fields are identifiers
//! (UUIDs and device strings); a float anywhere in the tree means the caller
//! handed us something that is not a credential payload.

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;

/// Bytes produced exclusively by JCS-canonical serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Serialize a value into canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::FloatRejected`] if the value contains a float
    /// anywhere in its tree, or [`CoreError::Serialization`] if JSON
    /// serialization fails.
    pub fn new(value: &impl Serialize) -> Result<Self, CoreError> {
        let tree = serde_json::to_value(value)?;
        reject_floats(&tree)?;
        let text = serde_jcs::to_string(&tree)?;
        Ok(Self(text.into_bytes()))
    }

    /// Access the canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Walk a JSON value tree and reject any number that is not representable
/// as an integer. Null, bool, string, and integer leaves pass through.
fn reject_floats(value: &Value) -> Result<(), CoreError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(n) => {
            if n.is_f64() && !n.is_i64() && !n.is_u64() {
                return Err(CoreError::FloatRejected(n.as_f64().unwrap_or(f64::NAN)));
            }
            Ok(())
        }
        Value::Array(items) => items.iter().try_for_each(reject_floats),
        Value::Object(map) => map.values().try_for_each(reject_floats),
    }
}
