//! # Token Encoding
//!
//! Canonical JCS bytes of the payload, base64-encoded under a format tag.
//! The alphabet is printable by construction, so tokens survive every
//! transport that can carry text (QR payloads, JSON bodies, log lines).

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

use sgate_core::{CanonicalBytes, CoreError, CredentialToken};

use crate::payload::CredentialPayload;

/// Format tag prefixed to every encoded token.
pub const TOKEN_PREFIX: &str = "sgq1:";

/// Errors from credential encoding.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// A required payload field is missing or of the wrong shape. The
    /// caller must not persist anything when this is returned.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Canonical byte production failed.
    #[error("canonical encoding failed: {0}")]
    Canonicalization(#[from] CoreError),
}

/// Encode a payload into an opaque, printable credential token.
///
/// Deterministic: identical payloads yield byte-identical tokens. The
/// token is `sgq1:` followed by standard-alphabet base64 of the payload's
/// canonical JCS bytes.
///
/// # Errors
///
/// Returns [`CredentialError::InvalidPayload`] if validation fails;
/// canonicalization failures propagate as
/// [`CredentialError::Canonicalization`].
pub fn encode(payload: &CredentialPayload) -> Result<CredentialToken, CredentialError> {
    payload.validate()?;
    let canonical = CanonicalBytes::new(payload)?;
    let body = STANDARD.encode(canonical.as_bytes());
    Ok(CredentialToken::new(format!("{TOKEN_PREFIX}{body}")))
}
