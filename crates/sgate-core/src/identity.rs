//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all domain identifiers in the SchoolsGate Stack.
//! These prevent accidental identifier confusion — you cannot pass a
//! `StudentId` where an `InstitutionId` is expected, and a hardware device
//! identifier is never interchangeable with either.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an institution (a school-like tenant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstitutionId(pub Uuid);

/// Unique identifier for a registered student/device identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub Uuid);

/// Unique identifier for a policy entry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyEntryId(pub Uuid);

/// Hardware device identifier reported at registration time.
///
/// Free-form string (serial number, MDM identifier, MAC-derived tag — the
/// format is owned by device tooling, not by this stack). Unique across all
/// registered students when present; the registry enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HardwareId(pub String);

/// An issued credential token — the opaque, printable string presented as a
/// QR payload by device tooling.
///
/// Produced exclusively by the credential encoder. The registry is the
/// source of truth for identity; this token is a presentation artifact and
/// is never decoded by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredentialToken(String);

impl InstitutionId {
    /// Generate a new random institution identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for InstitutionId {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentId {
    /// Generate a new random student identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyEntryId {
    /// Generate a new random policy entry identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PolicyEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareId {
    /// Access the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CredentialToken {
    /// Wrap an encoded token string.
    ///
    /// Only the credential encoder constructs tokens from scratch; other
    /// crates receive them fully formed (from the encoder or the registry).
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Access the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for InstitutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "institution:{}", self.0)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "student:{}", self.0)
    }
}

impl std::fmt::Display for PolicyEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "policy:{}", self.0)
    }
}

impl std::fmt::Display for HardwareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for CredentialToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct() {
        assert_ne!(InstitutionId::new(), InstitutionId::new());
        assert_ne!(StudentId::new(), StudentId::new());
        assert_ne!(PolicyEntryId::new(), PolicyEntryId::new());
    }

    #[test]
    fn test_display_prefixes() {
        let id = InstitutionId::new();
        assert!(id.to_string().starts_with("institution:"));
        let id = StudentId::new();
        assert!(id.to_string().starts_with("student:"));
        let id = PolicyEntryId::new();
        assert!(id.to_string().starts_with("policy:"));
    }

    #[test]
    fn test_id_serde_roundtrip() {
        let id = StudentId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: StudentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_credential_token_is_transparent_string() {
        let token = CredentialToken::new("sgq1:abc");
        assert_eq!(token.as_str(), "sgq1:abc");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#""sgq1:abc""#);
    }

    #[test]
    fn test_hardware_id_equality_is_exact() {
        assert_ne!(
            HardwareId("DEVICE-001".to_string()),
            HardwareId("device-001".to_string())
        );
    }
}
