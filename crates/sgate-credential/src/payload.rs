//! # Credential Payload
//!
//! The small fixed set of scalar identity fields a credential is derived
//! from. Validation happens before encoding so a half-formed credential is
//! never produced, let alone persisted.

use serde::{Deserialize, Serialize};

use sgate_core::{HardwareId, InstitutionId, StudentId};

use crate::encode::CredentialError;

/// Identity fields bound into a credential token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialPayload {
    /// The institution the identity belongs to.
    pub institution_id: InstitutionId,
    /// The registered student/device identity.
    pub student_id: StudentId,
    /// Hardware device identifier, when one was reported at registration.
    pub hardware_id: Option<HardwareId>,
}

impl CredentialPayload {
    /// Check that every required field is present and well-shaped.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::InvalidPayload`] for nil identifiers or
    /// an empty hardware device string.
    pub fn validate(&self) -> Result<(), CredentialError> {
        if self.institution_id.as_uuid().is_nil() {
            return Err(CredentialError::InvalidPayload(
                "institution identifier is nil".to_string(),
            ));
        }
        if self.student_id.as_uuid().is_nil() {
            return Err(CredentialError::InvalidPayload(
                "student identifier is nil".to_string(),
            ));
        }
        if let Some(hardware_id) = &self.hardware_id {
            if hardware_id.as_str().trim().is_empty() {
                return Err(CredentialError::InvalidPayload(
                    "hardware device identifier must be non-empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
