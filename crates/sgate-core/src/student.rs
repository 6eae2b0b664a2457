//! # Student Record
//!
//! A student is a registered identity bound to one institution, optionally
//! to one physical device. The credential token is assigned immediately
//! after creation, persisted once, and never regenerated implicitly.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::identity::{CredentialToken, HardwareId, InstitutionId, StudentId};
use crate::temporal::Timestamp;

/// A registered student/device identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, assigned on registration.
    pub id: StudentId,
    /// Display name. Non-empty.
    pub name: String,
    /// Owning institution. Must reference an existing institution.
    pub institution_id: InstitutionId,
    /// Hardware device identifier. Unique across all students when present;
    /// the registry rejects duplicates.
    pub hardware_id: Option<HardwareId>,
    /// Issued credential token. `None` only in the window between record
    /// creation and credential attachment.
    pub credential: Option<CredentialToken>,
    /// Active flag. Defaults to true at registration.
    pub active: bool,
    /// Registration time.
    pub registered_at: Timestamp,
}

impl Student {
    /// Create a student record with a fresh identifier and no credential.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if the display name is empty or
    /// whitespace-only.
    pub fn new(
        name: impl Into<String>,
        institution_id: InstitutionId,
        hardware_id: Option<HardwareId>,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "student name must be non-empty".to_string(),
            ));
        }
        Ok(Self {
            id: StudentId::new(),
            name,
            institution_id,
            hardware_id,
            credential: None,
            active: true,
            registered_at: Timestamp::now(),
        })
    }
}
