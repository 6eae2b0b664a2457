//! # Institution Record
//!
//! An institution is a school-like tenant: it owns a policy set and is the
//! parent scope of every registered student. Students and policy entries
//! hold its identifier as a weak back-reference for lookup; there is no
//! live object graph.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::geo::GeoPoint;
use crate::identity::InstitutionId;
use crate::temporal::Timestamp;

/// A registered institution.
///
/// Created once at registration time. The anchor location and trusted
/// network identifier are read by the presence verifier; the engine never
/// deletes an institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    /// Unique identifier, assigned on creation.
    pub id: InstitutionId,
    /// Display name. Non-empty.
    pub name: String,
    /// Postal address, free-form.
    pub address: Option<String>,
    /// Anchor location for coordinate-proximity presence checks.
    /// Both coordinates or neither — enforced by `GeoPoint` itself.
    pub anchor: Option<GeoPoint>,
    /// Trusted network identifier (WiFi SSID) for network-match presence
    /// checks. Compared case-sensitively.
    pub trusted_network: Option<String>,
    /// Creation time.
    pub created_at: Timestamp,
}

impl Institution {
    /// Create an institution record with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if the display name is empty or
    /// whitespace-only.
    pub fn new(
        name: impl Into<String>,
        address: Option<String>,
        anchor: Option<GeoPoint>,
        trusted_network: Option<String>,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "institution name must be non-empty".to_string(),
            ));
        }
        Ok(Self {
            id: InstitutionId::new(),
            name,
            address,
            anchor,
            trusted_network,
            created_at: Timestamp::now(),
        })
    }
}
