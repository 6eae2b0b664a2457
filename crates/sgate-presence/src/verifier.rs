//! # Presence Decision Algorithm
//!
//! Coordinate proximity uses an axis-aligned bounding box: both coordinate
//! deltas must be under [`PROXIMITY_WINDOW_DEGREES`]. That is roughly a
//! kilometre at moderate latitudes and deliberately NOT great-circle
//! distance — the shape and the threshold are part of the compatibility
//! contract with deployed device tooling and must not be "improved" to a
//! geodesic check.

use serde::{Deserialize, Serialize};

use sgate_core::{Institution, InstitutionId};

/// Maximum per-axis coordinate delta, in decimal degrees, for a claim to
/// count as on premises. Exclusive bound: a delta of exactly 0.01 misses.
pub const PROXIMITY_WINDOW_DEGREES: f64 = 0.01;

/// A caller-supplied, unverified assertion of current location and network.
///
/// Transient: exists only for the duration of one verification call and is
/// never persisted. A coordinate pair is only considered supplied when both
/// latitude and longitude are present — partial data falls through to the
/// network check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceClaim {
    /// The institution the device claims to be present at.
    pub institution_id: InstitutionId,
    /// Claimed latitude, decimal degrees.
    pub latitude: Option<f64>,
    /// Claimed longitude, decimal degrees.
    pub longitude: Option<f64>,
    /// Claimed network identifier (WiFi SSID), compared case-sensitively
    /// against the institution's trusted network.
    pub network_id: Option<String>,
}

impl PresenceClaim {
    /// The claimed coordinate pair, if both axes are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some((latitude, longitude)),
            _ => None,
        }
    }
}

/// The verifier's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceDecision {
    /// Whether the claim places the device on the institution's premises.
    pub on_premises: bool,
}

/// Decide whether a claim places the device on the institution's premises.
///
/// Evaluation order, first match wins:
///
/// 1. Institution has an anchor AND the claim supplies a full coordinate
///    pair AND both deltas are under the proximity window → on premises.
/// 2. Institution has a trusted network AND the claim's network identifier
///    equals it exactly → on premises.
/// 3. Otherwise → not on premises.
///
/// An unset institution trusted network is never compared, regardless of
/// what the claim supplies.
pub fn verify(institution: &Institution, claim: &PresenceClaim) -> PresenceDecision {
    if let (Some(anchor), Some((latitude, longitude))) =
        (institution.anchor, claim.coordinates())
    {
        let lat_diff = (anchor.latitude() - latitude).abs();
        let lon_diff = (anchor.longitude() - longitude).abs();
        if lat_diff < PROXIMITY_WINDOW_DEGREES && lon_diff < PROXIMITY_WINDOW_DEGREES {
            tracing::debug!(
                institution = %institution.id,
                lat_diff,
                lon_diff,
                "on premises: coordinate proximity"
            );
            return PresenceDecision { on_premises: true };
        }
    }

    if let (Some(trusted), Some(claimed)) = (
        institution.trusted_network.as_deref(),
        claim.network_id.as_deref(),
    ) {
        if trusted == claimed {
            tracing::debug!(institution = %institution.id, "on premises: trusted network match");
            return PresenceDecision { on_premises: true };
        }
    }

    PresenceDecision { on_premises: false }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgate_core::GeoPoint;

    fn anchored_institution() -> Institution {
        Institution::new(
            "Sample High School",
            None,
            Some(GeoPoint::new(40.7128, -74.0060).unwrap()),
            Some("School-WiFi".to_string()),
        )
        .unwrap()
    }

    fn claim(
        institution: &Institution,
        latitude: Option<f64>,
        longitude: Option<f64>,
        network_id: Option<&str>,
    ) -> PresenceClaim {
        PresenceClaim {
            institution_id: institution.id,
            latitude,
            longitude,
            network_id: network_id.map(str::to_string),
        }
    }

    #[test]
    fn test_exact_coordinate_match() {
        let institution = anchored_institution();
        let claim = claim(&institution, Some(40.7128), Some(-74.0060), None);
        assert!(verify(&institution, &claim).on_premises);
    }

    #[test]
    fn test_near_coordinate_match() {
        // lat_diff = 0.0072 < 0.01
        let institution = anchored_institution();
        let claim = claim(&institution, Some(40.7200), Some(-74.0060), None);
        assert!(verify(&institution, &claim).on_premises);
    }

    #[test]
    fn test_far_coordinates_miss() {
        // lat_diff = 0.1872 >= 0.01 and no network supplied
        let institution = anchored_institution();
        let claim = claim(&institution, Some(40.9000), Some(-74.0060), None);
        assert!(!verify(&institution, &claim).on_premises);
    }

    #[test]
    fn test_decision_tracks_the_exclusive_window() {
        // At the window boundary the decision must agree with the raw
        // comparison, whichever way float rounding lands.
        let institution = anchored_institution();
        for claimed_lat in [40.7228f64, 40.7227, 40.7229] {
            let claim = claim(&institution, Some(claimed_lat), Some(-74.0060), None);
            let lat_diff = (claimed_lat - 40.7128f64).abs();
            assert_eq!(
                verify(&institution, &claim).on_premises,
                lat_diff < PROXIMITY_WINDOW_DEGREES
            );
        }
    }

    #[test]
    fn test_network_match_without_anchor() {
        let institution = Institution::new(
            "Network Only School",
            None,
            None,
            Some("School-WiFi".to_string()),
        )
        .unwrap();
        let hit = claim(&institution, None, None, Some("School-WiFi"));
        assert!(verify(&institution, &hit).on_premises);

        // Case differs — exact match only.
        let miss = claim(&institution, None, None, Some("school-wifi"));
        assert!(!verify(&institution, &miss).on_premises);
    }

    #[test]
    fn test_far_coordinates_fall_through_to_network() {
        let institution = anchored_institution();
        let claim = claim(&institution, Some(40.9000), Some(-74.0060), Some("School-WiFi"));
        assert!(verify(&institution, &claim).on_premises);
    }

    #[test]
    fn test_partial_coordinate_pair_falls_through() {
        let institution = anchored_institution();

        // Latitude alone is not a coordinate pair; the network check still
        // runs and matches.
        let with_network = claim(&institution, Some(40.7128), None, Some("School-WiFi"));
        assert!(verify(&institution, &with_network).on_premises);

        let without_network = claim(&institution, None, Some(-74.0060), None);
        assert!(!verify(&institution, &without_network).on_premises);
    }

    #[test]
    fn test_unset_trusted_network_never_compared() {
        let institution =
            Institution::new("No Network School", None, None, None).unwrap();
        let claim = claim(&institution, None, None, Some("School-WiFi"));
        assert!(!verify(&institution, &claim).on_premises);
    }

    #[test]
    fn test_no_signals_at_all() {
        let institution = Institution::new("Bare School", None, None, None).unwrap();
        let claim = claim(&institution, None, None, None);
        assert!(!verify(&institution, &claim).on_premises);
    }

    #[test]
    fn test_non_finite_claim_coordinates_miss_safely() {
        let institution = anchored_institution();
        let claim = claim(&institution, Some(f64::NAN), Some(-74.0060), None);
        assert!(!verify(&institution, &claim).on_premises);
    }

    #[test]
    fn test_claim_serde_wire_shape() {
        let institution = anchored_institution();
        let parsed: PresenceClaim = serde_json::from_value(serde_json::json!({
            "institution_id": institution.id.as_uuid(),
            "latitude": 40.7128,
            "longitude": -74.0060,
            "network_id": null,
        }))
        .unwrap();
        assert_eq!(parsed.coordinates(), Some((40.7128, -74.0060)));
    }
}
