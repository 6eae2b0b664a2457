//! # Presence Verification
//!
//! Routes:
//! - POST /api/verify-location — decide whether a device's claimed
//!   location/network places it on an institution's premises.
//!
//! The facade resolves the institution before the verifier runs: a
//! dangling identifier is 404, never a false-presence result.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use sgate_core::InstitutionId;
use sgate_presence::PresenceClaim;

use crate::error::AppError;
use crate::extractors::extract_validated_json;
use crate::state::AppState;

/// Build the presence router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/verify-location", post(verify_location))
}

/// A device's presence claim.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyLocationRequest {
    /// The institution the device claims to be present at.
    pub school_id: Uuid,
    /// Claimed latitude. Only counted when `longitude` is also present.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Claimed longitude. Only counted when `latitude` is also present.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Claimed network identifier (WiFi SSID), compared case-sensitively.
    #[serde(default)]
    pub wifi_ssid: Option<String>,
}

/// The presence decision.
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyLocationResponse {
    /// Whether the claim places the device on premises.
    pub is_on_campus: bool,
}

#[utoipa::path(
    post,
    path = "/api/verify-location",
    request_body = VerifyLocationRequest,
    responses(
        (status = 200, description = "Presence decision", body = VerifyLocationResponse),
        (status = 404, description = "Institution not found", body = crate::error::ErrorBody),
    ),
    tag = "presence"
)]
async fn verify_location(
    State(state): State<AppState>,
    body: Result<Json<VerifyLocationRequest>, JsonRejection>,
) -> Result<Json<VerifyLocationResponse>, AppError> {
    let req = extract_validated_json(body)?;

    let institution_id = InstitutionId(req.school_id);
    let institution = state
        .registry()
        .institution(institution_id)?
        .ok_or_else(|| AppError::NotFound(format!("{institution_id} does not exist")))?;

    let claim = PresenceClaim {
        institution_id,
        latitude: req.latitude,
        longitude: req.longitude,
        network_id: req.wifi_ssid,
    };
    let decision = sgate_presence::verify(&institution, &claim);

    Ok(Json(VerifyLocationResponse {
        is_on_campus: decision.on_premises,
    }))
}
