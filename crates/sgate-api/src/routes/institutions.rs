//! # Institution Registration
//!
//! Routes:
//! - POST /api/schools — create an institution and bootstrap its default
//!   policy set.
//!
//! Bootstrap runs as an explicit second step after the institution row is
//! persisted, so a bootstrap failure is reported against an institution
//! that already exists.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use sgate_core::{GeoPoint, Institution};

use crate::error::AppError;
use crate::extractors::extract_validated_json;
use crate::state::AppState;

/// Build the institution router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/schools", post(create_school))
}

/// Request to create an institution.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSchoolRequest {
    /// Display name. Non-empty.
    pub name: String,
    /// Postal address, free-form.
    #[serde(default)]
    pub address: Option<String>,
    /// Anchor latitude. Must be supplied together with `longitude`.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Anchor longitude. Must be supplied together with `latitude`.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Trusted network identifier (WiFi SSID).
    #[serde(default)]
    pub wifi_ssid: Option<String>,
}

/// Response after institution creation.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateSchoolResponse {
    pub message: String,
    /// Identifier of the created institution.
    pub school_id: Uuid,
    /// Number of default policy entries bootstrapped.
    pub default_restrictions: usize,
}

#[utoipa::path(
    post,
    path = "/api/schools",
    request_body = CreateSchoolRequest,
    responses(
        (status = 201, description = "Institution created with its default policy set", body = CreateSchoolResponse),
        (status = 422, description = "Validation failure", body = crate::error::ErrorBody),
    ),
    tag = "schools"
)]
async fn create_school(
    State(state): State<AppState>,
    body: Result<Json<CreateSchoolRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateSchoolResponse>), AppError> {
    let req = extract_validated_json(body)?;

    let anchor = match (req.latitude, req.longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoPoint::new(latitude, longitude)?),
        (None, None) => None,
        _ => {
            return Err(AppError::Validation(
                "latitude and longitude must be supplied together".to_string(),
            ))
        }
    };

    let institution = Institution::new(req.name, req.address, anchor, req.wifi_ssid)?;
    let school_id = institution.id;
    state.registry().insert_institution(institution)?;

    let entries = sgate_policy::bootstrap(state.registry(), school_id)?;
    tracing::info!(institution = %school_id, "institution created");

    Ok((
        StatusCode::CREATED,
        Json(CreateSchoolResponse {
            message: "School created successfully".to_string(),
            school_id: *school_id.as_uuid(),
            default_restrictions: entries.len(),
        }),
    ))
}
