//! # Student Registration
//!
//! Routes:
//! - POST /api/students/register — register a student/device identity and
//!   issue its credential token.
//!
//! The credential is encoded before any row is written: an invalid payload
//! must not leave a half-formed registration behind. Hardware-id
//! uniqueness is the registry's check and surfaces as 409.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use sgate_core::{HardwareId, InstitutionId, Student};
use sgate_credential::CredentialPayload;

use crate::error::AppError;
use crate::extractors::extract_validated_json;
use crate::state::AppState;

/// Build the student router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/students/register", post(register_student))
}

/// Request to register a student.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterStudentRequest {
    /// Display name. Non-empty.
    pub name: String,
    /// Owning institution identifier.
    pub school_id: Uuid,
    /// Hardware device identifier. Unique across all registrations.
    #[serde(default)]
    pub device_id: Option<String>,
}

/// Response after student registration.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterStudentResponse {
    pub message: String,
    /// Identifier of the registered student.
    pub student_id: Uuid,
    /// The issued credential token, ready to render as a QR payload.
    pub qr_code: String,
}

#[utoipa::path(
    post,
    path = "/api/students/register",
    request_body = RegisterStudentRequest,
    responses(
        (status = 201, description = "Student registered with issued credential", body = RegisterStudentResponse),
        (status = 404, description = "Institution not found", body = crate::error::ErrorBody),
        (status = 409, description = "Hardware device already registered", body = crate::error::ErrorBody),
        (status = 422, description = "Validation failure", body = crate::error::ErrorBody),
    ),
    tag = "students"
)]
async fn register_student(
    State(state): State<AppState>,
    body: Result<Json<RegisterStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterStudentResponse>), AppError> {
    let req = extract_validated_json(body)?;

    let institution_id = InstitutionId(req.school_id);
    if state.registry().institution(institution_id)?.is_none() {
        return Err(AppError::NotFound(format!(
            "{institution_id} does not exist"
        )));
    }

    let hardware_id = req.device_id.map(HardwareId);
    let student = Student::new(req.name, institution_id, hardware_id.clone())?;
    let student_id = student.id;

    let token = sgate_credential::encode(&CredentialPayload {
        institution_id,
        student_id,
        hardware_id,
    })?;

    state.registry().insert_student(student)?;
    state
        .registry()
        .attach_credential(student_id, token.clone())?;
    tracing::info!(student = %student_id, institution = %institution_id, "student registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterStudentResponse {
            message: "Student registered successfully".to_string(),
            student_id: *student_id.as_uuid(),
            qr_code: token.into_string(),
        }),
    ))
}
