//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SchoolsGate Stack API",
        version = "0.1.0",
        description = "Presence verification and policy engine for institution-managed devices.\n\nProvides:\n- **Institution registration** with bootstrapped default application policies\n- **Student/device registration** with deterministic QR credential issuance\n- **Policy listing and best-effort bulk update** per institution\n- **Presence verification** from coordinate proximity and trusted-network match\n\nHealth probes (`/health/*`) are unauthenticated.",
        license(name = "AGPL-3.0-or-later")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server"),
    ),
    paths(
        crate::routes::institutions::create_school,
        crate::routes::students::register_student,
        crate::routes::policies::list_restrictions,
        crate::routes::policies::update_restrictions,
        crate::routes::presence::verify_location,
    ),
    components(schemas(
        crate::routes::institutions::CreateSchoolRequest,
        crate::routes::institutions::CreateSchoolResponse,
        crate::routes::students::RegisterStudentRequest,
        crate::routes::students::RegisterStudentResponse,
        crate::routes::policies::RestrictionView,
        crate::routes::policies::RestrictionUpdate,
        crate::routes::policies::UpdateRestrictionsResponse,
        crate::routes::presence::VerifyLocationRequest,
        crate::routes::presence::VerifyLocationResponse,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "schools", description = "Institution registration"),
        (name = "students", description = "Student/device registration and credential issuance"),
        (name = "restrictions", description = "Per-institution application policies"),
        (name = "presence", description = "On-premises verification"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
