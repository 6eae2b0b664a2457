//! # Policy Listing and Bulk Update
//!
//! Routes:
//! - GET /api/restrictions/{school_id} — all policy entries for an
//!   institution. Unknown institutions yield an empty list.
//! - PUT /api/restrictions/{school_id} — best-effort bulk update of allow
//!   flags. Unknown application names are skipped, not failed.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use sgate_core::{InstitutionId, PolicyEntry};
use sgate_policy::PolicyUpdate;

use crate::error::AppError;
use crate::extractors::extract_validated_json;
use crate::state::AppState;

/// Build the policy router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/restrictions/{school_id}",
        get(list_restrictions).put(update_restrictions),
    )
}

/// One policy entry as presented to device tooling.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestrictionView {
    /// Application display name.
    pub app_name: String,
    /// Package/bundle identifier.
    pub package_name: Option<String>,
    /// Whether the application is allowed on premises.
    pub is_allowed: bool,
}

impl From<PolicyEntry> for RestrictionView {
    fn from(entry: PolicyEntry) -> Self {
        Self {
            app_name: entry.app_name,
            package_name: entry.package_name,
            is_allowed: entry.allowed,
        }
    }
}

/// One tuple of a bulk update batch.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RestrictionUpdate {
    /// Application name, matched exactly.
    pub app_name: String,
    /// The new allow flag.
    pub is_allowed: bool,
}

/// Response after a bulk update.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateRestrictionsResponse {
    pub message: String,
    /// How many entries were actually updated. Skipped tuples are not
    /// counted and not errors.
    pub updated: usize,
}

#[utoipa::path(
    get,
    path = "/api/restrictions/{school_id}",
    params(("school_id" = Uuid, Path, description = "Institution identifier")),
    responses(
        (status = 200, description = "Policy entries for the institution", body = [RestrictionView]),
    ),
    tag = "restrictions"
)]
async fn list_restrictions(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
) -> Result<Json<Vec<RestrictionView>>, AppError> {
    let entries = sgate_policy::list(state.registry(), InstitutionId(school_id))?;
    Ok(Json(entries.into_iter().map(RestrictionView::from).collect()))
}

#[utoipa::path(
    put,
    path = "/api/restrictions/{school_id}",
    params(("school_id" = Uuid, Path, description = "Institution identifier")),
    request_body = Vec<RestrictionUpdate>,
    responses(
        (status = 200, description = "Batch applied", body = UpdateRestrictionsResponse),
        (status = 422, description = "Malformed batch", body = crate::error::ErrorBody),
    ),
    tag = "restrictions"
)]
async fn update_restrictions(
    State(state): State<AppState>,
    Path(school_id): Path<Uuid>,
    body: Result<Json<Vec<RestrictionUpdate>>, JsonRejection>,
) -> Result<Json<UpdateRestrictionsResponse>, AppError> {
    let batch: Vec<PolicyUpdate> = extract_validated_json(body)?
        .into_iter()
        .map(|tuple| PolicyUpdate {
            app_name: tuple.app_name,
            allowed: tuple.is_allowed,
        })
        .collect();

    let updated = sgate_policy::update(state.registry(), InstitutionId(school_id), &batch)?;
    Ok(Json(UpdateRestrictionsResponse {
        message: "Restrictions updated successfully".to_string(),
        updated,
    }))
}
