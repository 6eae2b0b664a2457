//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps domain errors from the engine crates and the registry to HTTP
//! status codes with JSON error bodies. Internal error details are logged
//! for operators but never returned to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use sgate_core::CoreError;
use sgate_credential::CredentialError;
use sgate_policy::PolicyError;
use sgate_registry::RegistryError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request validation failed (422). Both body deserialization failures
    /// and business-rule violations land here — only malformed HTTP
    /// framing is 400, and Axum produces that before a handler runs.
    #[error("validation error: {0}")]
    Validation(String),

    /// Conflict with existing state — duplicate hardware device (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal server error (500). Message is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        if matches!(self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(_) | CoreError::CoordinateOutOfRange { .. } => {
                Self::Validation(err.to_string())
            }
            CoreError::FloatRejected(_) | CoreError::Serialization(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::DuplicateHardwareDevice(_)
            | RegistryError::CredentialAlreadyIssued(_) => Self::Conflict(err.to_string()),
            RegistryError::UnknownStudent(_)
            | RegistryError::UnknownPolicyEntry(_)
            | RegistryError::Storage(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<PolicyError> for AppError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::InstitutionNotFound(id) => Self::NotFound(format!("{id} does not exist")),
            PolicyError::InvalidInput(_) => Self::Validation(err.to_string()),
            PolicyError::Registry(inner) => inner.into(),
        }
    }
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::InvalidPayload(_) => Self::Validation(err.to_string()),
            CredentialError::Canonicalization(inner) => Self::Internal(inner.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::NotFound("x".into()).status_and_code().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("x".into()).status_and_code().0,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Conflict("x".into()).status_and_code().0,
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Internal("x".into()).status_and_code().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_hardware_maps_to_conflict() {
        let err: AppError = RegistryError::DuplicateHardwareDevice(sgate_core::HardwareId(
            "TABLET-042".to_string(),
        ))
        .into();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_policy_not_found_maps_to_404() {
        let err: AppError =
            PolicyError::InstitutionNotFound(sgate_core::InstitutionId::new()).into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_invalid_payload_maps_to_validation() {
        let err: AppError = CredentialError::InvalidPayload("nil".into()).into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
