//! # Request Extractors
//!
//! Normalizes Axum body rejections into the structured [`AppError`]
//! response format, so a malformed JSON body produces the same 422 shape
//! as a semantic validation failure.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Unwrap a `Json<T>` extraction, converting rejections to 422 responses.
pub fn extract_validated_json<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AppError::Validation(rejection.body_text())),
    }
}
