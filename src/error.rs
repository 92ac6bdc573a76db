//! Application error type and its HTTP representation.
//!
//! Every error response has the same JSON shape:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "validation_error",
//!     "message": "Invalid item price",
//!     "details": { "field": "items[1].price", "reason": "..." }
//!   }
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::intake::IntakeError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description included in error responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable description.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

impl From<IntakeError> for AppError {
    fn from(error: IntakeError) -> Self {
        match &error {
            IntakeError::InvalidAmount { field, source } => {
                let message = if field.is_total() {
                    "Invalid total price"
                } else {
                    "Invalid item price"
                };
                AppError::bad_request(
                    message,
                    json!({ "field": field.to_string(), "reason": source.to_string() }),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::intake::AmountField;
    use crate::utils::money::AmountError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x", json!({})).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::internal("x", json!({})).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_codes() {
        let info = AppError::not_found("Receipt not found", json!({ "id": "abc" })).to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Receipt not found");
        assert_eq!(info.details["id"], "abc");
    }

    #[test]
    fn test_intake_error_names_item_field() {
        let error: AppError = IntakeError::InvalidAmount {
            field: AmountField::Item(2),
            source: AmountError::InvalidCents("999".to_string()),
        }
        .into();

        let info = error.to_error_info();
        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "Invalid item price");
        assert_eq!(info.details["field"], "items[2].price");
    }

    #[test]
    fn test_intake_error_names_total_field() {
        let error: AppError = IntakeError::InvalidAmount {
            field: AmountField::Total,
            source: AmountError::InvalidDollars("abc".to_string()),
        }
        .into();

        let info = error.to_error_info();
        assert_eq!(info.message, "Invalid total price");
        assert_eq!(info.details["field"], "total");
    }
}
