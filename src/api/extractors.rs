//! Request extractors with API-shaped error responses.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that also runs `validator` rules.
///
/// Malformed bodies and failed validation both become
/// [`AppError::Validation`], so clients always get the standard error shape.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate()?;

        Ok(Self(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let message = match &rejection {
        JsonRejection::JsonDataError(_) => "Invalid JSON data",
        JsonRejection::JsonSyntaxError(_) => "JSON syntax error",
        JsonRejection::MissingJsonContentType(_) => {
            "Missing 'Content-Type: application/json' header"
        }
        _ => "Invalid request body",
    };

    tracing::warn!("Invalid request body: {}", rejection.body_text());

    AppError::bad_request(message, json!({ "reason": rejection.body_text() }))
}
