//! Handlers for receipt processing and points lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::receipt::{PointsResponse, ProcessReceiptRequest, ProcessReceiptResponse};
use crate::api::extractors::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Scores a receipt and stores its points.
///
/// # Endpoint
///
/// `POST /receipts/process`
///
/// # Request Body
///
/// ```json
/// {
///   "retailer": "Target",
///   "purchaseDate": "2022-01-01",
///   "purchaseTime": "13:01",
///   "items": [
///     { "shortDescription": "Mountain Dew 12PK", "price": "6.49" }
///   ],
///   "total": "6.49"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "id": "7fb1377b-b223-49d9-a31a-5a02701dd310" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON, exceeds input
/// limits, or contains a malformed price or total. The error details name
/// the failing field (`items[i].price` or `total`).
pub async fn process_receipt_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProcessReceiptRequest>,
) -> Result<Json<ProcessReceiptResponse>, AppError> {
    let id = state
        .receipt_service
        .process_receipt(payload.into())
        .await?;

    Ok(Json(ProcessReceiptResponse { id }))
}

/// Returns the points awarded to a processed receipt.
///
/// # Endpoint
///
/// `GET /receipts/{id}/points`
///
/// # Response
///
/// ```json
/// { "points": 28 }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if no receipt was processed under `id`.
pub async fn get_points_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, AppError> {
    let points = state.receipt_service.get_points(&id).await?;

    Ok(Json(PointsResponse { points }))
}
