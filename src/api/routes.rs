//! API route configuration.

use crate::api::handlers::{get_points_handler, process_receipt_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Receipt routes.
///
/// # Endpoints
///
/// - `POST /receipts/process`     - Score a receipt, returns its identifier
/// - `GET  /receipts/{id}/points` - Points awarded to a processed receipt
pub fn receipt_routes() -> Router<AppState> {
    Router::new()
        .route("/receipts/process", post(process_receipt_handler))
        .route("/receipts/{id}/points", get(get_points_handler))
}
