//! HTTP request handlers for API endpoints.

pub mod health;
pub mod receipts;

pub use health::health_handler;
pub use receipts::{get_points_handler, process_receipt_handler};
