//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations: it parses raw submissions,
//! invokes the points engine and coordinates repository calls, providing a
//! clean API for HTTP handlers.
//!
//! - [`intake`] - Submission parsing and normalization
//! - [`services::receipt_service::ReceiptService`] - Receipt scoring and points lookup

pub mod intake;
pub mod services;
