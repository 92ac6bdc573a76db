//! # Receipt Processor
//!
//! An HTTP service that scores purchase receipts and serves the points back by
//! receipt identifier.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Receipt entities, the points engine, and repository traits
//! - **Application Layer** ([`application`]) - Submission intake and the receipt service
//! - **Infrastructure Layer** ([`infrastructure`]) - Points storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Scoring
//!
//! Points are computed by [`domain::scoring::PointsEngine`]. Amounts are parsed
//! into integer cents by [`utils::money::parse_cents`], so no rule depends on
//! floating point rounding.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//!
//! curl -X POST localhost:8080/receipts/process \
//!   -H 'Content-Type: application/json' \
//!   -d '{"retailer":"Target","purchaseDate":"2022-01-01","purchaseTime":"13:01","items":[],"total":"1.00"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::intake::{ItemSubmission, ReceiptSubmission};
    pub use crate::application::services::ReceiptService;
    pub use crate::domain::entities::{LineItem, Receipt};
    pub use crate::domain::scoring::{PointsBreakdown, PointsEngine};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
