//! Core domain entities.
//!
//! Entities are plain data structures without business logic; scoring lives in
//! [`crate::domain::scoring`].
//!
//! - [`Receipt`] - A parsed purchase receipt
//! - [`LineItem`] - A single purchased item on a receipt

pub mod receipt;

pub use receipt::{LineItem, Receipt};
