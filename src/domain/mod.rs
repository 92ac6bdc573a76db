//! Domain layer containing business entities and logic.
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//!
//! # Architecture
//!
//! - [`entities`] - Receipt data structures
//! - [`repositories`] - Data access trait definitions
//! - [`scoring`] - The points engine
//!
//! # Receipt Processing Flow
//!
//! 1. HTTP handler receives a receipt submission
//! 2. [`crate::application::intake`] parses amounts into a [`entities::Receipt`]
//! 3. [`scoring::PointsEngine`] computes the score
//! 4. The score is stored via [`repositories::PointsRepository`] under a fresh identifier

pub mod entities;
pub mod repositories;
pub mod scoring;
