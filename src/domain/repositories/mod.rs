//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for testing.
//!
//! - [`PointsRepository`] - Receipt score storage

pub mod points_repository;

pub use points_repository::PointsRepository;

#[cfg(test)]
pub use points_repository::MockPointsRepository;
