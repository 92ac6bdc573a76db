//! Points repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryPointsRepository`] - Process-local receipt score storage

pub mod in_memory_points_repository;

pub use in_memory_points_repository::InMemoryPointsRepository;
