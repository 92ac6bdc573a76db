//! Repository trait for receipt points storage.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing receipt scores by identifier.
///
/// A completed `put` must be visible to every later `get`. Writes to different
/// identifiers must not interfere with one another. Identifiers are generated
/// fresh for each receipt, so concurrent writes to the same key are not
/// expected.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryPointsRepository`] - Process-local map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_points.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointsRepository: Send + Sync {
    /// Stores the points for a receipt identifier, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store is unavailable.
    async fn put(&self, id: &str, points: u64) -> Result<(), AppError>;

    /// Looks up the points for a receipt identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(points))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store is unavailable.
    async fn get(&self, id: &str) -> Result<Option<u64>, AppError>;

    /// Counts stored receipts. Used by the health check.
    async fn count(&self) -> Result<usize, AppError>;
}
