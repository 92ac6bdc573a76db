//! In-memory implementation of the points repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::repositories::PointsRepository;
use crate::error::AppError;

/// Process-local points storage.
///
/// Scores live for the lifetime of the process and are lost on restart.
/// Readers share the lock; a write holds it only for the map insert.
#[derive(Debug, Default)]
pub struct InMemoryPointsRepository {
    points: RwLock<HashMap<String, u64>>,
}

impl InMemoryPointsRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PointsRepository for InMemoryPointsRepository {
    async fn put(&self, id: &str, points: u64) -> Result<(), AppError> {
        self.points.write().await.insert(id.to_string(), points);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<u64>, AppError> {
        Ok(self.points.read().await.get(id).copied())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.points.read().await.len())
    }
}
