//! Receipt processing and points lookup service.

use std::sync::Arc;

use serde_json::json;

use crate::application::intake::{ReceiptSubmission, parse_receipt};
use crate::domain::repositories::PointsRepository;
use crate::domain::scoring::PointsEngine;
use crate::error::AppError;
use crate::utils::id_generator::IdGenerator;

/// Service for scoring submitted receipts and retrieving their points.
///
/// Only the score is kept; the parsed receipt is dropped once scored.
pub struct ReceiptService<P: PointsRepository, G: IdGenerator> {
    points_repository: Arc<P>,
    id_generator: Arc<G>,
    engine: PointsEngine,
}

impl<P: PointsRepository, G: IdGenerator> ReceiptService<P, G> {
    /// Creates a new receipt service using the standard points engine.
    pub fn new(points_repository: Arc<P>, id_generator: Arc<G>) -> Self {
        Self::with_engine(points_repository, id_generator, PointsEngine::new())
    }

    /// Creates a new receipt service with a preconfigured points engine.
    pub fn with_engine(points_repository: Arc<P>, id_generator: Arc<G>, engine: PointsEngine) -> Self {
        Self {
            points_repository,
            id_generator,
            engine,
        }
    }

    /// Parses, scores and stores a receipt submission.
    ///
    /// Returns the identifier under which the points were stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any price or the total is malformed.
    /// Returns [`AppError::Internal`] if the points cannot be stored.
    pub async fn process_receipt(&self, submission: ReceiptSubmission) -> Result<String, AppError> {
        let receipt = parse_receipt(submission).inspect_err(|e| {
            tracing::warn!("Rejected receipt: {}", e);
        })?;

        let breakdown = self.engine.breakdown(&receipt);
        let points = breakdown.total();

        let id = self.id_generator.generate();
        self.points_repository.put(&id, points).await?;

        tracing::debug!(id = %id, ?breakdown, "Receipt scored");
        metrics::counter!("receipts_processed_total").increment(1);

        Ok(id)
    }

    /// Retrieves the points stored for a receipt identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no receipt was stored under `id`.
    pub async fn get_points(&self, id: &str) -> Result<u64, AppError> {
        self.points_repository.get(id).await?.ok_or_else(|| {
            tracing::info!("Receipt not found: {}", id);
            AppError::not_found("Receipt not found", json!({ "id": id }))
        })
    }

    /// Number of receipts currently stored.
    pub async fn stored_count(&self) -> Result<usize, AppError> {
        self.points_repository.count().await
    }
}
