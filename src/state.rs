//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ReceiptService;
use crate::infrastructure::persistence::InMemoryPointsRepository;
use crate::utils::id_generator::UuidGenerator;

/// Receipt service wired with the production store and identifier generator.
pub type AppReceiptService = ReceiptService<InMemoryPointsRepository, UuidGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub receipt_service: Arc<AppReceiptService>,
}

impl AppState {
    pub fn new(receipt_service: Arc<AppReceiptService>) -> Self {
        Self { receipt_service }
    }

    /// Builds state backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        let service = ReceiptService::new(
            Arc::new(InMemoryPointsRepository::new()),
            Arc::new(UuidGenerator),
        );
        Self::new(Arc::new(service))
    }
}
