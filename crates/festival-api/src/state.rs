//! Shared application state.

use std::sync::Arc;

use festival_core::repository::EntityRepository;
use festival_forms::domain::record::FestivalRecord;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Festival record storage.
    pub festival_repository: Arc<dyn EntityRepository<FestivalRecord>>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(festival_repository: Arc<dyn EntityRepository<FestivalRecord>>) -> Self {
        Self {
            festival_repository,
        }
    }
}
