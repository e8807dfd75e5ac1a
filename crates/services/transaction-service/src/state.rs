//! Application state for dependency injection.

use std::sync::Arc;

use common::auth::SubjectGuard;

use crate::store::TransactionStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub transactions: Arc<dyn TransactionStore>,
    pub guard: SubjectGuard,
}

impl AppState {
    /// Create new app state.
    pub fn new(transactions: Arc<dyn TransactionStore>, guard: SubjectGuard) -> Self {
        Self {
            transactions,
            guard,
        }
    }
}
