//! Application state for dependency injection.

use std::sync::Arc;

use common::auth::SubjectGuard;

use crate::store::AccountStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountStore>,
    pub guard: SubjectGuard,
}

impl AppState {
    /// Create new app state.
    pub fn new(accounts: Arc<dyn AccountStore>, guard: SubjectGuard) -> Self {
        Self { accounts, guard }
    }
}
