//! Server state management.

use std::sync::Arc;

use trivia_core::TriviaStore;

/// Shared application state.
///
/// The store is injected at construction and shared across handlers;
/// there is no global connection handle and no per-request caching of
/// question state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn TriviaStore>,
}

impl AppState {
    /// Create application state around a store.
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Borrow the store for a request.
    pub fn store(&self) -> &dyn TriviaStore {
        self.store.as_ref()
    }
}
