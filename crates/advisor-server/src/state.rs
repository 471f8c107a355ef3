//! Application State

use std::sync::Arc;

use lex_core::IntentRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Intent handlers, immutable after start-up
    pub registry: Arc<IntentRegistry>,
}

impl AppState {
    pub fn new(registry: IntentRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
