//! Intent Handlers
//!
//! One handler per intent, registered by name. The registry is the dispatcher
//! the hosting platform calls into.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{FulfillmentError, Result};
use crate::event::IntentRequest;
use crate::response::DialogResponse;

/// Execution context supplied by the host alongside the event
#[derive(Clone, Debug, Default)]
pub struct InvocationContext {
    /// Host-assigned id, only used to correlate logs
    pub request_id: Option<String>,
}

impl InvocationContext {
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
        }
    }
}

/// Handler trait - implement to serve an intent
pub trait IntentHandler: Send + Sync {
    /// Intent name this handler answers to
    fn intent_name(&self) -> &str;

    /// Produce the dialog response for one code hook invocation
    fn handle(&self, request: &IntentRequest) -> Result<DialogResponse>;
}

/// Registry for intent handlers
pub struct IntentRegistry {
    handlers: HashMap<String, Arc<dyn IntentHandler>>,
}

impl Default for IntentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under its intent name
    pub fn register<H: IntentHandler + 'static>(&mut self, handler: H) {
        self.register_shared(Arc::new(handler));
    }

    /// Register a shared handler
    pub fn register_shared(&mut self, handler: Arc<dyn IntentHandler>) {
        self.handlers.insert(handler.intent_name().to_string(), handler);
    }

    /// Get a handler by intent name
    pub fn get(&self, intent_name: &str) -> Option<Arc<dyn IntentHandler>> {
        self.handlers.get(intent_name).cloned()
    }

    /// Route a request to the handler for its intent
    pub fn dispatch(&self, request: &IntentRequest) -> Result<DialogResponse> {
        self.dispatch_with_context(request, &InvocationContext::default())
    }

    /// Route a request, tagging log output with the host's context
    pub fn dispatch_with_context(
        &self,
        request: &IntentRequest,
        context: &InvocationContext,
    ) -> Result<DialogResponse> {
        let intent_name = request.intent_name();
        let span = tracing::info_span!(
            "dispatch",
            intent = intent_name,
            source = %request.invocation_source,
            request_id = context.request_id.as_deref().unwrap_or("-"),
        );
        let _guard = span.enter();

        let Some(handler) = self.get(intent_name) else {
            tracing::warn!("No handler registered for intent {}", intent_name);
            return Err(FulfillmentError::UnsupportedIntent(intent_name.to_string()));
        };

        let response = handler.handle(request)?;
        tracing::info!(action = response.dialog_action.kind(), "Intent handled");
        Ok(response)
    }

    /// Registered intent names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
