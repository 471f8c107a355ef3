//! # robo-advisor
//!
//! Code hook for a portfolio-recommendation bot. The bot collects a first
//! name, age, investment amount and risk level; this crate validates the
//! numbers while they are collected and answers with a canned allocation once
//! the platform asks for fulfillment.
//!
//! ## Allocations by Risk Level
//!
//! ```text
//! ┌───────────┬────────────────────────────────────────────────────────────┐
//! │ None      │ 90% bonds, 10% cash                                        │
//! │ Very Low  │ 90% bonds, 5% cash, 5% equities                            │
//! │ Low       │ 80% bonds, 15% equities, 5% cash                           │
//! │ Medium    │ 40% bonds, 60% equities                                    │
//! │ High      │ 10% bonds, 90% equities                                    │
//! │ Very High │ 100% equities                                              │
//! └───────────┴────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every invocation is a pure function of the event: nothing is stored between
//! calls and session attributes are returned untouched.

pub mod error;
pub mod model;
pub mod portfolio;
pub mod validation;

pub use error::{AdvisorError, Result};
pub use model::{RiskLevel, UNRECOGNIZED_RISK_LEVEL, recommendation_for};
pub use portfolio::RecommendPortfolioHandler;
pub use validation::{ValidationRules, validate_data};

use lex_core::{DialogResponse, IntentRegistry, IntentRequest};

/// Registry with every intent this bot serves, using default rules
pub fn registry() -> IntentRegistry {
    registry_with_rules(ValidationRules::default())
}

/// Registry with every intent this bot serves
pub fn registry_with_rules(rules: ValidationRules) -> IntentRegistry {
    let mut registry = IntentRegistry::new();
    registry.register(RecommendPortfolioHandler::new(rules));
    registry
}

/// Entry point: route one code hook event to its intent handler.
///
/// Builds a fresh registry per call. Long-lived hosts should build
/// [`registry`] once and call [`IntentRegistry::dispatch`] on it, as
/// `advisor-server` does.
pub fn handle_event(event: &IntentRequest) -> lex_core::Result<DialogResponse> {
    registry().dispatch(event)
}

/// Entry point for raw JSON events, returning the response JSON
pub fn handle_event_json(event: &str) -> lex_core::Result<String> {
    let request: IntentRequest = serde_json::from_str(event)?;
    let response = handle_event(&request)?;
    Ok(serde_json::to_string(&response)?)
}
