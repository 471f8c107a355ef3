//! # lex-core
//!
//! Wire contract and intent dispatch for conversational bot code hooks.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐  IntentRequest   ┌────────────────┐            ┌───────────────┐
//! │ Bot platform │ ───────────────▶ │ IntentRegistry │ ─────────▶ │ IntentHandler │
//! │  (code hook) │ ◀─────────────── │   (dispatch)   │ ◀───────── │  (per intent) │
//! └──────────────┘  DialogResponse  └────────────────┘            └───────────────┘
//! ```
//!
//! A handler never mutates session attributes; it either re-elicits a slot,
//! delegates back to the platform, or closes the turn.

pub mod error;
pub mod event;
pub mod handler;
pub mod response;
pub mod validation;

pub use error::{FulfillmentError, Result};
pub use event::{CurrentIntent, IntentRequest, InvocationSource, SessionAttributes, Slots};
pub use handler::{IntentHandler, IntentRegistry, InvocationContext};
pub use response::{ContentType, DialogAction, DialogResponse, FulfillmentState, Message};
pub use validation::ValidationResult;
