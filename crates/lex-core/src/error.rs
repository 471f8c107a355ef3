//! Error Types

use thiserror::Error;

/// Result type alias for code hook operations
pub type Result<T> = std::result::Result<T, FulfillmentError>;

/// Failures that abort a code hook invocation.
///
/// None of these produce a partial dialog response: the hosting platform sees
/// the error instead. Invalid user input is *not* an error; it becomes an
/// `ElicitSlot` response.
#[derive(Error, Debug)]
pub enum FulfillmentError {
    /// No handler registered for the intent
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    /// Invocation source other than dialog or fulfillment
    #[error("Invocation source {0} not supported")]
    UnsupportedInvocationSource(String),

    /// A slot required at fulfillment time was absent or empty
    #[error("Required slot {slot} missing for intent {intent}")]
    MissingSlot { intent: String, slot: String },

    /// Event or response (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FulfillmentError {
    /// Stable machine-readable code
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedIntent(_) => "UNSUPPORTED_INTENT",
            Self::UnsupportedInvocationSource(_) => "UNSUPPORTED_INVOCATION_SOURCE",
            Self::MissingSlot { .. } => "MISSING_SLOT",
            Self::Json(_) => "INVALID_EVENT",
        }
    }

    /// Whether the caller sent something malformed, as opposed to a bot
    /// configuration problem on our side
    pub const fn is_bad_request(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedIntent(name) => format!("The intent '{name}' is not handled by this bot."),
            Self::UnsupportedInvocationSource(source) => {
                format!("The invocation source '{source}' is not supported.")
            }
            Self::MissingSlot { slot, .. } => {
                format!("The request could not be fulfilled because '{slot}' was not provided.")
            }
            Self::Json(_) => "The request was not a valid code hook event.".into(),
        }
    }
}
