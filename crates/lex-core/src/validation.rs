//! Validation Results
//!
//! Outcome of checking user-supplied slot values during dialog collection.

use serde::Serialize;

use crate::response::Message;

/// Result of validating a slot bag.
///
/// `violated_slot` and `message` are both set exactly when the result is
/// invalid; the constructors are the only way to build one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    violated_slot: Option<String>,
    message: Option<Message>,
}

impl ValidationResult {
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            violated_slot: None,
            message: None,
        }
    }

    pub fn invalid(violated_slot: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            violated_slot: Some(violated_slot.into()),
            message: Some(Message::plain_text(content)),
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn violated_slot(&self) -> Option<&str> {
        self.violated_slot.as_deref()
    }

    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Slot and prompt to re-elicit, if invalid
    pub fn violation(&self) -> Option<(&str, &Message)> {
        self.violated_slot.as_deref().zip(self.message.as_ref())
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}
