//! Code Hook Events
//!
//! The request record the bot platform sends on every dialog turn. Field names
//! follow the platform's JSON contract exactly.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Slot name → collected value. Values stay `None` until the user supplies them.
pub type Slots = BTreeMap<String, Option<String>>;

/// Opaque per-conversation state threaded through by the platform
pub type SessionAttributes = BTreeMap<String, String>;

/// Which phase of dialog processing triggered the call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvocationSource {
    /// Slots are still being collected
    DialogCodeHook,
    /// All slots are filled, produce the final answer
    FulfillmentCodeHook,
    /// Anything else the platform might send; rejected by handlers
    Other(String),
}

impl From<String> for InvocationSource {
    fn from(value: String) -> Self {
        match value.as_str() {
            "DialogCodeHook" => Self::DialogCodeHook,
            "FulfillmentCodeHook" => Self::FulfillmentCodeHook,
            _ => Self::Other(value),
        }
    }
}

impl From<InvocationSource> for String {
    fn from(source: InvocationSource) -> Self {
        match source {
            InvocationSource::DialogCodeHook => "DialogCodeHook".into(),
            InvocationSource::FulfillmentCodeHook => "FulfillmentCodeHook".into(),
            InvocationSource::Other(value) => value,
        }
    }
}

impl fmt::Display for InvocationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DialogCodeHook => write!(f, "DialogCodeHook"),
            Self::FulfillmentCodeHook => write!(f, "FulfillmentCodeHook"),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Bot that raised the event
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// The intent the platform recognized for this turn
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    /// Intent name (e.g., "RecommendPortfolio")
    pub name: String,

    /// Slot values collected so far
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: Slots,

    /// "None", "Confirmed" or "Denied"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,

    /// Raw resolution details, never interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_details: Option<serde_json::Value>,
}

impl CurrentIntent {
    /// Value of a slot, if the user has supplied one
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(Option::as_deref)
    }
}

/// Incoming code hook event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub invocation_source: InvocationSource,

    pub current_intent: CurrentIntent,

    #[serde(default, deserialize_with = "null_as_default")]
    pub session_attributes: SessionAttributes,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub request_attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dialog_mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotInfo>,
}

impl IntentRequest {
    pub fn new(invocation_source: InvocationSource, intent_name: impl Into<String>) -> Self {
        Self {
            invocation_source,
            current_intent: CurrentIntent {
                name: intent_name.into(),
                ..CurrentIntent::default()
            },
            session_attributes: SessionAttributes::new(),
            request_attributes: BTreeMap::new(),
            message_version: None,
            user_id: None,
            input_transcript: None,
            output_dialog_mode: None,
            bot: None,
        }
    }

    /// Set a slot value
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.current_intent.slots.insert(name.into(), Some(value.into()));
        self
    }

    /// Declare a slot that has not been filled yet
    pub fn with_empty_slot(mut self, name: impl Into<String>) -> Self {
        self.current_intent.slots.insert(name.into(), None);
        self
    }

    pub fn with_session_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.session_attributes.insert(key.into(), value.into());
        self
    }

    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    pub fn slots(&self) -> &Slots {
        &self.current_intent.slots
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent.slot(name)
    }
}

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
