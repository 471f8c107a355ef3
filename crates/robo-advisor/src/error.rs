//! Error Types for the Robo Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Slot {slot} is not a whole number: {value:?}")]
    InvalidNumber { slot: String, value: String },

    #[error("Risk level not recognized: {0:?}")]
    UnrecognizedRiskLevel(String),

    #[error("Invalid validation rules: {0}")]
    InvalidRules(String),
}
