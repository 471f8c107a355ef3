//! Slot Validation
//!
//! Checks `age` and `investmentAmount` while the bot is still collecting
//! slots. Age is checked first and the first violation wins.

use lex_core::ValidationResult;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

pub const AGE_SLOT: &str = "age";
pub const INVESTMENT_AMOUNT_SLOT: &str = "investmentAmount";

/// Bounds applied to collected slot values.
///
/// Deserialization goes through [`ValidationRules::new`], so a loaded rule set
/// is checked the same way as one built in code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawValidationRules")]
pub struct ValidationRules {
    /// Exclusive upper age bound; the lower bound is always "greater than 0"
    pub max_age: i64,

    /// Smallest accepted investment, in whole dollars
    pub min_investment: i64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            max_age: 65,
            min_investment: 5000,
        }
    }
}

/// Unchecked wire form of [`ValidationRules`]
#[derive(Deserialize)]
struct RawValidationRules {
    max_age: i64,
    min_investment: i64,
}

impl TryFrom<RawValidationRules> for ValidationRules {
    type Error = AdvisorError;

    fn try_from(raw: RawValidationRules) -> Result<Self> {
        Self::new(raw.max_age, raw.min_investment)
    }
}

impl ValidationRules {
    pub fn new(max_age: i64, min_investment: i64) -> Result<Self> {
        if max_age <= 1 {
            return Err(AdvisorError::InvalidRules(format!(
                "max age must leave at least one valid age, got {max_age}"
            )));
        }
        if min_investment < 0 {
            return Err(AdvisorError::InvalidRules(format!(
                "minimum investment cannot be negative, got {min_investment}"
            )));
        }
        Ok(Self {
            max_age,
            min_investment,
        })
    }

    /// Validate whichever of the two slots are present
    pub fn validate(&self, age: Option<&str>, investment_amount: Option<&str>) -> ValidationResult {
        age.and_then(|raw| self.check_age(raw))
            .or_else(|| investment_amount.and_then(|raw| self.check_investment_amount(raw)))
            .unwrap_or_else(ValidationResult::valid)
    }

    fn check_age(&self, raw: &str) -> Option<ValidationResult> {
        let age = match parse_whole_number(AGE_SLOT, raw) {
            Ok(age) => age,
            Err(e) => {
                tracing::debug!("{}", e);
                return Some(ValidationResult::invalid(
                    AGE_SLOT,
                    "Please enter your age as a whole number, for example 30.",
                ));
            }
        };

        let bound = if age <= 0 {
            "greater than 0".to_string()
        } else if age >= self.max_age {
            format!("less than {}", self.max_age)
        } else {
            return None;
        };

        tracing::debug!(age, max_age = self.max_age, "Age out of range");
        Some(ValidationResult::invalid(
            AGE_SLOT,
            format!(
                "This tool is designed for individuals between 0 and {} years of age, please enter an age {bound}.",
                self.max_age
            ),
        ))
    }

    fn check_investment_amount(&self, raw: &str) -> Option<ValidationResult> {
        let amount = match parse_whole_number(INVESTMENT_AMOUNT_SLOT, raw) {
            Ok(amount) => amount,
            Err(e) => {
                tracing::debug!("{}", e);
                return Some(ValidationResult::invalid(
                    INVESTMENT_AMOUNT_SLOT,
                    "Please enter the amount you want to invest as a whole number of dollars, for example 10000.",
                ));
            }
        };

        if amount >= self.min_investment {
            return None;
        }

        tracing::debug!(amount, min = self.min_investment, "Investment below minimum");
        Some(ValidationResult::invalid(
            INVESTMENT_AMOUNT_SLOT,
            format!(
                "Please provide a greater amount, the minimum investment amount is ${}.",
                group_thousands(self.min_investment)
            ),
        ))
    }
}

/// Validate with the default rules
pub fn validate_data(age: Option<&str>, investment_amount: Option<&str>) -> ValidationResult {
    ValidationRules::default().validate(age, investment_amount)
}

/// Parse an integer slot value, tolerating surrounding whitespace and a sign
fn parse_whole_number(slot: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| AdvisorError::InvalidNumber {
        slot: slot.to_string(),
        value: raw.to_string(),
    })
}

/// 5000 → "5,000"
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
