//! Domain Models
//!
//! The risk levels a user can pick and the fixed portfolio each one maps to.
//! The table is closed: every level has exactly one allocation and nothing is
//! added at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Text returned in place of an allocation when the risk level is unknown
pub const UNRECOGNIZED_RISK_LEVEL: &str = "risk level not recognized";

/// Risk tolerance chosen by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "None")]
    NoRisk,
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// All levels, least to most risky
    pub const ALL: [Self; 6] = [
        Self::NoRisk,
        Self::VeryLow,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::VeryHigh,
    ];

    /// Match a slot value against the canonical names.
    ///
    /// Surrounding whitespace is ignored; the comparison itself is
    /// case-sensitive, so "medium" is not a risk level.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|level| level.name() == value)
    }

    /// Canonical name as the bot presents it
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoRisk => "None",
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Recommended portfolio for this level
    pub const fn allocation(self) -> &'static str {
        match self {
            Self::NoRisk => "90% bonds (AGG), 10% cash in Money Market Savings Account, 0% equities",
            Self::VeryLow => "90% bonds (BIV), 5% Cash in Money Market Savings Account, 5% equities (BRK.A)",
            Self::Low => "80% bonds (AGG), 15% equities (AAPL), 5% Cash in Money Market Savings Account",
            Self::Medium => "40% bonds (AGG), 60% equities split equally across (SPY) (AAPL)",
            Self::High => "10% bonds (AGG), 90% equities split equally across (SPY) (AAPL) (TSLA)",
            Self::VeryHigh => {
                "0% bonds (AGG), 100% equities split equally across (SPY) (TSLA) (GME) (AAPL) (DIS) (AMC)"
            }
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RiskLevel {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AdvisorError::UnrecognizedRiskLevel(s.to_string()))
    }
}

/// Allocation text for a raw risk-level slot value.
///
/// Total: unknown values yield [`UNRECOGNIZED_RISK_LEVEL`].
pub fn recommendation_for(risk_level: &str) -> &'static str {
    risk_level
        .parse::<RiskLevel>()
        .map_or(UNRECOGNIZED_RISK_LEVEL, RiskLevel::allocation)
}
