use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Federal filing status.
///
/// Every bracket, deduction, and threshold lookup in the engine is keyed by
/// filing status, so an unrecognized status is a hard error rather than a
/// fallback (unlike state codes, which degrade to an approximation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
}

/// Error returned when a filing-status code cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filing status code: {0}")]
pub struct ParseFilingStatusError(pub String);

impl FilingStatus {
    pub const ALL: [FilingStatus; 4] = [
        Self::Single,
        Self::MarriedFilingJointly,
        Self::MarriedFilingSeparately,
        Self::HeadOfHousehold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::MarriedFilingJointly => "MFJ",
            Self::MarriedFilingSeparately => "MFS",
            Self::HeadOfHousehold => "HOH",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedFilingJointly => "Married Filing Jointly",
            Self::MarriedFilingSeparately => "Married Filing Separately",
            Self::HeadOfHousehold => "Head of Household",
        }
    }
}

impl FromStr for FilingStatus {
    type Err = ParseFilingStatusError;

    /// Parses either the short code ("MFJ") or a snake_case name
    /// ("married_jointly") as used by callers at the service boundary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" | "single" => Ok(Self::Single),
            "MFJ" | "married_jointly" | "married_filing_jointly" => Ok(Self::MarriedFilingJointly),
            "MFS" | "married_separately" | "married_filing_separately" => {
                Ok(Self::MarriedFilingSeparately)
            }
            "HOH" | "head_of_household" => Ok(Self::HeadOfHousehold),
            other => Err(ParseFilingStatusError(other.to_string())),
        }
    }
}
