//! Per-year immutable tax constants.
//!
//! A [`TaxYearConfig`] is constructed once via [`TaxYearConfig::for_year`]
//! and passed explicitly into every calculation. Nothing in the engine reads
//! mutable global state, which keeps concurrent calls trivially safe.

mod year_2025;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::brackets::{BracketSchedule, BracketScheduleError};
use crate::models::FilingStatus;

/// Errors that can occur while building a tax-year configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No constant tables exist for the requested year.
    #[error("unsupported tax year: {0}")]
    UnsupportedYear(i32),

    /// A constant bracket table failed validation.
    #[error("invalid bracket table: {0}")]
    InvalidBrackets(#[from] BracketScheduleError),
}

/// One value per filing status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerStatus<T> {
    pub single: T,
    pub married_jointly: T,
    pub married_separately: T,
    pub head_of_household: T,
}

impl<T> PerStatus<T> {
    pub fn get(&self, status: FilingStatus) -> &T {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedFilingJointly => &self.married_jointly,
            FilingStatus::MarriedFilingSeparately => &self.married_separately,
            FilingStatus::HeadOfHousehold => &self.head_of_household,
        }
    }
}

impl<T: Clone> PerStatus<T> {
    /// Same value for every filing status.
    pub fn uniform(value: T) -> Self {
        Self {
            single: value.clone(),
            married_jointly: value.clone(),
            married_separately: value.clone(),
            head_of_household: value,
        }
    }
}

/// AMT constants for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmtParameters {
    pub exemption: PerStatus<Decimal>,
    pub phaseout_threshold: PerStatus<Decimal>,
    /// Fraction of AMTI above the phaseout threshold that reduces the
    /// exemption (25%).
    pub phaseout_rate: Decimal,
    pub low_rate: Decimal,
    pub high_rate: Decimal,
    /// AMT base above which the high rate applies.
    pub rate_break: PerStatus<Decimal>,
}

/// California tables: progressive brackets (mental-health surtax folded
/// into the brackets above $1M), its own standard deduction, and SDI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaliforniaTables {
    pub brackets: PerStatus<BracketSchedule>,
    pub standard_deduction: PerStatus<Decimal>,
    /// Flat, uncapped State Disability Insurance rate on wages.
    pub sdi_rate: Decimal,
}

/// New York tables: state brackets, NYC resident brackets, Yonkers
/// surcharge, and the MCTMT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewYorkTables {
    pub brackets: PerStatus<BracketSchedule>,
    pub standard_deduction: PerStatus<Decimal>,
    pub nyc_brackets: PerStatus<BracketSchedule>,
    /// Yonkers resident surcharge as a fraction of net state tax.
    pub yonkers_surcharge_rate: Decimal,
    /// MCTMT rate on self-employment earnings in the district.
    pub mctmt_rate: Decimal,
    /// MCTD self-employment earnings below this owe no MCTMT.
    pub mctmt_threshold: Decimal,
}

/// Washington capital-gains excise constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WashingtonTables {
    pub excise_rate: Decimal,
    /// Annual per-return exclusion below which no excise is owed.
    pub excise_threshold: Decimal,
}

/// Immutable constants for one tax year. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    pub tax_year: i32,

    pub federal_brackets: PerStatus<BracketSchedule>,
    pub ltcg_brackets: PerStatus<BracketSchedule>,
    pub standard_deduction: PerStatus<Decimal>,

    pub ss_wage_base: Decimal,
    pub ss_tax_rate: Decimal,
    pub medicare_tax_rate: Decimal,
    pub additional_medicare_rate: Decimal,
    pub additional_medicare_threshold: PerStatus<Decimal>,

    pub niit_rate: Decimal,
    pub niit_threshold: PerStatus<Decimal>,

    pub amt: AmtParameters,

    pub california: CaliforniaTables,
    pub new_york: NewYorkTables,
    pub washington: WashingtonTables,

    /// Flat rate used by the fallback estimator when a state has no
    /// dedicated module and no entry in the known-rate table.
    pub fallback_default_rate: Decimal,

    /// Prior-year AGI above which the safe-harbor factor rises to 110%.
    pub safe_harbor_high_income_agi: Decimal,
}

impl TaxYearConfig {
    /// Builds the configuration for a supported tax year.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedYear`] for years without constant
    /// tables rather than guessing.
    pub fn for_year(year: i32) -> Result<Self, ConfigError> {
        match year {
            2025 => year_2025::build(),
            other => Err(ConfigError::UnsupportedYear(other)),
        }
    }
}
