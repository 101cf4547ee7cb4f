//! Deterministic tax liability estimation for tech-industry compensation.
//!
//! The engine computes federal income tax (ordinary brackets plus stacked
//! long-term capital gains), AMT, FICA, NIIT, and state tax from a typed
//! income breakdown, entirely in exact decimal arithmetic. On top of the
//! core calculator sit equity-compensation classifiers (RSU, ISO, NSO,
//! ESPP), multi-state income sourcing, a red-flag analyzer, and a what-if
//! scenario engine.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_engine::{CalculationInput, IncomeBreakdown, calculate_taxes};
//!
//! let input = CalculationInput {
//!     income: IncomeBreakdown {
//!         wages: dec!(150000),
//!         ..IncomeBreakdown::default()
//!     },
//!     state: "CA".to_string(),
//!     ..CalculationInput::default()
//! };
//!
//! let summary = calculate_taxes(2025, &input)?;
//! assert_eq!(summary.federal_ordinary_tax, dec!(25247.00));
//! assert_eq!(summary.state_tax, dec!(9977.14));
//! # Ok::<(), tax_engine::ConfigError>(())
//! ```

pub mod calculations;
pub mod config;
pub mod models;

pub use calculations::aggregate::{CalculationInput, TaxCalculator};
pub use calculations::{equity, sourcing};
pub use calculations::red_flags::{RedFlagAnalyzer, RedFlagInput};
pub use calculations::scenarios::{ScenarioEngine, compare_scenarios};
pub use config::{ConfigError, TaxYearConfig};
pub use models::*;

/// Runs the full aggregate calculation for one tax year.
///
/// Fails only when the year has no configuration tables; everything else
/// degrades gracefully inside the calculator.
pub fn calculate_taxes(
    tax_year: i32,
    input: &CalculationInput,
) -> Result<TaxSummary, ConfigError> {
    let config = TaxYearConfig::for_year(tax_year)?;
    Ok(TaxCalculator::new(&config).calculate(input))
}

/// Runs red-flag analysis for one tax year.
pub fn analyze_red_flags(
    tax_year: i32,
    input: &RedFlagInput,
) -> Result<RedFlagReport, ConfigError> {
    let config = TaxYearConfig::for_year(tax_year)?;
    Ok(RedFlagAnalyzer::new(&config).analyze(input))
}
