//! Tax calculation modules.
//!
//! Each submodule owns one layer of the computation: bracket walks, AMT,
//! payroll taxes, state modules, equity compensation, multi-state
//! sourcing, the aggregate orchestrator, red-flag analysis, and what-if
//! scenarios.

pub mod aggregate;
pub mod amt;
pub mod brackets;
pub mod common;
pub mod equity;
pub mod payroll;
pub mod red_flags;
pub mod scenarios;
pub mod sourcing;
pub mod state;

pub use aggregate::{CalculationInput, TaxCalculator};
pub use red_flags::{RedFlagAnalyzer, RedFlagInput};
pub use scenarios::{ScenarioEngine, compare_scenarios};
