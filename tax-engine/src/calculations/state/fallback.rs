//! Flat-rate estimator for states without a dedicated module.
//!
//! Known no-income-tax states return zero; a short table of flat-tax
//! states uses their published rate; everything else uses the configured
//! default. Every non-zero result is flagged `approximate` and carries a
//! warning, because this is an acknowledged estimate, not a calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use super::{StateTaxModule, StateTaxResult};
use crate::calculations::common::{max, round_half_up};
use crate::config::TaxYearConfig;
use crate::models::{FilingStatus, IncomeBreakdown, StateOptions};

/// States with no wage income tax (WA has its own module for the
/// capital-gains excise).
const NO_INCOME_TAX: [&str; 8] = ["AK", "FL", "NV", "NH", "SD", "TN", "TX", "WY"];

/// Published flat rates for states that have one.
fn flat_rate(code: &str) -> Option<Decimal> {
    let rate = match code {
        "AZ" => dec!(0.025),
        "CO" => dec!(0.044),
        "GA" => dec!(0.0539),
        "ID" => dec!(0.058),
        "IL" => dec!(0.0495),
        "IN" => dec!(0.0305),
        "KY" => dec!(0.04),
        "MA" => dec!(0.05),
        "MI" => dec!(0.0425),
        "NC" => dec!(0.045),
        "PA" => dec!(0.0307),
        "UT" => dec!(0.0465),
        _ => return None,
    };
    Some(rate)
}

pub struct Fallback {
    code: String,
}

impl Fallback {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl StateTaxModule for Fallback {
    fn code(&self) -> &str {
        &self.code
    }

    fn calculate(
        &self,
        income: &IncomeBreakdown,
        filing_status: FilingStatus,
        _options: &StateOptions,
        config: &TaxYearConfig,
    ) -> StateTaxResult {
        let mut result = StateTaxResult::zero(&self.code);

        if self.code.is_empty() {
            result
                .warnings
                .push("no state specified; state tax not calculated".to_string());
            return result;
        }

        if NO_INCOME_TAX.contains(&self.code.as_str()) {
            return result;
        }

        let rate = flat_rate(&self.code).unwrap_or(config.fallback_default_rate);

        // Approximation: flat rate on income less the federal standard
        // deduction, since the state's own deduction is not modeled.
        let deduction = *config.standard_deduction.get(filing_status);
        let taxable = max(income.total_income() - deduction, Decimal::ZERO);
        let tax = round_half_up(taxable * rate);

        warn!(state = %self.code, %rate, "using flat-rate state tax approximation");

        result.tax = tax;
        result.marginal_rate = if taxable > Decimal::ZERO {
            rate
        } else {
            Decimal::ZERO
        };
        result.approximate = true;
        result.warnings.push(format!(
            "{} state tax is a flat-rate approximation at {rate}",
            self.code
        ));
        result
    }
}
