//! Alternative Minimum Tax.
//!
//! Computes AMTI, the phased-out exemption, and the tentative minimum tax
//! (TMT). The final `AMT owed = max(0, TMT - regular tax)` subtraction
//! belongs to the aggregate calculator, which is the first place both values
//! are known.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_engine::calculations::amt::AmtCalculator;
//! use tax_engine::config::TaxYearConfig;
//! use tax_engine::models::FilingStatus;
//!
//! let config = TaxYearConfig::for_year(2025).unwrap();
//! let amt = AmtCalculator::new(&config);
//!
//! let result = amt.calculate(dec!(135000), dec!(0), FilingStatus::Single);
//!
//! // AMTI 135000 - 88100 exemption = 46900 base at 26%.
//! assert_eq!(result.tentative_minimum_tax, dec!(12194.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{max, round_half_up};
use crate::config::TaxYearConfig;
use crate::models::FilingStatus;

/// Intermediate and final AMT values for one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmtResult {
    /// AMT income: regular taxable income plus preference items.
    pub amti: Decimal,

    /// Exemption after the 25% phaseout, floored at zero.
    pub exemption: Decimal,

    /// max(0, AMTI - exemption).
    pub amt_base: Decimal,

    /// Two-tier tax on the AMT base. Compare against regular tax to find
    /// AMT owed.
    pub tentative_minimum_tax: Decimal,
}

/// AMT calculator for one tax year.
#[derive(Debug, Clone)]
pub struct AmtCalculator<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> AmtCalculator<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    /// Runs the AMT side of the calculation.
    ///
    /// `iso_bargain_element` is the year's AMT preference from ISO
    /// exercises; it enters AMTI here and nowhere in the regular base.
    pub fn calculate(
        &self,
        regular_taxable_income: Decimal,
        iso_bargain_element: Decimal,
        filing_status: FilingStatus,
    ) -> AmtResult {
        let params = &self.config.amt;

        let amti = max(regular_taxable_income, Decimal::ZERO)
            + max(iso_bargain_element, Decimal::ZERO);

        let base_exemption = *params.exemption.get(filing_status);
        let phaseout_threshold = *params.phaseout_threshold.get(filing_status);
        let reduction = max(amti - phaseout_threshold, Decimal::ZERO) * params.phaseout_rate;
        let exemption = max(round_half_up(base_exemption - reduction), Decimal::ZERO);

        let amt_base = max(round_half_up(amti - exemption), Decimal::ZERO);

        let rate_break = *params.rate_break.get(filing_status);
        let tentative_minimum_tax = if amt_base <= rate_break {
            round_half_up(amt_base * params.low_rate)
        } else {
            round_half_up(
                rate_break * params.low_rate + (amt_base - rate_break) * params.high_rate,
            )
        };

        debug!(
            %amti,
            %exemption,
            %tentative_minimum_tax,
            "computed tentative minimum tax"
        );

        AmtResult {
            amti,
            exemption,
            amt_base,
            tentative_minimum_tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn config() -> TaxYearConfig {
        TaxYearConfig::for_year(2025).unwrap()
    }

    #[test]
    fn amti_adds_bargain_element_to_regular_income() {
        let config = config();
        let amt = AmtCalculator::new(&config);

        let result = amt.calculate(dec!(135000), dec!(40000), FilingStatus::Single);

        assert_eq!(result.amti, dec!(175000));
    }

    #[test]
    fn exemption_is_full_below_phaseout_threshold() {
        let config = config();
        let amt = AmtCalculator::new(&config);

        let result = amt.calculate(dec!(300000), dec!(0), FilingStatus::Single);

        assert_eq!(result.exemption, dec!(88100.00));
    }

    #[test]
    fn exemption_phases_out_above_threshold() {
        let config = config();
        let amt = AmtCalculator::new(&config);

        // AMTI 700000: 25% of (700000 - 626350) = 18412.50 reduction.
        let result = amt.calculate(dec!(700000), dec!(0), FilingStatus::Single);

        assert_eq!(result.exemption, dec!(69687.50));
    }

    #[test]
    fn exemption_floors_at_zero_when_fully_phased_out() {
        let config = config();
        let amt = AmtCalculator::new(&config);

        let result = amt.calculate(dec!(2000000), dec!(0), FilingStatus::Single);

        assert_eq!(result.exemption, dec!(0.00));
        assert_eq!(result.amt_base, dec!(2000000.00));
    }

    #[test]
    fn tmt_uses_low_rate_below_rate_break() {
        let config = config();
        let amt = AmtCalculator::new(&config);

        let result = amt.calculate(dec!(135000), dec!(0), FilingStatus::Single);

        assert_eq!(result.amt_base, dec!(46900.00));
        assert_eq!(result.tentative_minimum_tax, dec!(12194.00));
    }

    #[test]
    fn tmt_uses_high_rate_above_rate_break() {
        let config = config();
        let amt = AmtCalculator::new(&config);

        // AMTI 400000 - 88100 = 311900 base: 239100 at 26%, 72800 at 28%.
        let result = amt.calculate(dec!(400000), dec!(0), FilingStatus::Single);

        assert_eq!(result.tentative_minimum_tax, dec!(82550.00));
    }

    #[test]
    fn zero_income_yields_zero_tmt() {
        let config = config();
        let amt = AmtCalculator::new(&config);

        let result = amt.calculate(dec!(0), dec!(0), FilingStatus::Single);

        assert_eq!(result.amt_base, dec!(0.00));
        assert_eq!(result.tentative_minimum_tax, dec!(0.00));
    }

    #[test]
    fn negative_regular_income_clamps_to_zero() {
        let config = config();
        let amt = AmtCalculator::new(&config);

        let result = amt.calculate(dec!(-50000), dec!(40000), FilingStatus::Single);

        assert_eq!(result.amti, dec!(40000));
    }
}
