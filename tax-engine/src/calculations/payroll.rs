//! Payroll (FICA) taxes and the Net Investment Income Tax.
//!
//! All four computations are pure functions of wages or investment income
//! plus filing status; the year config supplies only constants.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_engine::calculations::payroll::PayrollCalculator;
//! use tax_engine::config::TaxYearConfig;
//! use tax_engine::models::FilingStatus;
//!
//! let config = TaxYearConfig::for_year(2025).unwrap();
//! let payroll = PayrollCalculator::new(&config);
//!
//! assert_eq!(payroll.social_security_tax(dec!(150000)), dec!(9300.00));
//! assert_eq!(payroll.medicare_tax(dec!(150000)), dec!(2175.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{max, round_half_up};
use crate::config::TaxYearConfig;
use crate::models::FilingStatus;

/// The three payroll components for one filer's wages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    pub social_security_tax: Decimal,
    pub medicare_tax: Decimal,
    pub additional_medicare_tax: Decimal,
}

/// FICA and NIIT calculator for one tax year.
#[derive(Debug, Clone)]
pub struct PayrollCalculator<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> PayrollCalculator<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    /// All three payroll components at once.
    pub fn calculate(
        &self,
        wages: Decimal,
        filing_status: FilingStatus,
    ) -> PayrollResult {
        PayrollResult {
            social_security_tax: self.social_security_tax(wages),
            medicare_tax: self.medicare_tax(wages),
            additional_medicare_tax: self.additional_medicare_tax(wages, filing_status),
        }
    }

    /// Social Security: rate x min(wages, wage base). Strictly capped; no
    /// amount of wages above the base increases it.
    pub fn social_security_tax(&self, wages: Decimal) -> Decimal {
        let taxable = max(wages, Decimal::ZERO).min(self.config.ss_wage_base);
        round_half_up(taxable * self.config.ss_tax_rate)
    }

    /// Medicare: flat rate on all wages, uncapped.
    pub fn medicare_tax(&self, wages: Decimal) -> Decimal {
        round_half_up(max(wages, Decimal::ZERO) * self.config.medicare_tax_rate)
    }

    /// Additional Medicare: rate on wages above the filing-status threshold.
    pub fn additional_medicare_tax(
        &self,
        wages: Decimal,
        filing_status: FilingStatus,
    ) -> Decimal {
        let threshold = *self.config.additional_medicare_threshold.get(filing_status);
        let excess = max(wages - threshold, Decimal::ZERO);
        round_half_up(excess * self.config.additional_medicare_rate)
    }

    /// NIIT: rate x min(net investment income, MAGI excess over the
    /// filing-status threshold). Zero at or below the threshold.
    ///
    /// MAGI is approximated by total income; no above-the-line adjustments
    /// are modeled.
    pub fn niit(
        &self,
        net_investment_income: Decimal,
        magi: Decimal,
        filing_status: FilingStatus,
    ) -> Decimal {
        let threshold = *self.config.niit_threshold.get(filing_status);
        let magi_excess = max(magi - threshold, Decimal::ZERO);
        let taxable = max(net_investment_income, Decimal::ZERO).min(magi_excess);
        round_half_up(taxable * self.config.niit_rate)
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

    // =========================================================================
    // social security tests
    // =========================================================================

    #[test]
    fn social_security_below_wage_base() {
        let config = config();
        let payroll = PayrollCalculator::new(&config);

        assert_eq!(payroll.social_security_tax(dec!(150000)), dec!(9300.00));
    }

    #[test]
    fn social_security_caps_at_wage_base() {
        let config = config();
        let payroll = PayrollCalculator::new(&config);
        let cap = dec!(176100) * dec!(0.062);

        assert_eq!(payroll.social_security_tax(dec!(176100)), cap);
        assert_eq!(payroll.social_security_tax(dec!(5000000)), cap);
    }

    #[test]
    fn social_security_zero_for_negative_wages() {
        let config = config();
        let payroll = PayrollCalculator::new(&config);

        assert_eq!(payroll.social_security_tax(dec!(-1000)), dec!(0.00));
    }

    // =========================================================================
    // medicare tests
    // =========================================================================

    #[test]
    fn medicare_is_uncapped() {
        let config = config();
        let payroll = PayrollCalculator::new(&config);

        assert_eq!(payroll.medicare_tax(dec!(1000000)), dec!(14500.00));
    }

    #[test]
    fn additional_medicare_zero_below_threshold() {
        let config = config();
        let payroll = PayrollCalculator::new(&config);

        assert_eq!(
            payroll.additional_medicare_tax(dec!(150000), FilingStatus::Single),
            dec!(0.00)
        );
    }

    #[test]
    fn additional_medicare_applies_above_threshold() {
        let config = config();
        let payroll = PayrollCalculator::new(&config);

        // 0.9% of (300000 - 200000)
        assert_eq!(
            payroll.additional_medicare_tax(dec!(300000), FilingStatus::Single),
            dec!(900.00)
        );
    }

    #[test]
    fn additional_medicare_uses_filing_status_threshold() {
        let config = config();
        let payroll = PayrollCalculator::new(&config);

        // MFS threshold is 125000.
        assert_eq!(
            payroll.additional_medicare_tax(dec!(150000), FilingStatus::MarriedFilingSeparately),
            dec!(225.00)
        );
    }

    // =========================================================================
    // NIIT tests
    // =========================================================================

    #[test]
    fn niit_zero_below_magi_threshold() {
        let config = config();
        let payroll = PayrollCalculator::new(&config);

        assert_eq!(
            payroll.niit(dec!(50000), dec!(180000), FilingStatus::Single),
            dec!(0.00)
        );
    }

    #[test]
    fn niit_limited_by_magi_excess() {
        let config = config();
        let payroll = PayrollCalculator::new(&config);

        // MAGI excess 30000 is less than NII 50000: 3.8% of 30000.
        assert_eq!(
            payroll.niit(dec!(50000), dec!(230000), FilingStatus::Single),
            dec!(1140.00)
        );
    }

    #[test]
    fn niit_limited_by_investment_income() {
        let config = config();
        let payroll = PayrollCalculator::new(&config);

        // NII 10000 is less than the 100000 MAGI excess: 3.8% of 10000.
        assert_eq!(
            payroll.niit(dec!(10000), dec!(300000), FilingStatus::Single),
            dec!(380.00)
        );
    }
}
