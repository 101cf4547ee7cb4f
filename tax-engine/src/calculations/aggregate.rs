//! The aggregate tax calculator.
//!
//! Orchestrates every component into one consistent [`TaxSummary`]:
//! federal bracket tax, LTCG stacking, AMT, FICA, NIIT, and the state
//! module selected by state code.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_engine::calculations::aggregate::{CalculationInput, TaxCalculator};
//! use tax_engine::config::TaxYearConfig;
//! use tax_engine::models::{FilingStatus, IncomeBreakdown};
//!
//! let config = TaxYearConfig::for_year(2025).unwrap();
//! let calculator = TaxCalculator::new(&config);
//!
//! let input = CalculationInput {
//!     income: IncomeBreakdown {
//!         wages: dec!(150000),
//!         ..IncomeBreakdown::default()
//!     },
//!     filing_status: FilingStatus::Single,
//!     state: "CA".to_string(),
//!     ..CalculationInput::default()
//! };
//!
//! let summary = calculator.calculate(&input);
//! assert_eq!(summary.federal_ordinary_tax, dec!(25247.00));
//! assert_eq!(summary.state_tax, dec!(9977.14));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::amt::AmtCalculator;
use crate::calculations::common::{max, round_half_up, round_rate};
use crate::calculations::payroll::PayrollCalculator;
use crate::calculations::state;
use crate::config::TaxYearConfig;
use crate::models::{FilingStatus, IncomeBreakdown, StateOptions, TaxSummary};

/// Caller-supplied inputs for one aggregate calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub income: IncomeBreakdown,
    pub filing_status: FilingStatus,
    /// Two-letter state code; blank means no state tax is calculated.
    pub state: String,
    pub state_options: StateOptions,
    pub itemized_deductions: Decimal,
    pub federal_withheld: Decimal,
    pub state_withheld: Decimal,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            income: IncomeBreakdown::default(),
            filing_status: FilingStatus::Single,
            state: String::new(),
            state_options: StateOptions::default(),
            itemized_deductions: Decimal::ZERO,
            federal_withheld: Decimal::ZERO,
            state_withheld: Decimal::ZERO,
        }
    }
}

/// Orchestrator over one year's configuration. Stateless and cheap to
/// construct; safe to share across threads.
#[derive(Debug, Clone)]
pub struct TaxCalculator<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> TaxCalculator<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    /// Runs the full calculation. Never fails: negative amounts clamp to
    /// zero tax and unknown states degrade to the fallback estimator, so
    /// every input produces a complete summary.
    pub fn calculate(&self, input: &CalculationInput) -> TaxSummary {
        let status = input.filing_status;
        let income = &input.income;

        let standard_deduction = *self.config.standard_deduction.get(status);
        let deduction_used = max(standard_deduction, input.itemized_deductions);

        let ordinary_income = income.ordinary_income();
        let preferential_income = max(income.preferential_income(), Decimal::ZERO);
        let ordinary_taxable = max(
            round_half_up(ordinary_income - deduction_used),
            Decimal::ZERO,
        );
        let taxable_income = ordinary_taxable + preferential_income;

        let federal_brackets = self.config.federal_brackets.get(status);
        let federal_ordinary_tax = federal_brackets.tax_for(ordinary_taxable);

        let ltcg_brackets = self.config.ltcg_brackets.get(status);
        let federal_ltcg_tax = ltcg_brackets.stacked_tax_for(ordinary_taxable, preferential_income);

        let regular_tax = federal_ordinary_tax + federal_ltcg_tax;

        // AMT owed is the excess of tentative minimum tax over regular tax;
        // that comparison can only happen here, after both are known.
        let amt = AmtCalculator::new(self.config).calculate(
            taxable_income,
            income.iso_bargain_element,
            status,
        );
        let amt_owed = max(amt.tentative_minimum_tax - regular_tax, Decimal::ZERO);

        let payroll = PayrollCalculator::new(self.config);
        let fica = payroll.calculate(income.wages, status);
        let niit = payroll.niit(
            income.net_investment_income(),
            income.total_income(),
            status,
        );

        let state_result = state::module_for(&input.state).calculate(
            income,
            status,
            &input.state_options,
            self.config,
        );

        let federal_tax_total = regular_tax + amt_owed;
        let total_tax = federal_tax_total
            + fica.social_security_tax
            + fica.medicare_tax
            + fica.additional_medicare_tax
            + niit
            + state_result.tax;

        let total_income = income.total_income();
        let effective_rate = if total_income > Decimal::ZERO {
            round_rate(total_tax / total_income)
        } else {
            Decimal::ZERO
        };
        let marginal_rate =
            federal_brackets.marginal_rate_at(ordinary_taxable) + state_result.marginal_rate;

        let mut warnings = Vec::new();
        if amt_owed > Decimal::ZERO {
            warnings.push(format!("AMT applies: ${amt_owed}"));
        }
        if niit > Decimal::ZERO {
            warnings.push(format!("NIIT applies: ${niit}"));
        }
        warnings.extend(state_result.warnings);

        let balance_due = total_tax - input.federal_withheld - input.state_withheld;

        debug!(
            %taxable_income,
            %total_tax,
            state = %state_result.state_code,
            "aggregate calculation complete"
        );

        TaxSummary {
            tax_year: self.config.tax_year,
            standard_deduction,
            itemized_deduction: input.itemized_deductions,
            deduction_used,
            ordinary_taxable_income: ordinary_taxable,
            taxable_income,
            federal_ordinary_tax,
            federal_ltcg_tax,
            amt_owed,
            federal_tax_total,
            social_security_tax: fica.social_security_tax,
            medicare_tax: fica.medicare_tax,
            additional_medicare_tax: fica.additional_medicare_tax,
            niit,
            state_tax: state_result.tax,
            total_tax,
            effective_rate,
            marginal_rate,
            federal_withheld: input.federal_withheld,
            state_withheld: input.state_withheld,
            balance_due,
            warnings,
        }
    }
}
