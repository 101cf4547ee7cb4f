//! California: progressive brackets with the mental-health surtax folded
//! into the top brackets, CA's own standard deduction, and flat uncapped
//! SDI withholding reported separately from tax.

use rust_decimal::Decimal;

use super::{StateTaxModule, StateTaxResult};
use crate::calculations::common::{max, round_half_up};
use crate::config::TaxYearConfig;
use crate::models::{FilingStatus, IncomeBreakdown, StateOptions};

pub struct California;

impl StateTaxModule for California {
    fn code(&self) -> &str {
        "CA"
    }

    fn calculate(
        &self,
        income: &IncomeBreakdown,
        filing_status: FilingStatus,
        _options: &StateOptions,
        config: &TaxYearConfig,
    ) -> StateTaxResult {
        let tables = &config.california;
        let deduction = *tables.standard_deduction.get(filing_status);
        let taxable = max(income.total_income() - deduction, Decimal::ZERO);

        let brackets = tables.brackets.get(filing_status);
        let tax = brackets.tax_for(taxable);

        let mut warnings = Vec::new();
        // SDI is withheld from wages but is not income tax; report it
        // without adding it to the liability.
        let sdi = round_half_up(max(income.wages, Decimal::ZERO) * tables.sdi_rate);
        if sdi > Decimal::ZERO {
            warnings.push(format!("CA SDI withheld: ${sdi}"));
        }

        StateTaxResult {
            state_code: self.code().to_string(),
            tax,
            marginal_rate: brackets.marginal_rate_at(taxable),
            approximate: false,
            warnings,
        }
    }
}
