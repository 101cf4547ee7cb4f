//! New York: progressive state brackets plus the optional NYC resident
//! tax, Yonkers surcharge, and MCTMT on self-employment earnings in the
//! commuter district.

use rust_decimal::Decimal;

use super::{StateTaxModule, StateTaxResult};
use crate::calculations::common::{max, round_half_up};
use crate::config::TaxYearConfig;
use crate::models::{FilingStatus, IncomeBreakdown, StateOptions};

pub struct NewYork;

impl StateTaxModule for NewYork {
    fn code(&self) -> &str {
        "NY"
    }

    fn calculate(
        &self,
        income: &IncomeBreakdown,
        filing_status: FilingStatus,
        options: &StateOptions,
        config: &TaxYearConfig,
    ) -> StateTaxResult {
        let tables = &config.new_york;
        let deduction = *tables.standard_deduction.get(filing_status);
        let taxable = max(income.total_income() - deduction, Decimal::ZERO);

        let brackets = tables.brackets.get(filing_status);
        let state_tax = brackets.tax_for(taxable);
        let mut tax = state_tax;
        let mut marginal_rate = brackets.marginal_rate_at(taxable);
        let mut warnings = Vec::new();

        if options.nyc_resident {
            let city_brackets = tables.nyc_brackets.get(filing_status);
            let city_tax = city_brackets.tax_for(taxable);
            if city_tax > Decimal::ZERO {
                warnings.push(format!("NYC resident tax: ${city_tax}"));
            }
            tax += city_tax;
            marginal_rate += city_brackets.marginal_rate_at(taxable);
        }

        if options.yonkers_resident {
            let surcharge = round_half_up(state_tax * tables.yonkers_surcharge_rate);
            if surcharge > Decimal::ZERO {
                warnings.push(format!("Yonkers surcharge: ${surcharge}"));
            }
            tax += surcharge;
        }

        let mctd_earnings = options.mctd_self_employment_income;
        if mctd_earnings > tables.mctmt_threshold {
            let mctmt = round_half_up(mctd_earnings * tables.mctmt_rate);
            warnings.push(format!("MCTMT on self-employment earnings: ${mctmt}"));
            tax += mctmt;
        }

        StateTaxResult {
            state_code: self.code().to_string(),
            tax,
            marginal_rate,
            approximate: false,
            warnings,
        }
    }
}
