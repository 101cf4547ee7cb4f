//! Washington: no income tax; a flat excise on long-term capital gains
//! above the annual per-return exclusion, after subtracting statutorily
//! exempt categories.

use rust_decimal::Decimal;

use super::{StateTaxModule, StateTaxResult};
use crate::calculations::common::{max, round_half_up};
use crate::config::TaxYearConfig;
use crate::models::{FilingStatus, IncomeBreakdown, StateOptions};

pub struct Washington;

impl StateTaxModule for Washington {
    fn code(&self) -> &str {
        "WA"
    }

    fn calculate(
        &self,
        income: &IncomeBreakdown,
        _filing_status: FilingStatus,
        options: &StateOptions,
        config: &TaxYearConfig,
    ) -> StateTaxResult {
        let tables = &config.washington;

        // Exempt categories come off the gains before the exclusion.
        let gains = max(
            income.long_term_gains - options.wa_exempt_gains.total(),
            Decimal::ZERO,
        );
        let excess = max(gains - tables.excise_threshold, Decimal::ZERO);
        let tax = round_half_up(excess * tables.excise_rate);

        let mut result = StateTaxResult::zero(self.code());
        if tax > Decimal::ZERO {
            result.tax = tax;
            result.marginal_rate = tables.excise_rate;
            result
                .warnings
                .push(format!("WA capital gains excise applies: ${tax}"));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::WaExemptGains;

    fn config() -> TaxYearConfig {
        TaxYearConfig::for_year(2025).unwrap()
    }

    #[test]
    fn no_income_tax_on_wages() {
        let config = config();
        let income = IncomeBreakdown {
            wages: dec!(500000),
            ..IncomeBreakdown::default()
        };

        let result = Washington.calculate(
            &income,
            FilingStatus::Single,
            &StateOptions::default(),
            &config,
        );

        assert_eq!(result.tax, dec!(0));
    }

    #[test]
    fn excise_on_gains_above_threshold_matches_worked_example() {
        let config = config();
        let income = IncomeBreakdown {
            long_term_gains: dec!(500000),
            ..IncomeBreakdown::default()
        };

        let result = Washington.calculate(
            &income,
            FilingStatus::Single,
            &StateOptions::default(),
            &config,
        );

        // 7% x (500000 - 270000)
        assert_eq!(result.tax, dec!(16100.00));
        assert_eq!(result.marginal_rate, dec!(0.07));
    }

    #[test]
    fn gains_at_threshold_owe_nothing() {
        let config = config();
        let income = IncomeBreakdown {
            long_term_gains: dec!(270000),
            ..IncomeBreakdown::default()
        };

        let result = Washington.calculate(
            &income,
            FilingStatus::Single,
            &StateOptions::default(),
            &config,
        );

        assert_eq!(result.tax, dec!(0));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn exempt_categories_reduce_taxable_gains_before_threshold() {
        let config = config();
        let income = IncomeBreakdown {
            long_term_gains: dec!(500000),
            ..IncomeBreakdown::default()
        };
        let options = StateOptions {
            wa_exempt_gains: WaExemptGains {
                real_estate: dec!(150000),
                retirement_accounts: dec!(100000),
                ..WaExemptGains::default()
            },
            ..StateOptions::default()
        };

        let result = Washington.calculate(&income, FilingStatus::Single, &options, &config);

        // 500000 - 250000 exempt = 250000, below the 270000 exclusion.
        assert_eq!(result.tax, dec!(0));
    }
}
