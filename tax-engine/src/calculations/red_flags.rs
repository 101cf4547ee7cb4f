//! Red-flag analysis over a computed tax position.
//!
//! Three rule families: the underwithholding safe harbor, AMT trigger
//! risk from ISO exercises, and proximity to the Washington capital-gains
//! excise threshold. All advisory; none of these change the numbers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::amt::AmtCalculator;
use crate::calculations::common::{max, round_half_up};
use crate::config::TaxYearConfig;
use crate::models::{AlertCategory, AlertSeverity, FilingStatus, RedFlagReport, TaxAlert};

/// Inputs to one red-flag analysis pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlagInput {
    pub total_income: Decimal,
    pub total_tax_liability: Decimal,
    pub total_withheld: Decimal,
    /// Prior-year liability, when known; enables the prior-year safe harbor.
    pub prior_year_tax: Option<Decimal>,
    /// Prior-year AGI; above the high-income cutoff the prior-year factor
    /// rises from 100% to 110%.
    pub prior_year_agi: Option<Decimal>,
    /// ISO bargain element exercised so far this year.
    pub iso_bargain_element: Decimal,
    pub long_term_gains: Decimal,
    pub filing_status: FilingStatus,
    pub state: String,
}

/// Red-flag analyzer for one tax year.
#[derive(Debug, Clone)]
pub struct RedFlagAnalyzer<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> RedFlagAnalyzer<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, input: &RedFlagInput) -> RedFlagReport {
        let mut alerts = Vec::new();

        if let Some(alert) = self.underwithholding(input) {
            alerts.push(alert);
        }
        if let Some(alert) = self.amt_risk(input) {
            alerts.push(alert);
        }
        if let Some(alert) = self.wa_gains_threshold(input) {
            alerts.push(alert);
        }

        debug!(alert_count = alerts.len(), "red-flag analysis complete");
        RedFlagReport { alerts }
    }

    /// Safe harbor: withheld >= 90% of current-year liability, or >= 100%
    /// (110% for high earners) of prior-year liability. The recommended
    /// catch-up payment is the smaller of the two shortfalls.
    fn underwithholding(&self, input: &RedFlagInput) -> Option<TaxAlert> {
        let liability = input.total_tax_liability;
        if liability <= Decimal::ZERO {
            return None;
        }

        let current_target = round_half_up(liability * dec!(0.90));
        let current_shortfall = max(current_target - input.total_withheld, Decimal::ZERO);

        let prior_shortfall = input.prior_year_tax.map(|prior| {
            let factor = match input.prior_year_agi {
                Some(agi) if agi > self.config.safe_harbor_high_income_agi => dec!(1.10),
                _ => Decimal::ONE,
            };
            max(round_half_up(prior * factor) - input.total_withheld, Decimal::ZERO)
        });

        let safe = current_shortfall == Decimal::ZERO
            || prior_shortfall == Some(Decimal::ZERO);
        if safe {
            return None;
        }

        let recommended = match prior_shortfall {
            Some(prior) => current_shortfall.min(prior),
            None => current_shortfall,
        };

        let ratio = recommended / liability;
        let severity = if ratio >= dec!(0.25) {
            AlertSeverity::Critical
        } else if ratio >= dec!(0.10) {
            AlertSeverity::Warning
        } else {
            AlertSeverity::Info
        };

        Some(TaxAlert {
            severity,
            category: AlertCategory::Underwithholding,
            message: format!(
                "withholding of ${} does not meet the safe harbor for a ${liability} liability",
                input.total_withheld
            ),
            amount: Some(recommended),
            recommendation: Some(format!(
                "make an estimated payment of ${recommended} to reach the nearest safe harbor"
            )),
        })
    }

    /// AMT trigger risk, tiered by the estimated additional liability the
    /// year's ISO exercises create.
    fn amt_risk(&self, input: &RedFlagInput) -> Option<TaxAlert> {
        if input.iso_bargain_element <= Decimal::ZERO {
            return None;
        }

        let deduction = *self.config.standard_deduction.get(input.filing_status);
        let taxable = max(input.total_income - deduction, Decimal::ZERO);
        let regular_tax = self
            .config
            .federal_brackets
            .get(input.filing_status)
            .tax_for(taxable);
        let amt = AmtCalculator::new(self.config).calculate(
            taxable,
            input.iso_bargain_element,
            input.filing_status,
        );
        let estimated_amt = max(amt.tentative_minimum_tax - regular_tax, Decimal::ZERO);

        if estimated_amt == Decimal::ZERO {
            return None;
        }

        let (severity, tier, recommendation) = if estimated_amt < dec!(5000) {
            (
                AlertSeverity::Info,
                "low",
                "review the AMT impact before further exercises".to_string(),
            )
        } else if estimated_amt < dec!(20000) {
            (
                AlertSeverity::Warning,
                "moderate",
                "consider spreading remaining ISO exercises across tax years".to_string(),
            )
        } else if estimated_amt < dec!(50000) {
            (
                AlertSeverity::Warning,
                "high",
                "model a partial same-year sale to limit the AMT preference".to_string(),
            )
        } else {
            (
                AlertSeverity::Critical,
                "critical",
                "consult a tax professional before exercising any further ISOs".to_string(),
            )
        };

        Some(TaxAlert {
            severity,
            category: AlertCategory::AmtRisk,
            message: format!(
                "ISO exercises create an estimated ${estimated_amt} of additional AMT ({tier} risk)"
            ),
            amount: Some(estimated_amt),
            recommendation: Some(recommendation),
        })
    }

    /// Proximity to the WA capital-gains excise threshold, for WA filers
    /// with long-term gains.
    fn wa_gains_threshold(&self, input: &RedFlagInput) -> Option<TaxAlert> {
        if !input.state.eq_ignore_ascii_case("WA") || input.long_term_gains <= Decimal::ZERO {
            return None;
        }

        let threshold = self.config.washington.excise_threshold;
        let consumed = input.long_term_gains / threshold;

        if consumed > Decimal::ONE {
            let excess = input.long_term_gains - threshold;
            let estimated_tax = round_half_up(excess * self.config.washington.excise_rate);
            return Some(TaxAlert {
                severity: AlertSeverity::Critical,
                category: AlertCategory::CapitalGainsThreshold,
                message: format!(
                    "long-term gains exceed the WA excise threshold by ${excess}"
                ),
                amount: Some(estimated_tax),
                recommendation: Some(format!(
                    "expect roughly ${estimated_tax} of WA capital gains excise"
                )),
            });
        }

        let percent = round_half_up(consumed * Decimal::ONE_HUNDRED);
        let (severity, tier) = if consumed >= dec!(0.90) {
            (AlertSeverity::Warning, "at risk of crossing")
        } else if consumed >= dec!(0.75) {
            (AlertSeverity::Info, "approaching")
        } else {
            (AlertSeverity::Info, "below")
        };

        Some(TaxAlert {
            severity,
            category: AlertCategory::CapitalGainsThreshold,
            message: format!(
                "long-term gains are {tier} the WA excise threshold ({percent}% consumed)"
            ),
            amount: None,
            recommendation: None,
        })
    }
}
