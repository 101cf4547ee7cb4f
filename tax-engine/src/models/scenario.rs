use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::{FilingStatus, IncomeBreakdown, StateOptions, TaxSummary};

/// Immutable inputs for one what-if scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    pub name: String,
    pub tax_year: i32,
    pub filing_status: FilingStatus,
    pub state: String,
    pub state_options: StateOptions,
    pub income: IncomeBreakdown,
    pub itemized_deductions: Decimal,
    pub federal_withheld: Decimal,
    pub state_withheld: Decimal,
}

impl ScenarioParameters {
    pub fn new(name: impl Into<String>, tax_year: i32, filing_status: FilingStatus) -> Self {
        Self {
            name: name.into(),
            tax_year,
            filing_status,
            state: String::new(),
            state_options: StateOptions::default(),
            income: IncomeBreakdown::default(),
            itemized_deductions: Decimal::ZERO,
            federal_withheld: Decimal::ZERO,
            state_withheld: Decimal::ZERO,
        }
    }
}

/// A scenario's parameters together with its computed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhatIfScenario {
    pub parameters: ScenarioParameters,
    pub summary: TaxSummary,
}

/// Two scenarios plus the derived deltas between their results.
///
/// Constructed only via [`ScenarioComparison::derive`], so the delta fields
/// can never disagree with the two summaries they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub baseline: WhatIfScenario,
    pub alternative: WhatIfScenario,

    /// baseline.total_tax - alternative.total_tax; positive means the
    /// alternative saves money.
    pub tax_savings: Decimal,

    /// tax_savings / baseline.total_tax x 100; zero when the baseline
    /// owes nothing.
    pub savings_percentage: Decimal,

    pub federal_delta: Decimal,
    pub state_delta: Decimal,
    pub fica_delta: Decimal,
    pub amt_delta: Decimal,
    pub niit_delta: Decimal,
}

impl ScenarioComparison {
    pub fn derive(baseline: WhatIfScenario, alternative: WhatIfScenario) -> Self {
        let b = &baseline.summary;
        let a = &alternative.summary;

        let tax_savings = b.total_tax - a.total_tax;
        let savings_percentage = if b.total_tax == Decimal::ZERO {
            Decimal::ZERO
        } else {
            round_half_up(tax_savings / b.total_tax * Decimal::ONE_HUNDRED)
        };

        let federal_delta = b.federal_tax_total - a.federal_tax_total;
        let state_delta = b.state_tax - a.state_tax;
        let fica_delta = (b.social_security_tax + b.medicare_tax + b.additional_medicare_tax)
            - (a.social_security_tax + a.medicare_tax + a.additional_medicare_tax);
        let amt_delta = b.amt_owed - a.amt_owed;
        let niit_delta = b.niit - a.niit;

        Self {
            baseline,
            alternative,
            tax_savings,
            savings_percentage,
            federal_delta,
            state_delta,
            fica_delta,
            amt_delta,
            niit_delta,
        }
    }
}
