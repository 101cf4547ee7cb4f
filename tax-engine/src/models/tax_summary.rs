use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full output of one aggregate tax calculation.
///
/// Invariant maintained by the aggregate calculator:
/// `total_tax == federal_tax_total + social_security_tax + medicare_tax
///  + additional_medicare_tax + niit + state_tax`, exact to the cent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummary {
    pub tax_year: i32,

    /// Standard deduction for the filing status and year.
    pub standard_deduction: Decimal,

    /// Itemized deduction supplied by the caller.
    pub itemized_deduction: Decimal,

    /// Deduction actually applied: the larger of standard and itemized.
    pub deduction_used: Decimal,

    /// Ordinary income after the deduction, floored at zero.
    pub ordinary_taxable_income: Decimal,

    /// Ordinary taxable income plus preferential income.
    pub taxable_income: Decimal,

    /// Federal tax on ordinary income from the bracket schedule.
    pub federal_ordinary_tax: Decimal,

    /// Federal tax on long-term gains and qualified dividends (stacked).
    pub federal_ltcg_tax: Decimal,

    /// AMT owed: max(0, tentative minimum tax - regular tax).
    pub amt_owed: Decimal,

    /// Federal income tax total: ordinary + LTCG + AMT owed.
    pub federal_tax_total: Decimal,

    pub social_security_tax: Decimal,
    pub medicare_tax: Decimal,
    pub additional_medicare_tax: Decimal,
    pub niit: Decimal,
    pub state_tax: Decimal,

    /// Sum of every tax component above.
    pub total_tax: Decimal,

    /// total_tax / total_income; zero when total income is zero.
    pub effective_rate: Decimal,

    /// Federal marginal rate plus state marginal rate at the computed
    /// taxable-income level.
    pub marginal_rate: Decimal,

    pub federal_withheld: Decimal,
    pub state_withheld: Decimal,

    /// total_tax minus all withholding; negative means a refund.
    pub balance_due: Decimal,

    /// Advisory notes ("AMT applies: $X", "CA SDI withheld: $X", ...).
    /// Human-readable, not part of the numeric contract.
    pub warnings: Vec<String>,
}

impl TaxSummary {
    pub fn total_withheld(&self) -> Decimal {
        self.federal_withheld + self.state_withheld
    }
}
