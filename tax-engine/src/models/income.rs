use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized income components for one tax year.
///
/// Each field is a distinct, non-overlapping bucket; the aggregate views
/// (`ordinary_income`, `preferential_income`, `total_income`) are always
/// computed from the components so they can never drift out of sync.
///
/// `iso_bargain_element` is deliberately excluded from every regular-tax
/// view: it is an AMT preference item only, and keeping it in its own field
/// is what prevents the same dollars from being counted in both the regular
/// and AMT bases.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::IncomeBreakdown;
///
/// let income = IncomeBreakdown {
///     wages: dec!(150000.00),
///     rsu_ordinary_income: dec!(50000.00),
///     long_term_gains: dec!(20000.00),
///     ..IncomeBreakdown::default()
/// };
///
/// assert_eq!(income.ordinary_income(), dec!(200000.00));
/// assert_eq!(income.preferential_income(), dec!(20000.00));
/// assert_eq!(income.total_income(), dec!(220000.00));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    /// W-2 wages and salary.
    pub wages: Decimal,

    /// Ordinary income recognized at RSU vest (FMV x shares vested).
    pub rsu_ordinary_income: Decimal,

    /// Ordinary income recognized at NSO exercise (spread x shares).
    pub nso_ordinary_income: Decimal,

    /// Net short-term capital gains (taxed as ordinary income).
    pub short_term_gains: Decimal,

    /// Net long-term capital gains (preferential rates).
    pub long_term_gains: Decimal,

    /// Qualified dividends (preferential rates).
    pub qualified_dividends: Decimal,

    /// Taxable interest (ordinary income).
    pub interest: Decimal,

    /// ISO bargain element from exercises during the year.
    ///
    /// AMT preference item only; never part of the regular-tax totals.
    pub iso_bargain_element: Decimal,
}

impl IncomeBreakdown {
    /// Income taxed at ordinary rates.
    pub fn ordinary_income(&self) -> Decimal {
        self.wages
            + self.rsu_ordinary_income
            + self.nso_ordinary_income
            + self.short_term_gains
            + self.interest
    }

    /// Income taxed at preferential (LTCG) rates.
    pub fn preferential_income(&self) -> Decimal {
        self.long_term_gains + self.qualified_dividends
    }

    /// Total regular-tax income. Excludes the ISO bargain element.
    pub fn total_income(&self) -> Decimal {
        self.ordinary_income() + self.preferential_income()
    }

    /// Net investment income for NIIT purposes.
    pub fn net_investment_income(&self) -> Decimal {
        self.short_term_gains + self.long_term_gains + self.qualified_dividends + self.interest
    }
}
