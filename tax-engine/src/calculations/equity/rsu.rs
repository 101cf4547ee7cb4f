//! RSU vesting and sale treatment.
//!
//! RSUs have no purchase price: the full vest-date value is wages, and the
//! vest-date FMV becomes the basis for any later sale.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::term_for_days;
use crate::calculations::common::round_half_up;
use crate::models::{GainTerm, RsuSale, RsuVesting};

/// Tax consequences of one vesting event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsuVestResult {
    /// FMV x shares, taxed as wages in the vest year.
    pub ordinary_income: Decimal,
    /// Basis per share for a later sale.
    pub cost_basis_per_share: Decimal,
}

/// Tax consequences of selling vested shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsuSaleResult {
    /// (sale price - vest FMV) x shares sold; negative on a loss.
    pub capital_gain: Decimal,
    pub term: GainTerm,
    pub days_held: i64,
}

pub fn vest(vesting: &RsuVesting) -> RsuVestResult {
    RsuVestResult {
        ordinary_income: round_half_up(vesting.ordinary_income()),
        cost_basis_per_share: vesting.cost_basis_per_share(),
    }
}

pub fn sale(sale: &RsuSale) -> RsuSaleResult {
    let gain = (sale.sale_price - sale.vesting.fmv_at_vest) * sale.shares_sold;
    let days_held = sale.days_held();

    RsuSaleResult {
        capital_gain: round_half_up(gain),
        term: term_for_days(days_held),
        days_held,
    }
}
