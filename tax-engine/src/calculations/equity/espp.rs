//! ESPP purchase and disposition treatment.
//!
//! Purchases use the lookback price (lesser of the offering-date price and
//! purchase-date FMV) times one minus the discount. A sale is qualifying
//! when held more than 730 days from offering AND more than 365 days from
//! purchase, both strict. The ordinary-income split differs sharply by
//! disposition:
//!
//! - Qualifying: ordinary income is the smaller of the actual gain and the
//!   statutory discount (offering price x discount rate), floored at zero
//!   on a loss. Basis is the discounted purchase price.
//! - Disqualifying: ordinary income is the full purchase-date discount
//!   (FMV at purchase - purchase price) regardless of the eventual sale
//!   price. Basis steps up to the purchase-date FMV.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LONG_TERM_HOLDING_DAYS, QUALIFYING_GRANT_HOLDING_DAYS, term_for_days};
use crate::calculations::common::{max, round_half_up};
use crate::models::{DispositionType, EsppPurchase, EsppSale, GainTerm};

/// Tax consequences of one ESPP purchase (no tax due at purchase; the
/// derived prices feed the sale classification).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsppPurchaseResult {
    pub purchase_price_per_share: Decimal,
    pub discount_per_share: Decimal,
}

/// Tax consequences of selling ESPP shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsppSaleResult {
    pub disposition: DispositionType,
    pub ordinary_income: Decimal,
    pub capital_gain: Decimal,
    pub term: GainTerm,
    /// Basis actually used for the capital-gain leg.
    pub cost_basis_per_share: Decimal,
}

pub fn purchase(purchase: &EsppPurchase) -> EsppPurchaseResult {
    let price = purchase.purchase_price_per_share();
    EsppPurchaseResult {
        purchase_price_per_share: round_half_up(price),
        discount_per_share: round_half_up(purchase.fmv_at_purchase - price),
    }
}

/// Classifies a sale of ESPP shares and splits income from gain.
pub fn sale(sale: &EsppSale) -> EsppSaleResult {
    let qualifying = sale.days_from_offering() > QUALIFYING_GRANT_HOLDING_DAYS
        && sale.days_from_purchase() > LONG_TERM_HOLDING_DAYS;

    let purchase_price = sale.purchase.purchase_price_per_share();

    if qualifying {
        let actual_gain = round_half_up((sale.sale_price - purchase_price) * sale.shares_sold);
        let statutory_discount =
            round_half_up(sale.purchase.statutory_discount_per_share() * sale.shares_sold);

        let ordinary_income = if actual_gain <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            statutory_discount.min(actual_gain)
        };

        return EsppSaleResult {
            disposition: DispositionType::Qualifying,
            ordinary_income,
            capital_gain: actual_gain - ordinary_income,
            term: GainTerm::LongTerm,
            cost_basis_per_share: round_half_up(purchase_price),
        };
    }

    // Disqualifying: the whole purchase-date discount is compensation no
    // matter what the shares later sold for.
    let ordinary_income = round_half_up(
        max(sale.purchase.fmv_at_purchase - purchase_price, Decimal::ZERO) * sale.shares_sold,
    );
    let capital_gain =
        round_half_up((sale.sale_price - sale.purchase.fmv_at_purchase) * sale.shares_sold);

    EsppSaleResult {
        disposition: DispositionType::Disqualifying,
        ordinary_income,
        capital_gain,
        term: term_for_days(sale.days_from_purchase()),
        cost_basis_per_share: sale.purchase.fmv_at_purchase,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn purchase_record() -> EsppPurchase {
        EsppPurchase {
            offering_date: date(2023, 7, 1),
            purchase_date: date(2023, 12, 29),
            shares: dec!(100),
            offering_price: dec!(40.00),
            fmv_at_purchase: dec!(60.00),
            discount_rate: dec!(0.15),
        }
    }

    fn sale_record(sale_date: NaiveDate, sale_price: Decimal) -> EsppSale {
        EsppSale {
            purchase: purchase_record(),
            sale_date,
            sale_price,
            shares_sold: dec!(100),
        }
    }

    #[test]
    fn purchase_price_is_discounted_lookback() {
        let result = purchase(&purchase_record());

        // min(40, 60) * 0.85 = 34; purchase-date discount = 60 - 34 = 26.
        assert_eq!(result.purchase_price_per_share, dec!(34.00));
        assert_eq!(result.discount_per_share, dec!(26.00));
    }

    // =========================================================================
    // qualifying disposition tests
    // =========================================================================

    #[test]
    fn qualifying_ordinary_income_capped_at_statutory_discount() {
        // Held > 730 days from offering and > 365 from purchase.
        let result = sale(&sale_record(date(2025, 8, 1), dec!(90.00)));

        assert_eq!(result.disposition, DispositionType::Qualifying);
        // Gain (90 - 34) x 100 = 5600; statutory discount 40 x 0.15 x 100 = 600.
        assert_eq!(result.ordinary_income, dec!(600.00));
        assert_eq!(result.capital_gain, dec!(5000.00));
        assert_eq!(result.term, GainTerm::LongTerm);
        assert_eq!(result.cost_basis_per_share, dec!(34.00));
    }

    #[test]
    fn qualifying_small_gain_limits_ordinary_income() {
        // Gain (36 - 34) x 100 = 200, below the 600 statutory discount.
        let result = sale(&sale_record(date(2025, 8, 1), dec!(36.00)));

        assert_eq!(result.ordinary_income, dec!(200.00));
        assert_eq!(result.capital_gain, dec!(0.00));
    }

    #[test]
    fn qualifying_loss_has_zero_ordinary_income() {
        let result = sale(&sale_record(date(2025, 8, 1), dec!(30.00)));

        assert_eq!(result.ordinary_income, dec!(0));
        assert_eq!(result.capital_gain, dec!(-400.00));
    }

    #[test]
    fn exactly_730_days_from_offering_is_disqualifying() {
        // 2023-07-01 + 730 days = 2025-06-30.
        let result = sale(&sale_record(date(2025, 6, 30), dec!(90.00)));

        assert_eq!(result.disposition, DispositionType::Disqualifying);
    }

    // =========================================================================
    // disqualifying disposition tests
    // =========================================================================

    #[test]
    fn disqualifying_recognizes_full_discount_even_at_a_loss() {
        // Sold early below purchase-date FMV: ordinary income is still the
        // whole (60 - 34) x 100 discount; the capital leg books the loss.
        let result = sale(&sale_record(date(2024, 3, 1), dec!(50.00)));

        assert_eq!(result.disposition, DispositionType::Disqualifying);
        assert_eq!(result.ordinary_income, dec!(2600.00));
        assert_eq!(result.capital_gain, dec!(-1000.00));
        assert_eq!(result.term, GainTerm::ShortTerm);
        assert_eq!(result.cost_basis_per_share, dec!(60.00));
    }

    #[test]
    fn disqualifying_long_term_when_held_over_a_year_from_purchase() {
        // > 365 days from purchase but the offering leg fails.
        let result = sale(&sale_record(date(2025, 1, 15), dec!(70.00)));

        assert_eq!(result.disposition, DispositionType::Disqualifying);
        assert_eq!(result.term, GainTerm::LongTerm);
        assert_eq!(result.capital_gain, dec!(1000.00));
    }
}
