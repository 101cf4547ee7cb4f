//! ISO exercise and disposition treatment.
//!
//! Exercising an ISO creates no regular-tax income; the bargain element is
//! an AMT preference for the exercise year. A later sale is qualifying only
//! when held more than 365 days from exercise AND more than 730 days from
//! grant, both strict.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use tax_engine::calculations::equity::iso;
//! use tax_engine::models::IsoExercise;
//!
//! let exercise = IsoExercise {
//!     grant_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
//!     exercise_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
//!     shares: dec!(1000),
//!     strike_price: dec!(10.00),
//!     fmv_at_exercise: dec!(50.00),
//! };
//!
//! let result = iso::exercise(&exercise);
//! assert_eq!(result.regular_income, dec!(0));
//! assert_eq!(result.amt_preference, dec!(40000.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LONG_TERM_HOLDING_DAYS, QUALIFYING_GRANT_HOLDING_DAYS, term_for_days};
use crate::calculations::common::{max, round_half_up};
use crate::models::{DispositionType, GainTerm, IsoExercise, IsoSale};

/// Tax consequences of an ISO exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoExerciseResult {
    /// Always zero for a plain exercise-and-hold.
    pub regular_income: Decimal,
    /// Bargain element, an AMT preference item for the exercise year.
    pub amt_preference: Decimal,
}

/// Tax consequences of selling ISO shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoSaleResult {
    pub disposition: DispositionType,
    /// Zero for qualifying dispositions; min(bargain element, gain) for
    /// disqualifying ones, and zero when the sale is at a loss.
    pub ordinary_income: Decimal,
    /// Remaining gain or loss after the ordinary portion.
    pub capital_gain: Decimal,
    pub term: GainTerm,
}

pub fn exercise(exercise: &IsoExercise) -> IsoExerciseResult {
    IsoExerciseResult {
        regular_income: Decimal::ZERO,
        amt_preference: round_half_up(exercise.bargain_element()),
    }
}

/// Classifies a sale of ISO shares and splits income from gain.
pub fn sale(sale: &IsoSale) -> IsoSaleResult {
    let qualifying = sale.days_from_exercise() > LONG_TERM_HOLDING_DAYS
        && sale.days_from_grant() > QUALIFYING_GRANT_HOLDING_DAYS;

    // Total proceeds over strike, the filer's actual economic gain.
    let actual_gain =
        round_half_up((sale.sale_price - sale.exercise.strike_price) * sale.shares_sold);

    if qualifying {
        // Entire result is long-term capital gain, even at a loss.
        return IsoSaleResult {
            disposition: DispositionType::Qualifying,
            ordinary_income: Decimal::ZERO,
            capital_gain: actual_gain,
            term: GainTerm::LongTerm,
        };
    }

    let spread = sale.exercise.fmv_at_exercise - sale.exercise.strike_price;
    let bargain_element = round_half_up(max(spread, Decimal::ZERO) * sale.shares_sold);

    let ordinary_income = if actual_gain <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        bargain_element.min(actual_gain)
    };

    IsoSaleResult {
        disposition: DispositionType::Disqualifying,
        ordinary_income,
        capital_gain: actual_gain - ordinary_income,
        term: term_for_days(sale.days_from_exercise()),
    }
}
