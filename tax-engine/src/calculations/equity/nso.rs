//! NSO exercise and sale treatment.
//!
//! The exercise spread is wages; the exercise-date FMV becomes the basis,
//! so any later sale is purely capital gain or loss.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::term_for_days;
use crate::calculations::common::round_half_up;
use crate::models::{GainTerm, NsoExercise, NsoSale};

/// Tax consequences of an NSO exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NsoExerciseResult {
    /// (FMV - strike) x shares, floored at zero when underwater.
    pub ordinary_income: Decimal,
    pub cost_basis_per_share: Decimal,
}

/// Tax consequences of selling NSO shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NsoSaleResult {
    /// (sale price - exercise FMV) x shares sold.
    pub capital_gain: Decimal,
    pub term: GainTerm,
}

pub fn exercise(exercise: &NsoExercise) -> NsoExerciseResult {
    NsoExerciseResult {
        ordinary_income: round_half_up(exercise.ordinary_income()),
        cost_basis_per_share: exercise.cost_basis_per_share(),
    }
}

pub fn sale(sale: &NsoSale) -> NsoSaleResult {
    let gain = (sale.sale_price - sale.exercise.fmv_at_exercise) * sale.shares_sold;

    NsoSaleResult {
        capital_gain: round_half_up(gain),
        term: term_for_days(sale.days_held()),
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

    fn exercise_record() -> NsoExercise {
        NsoExercise {
            exercise_date: date(2024, 2, 1),
            shares: dec!(500),
            strike_price: dec!(20.00),
            fmv_at_exercise: dec!(35.00),
        }
    }

    #[test]
    fn exercise_spread_is_ordinary_income() {
        let result = exercise(&exercise_record());

        assert_eq!(result.ordinary_income, dec!(7500.00));
        assert_eq!(result.cost_basis_per_share, dec!(35.00));
    }

    #[test]
    fn underwater_exercise_has_no_income() {
        let record = NsoExercise {
            fmv_at_exercise: dec!(15.00),
            ..exercise_record()
        };

        assert_eq!(exercise(&record).ordinary_income, dec!(0.00));
    }

    #[test]
    fn sale_gain_measured_from_exercise_fmv() {
        let result = sale(&NsoSale {
            exercise: exercise_record(),
            sale_date: date(2025, 6, 1),
            sale_price: dec!(45.00),
            shares_sold: dec!(500),
        });

        assert_eq!(result.capital_gain, dec!(5000.00));
        assert_eq!(result.term, GainTerm::LongTerm);
    }

    #[test]
    fn sale_within_a_year_is_short_term() {
        let result = sale(&NsoSale {
            exercise: exercise_record(),
            sale_date: date(2024, 8, 1),
            sale_price: dec!(30.00),
            shares_sold: dec!(500),
        });

        assert_eq!(result.capital_gain, dec!(-2500.00));
        assert_eq!(result.term, GainTerm::ShortTerm);
    }
}
