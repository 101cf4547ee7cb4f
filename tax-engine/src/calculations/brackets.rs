//! Progressive bracket schedules.
//!
//! One schedule type serves every progressive computation in the engine:
//! federal ordinary tax, CA, NY, and NYC tax differ only in the table
//! supplied, and the same schedule also performs the LTCG "stacking"
//! computation where preferential income fills bracket room left above
//! ordinary income.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_engine::calculations::brackets::{BracketSchedule, TaxBracket};
//!
//! // 2025 federal schedule, single filer.
//! let schedule = BracketSchedule::new(vec![
//!     TaxBracket::up_to(dec!(11925), dec!(0.10)),
//!     TaxBracket::up_to(dec!(48475), dec!(0.12)),
//!     TaxBracket::up_to(dec!(103350), dec!(0.22)),
//!     TaxBracket::above(dec!(0.24)),
//! ])
//! .unwrap();
//!
//! // 1192.50 + (30000 - 11925) * 0.12 = 3361.50
//! assert_eq!(schedule.tax_for(dec!(30000)), dec!(3361.50));
//! assert_eq!(schedule.marginal_rate_at(dec!(30000)), dec!(0.12));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_half_up;

/// Errors that can occur when constructing a bracket schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketScheduleError {
    /// The schedule has no brackets at all.
    #[error("bracket schedule must contain at least one bracket")]
    Empty,

    /// Upper bounds are not strictly increasing.
    #[error("bracket upper bounds must be strictly increasing at {0}")]
    NotIncreasing(Decimal),

    /// Only the final bracket may be unbounded, and the final bracket must be.
    #[error("exactly the last bracket must have no upper bound")]
    BadTopBracket,
}

/// One bracket: income up to `upper` (exclusive of amounts beyond it) is
/// taxed at `rate`. `upper == None` marks the unbounded top bracket; a
/// sentinel rather than a literal infinity so the table stays portable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn up_to(upper: Decimal, rate: Decimal) -> Self {
        Self {
            upper: Some(upper),
            rate,
        }
    }

    pub fn above(rate: Decimal) -> Self {
        Self { upper: None, rate }
    }
}

/// An ordered progressive bracket table.
///
/// Validated at construction: bounds strictly increase and exactly the last
/// bracket is unbounded, so the walk itself never has to re-check shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSchedule {
    brackets: Vec<TaxBracket>,
}

impl BracketSchedule {
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, BracketScheduleError> {
        let Some((last, bounded)) = brackets.split_last() else {
            return Err(BracketScheduleError::Empty);
        };
        if last.upper.is_some() || bounded.iter().any(|b| b.upper.is_none()) {
            return Err(BracketScheduleError::BadTopBracket);
        }

        let mut previous = Decimal::ZERO;
        for bracket in bounded {
            let upper = bracket.upper.unwrap_or(Decimal::ZERO);
            if upper <= previous {
                return Err(BracketScheduleError::NotIncreasing(upper));
            }
            previous = upper;
        }

        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Tax owed on `amount`, walking brackets in order and rounding the
    /// accumulated sum to the cent. Zero or negative amounts owe zero.
    pub fn tax_for(&self, amount: Decimal) -> Decimal {
        if amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        let mut lower = Decimal::ZERO;
        for bracket in &self.brackets {
            match bracket.upper {
                Some(upper) => {
                    tax += (amount.min(upper) - lower) * bracket.rate;
                    if amount <= upper {
                        break;
                    }
                    lower = upper;
                }
                None => {
                    tax += (amount - lower) * bracket.rate;
                }
            }
        }

        round_half_up(tax)
    }

    /// Rate applied to the next dollar of income at `amount`.
    ///
    /// An amount sitting exactly on a bracket bound reports the next
    /// bracket's rate, matching the walk: income up to and not including a
    /// bound is taxed below it.
    pub fn marginal_rate_at(&self, amount: Decimal) -> Decimal {
        let amount = amount.max(Decimal::ZERO);
        for bracket in &self.brackets {
            match bracket.upper {
                Some(upper) if amount >= upper => continue,
                _ => return bracket.rate,
            }
        }
        // Unreachable given the validated shape; the top bracket always matches.
        Decimal::ZERO
    }

    /// Tax on preferential income stacked above ordinary income.
    ///
    /// The stacking position starts at `ordinary_income`; each bracket
    /// contributes `min(remaining, upper - position)` at its rate. Gains that
    /// fill exactly to a bound stay in the lower bracket up to and not
    /// including the bound.
    pub fn stacked_tax_for(
        &self,
        ordinary_income: Decimal,
        gains: Decimal,
    ) -> Decimal {
        if gains <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut position = ordinary_income.max(Decimal::ZERO);
        let mut remaining = gains;
        let mut tax = Decimal::ZERO;

        for bracket in &self.brackets {
            match bracket.upper {
                Some(upper) => {
                    if position >= upper {
                        continue;
                    }
                    let taken = remaining.min(upper - position);
                    tax += taken * bracket.rate;
                    position += taken;
                    remaining -= taken;
                    if remaining <= Decimal::ZERO {
                        break;
                    }
                }
                None => {
                    tax += remaining * bracket.rate;
                    break;
                }
            }
        }

        round_half_up(tax)
    }
}
