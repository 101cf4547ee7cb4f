//! Equity-compensation classifiers.
//!
//! Each submodule turns immutable award records into their tax treatment:
//! ordinary income vs. capital gain, disposition classification, and
//! short/long-term splits. Holding-period thresholds are strict
//! inequalities throughout: exactly 365 days is short-term, exactly
//! 365/730 days is disqualifying.

pub mod espp;
pub mod iso;
pub mod nso;
pub mod rsu;

/// Held more than this many days counts as long-term.
pub(crate) const LONG_TERM_HOLDING_DAYS: i64 = 365;

/// ISO/ESPP grant-or-offering leg of the qualifying-disposition test.
pub(crate) const QUALIFYING_GRANT_HOLDING_DAYS: i64 = 730;

use crate::models::GainTerm;

pub(crate) fn term_for_days(days_held: i64) -> GainTerm {
    if days_held > LONG_TERM_HOLDING_DAYS {
        GainTerm::LongTerm
    } else {
        GainTerm::ShortTerm
    }
}
