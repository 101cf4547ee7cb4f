//! Multi-state residency and income allocation.
//!
//! Residency is a calendar-day test; wage-type income allocates in
//! proportion to workdays (calendar days when no workday data exists);
//! capital gains go to the resident state or split evenly among
//! co-residents. Equity income earned between grant and vest allocates by
//! the workdays recorded for that specific window.
//!
//! Allocations round each share to the cent and assign the leftover cent
//! (if any) to the final state so the pieces always sum to the input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::StatePresence;

/// Calendar days of presence that make a state a resident state.
pub const RESIDENCY_DAY_THRESHOLD: u32 = 183;

/// One state's share of an allocated amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateAllocation {
    pub state_code: String,
    pub amount: Decimal,
}

/// States where the filer is a resident for the year: presence of at least
/// 183 calendar days. Zero, one, or several states can qualify in a
/// part-year-move scenario.
pub fn resident_states(presences: &[StatePresence]) -> Vec<String> {
    presences
        .iter()
        .filter(|p| p.calendar_days >= RESIDENCY_DAY_THRESHOLD)
        .map(|p| p.state_code.clone())
        .collect()
}

/// Allocates wage-type income across states in proportion to workdays,
/// falling back to calendar days when no presence has workday data.
pub fn allocate_wages(
    total: Decimal,
    presences: &[StatePresence],
) -> Vec<StateAllocation> {
    let use_workdays = presences.iter().any(|p| p.workdays.is_some());
    let weights: Vec<Decimal> = presences
        .iter()
        .map(|p| {
            let days = if use_workdays {
                p.workdays.unwrap_or(0)
            } else {
                p.calendar_days
            };
            Decimal::from(days)
        })
        .collect();

    allocate_by_weight(total, presences, &weights)
}

/// Allocates capital gains entirely to the resident state(s), split evenly
/// across co-residents. Non-resident presences receive nothing; with no
/// resident state at all, nothing is allocated.
pub fn allocate_capital_gains(
    total: Decimal,
    presences: &[StatePresence],
) -> Vec<StateAllocation> {
    let residents = resident_states(presences);
    let weights: Vec<Decimal> = presences
        .iter()
        .map(|p| {
            if residents.contains(&p.state_code) {
                Decimal::ONE
            } else {
                Decimal::ZERO
            }
        })
        .collect();

    allocate_by_weight(total, presences, &weights)
}

/// Allocates equity income earned between grant and vest by the workdays
/// recorded per state during that window, independent of the general-year
/// allocation.
pub fn allocate_equity_income(
    total: Decimal,
    window_presences: &[StatePresence],
) -> Vec<StateAllocation> {
    allocate_wages(total, window_presences)
}

fn allocate_by_weight(
    total: Decimal,
    presences: &[StatePresence],
    weights: &[Decimal],
) -> Vec<StateAllocation> {
    let total_weight: Decimal = weights.iter().copied().sum();
    if total_weight <= Decimal::ZERO {
        return presences
            .iter()
            .map(|p| StateAllocation {
                state_code: p.state_code.clone(),
                amount: Decimal::ZERO,
            })
            .collect();
    }

    let mut allocations: Vec<StateAllocation> = presences
        .iter()
        .zip(weights)
        .map(|(p, weight)| StateAllocation {
            state_code: p.state_code.clone(),
            amount: round_half_up(total * weight / total_weight),
        })
        .collect();

    // Rounding can leave the pieces a cent or two off the total; the last
    // state with any share absorbs the residual so the sum is exact.
    let allocated: Decimal = allocations.iter().map(|a| a.amount).sum();
    let residual = total - allocated;
    if residual != Decimal::ZERO {
        if let Some(last) = allocations
            .iter_mut()
            .rev()
            .find(|a| a.amount != Decimal::ZERO)
        {
            last.amount += residual;
        }
    }

    allocations
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn presence(code: &str, calendar_days: u32, workdays: Option<u32>) -> StatePresence {
        StatePresence::new(code, calendar_days, workdays)
    }

    // =========================================================================
    // residency tests
    // =========================================================================

    #[test]
    fn residency_requires_183_calendar_days() {
        let presences = vec![
            presence("CA", 200, None),
            presence("NY", 165, None),
        ];

        assert_eq!(resident_states(&presences), vec!["CA".to_string()]);
    }

    #[test]
    fn exactly_183_days_is_resident() {
        let presences = vec![presence("CA", 183, None)];

        assert_eq!(resident_states(&presences), vec!["CA".to_string()]);
    }

    #[test]
    fn part_year_move_can_yield_two_residents() {
        let presences = vec![
            presence("CA", 183, None),
            presence("NY", 183, None),
        ];

        assert_eq!(resident_states(&presences).len(), 2);
    }

    // =========================================================================
    // wage allocation tests
    // =========================================================================

    #[test]
    fn wages_allocate_by_workdays_when_present() {
        let presences = vec![
            presence("CA", 100, Some(150)),
            presence("NY", 265, Some(50)),
        ];

        let allocations = allocate_wages(dec!(200000), &presences);

        assert_eq!(allocations[0].amount, dec!(150000.00));
        assert_eq!(allocations[1].amount, dec!(50000.00));
    }

    #[test]
    fn wages_fall_back_to_calendar_days() {
        let presences = vec![
            presence("CA", 273, None),
            presence("NY", 92, None),
        ];

        let allocations = allocate_wages(dec!(100000), &presences);

        // 273/365 and 92/365 of 100000, residual cent to the last state.
        assert_eq!(allocations[0].amount, dec!(74794.52));
        assert_eq!(allocations[1].amount, dec!(25205.48));
        let total: Decimal = allocations.iter().map(|a| a.amount).sum();
        assert_eq!(total, dec!(100000));
    }

    #[test]
    fn allocation_sums_exactly_despite_rounding() {
        let presences = vec![
            presence("CA", 0, Some(1)),
            presence("NY", 0, Some(1)),
            presence("TX", 0, Some(1)),
        ];

        let allocations = allocate_wages(dec!(100.00), &presences);
        let total: Decimal = allocations.iter().map(|a| a.amount).sum();

        assert_eq!(total, dec!(100.00));
    }

    #[test]
    fn zero_weights_allocate_nothing() {
        let presences = vec![presence("CA", 0, None)];

        let allocations = allocate_wages(dec!(100000), &presences);

        assert_eq!(allocations[0].amount, dec!(0));
    }

    // =========================================================================
    // capital gains tests
    // =========================================================================

    #[test]
    fn capital_gains_go_to_sole_resident_state() {
        let presences = vec![
            presence("CA", 250, Some(200)),
            presence("NY", 115, Some(40)),
        ];

        let allocations = allocate_capital_gains(dec!(50000), &presences);

        assert_eq!(allocations[0].amount, dec!(50000.00));
        assert_eq!(allocations[1].amount, dec!(0));
    }

    #[test]
    fn capital_gains_split_evenly_between_co_residents() {
        let presences = vec![
            presence("CA", 183, None),
            presence("NY", 183, None),
        ];

        let allocations = allocate_capital_gains(dec!(50001), &presences);

        assert_eq!(allocations[0].amount, dec!(25000.50));
        assert_eq!(allocations[1].amount, dec!(25000.50));
    }

    #[test]
    fn capital_gains_unallocated_without_a_resident() {
        let presences = vec![
            presence("CA", 100, None),
            presence("NY", 100, None),
        ];

        let allocations = allocate_capital_gains(dec!(50000), &presences);

        assert!(allocations.iter().all(|a| a.amount == Decimal::ZERO));
    }

    // =========================================================================
    // equity window tests
    // =========================================================================

    #[test]
    fn equity_income_follows_window_workdays() {
        // Workdays during the grant-to-vest window, not the general year.
        let window = vec![
            presence("CA", 0, Some(300)),
            presence("WA", 0, Some(200)),
        ];

        let allocations = allocate_equity_income(dec!(80000), &window);

        assert_eq!(allocations[0].amount, dec!(48000.00));
        assert_eq!(allocations[1].amount, dec!(32000.00));
    }
}
