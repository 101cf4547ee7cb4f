use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax classification of an ISO or ESPP share sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispositionType {
    /// Holding-period requirements met; preferential treatment applies.
    Qualifying,
    /// Sold too early; some or all of the spread is ordinary income.
    Disqualifying,
}

/// Short-term vs. long-term capital-gain treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GainTerm {
    ShortTerm,
    LongTerm,
}

/// An RSU vesting event. Ordinary income is recognized at vest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsuVesting {
    pub vest_date: NaiveDate,
    pub shares_vested: Decimal,
    pub fmv_at_vest: Decimal,
}

impl RsuVesting {
    /// FMV x shares, recognized as wages at vest.
    pub fn ordinary_income(&self) -> Decimal {
        self.fmv_at_vest * self.shares_vested
    }

    /// Basis for a later sale is the vest-date FMV.
    pub fn cost_basis_per_share(&self) -> Decimal {
        self.fmv_at_vest
    }
}

/// Sale of previously vested RSU shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsuSale {
    pub vesting: RsuVesting,
    pub sale_date: NaiveDate,
    pub sale_price: Decimal,
    pub shares_sold: Decimal,
}

impl RsuSale {
    pub fn days_held(&self) -> i64 {
        (self.sale_date - self.vesting.vest_date).num_days()
    }
}

/// An incentive stock option exercise.
///
/// No regular-tax income at exercise; the bargain element is an AMT
/// preference item for the exercise year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoExercise {
    pub grant_date: NaiveDate,
    pub exercise_date: NaiveDate,
    pub shares: Decimal,
    pub strike_price: Decimal,
    pub fmv_at_exercise: Decimal,
}

impl IsoExercise {
    /// (FMV - strike) x shares, floored at zero when underwater.
    pub fn bargain_element(&self) -> Decimal {
        let spread = self.fmv_at_exercise - self.strike_price;
        if spread <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            spread * self.shares
        }
    }
}

/// Sale of ISO shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoSale {
    pub exercise: IsoExercise,
    pub sale_date: NaiveDate,
    pub sale_price: Decimal,
    pub shares_sold: Decimal,
}

impl IsoSale {
    pub fn days_from_exercise(&self) -> i64 {
        (self.sale_date - self.exercise.exercise_date).num_days()
    }

    pub fn days_from_grant(&self) -> i64 {
        (self.sale_date - self.exercise.grant_date).num_days()
    }
}

/// A non-qualified stock option exercise. The spread is wages at exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NsoExercise {
    pub exercise_date: NaiveDate,
    pub shares: Decimal,
    pub strike_price: Decimal,
    pub fmv_at_exercise: Decimal,
}

impl NsoExercise {
    /// (FMV - strike) x shares, floored at zero when underwater.
    pub fn ordinary_income(&self) -> Decimal {
        let spread = self.fmv_at_exercise - self.strike_price;
        if spread <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            spread * self.shares
        }
    }

    /// Basis for a later sale is the exercise-date FMV.
    pub fn cost_basis_per_share(&self) -> Decimal {
        self.fmv_at_exercise
    }
}

/// Sale of NSO shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NsoSale {
    pub exercise: NsoExercise,
    pub sale_date: NaiveDate,
    pub sale_price: Decimal,
    pub shares_sold: Decimal,
}

impl NsoSale {
    pub fn days_held(&self) -> i64 {
        (self.sale_date - self.exercise.exercise_date).num_days()
    }
}

/// An ESPP purchase under a lookback plan with a percentage discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsppPurchase {
    pub offering_date: NaiveDate,
    pub purchase_date: NaiveDate,
    pub shares: Decimal,
    /// Market price on the offering date (lookback leg).
    pub offering_price: Decimal,
    /// Market price on the purchase date.
    pub fmv_at_purchase: Decimal,
    /// Plan discount as a fraction, e.g. 0.15 for 15%.
    pub discount_rate: Decimal,
}

impl EsppPurchase {
    /// Discounted purchase price per share: the lesser of the offering-date
    /// price and the purchase-date FMV, times (1 - discount).
    pub fn purchase_price_per_share(&self) -> Decimal {
        let lookback = self.offering_price.min(self.fmv_at_purchase);
        lookback * (Decimal::ONE - self.discount_rate)
    }

    /// Statutory discount per share used for qualifying dispositions:
    /// the discount measured against the offering-date price.
    pub fn statutory_discount_per_share(&self) -> Decimal {
        self.offering_price * self.discount_rate
    }
}

/// Sale of ESPP shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsppSale {
    pub purchase: EsppPurchase,
    pub sale_date: NaiveDate,
    pub sale_price: Decimal,
    pub shares_sold: Decimal,
}

impl EsppSale {
    pub fn days_from_offering(&self) -> i64 {
        (self.sale_date - self.purchase.offering_date).num_days()
    }

    pub fn days_from_purchase(&self) -> i64 {
        (self.sale_date - self.purchase.purchase_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rsu_ordinary_income_is_fmv_times_shares() {
        let vesting = RsuVesting {
            vest_date: date(2025, 3, 15),
            shares_vested: dec!(100),
            fmv_at_vest: dec!(45.50),
        };

        assert_eq!(vesting.ordinary_income(), dec!(4550.00));
        assert_eq!(vesting.cost_basis_per_share(), dec!(45.50));
    }

    #[test]
    fn iso_bargain_element_floors_at_zero_when_underwater() {
        let exercise = IsoExercise {
            grant_date: date(2023, 1, 10),
            exercise_date: date(2025, 1, 10),
            shares: dec!(1000),
            strike_price: dec!(50.00),
            fmv_at_exercise: dec!(30.00),
        };

        assert_eq!(exercise.bargain_element(), dec!(0));
    }

    #[test]
    fn iso_bargain_element_in_the_money() {
        // 1,000 shares, strike $10, FMV $50 -> $40,000 AMT preference.
        let exercise = IsoExercise {
            grant_date: date(2023, 6, 1),
            exercise_date: date(2025, 6, 1),
            shares: dec!(1000),
            strike_price: dec!(10.00),
            fmv_at_exercise: dec!(50.00),
        };

        assert_eq!(exercise.bargain_element(), dec!(40000.00));
    }

    #[test]
    fn nso_ordinary_income_floors_at_zero_when_underwater() {
        let exercise = NsoExercise {
            exercise_date: date(2025, 2, 1),
            shares: dec!(500),
            strike_price: dec!(20.00),
            fmv_at_exercise: dec!(15.00),
        };

        assert_eq!(exercise.ordinary_income(), dec!(0));
    }

    #[test]
    fn espp_purchase_price_uses_lower_lookback_leg() {
        let purchase = EsppPurchase {
            offering_date: date(2024, 7, 1),
            purchase_date: date(2024, 12, 31),
            shares: dec!(100),
            offering_price: dec!(40.00),
            fmv_at_purchase: dec!(60.00),
            discount_rate: dec!(0.15),
        };

        // min(40, 60) * 0.85 = 34.00
        assert_eq!(purchase.purchase_price_per_share(), dec!(34.0000));
        assert_eq!(purchase.statutory_discount_per_share(), dec!(6.0000));
    }

    #[test]
    fn holding_day_counts_are_exact() {
        let sale = RsuSale {
            vesting: RsuVesting {
                vest_date: date(2024, 1, 1),
                shares_vested: dec!(10),
                fmv_at_vest: dec!(100.00),
            },
            sale_date: date(2024, 12, 31),
            sale_price: dec!(120.00),
            shares_sold: dec!(10),
        };

        assert_eq!(sale.days_held(), 365);
    }
}
