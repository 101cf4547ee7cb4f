//! Constant tables for tax year 2025.
//!
//! Federal numbers follow the IRS 2025 inflation adjustments (Rev. Proc.
//! 2024-40). State tables carry the most recent published schedules for the
//! modeled states.

use rust_decimal_macros::dec;

use super::{
    AmtParameters, CaliforniaTables, ConfigError, NewYorkTables, PerStatus, TaxYearConfig,
    WashingtonTables,
};
use crate::calculations::brackets::{BracketSchedule, BracketScheduleError, TaxBracket};

fn schedule(brackets: Vec<TaxBracket>) -> Result<BracketSchedule, BracketScheduleError> {
    BracketSchedule::new(brackets)
}

fn federal_brackets() -> Result<PerStatus<BracketSchedule>, BracketScheduleError> {
    Ok(PerStatus {
        single: schedule(vec![
            TaxBracket::up_to(dec!(11925), dec!(0.10)),
            TaxBracket::up_to(dec!(48475), dec!(0.12)),
            TaxBracket::up_to(dec!(103350), dec!(0.22)),
            TaxBracket::up_to(dec!(197300), dec!(0.24)),
            TaxBracket::up_to(dec!(250525), dec!(0.32)),
            TaxBracket::up_to(dec!(626350), dec!(0.35)),
            TaxBracket::above(dec!(0.37)),
        ])?,
        married_jointly: schedule(vec![
            TaxBracket::up_to(dec!(23850), dec!(0.10)),
            TaxBracket::up_to(dec!(96950), dec!(0.12)),
            TaxBracket::up_to(dec!(206700), dec!(0.22)),
            TaxBracket::up_to(dec!(394600), dec!(0.24)),
            TaxBracket::up_to(dec!(501050), dec!(0.32)),
            TaxBracket::up_to(dec!(751600), dec!(0.35)),
            TaxBracket::above(dec!(0.37)),
        ])?,
        married_separately: schedule(vec![
            TaxBracket::up_to(dec!(11925), dec!(0.10)),
            TaxBracket::up_to(dec!(48475), dec!(0.12)),
            TaxBracket::up_to(dec!(103350), dec!(0.22)),
            TaxBracket::up_to(dec!(197300), dec!(0.24)),
            TaxBracket::up_to(dec!(250525), dec!(0.32)),
            TaxBracket::up_to(dec!(375800), dec!(0.35)),
            TaxBracket::above(dec!(0.37)),
        ])?,
        head_of_household: schedule(vec![
            TaxBracket::up_to(dec!(17000), dec!(0.10)),
            TaxBracket::up_to(dec!(64850), dec!(0.12)),
            TaxBracket::up_to(dec!(103350), dec!(0.22)),
            TaxBracket::up_to(dec!(197300), dec!(0.24)),
            TaxBracket::up_to(dec!(250500), dec!(0.32)),
            TaxBracket::up_to(dec!(626350), dec!(0.35)),
            TaxBracket::above(dec!(0.37)),
        ])?,
    })
}

fn ltcg_brackets() -> Result<PerStatus<BracketSchedule>, BracketScheduleError> {
    Ok(PerStatus {
        single: schedule(vec![
            TaxBracket::up_to(dec!(48350), dec!(0)),
            TaxBracket::up_to(dec!(533400), dec!(0.15)),
            TaxBracket::above(dec!(0.20)),
        ])?,
        married_jointly: schedule(vec![
            TaxBracket::up_to(dec!(96700), dec!(0)),
            TaxBracket::up_to(dec!(600050), dec!(0.15)),
            TaxBracket::above(dec!(0.20)),
        ])?,
        married_separately: schedule(vec![
            TaxBracket::up_to(dec!(48350), dec!(0)),
            TaxBracket::up_to(dec!(300000), dec!(0.15)),
            TaxBracket::above(dec!(0.20)),
        ])?,
        head_of_household: schedule(vec![
            TaxBracket::up_to(dec!(64750), dec!(0)),
            TaxBracket::up_to(dec!(566700), dec!(0.15)),
            TaxBracket::above(dec!(0.20)),
        ])?,
    })
}

fn california() -> Result<CaliforniaTables, BracketScheduleError> {
    // Mental-health 1% surtax over $1M is folded into the schedules as
    // explicit top brackets.
    let single = schedule(vec![
        TaxBracket::up_to(dec!(10756), dec!(0.01)),
        TaxBracket::up_to(dec!(25499), dec!(0.02)),
        TaxBracket::up_to(dec!(40245), dec!(0.04)),
        TaxBracket::up_to(dec!(55866), dec!(0.06)),
        TaxBracket::up_to(dec!(70606), dec!(0.08)),
        TaxBracket::up_to(dec!(360659), dec!(0.093)),
        TaxBracket::up_to(dec!(432787), dec!(0.103)),
        TaxBracket::up_to(dec!(721314), dec!(0.113)),
        TaxBracket::up_to(dec!(1000000), dec!(0.123)),
        TaxBracket::above(dec!(0.133)),
    ])?;
    let married_jointly = schedule(vec![
        TaxBracket::up_to(dec!(21512), dec!(0.01)),
        TaxBracket::up_to(dec!(50998), dec!(0.02)),
        TaxBracket::up_to(dec!(80490), dec!(0.04)),
        TaxBracket::up_to(dec!(111732), dec!(0.06)),
        TaxBracket::up_to(dec!(141212), dec!(0.08)),
        TaxBracket::up_to(dec!(721318), dec!(0.093)),
        TaxBracket::up_to(dec!(865574), dec!(0.103)),
        TaxBracket::up_to(dec!(1000000), dec!(0.113)),
        TaxBracket::up_to(dec!(1442628), dec!(0.123)),
        TaxBracket::above(dec!(0.133)),
    ])?;
    let head_of_household = schedule(vec![
        TaxBracket::up_to(dec!(21527), dec!(0.01)),
        TaxBracket::up_to(dec!(51000), dec!(0.02)),
        TaxBracket::up_to(dec!(65744), dec!(0.04)),
        TaxBracket::up_to(dec!(81364), dec!(0.06)),
        TaxBracket::up_to(dec!(96107), dec!(0.08)),
        TaxBracket::up_to(dec!(490493), dec!(0.093)),
        TaxBracket::up_to(dec!(588593), dec!(0.103)),
        TaxBracket::up_to(dec!(980987), dec!(0.113)),
        TaxBracket::up_to(dec!(1000000), dec!(0.123)),
        TaxBracket::above(dec!(0.133)),
    ])?;

    Ok(CaliforniaTables {
        brackets: PerStatus {
            married_separately: single.clone(),
            single,
            married_jointly,
            head_of_household,
        },
        standard_deduction: PerStatus {
            single: dec!(5540),
            married_jointly: dec!(11080),
            married_separately: dec!(5540),
            head_of_household: dec!(11080),
        },
        sdi_rate: dec!(0.011),
    })
}

fn new_york() -> Result<NewYorkTables, BracketScheduleError> {
    let single = schedule(vec![
        TaxBracket::up_to(dec!(8500), dec!(0.04)),
        TaxBracket::up_to(dec!(11700), dec!(0.045)),
        TaxBracket::up_to(dec!(13900), dec!(0.0525)),
        TaxBracket::up_to(dec!(80650), dec!(0.055)),
        TaxBracket::up_to(dec!(215400), dec!(0.06)),
        TaxBracket::up_to(dec!(1077550), dec!(0.0685)),
        TaxBracket::up_to(dec!(5000000), dec!(0.0965)),
        TaxBracket::up_to(dec!(25000000), dec!(0.103)),
        TaxBracket::above(dec!(0.109)),
    ])?;
    let married_jointly = schedule(vec![
        TaxBracket::up_to(dec!(17150), dec!(0.04)),
        TaxBracket::up_to(dec!(23600), dec!(0.045)),
        TaxBracket::up_to(dec!(27900), dec!(0.0525)),
        TaxBracket::up_to(dec!(161550), dec!(0.055)),
        TaxBracket::up_to(dec!(323200), dec!(0.06)),
        TaxBracket::up_to(dec!(2155350), dec!(0.0685)),
        TaxBracket::up_to(dec!(5000000), dec!(0.0965)),
        TaxBracket::up_to(dec!(25000000), dec!(0.103)),
        TaxBracket::above(dec!(0.109)),
    ])?;
    let head_of_household = schedule(vec![
        TaxBracket::up_to(dec!(12800), dec!(0.04)),
        TaxBracket::up_to(dec!(17650), dec!(0.045)),
        TaxBracket::up_to(dec!(20900), dec!(0.0525)),
        TaxBracket::up_to(dec!(107650), dec!(0.055)),
        TaxBracket::up_to(dec!(269300), dec!(0.06)),
        TaxBracket::up_to(dec!(1616450), dec!(0.0685)),
        TaxBracket::up_to(dec!(5000000), dec!(0.0965)),
        TaxBracket::up_to(dec!(25000000), dec!(0.103)),
        TaxBracket::above(dec!(0.109)),
    ])?;

    let nyc_single = schedule(vec![
        TaxBracket::up_to(dec!(12000), dec!(0.03078)),
        TaxBracket::up_to(dec!(25000), dec!(0.03762)),
        TaxBracket::up_to(dec!(50000), dec!(0.03819)),
        TaxBracket::above(dec!(0.03876)),
    ])?;
    let nyc_married_jointly = schedule(vec![
        TaxBracket::up_to(dec!(21600), dec!(0.03078)),
        TaxBracket::up_to(dec!(45000), dec!(0.03762)),
        TaxBracket::up_to(dec!(90000), dec!(0.03819)),
        TaxBracket::above(dec!(0.03876)),
    ])?;
    let nyc_head_of_household = schedule(vec![
        TaxBracket::up_to(dec!(14400), dec!(0.03078)),
        TaxBracket::up_to(dec!(30000), dec!(0.03762)),
        TaxBracket::up_to(dec!(60000), dec!(0.03819)),
        TaxBracket::above(dec!(0.03876)),
    ])?;

    Ok(NewYorkTables {
        brackets: PerStatus {
            married_separately: single.clone(),
            single,
            married_jointly,
            head_of_household,
        },
        standard_deduction: PerStatus {
            single: dec!(8000),
            married_jointly: dec!(16050),
            married_separately: dec!(8000),
            head_of_household: dec!(11200),
        },
        nyc_brackets: PerStatus {
            married_separately: nyc_single.clone(),
            single: nyc_single,
            married_jointly: nyc_married_jointly,
            head_of_household: nyc_head_of_household,
        },
        yonkers_surcharge_rate: dec!(0.1675),
        mctmt_rate: dec!(0.0034),
        mctmt_threshold: dec!(50000),
    })
}

pub(super) fn build() -> Result<TaxYearConfig, ConfigError> {
    Ok(TaxYearConfig {
        tax_year: 2025,

        federal_brackets: federal_brackets()?,
        ltcg_brackets: ltcg_brackets()?,
        standard_deduction: PerStatus {
            single: dec!(15000),
            married_jointly: dec!(30000),
            married_separately: dec!(15000),
            head_of_household: dec!(22500),
        },

        ss_wage_base: dec!(176100),
        ss_tax_rate: dec!(0.062),
        medicare_tax_rate: dec!(0.0145),
        additional_medicare_rate: dec!(0.009),
        additional_medicare_threshold: PerStatus {
            single: dec!(200000),
            married_jointly: dec!(250000),
            married_separately: dec!(125000),
            head_of_household: dec!(200000),
        },

        niit_rate: dec!(0.038),
        niit_threshold: PerStatus {
            single: dec!(200000),
            married_jointly: dec!(250000),
            married_separately: dec!(125000),
            head_of_household: dec!(200000),
        },

        amt: AmtParameters {
            exemption: PerStatus {
                single: dec!(88100),
                married_jointly: dec!(137000),
                married_separately: dec!(68500),
                head_of_household: dec!(88100),
            },
            phaseout_threshold: PerStatus {
                single: dec!(626350),
                married_jointly: dec!(1252700),
                married_separately: dec!(626350),
                head_of_household: dec!(626350),
            },
            phaseout_rate: dec!(0.25),
            low_rate: dec!(0.26),
            high_rate: dec!(0.28),
            rate_break: PerStatus {
                single: dec!(239100),
                married_jointly: dec!(239100),
                married_separately: dec!(119550),
                head_of_household: dec!(239100),
            },
        },

        california: california()?,
        new_york: new_york()?,
        washington: WashingtonTables {
            excise_rate: dec!(0.07),
            excise_threshold: dec!(270000),
        },

        fallback_default_rate: dec!(0.05),
        safe_harbor_high_income_agi: dec!(150000),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::FilingStatus;

    #[test]
    fn california_single_tax_matches_worked_example() {
        // $150,000 wages less the $5,540 CA standard deduction = $144,460
        // taxable, which the published schedule taxes at $9,977.14.
        let tables = california().unwrap();
        let single = tables.brackets.get(FilingStatus::Single);

        assert_eq!(single.tax_for(dec!(144460)), dec!(9977.14));
    }

    #[test]
    fn california_surtax_applies_above_one_million() {
        let tables = california().unwrap();
        let single = tables.brackets.get(FilingStatus::Single);

        assert_eq!(single.marginal_rate_at(dec!(1500000)), dec!(0.133));
    }

    #[test]
    fn new_york_city_top_rate() {
        let tables = new_york().unwrap();
        let nyc = tables.nyc_brackets.get(FilingStatus::Single);

        assert_eq!(nyc.marginal_rate_at(dec!(100000)), dec!(0.03876));
    }

    #[test]
    fn married_jointly_brackets_double_single_bounds() {
        let per = federal_brackets().unwrap();
        let single_first = per.single.brackets()[0].upper.unwrap();
        let mfj_first = per.married_jointly.brackets()[0].upper.unwrap();

        assert_eq!(mfj_first, single_first * dec!(2));
    }
}
