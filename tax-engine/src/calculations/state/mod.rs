//! State tax strategies, keyed by two-letter state code.
//!
//! Each modeled state implements [`StateTaxModule`]; everything else routes
//! to the flat-rate [`fallback`] estimator. Dispatch is a lookup in
//! [`module_for`], so adding a state means adding an entry, not touching the
//! existing modules.

mod california;
mod fallback;
mod new_york;
mod washington;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use california::California;
pub use fallback::Fallback;
pub use new_york::NewYork;
pub use washington::Washington;

use crate::config::TaxYearConfig;
use crate::models::{FilingStatus, IncomeBreakdown, StateOptions};

/// Output of one state module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTaxResult {
    pub state_code: String,

    /// State tax added to the filer's total liability.
    pub tax: Decimal,

    /// Rate on the next dollar of income at the computed taxable level.
    pub marginal_rate: Decimal,

    /// True when the number is a documented flat-rate approximation rather
    /// than a modeled calculation.
    pub approximate: bool,

    /// Advisory notes, including separately reportable withholding such as
    /// CA SDI (which is never added to `tax`).
    pub warnings: Vec<String>,
}

impl StateTaxResult {
    fn zero(state_code: impl Into<String>) -> Self {
        Self {
            state_code: state_code.into(),
            tax: Decimal::ZERO,
            marginal_rate: Decimal::ZERO,
            approximate: false,
            warnings: Vec::new(),
        }
    }
}

/// A state tax strategy.
pub trait StateTaxModule {
    fn code(&self) -> &str;

    fn calculate(
        &self,
        income: &IncomeBreakdown,
        filing_status: FilingStatus,
        options: &StateOptions,
        config: &TaxYearConfig,
    ) -> StateTaxResult;
}

/// Looks up the strategy for a state code. Unmodeled codes (and blank
/// input) get the fallback estimator rather than an error, so a bad state
/// code still produces a complete summary.
pub fn module_for(code: &str) -> Box<dyn StateTaxModule> {
    match code.trim().to_ascii_uppercase().as_str() {
        "CA" => Box::new(California),
        "NY" => Box::new(NewYork),
        "WA" => Box::new(Washington),
        other => Box::new(Fallback::new(other)),
    }
}
