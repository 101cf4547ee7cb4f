use serde::{Deserialize, Serialize};

/// Days spent in one state during the year (or during an equity
/// grant-to-vest window). Input to multi-state sourcing; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatePresence {
    /// Two-letter state code, e.g. "CA".
    pub state_code: String,
    /// Calendar days physically present.
    pub calendar_days: u32,
    /// Days actually worked in the state, when tracked. Allocation falls
    /// back to calendar-day proportions when no presence has workday data.
    pub workdays: Option<u32>,
}

impl StatePresence {
    pub fn new(state_code: impl Into<String>, calendar_days: u32, workdays: Option<u32>) -> Self {
        Self {
            state_code: state_code.into(),
            calendar_days,
            workdays,
        }
    }
}
