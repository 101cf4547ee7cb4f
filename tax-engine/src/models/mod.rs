mod alerts;
mod equity;
mod filing_status;
mod income;
mod scenario;
mod state_options;
mod state_presence;
mod tax_summary;

pub use alerts::{AlertCategory, AlertSeverity, RedFlagReport, TaxAlert};
pub use equity::{
    DispositionType, EsppPurchase, EsppSale, GainTerm, IsoExercise, IsoSale, NsoExercise, NsoSale,
    RsuSale, RsuVesting,
};
pub use filing_status::{FilingStatus, ParseFilingStatusError};
pub use income::IncomeBreakdown;
pub use scenario::{ScenarioComparison, ScenarioParameters, WhatIfScenario};
pub use state_options::{StateOptions, WaExemptGains};
pub use state_presence::StatePresence;
pub use tax_summary::TaxSummary;
