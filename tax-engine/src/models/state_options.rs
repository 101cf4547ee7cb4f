use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Long-term gains exempt from the Washington capital-gains excise,
/// itemized by statutory category. Subtracted from taxable gains before
/// the annual exclusion is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaExemptGains {
    pub real_estate: Decimal,
    pub retirement_accounts: Decimal,
    pub qualified_small_business: Decimal,
    pub livestock: Decimal,
    pub timber: Decimal,
    pub auto_dealership_goodwill: Decimal,
}

impl WaExemptGains {
    pub fn total(&self) -> Decimal {
        self.real_estate
            + self.retirement_accounts
            + self.qualified_small_business
            + self.livestock
            + self.timber
            + self.auto_dealership_goodwill
    }
}

/// State-specific filing flags that the primary entry point does not need
/// for most filers. Defaults model a filer outside every special district
/// with no exempt gains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateOptions {
    /// New York City resident (city income tax applies).
    pub nyc_resident: bool,
    /// Yonkers resident (surcharge on net NY state tax).
    pub yonkers_resident: bool,
    /// Self-employment earnings within the Metropolitan Commuter
    /// Transportation District, for the MCTMT.
    pub mctd_self_employment_income: Decimal,
    /// Washington excise exemptions by category.
    pub wa_exempt_gains: WaExemptGains,
}
