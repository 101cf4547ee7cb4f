//! What-if scenario evaluation and comparison.
//!
//! Scenarios are fully-specified inputs, so running one is deterministic
//! and has no effect on any other scenario. The engine keeps a history of
//! everything it has run, which makes best/worst queries and by-name
//! comparisons possible after a modeling session.

use tracing::info;

use crate::calculations::aggregate::{CalculationInput, TaxCalculator};
use crate::config::{ConfigError, TaxYearConfig};
use crate::models::{ScenarioComparison, ScenarioParameters, WhatIfScenario};

/// Runs scenarios and remembers their results.
#[derive(Debug, Clone, Default)]
pub struct ScenarioEngine {
    scenarios: Vec<WhatIfScenario>,
}

impl ScenarioEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates one scenario without recording it.
    pub fn evaluate(parameters: ScenarioParameters) -> Result<WhatIfScenario, ConfigError> {
        let config = TaxYearConfig::for_year(parameters.tax_year)?;
        let calculator = TaxCalculator::new(&config);

        let input = CalculationInput {
            income: parameters.income.clone(),
            filing_status: parameters.filing_status,
            state: parameters.state.clone(),
            state_options: parameters.state_options.clone(),
            itemized_deductions: parameters.itemized_deductions,
            federal_withheld: parameters.federal_withheld,
            state_withheld: parameters.state_withheld,
        };
        let summary = calculator.calculate(&input);

        info!(
            scenario = %parameters.name,
            total_tax = %summary.total_tax,
            "scenario evaluated"
        );
        Ok(WhatIfScenario { parameters, summary })
    }

    /// Evaluates a scenario and adds it to the history.
    pub fn run(&mut self, parameters: ScenarioParameters) -> Result<WhatIfScenario, ConfigError> {
        let scenario = Self::evaluate(parameters)?;
        self.scenarios.push(scenario.clone());
        Ok(scenario)
    }

    pub fn scenarios(&self) -> &[WhatIfScenario] {
        &self.scenarios
    }

    pub fn find(&self, name: &str) -> Option<&WhatIfScenario> {
        self.scenarios.iter().find(|s| s.parameters.name == name)
    }

    /// Compares two previously run scenarios by name.
    pub fn compare(&self, baseline: &str, alternative: &str) -> Option<ScenarioComparison> {
        let baseline = self.find(baseline)?.clone();
        let alternative = self.find(alternative)?.clone();
        Some(ScenarioComparison::derive(baseline, alternative))
    }

    /// The recorded scenario with the lowest total tax.
    pub fn best(&self) -> Option<&WhatIfScenario> {
        self.scenarios
            .iter()
            .min_by(|a, b| a.summary.total_tax.cmp(&b.summary.total_tax))
    }

    /// The recorded scenario with the highest total tax.
    pub fn worst(&self) -> Option<&WhatIfScenario> {
        self.scenarios
            .iter()
            .max_by(|a, b| a.summary.total_tax.cmp(&b.summary.total_tax))
    }
}

/// Evaluates both parameter sets and derives the comparison in one call.
pub fn compare_scenarios(
    baseline: ScenarioParameters,
    alternative: ScenarioParameters,
) -> Result<ScenarioComparison, ConfigError> {
    let baseline = ScenarioEngine::evaluate(baseline)?;
    let alternative = ScenarioEngine::evaluate(alternative)?;
    Ok(ScenarioComparison::derive(baseline, alternative))
}
