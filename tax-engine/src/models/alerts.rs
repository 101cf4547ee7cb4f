use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How urgent an alert is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

/// Which rule produced an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertCategory {
    Underwithholding,
    AmtRisk,
    CapitalGainsThreshold,
}

/// A single advisory finding from the red-flag engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAlert {
    pub severity: AlertSeverity,
    pub category: AlertCategory,
    pub message: String,
    /// Dollar amount the alert is about, when one applies.
    pub amount: Option<Decimal>,
    /// Suggested action, when the rule has one.
    pub recommendation: Option<String>,
}

/// Ordered collection of alerts from one analysis pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlagReport {
    pub alerts: Vec<TaxAlert>,
}

impl RedFlagReport {
    pub fn has_critical(&self) -> bool {
        self.alerts
            .iter()
            .any(|a| a.severity == AlertSeverity::Critical)
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(severity: AlertSeverity) -> TaxAlert {
        TaxAlert {
            severity,
            category: AlertCategory::Underwithholding,
            message: "test".to_string(),
            amount: None,
            recommendation: None,
        }
    }

    #[test]
    fn has_critical_true_when_any_alert_is_critical() {
        let report = RedFlagReport {
            alerts: vec![alert(AlertSeverity::Info), alert(AlertSeverity::Critical)],
        };

        assert!(report.has_critical());
    }

    #[test]
    fn has_critical_false_for_warnings_only() {
        let report = RedFlagReport {
            alerts: vec![alert(AlertSeverity::Warning)],
        };

        assert!(!report.has_critical());
    }

    #[test]
    fn severity_ordering_ranks_critical_highest() {
        assert!(AlertSeverity::Critical > AlertSeverity::Warning);
        assert!(AlertSeverity::Warning > AlertSeverity::Info);
    }
}
