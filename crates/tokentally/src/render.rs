//! Text and JSON output for estimates

use tokentally_core::{Estimate, Severity, Thresholds};

/// What part of the input was counted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    File,
    Selection,
}

impl Scope {
    pub fn label(&self) -> &'static str {
        match self {
            Scope::File => "file",
            Scope::Selection => "selected",
        }
    }
}

/// `file: 123 tokens [warning]`
pub fn status_line(scope: Scope, estimate: &Estimate) -> String {
    format!(
        "{}: {} tokens [{}]",
        scope.label(),
        estimate.count,
        estimate.severity
    )
}

pub fn details(scope: Scope, estimate: &Estimate, thresholds: Thresholds) -> String {
    let mut lines = vec![
        format!("Current: {} {} tokens", scope.label(), estimate.count),
        format!("Estimator: {}", estimate.estimator.display_name()),
        format!("Warning threshold: {}", thresholds.warning),
        format!("Danger threshold: {}", thresholds.danger),
    ];

    let reached = match estimate.severity {
        Severity::Warning => Some("warning"),
        Severity::Danger => Some("danger"),
        Severity::Normal => None,
    };
    if let Some(tier) = reached {
        lines.push(format!("Token count has reached the {} threshold", tier));
    }

    lines.join("\n")
}

pub fn json_report(scope: Scope, estimate: &Estimate, thresholds: Thresholds) -> serde_json::Value {
    serde_json::json!({
        "scope": scope.label(),
        "count": estimate.count,
        "severity": estimate.severity,
        "estimator": estimate.estimator,
        "warningThreshold": thresholds.warning,
        "dangerThreshold": thresholds.danger,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokentally_core::Estimator;

    fn sample(count: usize, severity: Severity) -> Estimate {
        Estimate {
            count,
            severity,
            estimator: Estimator::Claude,
        }
    }

    #[test]
    fn test_status_line() {
        let estimate = sample(42, Severity::Normal);
        assert_eq!(status_line(Scope::File, &estimate), "file: 42 tokens [normal]");
        assert_eq!(
            status_line(Scope::Selection, &estimate),
            "selected: 42 tokens [normal]"
        );
    }

    #[test]
    fn test_details_mentions_tier() {
        let thresholds = Thresholds::new(10, 20);
        let normal = details(Scope::File, &sample(1, Severity::Normal), thresholds);
        assert!(normal.contains("Estimator: Claude"));
        assert!(normal.contains("Warning threshold: 10"));
        assert!(!normal.contains("reached"));

        let danger = details(Scope::File, &sample(25, Severity::Danger), thresholds);
        assert!(danger.contains("danger threshold"));
    }

    #[test]
    fn test_json_report() {
        let report = json_report(
            Scope::Selection,
            &sample(7, Severity::Warning),
            Thresholds::new(5, 9),
        );
        assert_eq!(report["scope"], "selected");
        assert_eq!(report["count"], 7);
        assert_eq!(report["severity"], "warning");
        assert_eq!(report["estimator"], "claude");
        assert_eq!(report["dangerThreshold"], 9);
    }
}
