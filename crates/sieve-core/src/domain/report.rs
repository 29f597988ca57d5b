//! Validation report: the common result format for a validation pass.
//!
//! The boolean verdict of `validate` is derived from this report; callers
//! that want granular diagnostics read the (field, rule) pairs directly.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rule::Rule;

/// One failed (field, rule) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Field name on the candidate.
    pub field: String,

    /// The rule that failed for that field.
    pub rule: Rule,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.field, self.rule)
    }
}

/// Every violation produced by one validation pass, in sorted field order.
///
/// An empty report means the candidate passed every registered rule
/// (including the vacuous case where nothing was registered).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// True iff the candidate passed every registered rule.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_valid() {
        let report = ValidationReport::default();
        assert!(report.is_valid());
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn violation_display_format() {
        let v = Violation {
            field: "price".to_string(),
            rule: Rule::PositiveNumber,
        };
        assert_eq!(v.to_string(), "  price: must be a number greater than zero");
    }

    #[test]
    fn report_display_is_one_violation_per_line() {
        let report = ValidationReport::new(vec![
            Violation {
                field: "price".to_string(),
                rule: Rule::PositiveNumber,
            },
            Violation {
                field: "title".to_string(),
                rule: Rule::Required,
            },
        ]);
        let display = report.to_string();
        assert_eq!(display.lines().count(), 2);
        assert!(display.contains("price:"));
        assert!(display.contains("title:"));
    }

    #[test]
    fn report_roundtrip_json() {
        let report = ValidationReport::new(vec![Violation {
            field: "title".to_string(),
            rule: Rule::MinLength(2),
        }]);
        let s = serde_json::to_string(&report).unwrap();
        let back: ValidationReport = serde_json::from_str(&s).unwrap();
        assert_eq!(back, report);
        assert!(!back.is_valid());
    }
}
