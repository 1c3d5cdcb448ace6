//! Blood parameter extraction from report text.
//!
//! Scans extracted (OCR'd or parsed) report text for known parameters
//! followed by a numeric value, and grades each value against its clinical
//! reference range.

use regex::Regex;
use serde::Serialize;

use super::ranges::{ReferenceRange, REFERENCE_RANGES};

/// Whether a measured value falls inside its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FindingStatus {
    Normal,
    Abnormal,
}

/// One graded parameter reading.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub parameter: String,
    pub value: f64,
    pub unit: String,
    pub status: FindingStatus,
    pub explanation: String,
}

/// Compiled scanner over all known parameters.
///
/// Patterns are compiled once and reused across requests. Each parameter is
/// matched as its name followed by optional colon/whitespace and a decimal
/// number; the first match in the text wins.
pub struct ParameterScanner {
    patterns: Vec<(&'static ReferenceRange, Regex)>,
}

impl ParameterScanner {
    pub fn new() -> Self {
        let patterns = REFERENCE_RANGES
            .iter()
            .map(|range| {
                let pattern = format!(
                    r"{}[:\s]*([0-9]*\.?[0-9]+)",
                    regex::escape(range.parameter)
                );
                let regex = Regex::new(&pattern).expect("parameter pattern is valid");
                (range, regex)
            })
            .collect();

        Self { patterns }
    }

    /// Scan report text and grade every parameter found.
    ///
    /// Findings come back in reference-table order. Text is lowercased before
    /// matching, so parameter names match regardless of report casing.
    pub fn scan(&self, text: &str) -> Vec<Finding> {
        let text = text.to_lowercase();
        let mut findings = Vec::new();

        for (range, pattern) in &self.patterns {
            let Some(captures) = pattern.captures(&text) else {
                continue;
            };
            let Ok(value) = captures[1].parse::<f64>() else {
                continue;
            };
            findings.push(evaluate(range, value));
        }

        findings
    }
}

impl Default for ParameterScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Grade a single value against its reference range.
fn evaluate(range: &ReferenceRange, value: f64) -> Finding {
    let (status, explanation) = if value < range.min {
        (
            FindingStatus::Abnormal,
            format!("Low {}: {}", range.parameter, range.explanation),
        )
    } else if value > range.max {
        (FindingStatus::Abnormal, range.explanation.to_string())
    } else {
        (FindingStatus::Normal, "Within normal range.".to_string())
    };

    Finding {
        parameter: range.parameter.to_string(),
        value,
        unit: range.unit.to_string(),
        status,
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ranges;

    #[test]
    fn test_scan_colon_and_whitespace_forms() {
        let scanner = ParameterScanner::new();

        let findings = scanner.scan("Hemoglobin: 14.2 g/dL\nGlucose 95\nSodium:140");
        let names: Vec<&str> = findings.iter().map(|f| f.parameter.as_str()).collect();
        assert_eq!(names, vec!["hemoglobin", "glucose", "sodium"]);
        assert_eq!(findings[0].value, 14.2);
        assert_eq!(findings[1].value, 95.0);
        assert_eq!(findings[2].value, 140.0);
        assert!(findings.iter().all(|f| f.status == FindingStatus::Normal));
    }

    #[test]
    fn test_scan_is_case_insensitive() {
        let scanner = ParameterScanner::new();
        let findings = scanner.scan("HEMOGLOBIN: 15.0");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].parameter, "hemoglobin");
    }

    #[test]
    fn test_first_match_wins() {
        let scanner = ParameterScanner::new();
        let findings = scanner.scan("glucose: 80\nglucose: 200");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].value, 80.0);
    }

    #[test]
    fn test_leading_dot_decimal() {
        let scanner = ParameterScanner::new();
        let findings = scanner.scan("creatinine: .9");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].value, 0.9);
        assert_eq!(findings[0].status, FindingStatus::Normal);
    }

    #[test]
    fn test_low_value_grading() {
        let range = ranges::find("hemoglobin").unwrap();
        let finding = evaluate(range, 11.0);
        assert_eq!(finding.status, FindingStatus::Abnormal);
        assert_eq!(
            finding.explanation,
            "Low hemoglobin: Low hemoglobin may indicate anemia."
        );
    }

    #[test]
    fn test_high_value_grading() {
        let range = ranges::find("glucose").unwrap();
        let finding = evaluate(range, 180.0);
        assert_eq!(finding.status, FindingStatus::Abnormal);
        assert_eq!(finding.explanation, "High glucose levels can indicate diabetes.");
    }

    #[test]
    fn test_boundary_values_are_normal() {
        let range = ranges::find("glucose").unwrap();
        assert_eq!(evaluate(range, 70.0).status, FindingStatus::Normal);
        assert_eq!(evaluate(range, 100.0).status, FindingStatus::Normal);
    }

    #[test]
    fn test_no_parameters_in_text() {
        let scanner = ParameterScanner::new();
        assert!(scanner.scan("no lab values here").is_empty());
        assert!(scanner.scan("").is_empty());
    }

    #[test]
    fn test_multi_word_parameters() {
        let scanner = ParameterScanner::new();
        let findings = scanner.scan("total protein: 7.1\nvitamin b12: 450\nvitamin d: 30");
        let names: Vec<&str> = findings.iter().map(|f| f.parameter.as_str()).collect();
        assert!(names.contains(&"total protein"));
        assert!(names.contains(&"vitamin b12"));
        assert!(names.contains(&"vitamin d"));
    }
}
