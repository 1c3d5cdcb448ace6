//! Blood report analysis.
//!
//! Turns extracted report text into structured findings graded against
//! clinical reference ranges, and derives test and specialist
//! recommendations from them.

pub mod doctors;
pub mod parser;
pub mod ranges;
pub mod symptoms;

pub use parser::{Finding, FindingStatus, ParameterScanner};

use serde::Serialize;

/// Full analysis of one report's extracted text.
#[derive(Debug, Clone, Serialize)]
pub struct ReportAnalysis {
    pub findings: Vec<Finding>,
    pub doctor_recommendation: String,
}

/// Scan report text and build the complete analysis.
pub fn analyze(scanner: &ParameterScanner, text: &str) -> ReportAnalysis {
    let findings = scanner.scan(text);
    let doctor_recommendation = doctors::recommendation(&findings);
    ReportAnalysis {
        findings,
        doctor_recommendation,
    }
}
