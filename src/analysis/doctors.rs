//! Specialist recommendation from abnormal findings.

use std::collections::BTreeSet;

use super::parser::{Finding, FindingStatus};

/// A medical specialty and the parameters it covers.
pub struct Specialty {
    pub name: &'static str,
    pub parameters: &'static [&'static str],
}

/// Parameter coverage per specialty. Some entries (amylase, lipase,
/// prothrombin time, inr) have no reference range yet and so cannot trigger
/// from an analysis; the table is kept complete anyway.
pub const SPECIALTIES: &[Specialty] = &[
    Specialty {
        name: "Hematologist",
        parameters: &["hemoglobin", "rbc", "wbc", "platelets", "crp"],
    },
    Specialty {
        name: "Endocrinologist",
        parameters: &[
            "glucose",
            "cholesterol",
            "triglycerides",
            "hdl",
            "ldl",
            "vitamin d",
            "vitamin b12",
        ],
    },
    Specialty {
        name: "Nephrologist",
        parameters: &[
            "creatinine",
            "urea",
            "sodium",
            "potassium",
            "calcium",
            "phosphate",
            "magnesium",
        ],
    },
    Specialty {
        name: "Hepatologist",
        parameters: &["alt", "ast", "bilirubin", "albumin", "total protein"],
    },
    Specialty {
        name: "Gastroenterologist",
        parameters: &["amylase", "lipase"],
    },
    Specialty {
        name: "Cardiologist",
        parameters: &["cholesterol", "triglycerides", "hdl", "ldl"],
    },
    Specialty {
        name: "General Physician",
        parameters: &["prothrombin time", "inr"],
    },
];

/// Build the doctor recommendation line for an analysis.
///
/// Abnormal parameters select every specialty that covers them; the list is
/// sorted so responses are deterministic.
pub fn recommendation(findings: &[Finding]) -> String {
    let abnormal: Vec<&str> = findings
        .iter()
        .filter(|f| f.status == FindingStatus::Abnormal)
        .map(|f| f.parameter.as_str())
        .collect();

    let mut specialties = BTreeSet::new();
    for specialty in SPECIALTIES {
        if specialty.parameters.iter().any(|p| abnormal.contains(p)) {
            specialties.insert(specialty.name);
        }
    }

    if specialties.is_empty() {
        "All parameters are within normal ranges.".to_string()
    } else {
        format!(
            "Consult: {}.",
            specialties.into_iter().collect::<Vec<_>>().join(", ")
        )
    }
}
