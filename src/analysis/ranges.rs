//! Clinical reference ranges for blood parameters.

/// Reference range for a single blood parameter.
///
/// Parameter names are lowercase because report text is lowercased before
/// scanning.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceRange {
    pub parameter: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
    /// What an out-of-range value may indicate.
    pub explanation: &'static str,
}

pub const REFERENCE_RANGES: &[ReferenceRange] = &[
    ReferenceRange {
        parameter: "hemoglobin",
        min: 13.5,
        max: 17.5,
        unit: "g/dL",
        explanation: "Low hemoglobin may indicate anemia.",
    },
    ReferenceRange {
        parameter: "rbc",
        min: 4.7,
        max: 6.1,
        unit: "million cells/mcL",
        explanation: "Abnormal RBC count may suggest anemia or polycythemia.",
    },
    ReferenceRange {
        parameter: "wbc",
        min: 4500.0,
        max: 11000.0,
        unit: "cells/mcL",
        explanation: "High WBC can indicate infection or inflammation.",
    },
    ReferenceRange {
        parameter: "platelets",
        min: 150000.0,
        max: 450000.0,
        unit: "platelets/mcL",
        explanation: "Low platelets may lead to bleeding problems.",
    },
    ReferenceRange {
        parameter: "glucose",
        min: 70.0,
        max: 100.0,
        unit: "mg/dL",
        explanation: "High glucose levels can indicate diabetes.",
    },
    ReferenceRange {
        parameter: "creatinine",
        min: 0.6,
        max: 1.3,
        unit: "mg/dL",
        explanation: "High creatinine may suggest kidney dysfunction.",
    },
    ReferenceRange {
        parameter: "urea",
        min: 7.0,
        max: 20.0,
        unit: "mg/dL",
        explanation: "High urea may suggest kidney dysfunction or dehydration.",
    },
    ReferenceRange {
        parameter: "bilirubin",
        min: 0.1,
        max: 1.2,
        unit: "mg/dL",
        explanation: "High bilirubin may suggest liver dysfunction or hemolysis.",
    },
    ReferenceRange {
        parameter: "alt",
        min: 7.0,
        max: 56.0,
        unit: "U/L",
        explanation: "High ALT may suggest liver injury.",
    },
    ReferenceRange {
        parameter: "ast",
        min: 10.0,
        max: 40.0,
        unit: "U/L",
        explanation: "High AST may suggest liver or muscle damage.",
    },
    ReferenceRange {
        parameter: "cholesterol",
        min: 125.0,
        max: 200.0,
        unit: "mg/dL",
        explanation: "High cholesterol is a risk factor for heart disease.",
    },
    ReferenceRange {
        parameter: "triglycerides",
        min: 0.0,
        max: 150.0,
        unit: "mg/dL",
        explanation: "High triglycerides may suggest metabolic syndrome or heart disease.",
    },
    ReferenceRange {
        parameter: "hdl",
        min: 40.0,
        max: 60.0,
        unit: "mg/dL",
        explanation: "Low HDL increases heart disease risk.",
    },
    ReferenceRange {
        parameter: "ldl",
        min: 0.0,
        max: 130.0,
        unit: "mg/dL",
        explanation: "High LDL increases heart disease risk.",
    },
    ReferenceRange {
        parameter: "sodium",
        min: 135.0,
        max: 145.0,
        unit: "mEq/L",
        explanation: "Abnormal sodium levels may cause dehydration or electrolyte imbalance.",
    },
    ReferenceRange {
        parameter: "potassium",
        min: 3.5,
        max: 5.0,
        unit: "mEq/L",
        explanation: "Abnormal potassium can cause heart rhythm problems.",
    },
    ReferenceRange {
        parameter: "calcium",
        min: 8.5,
        max: 10.2,
        unit: "mg/dL",
        explanation: "Low calcium may cause muscle spasms; high may suggest parathyroid disorder.",
    },
    ReferenceRange {
        parameter: "phosphate",
        min: 2.5,
        max: 4.5,
        unit: "mg/dL",
        explanation: "Abnormal phosphate can affect bone health and kidney function.",
    },
    ReferenceRange {
        parameter: "magnesium",
        min: 1.7,
        max: 2.2,
        unit: "mg/dL",
        explanation: "Low magnesium can cause muscle cramps and arrhythmias.",
    },
    ReferenceRange {
        parameter: "total protein",
        min: 6.0,
        max: 8.3,
        unit: "g/dL",
        explanation: "Abnormal protein may suggest liver or kidney disease.",
    },
    ReferenceRange {
        parameter: "albumin",
        min: 3.5,
        max: 5.0,
        unit: "g/dL",
        explanation: "Low albumin suggests liver/kidney disease or malnutrition.",
    },
    ReferenceRange {
        parameter: "crp",
        min: 0.0,
        max: 10.0,
        unit: "mg/L",
        explanation: "High CRP indicates inflammation or infection.",
    },
    ReferenceRange {
        parameter: "vitamin d",
        min: 20.0,
        max: 50.0,
        unit: "ng/mL",
        explanation: "Low vitamin D may suggest bone disorders or deficiency.",
    },
    ReferenceRange {
        parameter: "vitamin b12",
        min: 200.0,
        max: 900.0,
        unit: "pg/mL",
        explanation: "Low B12 can cause anemia and neurological issues.",
    },
];

/// Look up the reference range for a parameter name (lowercase).
pub fn find(parameter: &str) -> Option<&'static ReferenceRange> {
    REFERENCE_RANGES.iter().find(|r| r.parameter == parameter)
}
