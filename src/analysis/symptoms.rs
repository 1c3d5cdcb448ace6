//! Lab test recommendation from free-text symptom descriptions.

use std::collections::BTreeSet;

/// A symptom keyword and the lab tests usually ordered for it.
pub struct SymptomRule {
    pub keyword: &'static str,
    pub tests: &'static [&'static str],
}

pub const SYMPTOM_RULES: &[SymptomRule] = &[
    SymptomRule {
        keyword: "fatigue",
        tests: &[
            "Complete Blood Count (CBC)",
            "Thyroid Function Test",
            "Vitamin B12 Test",
        ],
    },
    SymptomRule {
        keyword: "fever",
        tests: &["CBC", "Blood Culture", "Malaria Test"],
    },
    SymptomRule {
        keyword: "joint pain",
        tests: &["Rheumatoid Factor Test", "CRP Test", "Uric Acid Test"],
    },
    SymptomRule {
        keyword: "weight loss",
        tests: &["Thyroid Function Test", "HbA1c", "Liver Function Test"],
    },
    SymptomRule {
        keyword: "weight gain",
        tests: &["Thyroid Function Test", "Lipid Profile"],
    },
    SymptomRule {
        keyword: "dizziness",
        tests: &["CBC", "Iron Studies", "Vitamin B12 Test"],
    },
    SymptomRule {
        keyword: "nausea",
        tests: &["Liver Function Test", "Amylase Test"],
    },
    SymptomRule {
        keyword: "vomiting",
        tests: &["Electrolyte Panel", "Liver Function Test"],
    },
    SymptomRule {
        keyword: "blurred vision",
        tests: &["Blood Sugar Test", "Thyroid Test"],
    },
    SymptomRule {
        keyword: "shortness of breath",
        tests: &["CBC", "D-Dimer Test", "Arterial Blood Gas (ABG)"],
    },
    SymptomRule {
        keyword: "palpitations",
        tests: &["Thyroid Function Test", "Electrolyte Panel"],
    },
    SymptomRule {
        keyword: "swelling",
        tests: &["Kidney Function Test", "Liver Function Test", "Albumin Test"],
    },
    SymptomRule {
        keyword: "persistent cough",
        tests: &["CBC", "Sputum Culture", "Chest X-Ray (imaging)"],
    },
    SymptomRule {
        keyword: "skin rash",
        tests: &["Allergy Panel", "CBC", "Autoimmune Panel"],
    },
    SymptomRule {
        keyword: "abdominal pain",
        tests: &["Liver Function Test", "Amylase/Lipase Test", "CBC"],
    },
    SymptomRule {
        keyword: "frequent urination",
        tests: &["Blood Sugar Test", "Kidney Function Test", "Electrolyte Panel"],
    },
    SymptomRule {
        keyword: "thirst",
        tests: &["Blood Sugar Test", "Electrolyte Panel"],
    },
    SymptomRule {
        keyword: "hair loss",
        tests: &["Thyroid Function Test", "Vitamin D Test", "Ferritin Test"],
    },
    SymptomRule {
        keyword: "memory loss",
        tests: &["Vitamin B12 Test", "Thyroid Function Test", "Electrolyte Panel"],
    },
    SymptomRule {
        keyword: "muscle weakness",
        tests: &[
            "Electrolyte Panel",
            "Thyroid Function Test",
            "Creatinine Kinase (CK) Test",
        ],
    },
    SymptomRule {
        keyword: "anemia",
        tests: &["CBC", "Iron Studies", "Vitamin B12 Test", "Folate Test"],
    },
    SymptomRule {
        keyword: "high blood pressure",
        tests: &["Kidney Function Test", "Lipid Profile", "Electrolyte Panel"],
    },
    SymptomRule {
        keyword: "low blood pressure",
        tests: &["CBC", "Electrolyte Panel", "Cortisol Test"],
    },
    SymptomRule {
        keyword: "chest pain",
        tests: &["Troponin Test", "Lipid Profile", "CBC", "CK-MB Test"],
    },
    SymptomRule {
        keyword: "swollen lymph nodes",
        tests: &["CBC", "Lymph Node Biopsy (not blood test)", "Viral Panel"],
    },
    SymptomRule {
        keyword: "loss of appetite",
        tests: &["Liver Function Test", "Thyroid Function Test", "CBC"],
    },
    SymptomRule {
        keyword: "irregular periods",
        tests: &["Hormone Panel", "Thyroid Function Test", "FSH/LH Test"],
    },
    SymptomRule {
        keyword: "infertility",
        tests: &["Hormone Panel", "Thyroid Function Test", "Prolactin Test"],
    },
    SymptomRule {
        keyword: "itching",
        tests: &["Allergy Panel", "Liver Function Test", "Kidney Function Test"],
    },
    SymptomRule {
        keyword: "joint stiffness",
        tests: &["Rheumatoid Factor Test", "CRP Test", "Anti-CCP Test"],
    },
    SymptomRule {
        keyword: "blood in urine",
        tests: &[
            "Urinalysis (not blood test)",
            "Kidney Function Test",
            "CBC",
        ],
    },
    SymptomRule {
        keyword: "persistent fatigue",
        tests: &[
            "CBC",
            "Thyroid Function Test",
            "Vitamin D Test",
            "Iron Studies",
        ],
    },
    SymptomRule {
        keyword: "chronic headache",
        tests: &["CBC", "Thyroid Function Test", "Vitamin B12 Test"],
    },
    SymptomRule {
        keyword: "confusion",
        tests: &["Electrolyte Panel", "Thyroid Function Test", "Vitamin B12 Test"],
    },
    SymptomRule {
        keyword: "tremors",
        tests: &["Thyroid Function Test", "Electrolyte Panel"],
    },
    SymptomRule {
        keyword: "chest tightness",
        tests: &["CBC", "D-Dimer Test", "Troponin Test"],
    },
    SymptomRule {
        keyword: "swollen feet",
        tests: &["Kidney Function Test", "Liver Function Test", "Albumin Test"],
    },
    SymptomRule {
        keyword: "frequent infections",
        tests: &["CBC with Differential", "Immunoglobulin Panel"],
    },
    SymptomRule {
        keyword: "slow wound healing",
        tests: &["Blood Sugar Test", "CBC", "Vitamin C Test"],
    },
    SymptomRule {
        keyword: "yellowing of skin or eyes",
        tests: &["Liver Function Test", "Bilirubin Test"],
    },
    SymptomRule {
        keyword: "excessive sweating",
        tests: &["Thyroid Function Test", "Glucose Test"],
    },
];

/// Recommend lab tests for a free-text symptom description.
///
/// Every keyword that occurs as a substring of the lowercased input
/// contributes its tests; the union comes back sorted.
pub fn recommend_tests(symptoms: &str) -> Vec<String> {
    let symptoms = symptoms.to_lowercase();
    let mut tests = BTreeSet::new();

    for rule in SYMPTOM_RULES {
        if symptoms.contains(rule.keyword) {
            tests.extend(rule.tests.iter().copied());
        }
    }

    tests.into_iter().map(str::to_string).collect()
}
