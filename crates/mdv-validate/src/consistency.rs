//! Checks spanning both record batches.
//!
//! Three concerns live here:
//!
//! - **Specialty coverage**: high-risk symptom classes (keyword-matched)
//!   must have at least one matching specialist. This is a literal keyword
//!   table, not ontology matching; extend it by adding rules, not by
//!   generalizing the matching.
//!
//! - **Rating plausibility**: ratings must lie in [0, 5]; a near-perfect
//!   rating on a thin review sample is suspicious.
//!
//! - **Fuzzy hospital-name duplicates**: character-set Jaccard over every
//!   unordered pair of distinct hospital names. The metric is crude by
//!   intent (order-independent, case-sensitive, no normalization of
//!   whitespace or legal-entity suffixes) and is known to false-positive
//!   on short names; it is preserved as-is for compatibility.

use std::collections::BTreeSet;

use serde_json::Value;

use mdv_model::{
    HOSPITAL_SIMILARITY_THRESHOLD, MIN_REVIEW_SAMPLE, RATING_RANGE, SUSPICIOUS_RATING,
    ValidationResult,
};

use crate::Validator;
use crate::util::{field_str, name_or_unknown};

/// One coverage pairing: symptoms whose name contains `symptom_keyword`
/// need a practitioner whose specialty or department matches.
pub struct CoverageRule {
    pub label: &'static str,
    pub symptom_keyword: &'static str,
    pub specialty_keyword: &'static str,
    pub department_keyword: &'static str,
}

/// Keyword pairings checked by the coverage heuristic.
pub const COVERAGE_RULES: &[CoverageRule] = &[CoverageRule {
    label: "fracture",
    symptom_keyword: "골절",
    specialty_keyword: "골절",
    department_keyword: "정형외과",
}];

/// Validates consistency between the practitioner and symptom batches.
/// Reads both; mutates neither.
pub struct ConsistencyValidator<'a> {
    practitioners: &'a [Value],
    symptoms: &'a [Value],
}

impl<'a> ConsistencyValidator<'a> {
    pub fn new(practitioners: &'a [Value], symptoms: &'a [Value]) -> Self {
        Self {
            practitioners,
            symptoms,
        }
    }

    fn check_specialty_coverage(&self, result: &mut ValidationResult) {
        for rule in COVERAGE_RULES {
            let has_symptoms = self.symptoms.iter().any(|symptom| {
                field_str(symptom, "name").is_some_and(|name| name.contains(rule.symptom_keyword))
            });
            let has_specialists = self.practitioners.iter().any(|practitioner| {
                field_str(practitioner, "specialty")
                    .is_some_and(|specialty| specialty.contains(rule.specialty_keyword))
                    || field_str(practitioner, "department")
                        .is_some_and(|department| department.contains(rule.department_keyword))
            });

            if has_symptoms && !has_specialists {
                result.add_warning(format!(
                    "Found {label} symptoms but no {label} specialists",
                    label = rule.label
                ));
            }
        }

        let categories: BTreeSet<&str> = self
            .symptoms
            .iter()
            .map(|symptom| field_str(symptom, "category").unwrap_or_default())
            .collect();
        let specialties: BTreeSet<&str> = self
            .practitioners
            .iter()
            .map(|practitioner| field_str(practitioner, "specialty").unwrap_or_default())
            .collect();
        result.add_info(format!(
            "Coverage check: {} categories, {} specialties",
            categories.len(),
            specialties.len()
        ));
    }

    fn check_rating_ranges(&self, result: &mut ValidationResult) {
        let (min_rating, max_rating) = RATING_RANGE;
        for record in self.practitioners {
            let Some(rating) = record.get("rating").and_then(Value::as_f64) else {
                continue;
            };
            let name = name_or_unknown(record);
            let review_count = record
                .get("reviewCount")
                .and_then(Value::as_i64)
                .unwrap_or(0);

            if !(min_rating..=max_rating).contains(&rating) {
                result.add_error(format!(
                    "Practitioner '{name}': rating {rating} out of valid range (0-5)"
                ));
            } else if rating > SUSPICIOUS_RATING && review_count < MIN_REVIEW_SAMPLE {
                result.add_warning(format!(
                    "Practitioner '{name}': very high rating ({rating}) with few reviews ({review_count})"
                ));
            }
        }
    }

    fn check_hospital_consistency(&self, result: &mut ValidationResult) {
        // First-appearance order keeps pair iteration, and therefore the
        // report, deterministic for a given batch order.
        let mut hospitals: Vec<&str> = Vec::new();
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for record in self.practitioners {
            if let Some(hospital) = field_str(record, "hospital")
                && !hospital.is_empty()
                && seen.insert(hospital)
            {
                hospitals.push(hospital);
            }
        }

        for (i, first) in hospitals.iter().enumerate() {
            for second in &hospitals[i + 1..] {
                if char_jaccard(first, second) > HOSPITAL_SIMILARITY_THRESHOLD {
                    result.add_warning(format!(
                        "Similar hospital names found: '{first}' and '{second}'"
                    ));
                }
            }
        }
    }
}

impl Validator for ConsistencyValidator<'_> {
    fn name(&self) -> &'static str {
        "consistency"
    }

    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        self.check_specialty_coverage(&mut result);
        self.check_rating_ranges(&mut result);
        self.check_hospital_consistency(&mut result);
        result
    }
}

/// Ratio of shared distinct characters to total distinct characters.
/// Empty inputs score 0.
pub fn char_jaccard(first: &str, second: &str) -> f64 {
    if first.is_empty() || second.is_empty() {
        return 0.0;
    }
    let first_chars: BTreeSet<char> = first.chars().collect();
    let second_chars: BTreeSet<char> = second.chars().collect();
    let intersection = first_chars.intersection(&second_chars).count();
    let union = first_chars.union(&second_chars).count();
    intersection as f64 / union as f64
}
