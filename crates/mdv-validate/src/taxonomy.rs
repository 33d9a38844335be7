//! Field-level validation of symptom taxonomy records.

use serde_json::Value;

use mdv_model::{
    DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, SYMPTOM_REQUIRED_FIELDS, ValidationResult,
    is_known_category, is_valid_severity,
};

use crate::Validator;
use crate::util::{display_value, duplicate_ids, field_str, missing_fields, name_or_unknown, record_label};

/// Validates symptom records: structure, severity grade, category
/// membership, and description quality.
pub struct SymptomValidator<'a> {
    symptoms: &'a [Value],
}

impl<'a> SymptomValidator<'a> {
    pub fn new(symptoms: &'a [Value]) -> Self {
        Self { symptoms }
    }

    fn check_structure(&self, result: &mut ValidationResult) {
        for (index, record) in self.symptoms.iter().enumerate() {
            if !record.is_object() {
                result.add_error(format!("Symptom at index {index} is not an object"));
                continue;
            }

            let missing = missing_fields(record, SYMPTOM_REQUIRED_FIELDS);
            if !missing.is_empty() {
                result.add_error(format!(
                    "Symptom '{}' missing fields: {}",
                    record_label(record, index),
                    missing.join(", ")
                ));
            }

            // Severity is a closed set; anything unrecognized is a hard
            // error, unlike categories below.
            if let Some(severity) = record.get("severity") {
                let valid = match severity.as_str() {
                    Some(grade) => grade.is_empty() || is_valid_severity(grade),
                    None => severity.is_null(),
                };
                if !valid {
                    result.add_error(format!(
                        "Symptom '{}': invalid severity '{}'",
                        name_or_unknown(record),
                        display_value(severity)
                    ));
                }
            }
        }
    }

    fn check_unique_ids(&self, result: &mut ValidationResult) {
        let duplicates = duplicate_ids(self.symptoms);
        if !duplicates.is_empty() {
            result.add_error(format!(
                "Duplicate symptom IDs found: {}",
                duplicates.join(", ")
            ));
        }
    }

    /// Unknown categories warn rather than error: the taxonomy is expected
    /// to grow ahead of the recognized-category catalog.
    fn check_categories(&self, result: &mut ValidationResult) {
        for record in self.symptoms {
            let Some(category) = field_str(record, "category") else {
                continue;
            };
            if !category.is_empty() && !is_known_category(category) {
                result.add_warning(format!(
                    "Symptom '{}': unknown category '{category}'",
                    name_or_unknown(record)
                ));
            }
        }
    }

    fn check_descriptions(&self, result: &mut ValidationResult) {
        for record in self.symptoms {
            let name = name_or_unknown(record);
            let description = field_str(record, "description").unwrap_or_default();
            let length = description.chars().count();
            if length < DESCRIPTION_MIN_CHARS {
                result.add_warning(format!("Symptom '{name}': description too short"));
            } else if length > DESCRIPTION_MAX_CHARS {
                result.add_warning(format!(
                    "Symptom '{name}': description very long ({length} chars)"
                ));
            }
        }
    }
}

impl Validator for SymptomValidator<'_> {
    fn name(&self) -> &'static str {
        "symptoms"
    }

    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        self.check_structure(&mut result);
        self.check_unique_ids(&mut result);
        self.check_categories(&mut result);
        self.check_descriptions(&mut result);
        result.add_info(format!("Validated {} symptoms", self.symptoms.len()));
        result
    }
}
