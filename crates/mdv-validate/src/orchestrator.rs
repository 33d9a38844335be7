//! Drives one validation pass end to end.

use serde_json::Value;
use tracing::{info, warn};

use mdv_ingest::RecordSource;
use mdv_model::{ValidationResult, ValidationRun};

use crate::Validator;
use crate::consistency::ConsistencyValidator;
use crate::practitioner::PractitionerValidator;
use crate::taxonomy::SymptomValidator;

/// Section key used when record loading fails before any validator runs.
pub const LOAD_ERROR_SECTION: &str = "error";

/// Orchestrates loading and the three validators, producing the
/// per-section aggregate consumed by report rendering.
pub struct MedicalDataValidator<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> MedicalDataValidator<'a> {
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    /// Run the full pass. Loader failure short-circuits into a
    /// single-section run; it never panics and never drops a section.
    pub fn validate_all(&self) -> ValidationRun {
        let batches = match self.source.load() {
            Ok(batches) => batches,
            Err(error) => {
                warn!(%error, "record loading failed");
                let mut result = ValidationResult::new();
                result.add_error(format!("Failed to load data: {error}"));
                let mut run = ValidationRun::new();
                run.push(LOAD_ERROR_SECTION, result);
                return run;
            }
        };

        info!(
            practitioners = batches.practitioners.len(),
            symptoms = batches.symptoms.len(),
            "running validators"
        );
        validate_batches(&batches.practitioners, &batches.symptoms)
    }
}

/// Validate already-loaded batches. Section order is fixed and is also
/// the report section order: practitioners, symptoms, consistency.
pub fn validate_batches(practitioners: &[Value], symptoms: &[Value]) -> ValidationRun {
    let practitioner_validator = PractitionerValidator::new(practitioners);
    let symptom_validator = SymptomValidator::new(symptoms);
    let consistency_validator = ConsistencyValidator::new(practitioners, symptoms);
    let validators: [&dyn Validator; 3] = [
        &practitioner_validator,
        &symptom_validator,
        &consistency_validator,
    ];

    let mut run = ValidationRun::new();
    for validator in validators {
        run.push(validator.name(), validator.validate());
    }
    run
}
