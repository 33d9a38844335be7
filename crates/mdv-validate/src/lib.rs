//! Validation rule engine for MediGuide directory data.
//!
//! Each validator owns one slice of the record schema and produces one
//! issue sink per run:
//!
//! - [`PractitionerValidator`]: field presence, types, fee/cost ranges,
//!   contact formats, credential quality.
//! - [`SymptomValidator`]: field presence, severity grades, category
//!   membership, description quality.
//! - [`ConsistencyValidator`]: specialty coverage, rating plausibility,
//!   fuzzy hospital-name duplicates across both batches.
//!
//! [`MedicalDataValidator`] drives all three over batches supplied by an
//! injected [`mdv_ingest::RecordSource`].

pub mod consistency;
pub mod orchestrator;
pub mod practitioner;
pub mod taxonomy;
pub mod util;

pub use consistency::{COVERAGE_RULES, ConsistencyValidator, CoverageRule, char_jaccard};
pub use orchestrator::{LOAD_ERROR_SECTION, MedicalDataValidator, validate_batches};
pub use practitioner::PractitionerValidator;
pub use taxonomy::SymptomValidator;

use mdv_model::ValidationResult;

/// A validator over one slice of the record schema.
///
/// Implementations borrow their batch(es) at construction and build a
/// fresh sink on every `validate` call; nothing is cached between runs.
pub trait Validator {
    /// Section key for this validator in the aggregate run.
    fn name(&self) -> &'static str;

    /// Perform every check and return the populated sink. Malformed
    /// records are reported as issues, never as panics or errors.
    fn validate(&self) -> ValidationResult;
}
