pub mod error;
pub mod issue;
pub mod schema;

pub use error::{MdvError, Result};
pub use issue::{IssueSeverity, ValidationResult, ValidationRun, ValidationSection};
pub use schema::{
    BODY_SYSTEM_CATEGORIES, DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, FEE_KEYS,
    FEE_PLAUSIBILITY_LIMIT, HOSPITAL_SIMILARITY_THRESHOLD, MEDICAL_DEGREE_MARKERS,
    MIN_REVIEW_SAMPLE, PRACTITIONER_REQUIRED_FIELDS, RATING_RANGE, SUSPICIOUS_RATING,
    SYMPTOM_REQUIRED_FIELDS, SymptomSeverity, TEST_COST_PLAUSIBILITY_LIMIT,
    TEST_REQUIRED_FIELDS, is_known_category, is_valid_severity,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_classifies_and_counts() {
        let mut result = ValidationResult::new();
        result.add_error("missing id");
        result.add_warning("fee seems high");
        result.add_info("Validated 3 practitioners");
        assert_eq!(result.errors, vec!["ERROR: missing id"]);
        assert_eq!(result.warnings, vec!["WARNING: fee seems high"]);
        assert_eq!(result.info, vec!["INFO: Validated 3 practitioners"]);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.total_issues(), 2);
        assert!(!result.is_valid());
    }

    #[test]
    fn sink_is_valid_iff_no_errors() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());
        result.add_warning("only a warning");
        result.add_info("only info");
        assert!(result.is_valid());
        result.add_error("now an error");
        assert!(!result.is_valid());
    }

    #[test]
    fn run_totals_span_sections() {
        let mut run = ValidationRun::new();
        let mut first = ValidationResult::new();
        first.add_error("bad record");
        let mut second = ValidationResult::new();
        second.add_warning("odd value");
        run.push("practitioners", first);
        run.push("symptoms", second);
        assert_eq!(run.total_errors(), 1);
        assert_eq!(run.total_warnings(), 1);
        assert!(!run.passed());
        assert_eq!(run.sections[0].name, "practitioners");
        assert!(run.section("symptoms").is_some());
        assert!(run.section("consistency").is_none());
    }

    #[test]
    fn severity_grades_parse() {
        assert!(is_valid_severity("high"));
        assert!(is_valid_severity("medium"));
        assert!(is_valid_severity("low"));
        assert!(!is_valid_severity("critical"));
        assert_eq!("high".parse::<SymptomSeverity>(), Ok(SymptomSeverity::High));
    }

    #[test]
    fn category_membership() {
        assert!(is_known_category("근골격계"));
        assert!(!is_known_category("알레르기"));
    }
}
