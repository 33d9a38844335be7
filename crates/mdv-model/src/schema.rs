//! Field catalogs and plausibility limits for directory records.
//!
//! Records arrive as dynamically typed JSON, so the schema lives here as
//! data rather than as Rust types: required-field sets, enumerated value
//! sets, and the numeric thresholds the validators check against.

use std::str::FromStr;

/// Top-level fields every practitioner record must carry.
pub const PRACTITIONER_REQUIRED_FIELDS: &[&str] = &[
    "id",
    "name",
    "hospital",
    "department",
    "specialty",
    "credentials",
    "experience",
    "consultationFee",
    "location",
];

/// Fields every entry under a practitioner's `tests` array must carry.
pub const TEST_REQUIRED_FIELDS: &[&str] = &["name", "cost", "description"];

/// Consultation fee keys checked per practitioner.
pub const FEE_KEYS: &[&str] = &["initial", "followUp"];

/// Fees above this (KRW) are flagged as implausible, not invalid.
pub const FEE_PLAUSIBILITY_LIMIT: i64 = 1_000_000;

/// Test costs above this (KRW) are flagged as implausible.
pub const TEST_COST_PLAUSIBILITY_LIMIT: i64 = 10_000_000;

/// Top-level fields every symptom record must carry.
pub const SYMPTOM_REQUIRED_FIELDS: &[&str] = &["id", "name", "description", "category", "severity"];

/// Recognized body-system categories. The taxonomy may legitimately grow,
/// so an unknown category degrades to a warning rather than an error.
pub const BODY_SYSTEM_CATEGORIES: &[&str] = &[
    "근골격계",
    "전신증상",
    "소화기계",
    "신경계",
    "정신건강",
    "호흡기계",
    "피부계",
];

/// Credential substrings accepted as evidence of a medical degree.
pub const MEDICAL_DEGREE_MARKERS: &[&str] = &["의과대학", "대학원"];

/// Symptom description shorter than this is flagged as too short.
pub const DESCRIPTION_MIN_CHARS: usize = 10;

/// Symptom description longer than this is flagged as very long.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Valid rating range for practitioners.
pub const RATING_RANGE: (f64, f64) = (0.0, 5.0);

/// Ratings above this with a thin review sample look suspicious.
pub const SUSPICIOUS_RATING: f64 = 4.9;

/// Review counts below this make a near-perfect rating suspicious.
pub const MIN_REVIEW_SAMPLE: i64 = 10;

/// Character-set Jaccard score above which two hospital names are
/// reported as likely duplicates.
pub const HOSPITAL_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Symptom severity grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymptomSeverity {
    Low,
    Medium,
    High,
}

impl SymptomSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            SymptomSeverity::Low => "low",
            SymptomSeverity::Medium => "medium",
            SymptomSeverity::High => "high",
        }
    }
}

impl FromStr for SymptomSeverity {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "low" => Ok(SymptomSeverity::Low),
            "medium" => Ok(SymptomSeverity::Medium),
            "high" => Ok(SymptomSeverity::High),
            _ => Err(()),
        }
    }
}

/// True when `value` is one of the recognized severity grades.
pub fn is_valid_severity(value: &str) -> bool {
    SymptomSeverity::from_str(value).is_ok()
}

/// True when `value` is one of the recognized body-system categories.
pub fn is_known_category(value: &str) -> bool {
    BODY_SYSTEM_CATEGORIES.contains(&value)
}
