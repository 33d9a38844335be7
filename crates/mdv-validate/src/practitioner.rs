//! Field-level validation of practitioner records.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use mdv_model::{
    FEE_KEYS, FEE_PLAUSIBILITY_LIMIT, MEDICAL_DEGREE_MARKERS, PRACTITIONER_REQUIRED_FIELDS,
    TEST_COST_PLAUSIBILITY_LIMIT, TEST_REQUIRED_FIELDS, ValidationResult,
};

use crate::Validator;
use crate::util::{
    as_positive_int, display_value, field_str, group_digits, missing_fields, name_or_unknown,
    record_label,
};

/// Korean landline/mobile-office format: 0X(X)-XXX(X)-XXXX.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0\d{1,2}-\d{3,4}-\d{4}$").expect("invalid phone regex"));

/// Generic http(s) URL shape, kept as loose as the directory data needs.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .expect("invalid URL regex")
});

/// Validates practitioner records for structure, field presence, fee and
/// cost plausibility, contact formats, and credential quality.
///
/// Checks are independent: a failed check records an issue and moves on,
/// and a malformed record never aborts the rest of the batch.
pub struct PractitionerValidator<'a> {
    practitioners: &'a [Value],
}

impl<'a> PractitionerValidator<'a> {
    pub fn new(practitioners: &'a [Value]) -> Self {
        Self { practitioners }
    }

    fn check_structure(&self, result: &mut ValidationResult) {
        for (index, record) in self.practitioners.iter().enumerate() {
            if !record.is_object() {
                result.add_error(format!("Practitioner at index {index} is not an object"));
                continue;
            }

            let missing = missing_fields(record, PRACTITIONER_REQUIRED_FIELDS);
            if !missing.is_empty() {
                result.add_error(format!(
                    "Practitioner '{}' missing fields: {}",
                    record_label(record, index),
                    missing.join(", ")
                ));
            }

            if let Some(fee) = record.get("consultationFee")
                && !fee.is_object()
            {
                result.add_error(format!(
                    "Practitioner '{}': consultationFee must be an object",
                    name_or_unknown(record)
                ));
            }
        }
    }

    fn check_unique_ids(&self, result: &mut ValidationResult) {
        let duplicates = crate::util::duplicate_ids(self.practitioners);
        if !duplicates.is_empty() {
            result.add_error(format!(
                "Duplicate practitioner IDs found: {}",
                duplicates.join(", ")
            ));
        }
    }

    fn check_consultation_fees(&self, result: &mut ValidationResult) {
        let no_fees = serde_json::Map::new();
        for record in self.practitioners {
            let name = name_or_unknown(record);
            let fees = match record.get("consultationFee") {
                // Absent fees degrade to per-key warnings below.
                None => &no_fees,
                Some(fees) => match fees.as_object() {
                    Some(fees) => fees,
                    // Non-object fees are reported by check_structure.
                    None => continue,
                },
            };

            for key in FEE_KEYS {
                let Some(fee) = fees.get(*key) else {
                    result.add_warning(format!(
                        "Practitioner '{name}': Missing {key} consultation fee"
                    ));
                    continue;
                };
                match as_positive_int(fee) {
                    None => result.add_error(format!(
                        "Practitioner '{name}': Invalid {key} fee: {}",
                        display_value(fee)
                    )),
                    Some(amount) if amount > FEE_PLAUSIBILITY_LIMIT => {
                        result.add_warning(format!(
                            "Practitioner '{name}': {key} fee seems high: ₩{}",
                            group_digits(amount)
                        ));
                    }
                    Some(_) => {}
                }
            }
        }
    }

    fn check_tests(&self, result: &mut ValidationResult) {
        for record in self.practitioners {
            let name = name_or_unknown(record);
            let Some(tests) = record.get("tests") else {
                continue;
            };
            let Some(tests) = tests.as_array() else {
                result.add_error(format!("Practitioner '{name}': tests must be a list"));
                continue;
            };

            for (index, test) in tests.iter().enumerate() {
                if !test.is_object() {
                    result.add_error(format!(
                        "Practitioner '{name}': test {index} must be an object"
                    ));
                    continue;
                }

                let label = field_str(test, "name")
                    .map(str::to_string)
                    .unwrap_or_else(|| index.to_string());
                for field in TEST_REQUIRED_FIELDS {
                    if test.get(*field).is_none() {
                        result.add_error(format!(
                            "Practitioner '{name}': test '{label}' missing {field}"
                        ));
                    }
                }

                if let Some(cost) = test.get("cost") {
                    match as_positive_int(cost) {
                        None => result.add_error(format!(
                            "Practitioner '{name}': invalid test cost: {}",
                            display_value(cost)
                        )),
                        Some(amount) if amount > TEST_COST_PLAUSIBILITY_LIMIT => {
                            result.add_warning(format!(
                                "Practitioner '{name}': test cost seems high: ₩{}",
                                group_digits(amount)
                            ));
                        }
                        Some(_) => {}
                    }
                }
            }
        }
    }

    fn check_contact_info(&self, result: &mut ValidationResult) {
        let absent = Value::Null;
        for record in self.practitioners {
            let name = name_or_unknown(record);
            let location = match record.get("location") {
                Some(location) if !location.is_object() => {
                    result.add_error(format!("Practitioner '{name}': location must be an object"));
                    continue;
                }
                Some(location) => location,
                // Reported as a missing required field; contact checks then
                // degrade to the address warning below.
                None => &absent,
            };

            if let Some(phone) = field_str(location, "phone")
                && !phone.is_empty()
                && !PHONE_PATTERN.is_match(phone)
            {
                result.add_warning(format!(
                    "Practitioner '{name}': invalid phone format: {phone}"
                ));
            }

            if let Some(website) = field_str(location, "website")
                && !website.is_empty()
                && !URL_PATTERN.is_match(website)
            {
                result.add_warning(format!(
                    "Practitioner '{name}': invalid website URL: {website}"
                ));
            }

            let has_address = field_str(location, "address").is_some_and(|address| !address.is_empty());
            if !has_address {
                result.add_warning(format!("Practitioner '{name}': missing address"));
            }
        }
    }

    fn check_credentials(&self, result: &mut ValidationResult) {
        let none_listed: Vec<Value> = Vec::new();
        for record in self.practitioners {
            let name = name_or_unknown(record);
            let credentials = match record.get("credentials") {
                Some(credentials) => match credentials.as_array() {
                    Some(credentials) => credentials,
                    None => {
                        result.add_error(format!(
                            "Practitioner '{name}': credentials must be a list"
                        ));
                        continue;
                    }
                },
                None => &none_listed,
            };

            if credentials.is_empty() {
                result.add_warning(format!("Practitioner '{name}': no credentials listed"));
            }

            // Heuristic: a degree-granting institution somewhere in the
            // credential list, not a hard licensing requirement.
            let has_degree = credentials.iter().any(|credential| {
                credential.as_str().is_some_and(|text| {
                    MEDICAL_DEGREE_MARKERS
                        .iter()
                        .any(|marker| text.contains(marker))
                })
            });
            if !has_degree {
                result.add_warning(format!(
                    "Practitioner '{name}': no medical degree found in credentials"
                ));
            }
        }
    }
}

impl Validator for PractitionerValidator<'_> {
    fn name(&self) -> &'static str {
        "practitioners"
    }

    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        self.check_structure(&mut result);
        self.check_unique_ids(&mut result);
        self.check_consultation_fees(&mut result);
        self.check_tests(&mut result);
        self.check_contact_info(&mut result);
        self.check_credentials(&mut result);
        result.add_info(format!("Validated {} practitioners", self.practitioners.len()));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_pattern_matches_korean_formats() {
        assert!(PHONE_PATTERN.is_match("02-1234-5678"));
        assert!(PHONE_PATTERN.is_match("031-123-4567"));
        assert!(!PHONE_PATTERN.is_match("1234-5678"));
        assert!(!PHONE_PATTERN.is_match("02-12-5678"));
        assert!(!PHONE_PATTERN.is_match("02 1234 5678"));
    }

    #[test]
    fn url_pattern_matches_common_sites() {
        assert!(URL_PATTERN.is_match("https://solhospital.com"));
        assert!(URL_PATTERN.is_match("http://www.godoil.com/clinic?dept=fm"));
        assert!(!URL_PATTERN.is_match("solhospital.com"));
        assert!(!URL_PATTERN.is_match("ftp://solhospital.com"));
    }
}
