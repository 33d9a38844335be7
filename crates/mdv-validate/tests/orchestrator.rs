use serde_json::{Value, json};

use mdv_ingest::{InMemorySource, RecordBatches, RecordSource};
use mdv_model::{MdvError, Result};
use mdv_validate::{LOAD_ERROR_SECTION, MedicalDataValidator};

struct FailingSource;

impl RecordSource for FailingSource {
    fn load(&self) -> Result<RecordBatches> {
        Err(MdvError::Message("data directory unreadable".to_string()))
    }
}

fn minimal_fixture() -> InMemorySource {
    let practitioners: Vec<Value> = vec![json!({
        "id": "1",
        "name": "나영무",
        "hospital": "솔병원",
        "department": "정형외과",
        "specialty": "골절치료",
        "credentials": ["의과대학 졸업"],
        "experience": "10년",
        "consultationFee": {"initial": 50000, "followUp": 30000},
        "location": {
            "phone": "02-1234-5678",
            "website": "https://solhospital.com",
            "address": "서울특별시 강남구"
        },
        "rating": 4.5,
        "reviewCount": 100,
        "tests": [{"name": "X-ray", "cost": 80000, "description": "기본 영상 검사"}]
    })];
    let symptoms: Vec<Value> = vec![json!({
        "id": "1",
        "name": "골절의심",
        "description": "뼈가 부러진 것 같은 증상",
        "category": "근골격계",
        "severity": "high"
    })];
    InMemorySource::new(practitioners, symptoms)
}

#[test]
fn minimal_fixture_passes_end_to_end() {
    let source = minimal_fixture();
    let run = MedicalDataValidator::new(&source).validate_all();

    assert!(run.passed());
    assert_eq!(run.total_errors(), 0);
    assert_eq!(run.sections.len(), 3);
    assert_eq!(run.sections[0].name, "practitioners");
    assert_eq!(run.sections[1].name, "symptoms");
    assert_eq!(run.sections[2].name, "consistency");

    let practitioners = run.section("practitioners").expect("practitioners section");
    assert_eq!(practitioners.info, vec!["INFO: Validated 1 practitioners"]);
    let symptoms = run.section("symptoms").expect("symptoms section");
    assert_eq!(symptoms.info, vec!["INFO: Validated 1 symptoms"]);
}

#[test]
fn loader_failure_short_circuits() {
    let run = MedicalDataValidator::new(&FailingSource).validate_all();

    assert_eq!(run.sections.len(), 1);
    assert_eq!(run.sections[0].name, LOAD_ERROR_SECTION);
    assert!(!run.passed());
    let errors = &run.sections[0].result.errors;
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Failed to load data"));
    assert!(errors[0].contains("data directory unreadable"));
}

#[test]
fn repeated_runs_are_identical() {
    let source = minimal_fixture();
    let validator = MedicalDataValidator::new(&source);
    let first = validator.validate_all();
    let second = validator.validate_all();
    assert_eq!(
        serde_json::to_string(&first).expect("serialize first"),
        serde_json::to_string(&second).expect("serialize second")
    );
}
