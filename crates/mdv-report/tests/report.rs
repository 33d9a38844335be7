use std::fs;
use std::path::PathBuf;

use mdv_model::{ValidationResult, ValidationRun};
use mdv_report::{render_report, report_payload, write_report};

fn temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("mdv_report_{stamp}"));
    dir
}

fn passing_run() -> ValidationRun {
    let mut run = ValidationRun::new();
    let mut practitioners = ValidationResult::new();
    practitioners.add_info("Validated 1 practitioners");
    run.push("practitioners", practitioners);
    let mut symptoms = ValidationResult::new();
    symptoms.add_info("Validated 1 symptoms");
    run.push("symptoms", symptoms);
    let mut consistency = ValidationResult::new();
    consistency.add_info("Coverage check: 1 categories, 1 specialties");
    run.push("consistency", consistency);
    run
}

fn failing_run() -> ValidationRun {
    let mut run = passing_run();
    let mut section = ValidationResult::new();
    section.add_error("Duplicate practitioner IDs found: 1");
    section.add_warning("Practitioner '이동환': missing address");
    run.sections[0].result = section;
    run
}

#[test]
fn passing_run_renders_pass_verdict() {
    let report = render_report(&passing_run());
    assert!(report.contains("MEDIGUIDE DATA VALIDATION REPORT"));
    assert!(report.contains("Total Errors: 0"));
    assert!(report.contains("Total Warnings: 0"));
    assert!(report.contains("Overall Status: PASS"));
    assert!(report.contains("PRACTITIONERS VALIDATION:"));
    assert!(report.contains("SYMPTOMS VALIDATION:"));
    assert!(report.contains("CONSISTENCY VALIDATION:"));
    assert!(report.contains("INFO: Validated 1 practitioners"));
    assert!(report.contains("RECOMMENDATIONS:"));
}

#[test]
fn failing_run_renders_fail_verdict_and_messages_verbatim() {
    let report = render_report(&failing_run());
    assert!(report.contains("Total Errors: 1"));
    assert!(report.contains("Total Warnings: 1"));
    assert!(report.contains("Overall Status: FAIL"));
    assert!(report.contains("   ERROR: Duplicate practitioner IDs found: 1"));
    assert!(report.contains("   WARNING: Practitioner '이동환': missing address"));
}

#[test]
fn section_order_follows_insertion_order() {
    let report = render_report(&passing_run());
    let practitioners = report.find("PRACTITIONERS VALIDATION:").expect("practitioners block");
    let symptoms = report.find("SYMPTOMS VALIDATION:").expect("symptoms block");
    let consistency = report.find("CONSISTENCY VALIDATION:").expect("consistency block");
    assert!(practitioners < symptoms);
    assert!(symptoms < consistency);
}

#[test]
fn errors_precede_warnings_precede_info_within_a_section() {
    let report = render_report(&failing_run());
    let block_start = report.find("PRACTITIONERS VALIDATION:").expect("block");
    let block = &report[block_start..report.find("SYMPTOMS VALIDATION:").expect("next block")];
    let error = block.find("ERROR:").expect("error line");
    let warning = block.find("WARNING:").expect("warning line");
    assert!(error < warning);
}

#[test]
fn rendering_is_deterministic() {
    let run = failing_run();
    assert_eq!(render_report(&run), render_report(&run));
}

#[test]
fn report_file_is_overwritten() {
    let dir = temp_dir();
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join("validation_report.txt");

    write_report(&path, "stale contents").expect("first write");
    let report = render_report(&passing_run());
    write_report(&path, &report).expect("second write");

    let on_disk = fs::read_to_string(&path).expect("read report");
    assert_eq!(on_disk, report);
    assert!(!on_disk.contains("stale contents"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn json_payload_summarizes_sections() {
    let payload = report_payload(&failing_run());
    assert_eq!(payload.schema, "mediguide-validator.validation-report");
    assert_eq!(payload.total_errors, 1);
    assert_eq!(payload.total_warnings, 1);
    assert!(!payload.passed);
    assert_eq!(payload.sections.len(), 3);
    assert_eq!(payload.sections[0].name, "practitioners");
    assert_eq!(payload.sections[0].error_count, 1);
}
