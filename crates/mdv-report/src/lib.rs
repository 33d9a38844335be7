//! Report rendering for validation runs.
//!
//! Two outputs: the plain-text report consumed by humans and the CI log
//! (deterministic for a given run, no timestamps), and an optional JSON
//! payload for machine consumers (which does carry a generation
//! timestamp, so idempotence guarantees apply to the text report only).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use mdv_model::{ValidationRun, ValidationSection};

/// Default relative path for the text report; overwritten on each run.
pub const DEFAULT_REPORT_FILE: &str = "validation_report.txt";

const BANNER: &str =
    "============================================================";

/// Render the full text report: banner, summary block, one detail block
/// per section in run order, recommendations, trailer.
///
/// Messages appear verbatim in insertion order, errors before warnings
/// before info within a section.
pub fn render_report(run: &ValidationRun) -> String {
    let mut lines: Vec<String> = vec![
        BANNER.to_string(),
        "MEDIGUIDE DATA VALIDATION REPORT".to_string(),
        BANNER.to_string(),
        String::new(),
    ];

    let total_errors = run.total_errors();
    let total_warnings = run.total_warnings();
    let status = if run.passed() { "PASS" } else { "FAIL" };
    lines.extend([
        "SUMMARY:".to_string(),
        format!("   Total Errors: {total_errors}"),
        format!("   Total Warnings: {total_warnings}"),
        format!("   Overall Status: {status}"),
        String::new(),
    ]);

    for ValidationSection { name, result } in &run.sections {
        lines.extend([
            format!("{} VALIDATION:", name.to_uppercase()),
            format!("   Errors: {}", result.error_count()),
            format!("   Warnings: {}", result.warning_count()),
            String::new(),
        ]);
        for message in result
            .errors
            .iter()
            .chain(&result.warnings)
            .chain(&result.info)
        {
            lines.push(format!("   {message}"));
        }
        lines.push(String::new());
    }

    lines.extend([
        "RECOMMENDATIONS:".to_string(),
        "   - Fix all errors before deployment".to_string(),
        "   - Review warnings for data quality improvements".to_string(),
        "   - Regular validation in CI/CD pipeline".to_string(),
        String::new(),
    ]);

    lines.extend([
        BANNER.to_string(),
        format!(
            "Generated by MediGuide Data Validator v{}",
            env!("CARGO_PKG_VERSION")
        ),
        BANNER.to_string(),
    ]);

    lines.join("\n")
}

/// Write the rendered report as UTF-8, overwriting any previous run.
pub fn write_report(path: &Path, report: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create report directory {}", parent.display()))?;
    }
    std::fs::write(path, report)
        .with_context(|| format!("write report to {}", path.display()))?;
    Ok(path.to_path_buf())
}

const REPORT_SCHEMA: &str = "mediguide-validator.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub passed: bool,
    pub sections: Vec<SectionSummary>,
}

#[derive(Debug, Serialize)]
pub struct SectionSummary {
    pub name: String,
    pub error_count: usize,
    pub warning_count: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

/// Build the machine-readable payload for one run.
pub fn report_payload(run: &ValidationRun) -> ReportPayload {
    ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        total_errors: run.total_errors(),
        total_warnings: run.total_warnings(),
        passed: run.passed(),
        sections: run
            .sections
            .iter()
            .map(|section| SectionSummary {
                name: section.name.clone(),
                error_count: section.result.error_count(),
                warning_count: section.result.warning_count(),
                errors: section.result.errors.clone(),
                warnings: section.result.warnings.clone(),
                info: section.result.info.clone(),
            })
            .collect(),
    }
}

/// Write the JSON payload next to the text report when requested.
pub fn write_json_report(path: &Path, run: &ValidationRun) -> Result<PathBuf> {
    let payload = report_payload(run);
    let json = serde_json::to_string_pretty(&payload).context("serialize report payload")?;
    std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("write json report to {}", path.display()))?;
    Ok(path.to_path_buf())
}
