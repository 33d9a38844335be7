//! Validation run wiring: load, validate, render, write.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use mdv_ingest::JsonDirectorySource;
use mdv_model::ValidationRun;
use mdv_report::{render_report, write_json_report, write_report};
use mdv_validate::MedicalDataValidator;

use crate::cli::Cli;

/// Outcome of one CLI invocation, everything the summary printer needs.
pub struct RunResult {
    pub run: ValidationRun,
    pub report: String,
    pub report_path: PathBuf,
    pub json_report_path: Option<PathBuf>,
}

impl RunResult {
    /// CI-gate verdict: true iff no validator recorded an error.
    pub fn passed(&self) -> bool {
        self.run.passed()
    }
}

pub fn run_validation(args: &Cli) -> Result<RunResult> {
    info!(data_dir = %args.data_dir.display(), "starting validation");

    let source = JsonDirectorySource::new(&args.data_dir);
    let validator = MedicalDataValidator::new(&source);
    let run = validator.validate_all();
    debug!(
        sections = run.sections.len(),
        errors = run.total_errors(),
        warnings = run.total_warnings(),
        "validation finished"
    );

    let report = render_report(&run);
    let report_path = write_report(&args.report_file, &report)?;
    let json_report_path = match &args.json_report {
        Some(path) => Some(write_json_report(path, &run)?),
        None => None,
    };

    Ok(RunResult {
        run,
        report,
        report_path,
        json_report_path,
    })
}
