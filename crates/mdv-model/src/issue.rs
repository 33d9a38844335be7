use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

impl IssueSeverity {
    /// Tag prepended to every message so reports stay scannable.
    pub fn tag(self) -> &'static str {
        match self {
            IssueSeverity::Error => "ERROR",
            IssueSeverity::Warning => "WARNING",
            IssueSeverity::Info => "INFO",
        }
    }
}

/// Accumulator for the issues found by one validator during one run.
///
/// Append-only: messages are classified at insertion time and never
/// removed or reordered. One sink belongs to exactly one validator for
/// exactly one run, so no synchronization is needed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: impl AsRef<str>) {
        self.errors
            .push(format!("{}: {}", IssueSeverity::Error.tag(), message.as_ref()));
    }

    pub fn add_warning(&mut self, message: impl AsRef<str>) {
        self.warnings.push(format!(
            "{}: {}",
            IssueSeverity::Warning.tag(),
            message.as_ref()
        ));
    }

    pub fn add_info(&mut self, message: impl AsRef<str>) {
        self.info
            .push(format!("{}: {}", IssueSeverity::Info.tag(), message.as_ref()));
    }

    /// True iff no errors were ever recorded. Warnings do not fail a run.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Errors plus warnings. Info messages are observational only.
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

/// One named report section in a validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSection {
    pub name: String,
    pub result: ValidationResult,
}

/// Aggregate outcome of one validation pass.
///
/// Sections keep insertion order, which is also the report section order.
/// The run is transient: built once by the orchestrator and consumed by
/// report rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationRun {
    pub sections: Vec<ValidationSection>,
}

impl ValidationRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, result: ValidationResult) {
        self.sections.push(ValidationSection {
            name: name.into(),
            result,
        });
    }

    pub fn section(&self, name: &str) -> Option<&ValidationResult> {
        self.sections
            .iter()
            .find(|section| section.name == name)
            .map(|section| &section.result)
    }

    pub fn total_errors(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.result.error_count())
            .sum()
    }

    pub fn total_warnings(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.result.warning_count())
            .sum()
    }

    /// Overall verdict: FAIL iff any section recorded an error.
    pub fn passed(&self) -> bool {
        self.total_errors() == 0
    }
}
