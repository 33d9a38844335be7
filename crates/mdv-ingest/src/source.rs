//! Record sources for the validator.
//!
//! The validation core never reads files itself; it consumes batches
//! supplied by a [`RecordSource`]. Production runs use
//! [`JsonDirectorySource`]; tests inject [`InMemorySource`] with
//! synthetic fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use mdv_model::{MdvError, Result};

/// File name holding the practitioner batch inside a data directory.
pub const PRACTITIONERS_FILE: &str = "doctors.json";

/// File name holding the symptom batch inside a data directory.
pub const SYMPTOMS_FILE: &str = "symptoms.json";

/// Both record batches for one validation run.
///
/// Records stay dynamically typed: structural checks (is this an object,
/// is this field an integer) are part of validation, not loading.
#[derive(Debug, Clone, Default)]
pub struct RecordBatches {
    pub practitioners: Vec<Value>,
    pub symptoms: Vec<Value>,
}

/// Supplier of the two record batches.
///
/// Load failure is the one fatal condition in a run: when `load` fails the
/// orchestrator reports a single top-level error and runs no validators.
pub trait RecordSource {
    fn load(&self) -> Result<RecordBatches>;
}

/// Reads `doctors.json` and `symptoms.json` from a data directory.
#[derive(Debug, Clone)]
pub struct JsonDirectorySource {
    data_dir: PathBuf,
}

impl JsonDirectorySource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl RecordSource for JsonDirectorySource {
    fn load(&self) -> Result<RecordBatches> {
        let practitioners = read_record_array(&self.data_dir.join(PRACTITIONERS_FILE))?;
        let symptoms = read_record_array(&self.data_dir.join(SYMPTOMS_FILE))?;
        debug!(
            practitioners = practitioners.len(),
            symptoms = symptoms.len(),
            "loaded record batches"
        );
        Ok(RecordBatches {
            practitioners,
            symptoms,
        })
    }
}

/// Fixed batches handed in directly; used by tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub practitioners: Vec<Value>,
    pub symptoms: Vec<Value>,
}

impl InMemorySource {
    pub fn new(practitioners: Vec<Value>, symptoms: Vec<Value>) -> Self {
        Self {
            practitioners,
            symptoms,
        }
    }
}

impl RecordSource for InMemorySource {
    fn load(&self) -> Result<RecordBatches> {
        Ok(RecordBatches {
            practitioners: self.practitioners.clone(),
            symptoms: self.symptoms.clone(),
        })
    }
}

/// Parse one batch file. The top-level JSON value must be an array; each
/// element is passed through untouched for the validators to inspect.
pub fn read_record_array(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).map_err(|error| {
        MdvError::Message(format!("failed to read {}: {error}", path.display()))
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|error| {
        MdvError::Message(format!("failed to parse {}: {error}", path.display()))
    })?;
    match value {
        Value::Array(records) => Ok(records),
        other => Err(MdvError::Message(format!(
            "{}: expected a top-level array of records, found {}",
            path.display(),
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
