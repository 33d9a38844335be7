pub mod source;

pub use source::{
    InMemorySource, JsonDirectorySource, PRACTITIONERS_FILE, RecordBatches, RecordSource,
    SYMPTOMS_FILE, read_record_array,
};
