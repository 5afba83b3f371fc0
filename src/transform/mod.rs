mod flatten;
mod models;

pub use flatten::flatten;
pub use models::{FlatRecord, PropertyRecord};

use crate::envelope;
use crate::errors::ServerError;
use serde_json::Value;

/// Per-request transform policy.
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    /// When true, a record that cannot be decoded (e.g. a non-object
    /// element in the properties list) is logged and skipped, and the
    /// response carries the surviving subset. When false (the default)
    /// such a record aborts the whole request with an UnexpectedShape
    /// error before anything is flattened.
    pub skip_malformed_records: bool,
}

/// Full pipeline for one request body: outer JSON parse, envelope
/// unwrapping, per-record decode, then flattening. Validation happens
/// before any record is flattened, so an aborted request produces no
/// partial output.
pub fn transform(body: &str, opts: &TransformOptions) -> Result<Vec<FlatRecord>, ServerError> {
    if body.trim().is_empty() {
        return Err(ServerError::EmptyInput);
    }

    let outer: Value =
        serde_json::from_str(body).map_err(|e| ServerError::MalformedJson(e.to_string()))?;

    let raw_records = envelope::normalize(outer)?;

    let mut records = Vec::with_capacity(raw_records.len());
    for (index, raw) in raw_records.into_iter().enumerate() {
        match serde_json::from_value::<PropertyRecord>(raw) {
            Ok(record) => records.push(record),
            Err(e) if opts.skip_malformed_records => {
                eprintln!("⚠️ Skipping malformed record {index}: {e}");
            }
            Err(e) => {
                return Err(ServerError::UnexpectedShape(format!(
                    "record {index} is not a property object: {e}"
                )));
            }
        }
    }

    Ok(records.iter().map(flatten).collect())
}
