use std::fs;
use std::path::Path;

use crate::schema::{SchemaError, SchemaSpec};

/// Reads an alternate benchmark catalog from a JSON file.
///
/// The result is unvalidated; pass it to `BenchmarkSchema::from_spec`.
pub fn load_schema_json(path: &Path) -> Result<SchemaSpec, SchemaError> {
    let text = fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SchemaError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn render_schema_json(spec: &SchemaSpec) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(spec)
}
