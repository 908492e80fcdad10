use std::collections::BTreeMap;
use std::iter::FromIterator;

use fab_core::{ErrorInfo, FabError, REPORT_SCHEMA};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::report::CatalogReport;

fn serde_error(code: &str, err: impl ToString) -> FabError {
    FabError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into compact JSON bytes with sorted object keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, FabError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_error("json-encode", err))?;
    Ok(bytes)
}

/// Restores a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, FabError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-decode", err))
}

/// Serializes a catalog report into indented JSON.
pub fn report_to_json(report: &CatalogReport) -> Result<String, FabError> {
    serde_json::to_string_pretty(report).map_err(|err| serde_error("json-encode", err))
}

/// Deserializes a catalog report from JSON text, rejecting reports written
/// under an incompatible schema.
pub fn report_from_json(json: &str) -> Result<CatalogReport, FabError> {
    let report: CatalogReport = from_json_slice(json.as_bytes())?;
    if !REPORT_SCHEMA.reads(&report.schema_version) {
        return Err(FabError::Serde(
            ErrorInfo::new("schema-mismatch", "unsupported catalog report schema")
                .with_context("found", report.schema_version.to_string())
                .with_context("supported", REPORT_SCHEMA.to_string()),
        ));
    }
    Ok(report)
}
