//! # Document Loading
//!
//! Loads JSON and YAML documents into the `serde_json::Value` model that
//! checkers operate on. The format is chosen by file extension: `.yaml` and
//! `.yml` are YAML, anything else is JSON.
//!
//! YAML is richer than JSON (tags, non-string keys). Tags are dropped, scalar
//! keys are stringified, and anything without a JSON equivalent is rejected
//! with a `DocumentLoad` error.

use std::path::Path;

use serde_json::Value;

use crate::error::ShapeError;

/// Load a JSON or YAML document from disk.
///
/// # Errors
///
/// Returns `ShapeError::DocumentLoad` if the file cannot be read, cannot be
/// parsed, or contains YAML with no JSON equivalent.
pub fn load_document(path: &Path) -> Result<Value, ShapeError> {
    let content = std::fs::read_to_string(path).map_err(|e| ShapeError::DocumentLoad {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    tracing::debug!(path = %path.display(), format = ext, "loading document");

    match ext {
        "yaml" | "yml" => parse_yaml_str(&content).map_err(|reason| ShapeError::DocumentLoad {
            path: path.display().to_string(),
            reason,
        }),
        _ => serde_json::from_str(&content).map_err(|e| ShapeError::DocumentLoad {
            path: path.display().to_string(),
            reason: format!("invalid JSON: {e}"),
        }),
    }
}

/// Parse a YAML string and convert it to a JSON value.
pub fn parse_yaml_str(content: &str) -> Result<Value, String> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| format!("invalid YAML: {e}"))?;
    yaml_to_json_value(&yaml).map_err(|e| format!("YAML-to-JSON conversion failed: {e}"))
}

/// Convert a `serde_yaml::Value` tree to the equivalent `serde_json::Value`.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
