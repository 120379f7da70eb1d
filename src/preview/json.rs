//! Previews for JSON datasets.

use serde_json::{Map, Value};

use super::types::{render_cell, PreviewError, PreviewTable, PREVIEW_MAX_ROWS};

/// Top-level shape of a parsed JSON document
#[derive(Clone, Debug, PartialEq)]
pub enum JsonShape {
    /// `[ {...}, {...} ]`
    Array(Vec<Value>),
    /// `{ "k1": {...}, "k2": {...} }` - the keys are discarded
    Object(Map<String, Value>),
    /// A string, number, boolean or null
    Scalar,
}

impl JsonShape {
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Array(items) => JsonShape::Array(items),
            Value::Object(map) => JsonShape::Object(map),
            _ => JsonShape::Scalar,
        }
    }

    /// The candidate record list for this shape
    pub fn into_records(self) -> Vec<Value> {
        match self {
            JsonShape::Array(items) => items,
            JsonShape::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
            JsonShape::Scalar => Vec::new(),
        }
    }
}

/// Build a preview from JSON text.
///
/// The header is the key list of the first record. Later records are read
/// through that key list: missing keys become empty cells and extra keys
/// are dropped.
pub(crate) fn preview(text: &str) -> Result<PreviewTable, PreviewError> {
    let parsed: Value = serde_json::from_str(text).map_err(|e| {
        tracing::warn!("Failed to parse JSON for preview: {}", e);
        PreviewError::InvalidJson(e.to_string())
    })?;

    let records = JsonShape::classify(parsed).into_records();

    let Some(Value::Object(first)) = records.first() else {
        return Err(PreviewError::NotTabular);
    };

    let keys: Vec<String> = first.keys().cloned().collect();

    let rows = records
        .iter()
        .take(PREVIEW_MAX_ROWS)
        .map(|record| {
            keys.iter()
                .map(|key| record.get(key).map(render_cell).unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(PreviewTable::new(keys, rows))
}
