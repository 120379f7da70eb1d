use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Maximum number of data rows shown in a preview
pub const PREVIEW_MAX_ROWS: usize = 10;

/// Maximum number of columns shown in a preview (applies to headers and rows)
pub const PREVIEW_MAX_COLUMNS: usize = 5;

/// How a selected file is previewed, derived from its extension
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FileKind {
    /// `.csv` / `.txt` - delimiter-separated text
    Delimited,
    /// `.json` - array of records or object of records
    Json,
    /// Anything else (the server may still accept it, e.g. Excel)
    Unsupported,
}

impl FileKind {
    /// Classify a file by the text after its last `.`, case-insensitively
    pub fn from_file_name(file_name: &str) -> Self {
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return FileKind::Unsupported;
        };

        match ext.to_ascii_lowercase().as_str() {
            "csv" | "txt" => FileKind::Delimited,
            "json" => FileKind::Json,
            _ => FileKind::Unsupported,
        }
    }
}

/// Errors that stop a preview from being produced.
///
/// None of these are fatal: the caller reports them and keeps whatever
/// preview was on screen before.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The file could not be read from disk
    #[error("Failed to read file for preview: {0}")]
    Read(String),

    /// Automatic preview is only available for CSV/TXT and JSON
    #[error("Automatic preview is only available for CSV/TXT and JSON files")]
    Unsupported,

    /// The JSON text did not parse
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// The JSON parsed but is not a list of keyed records
    #[error("JSON has no tabular structure to preview")]
    NotTabular,
}

/// A bounded, read-only table of the first rows/columns of a dataset.
///
/// An empty header list means "no preview available" and is rendered as a
/// placeholder rather than an empty grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PreviewTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PreviewTable {
    /// Build a table, applying the row and column caps.
    ///
    /// Headers are cut to `PREVIEW_MAX_COLUMNS`, rows to `PREVIEW_MAX_ROWS`,
    /// and each row to the width of the capped header.
    pub fn new(mut headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        headers.truncate(PREVIEW_MAX_COLUMNS);
        let width = headers.len();

        let rows = rows
            .into_iter()
            .take(PREVIEW_MAX_ROWS)
            .map(|mut row| {
                row.truncate(width);
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// The "no preview" result
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when there is nothing to show and the placeholder should be rendered
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Build a table from the `preview_headers` / `preview_rows` pair returned
    /// by the cleaning endpoint. Cells may be any JSON scalar.
    pub fn from_json_rows(headers: &[Value], rows: &[Value]) -> Self {
        let headers = headers.iter().map(render_cell).collect();
        let rows = rows
            .iter()
            .take(PREVIEW_MAX_ROWS)
            .map(|row| match row {
                Value::Array(cells) => cells.iter().map(render_cell).collect(),
                Value::Null => Vec::new(),
                other => vec![render_cell(other)],
            })
            .collect();

        Self::new(headers, rows)
    }
}

/// Render a JSON value as preview cell text.
///
/// Strings are shown without quotes, `null` as an empty cell, integral
/// numbers without a trailing `.0`, and nested values as compact JSON.
pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if n.is_f64() {
                format_float(n.as_f64().unwrap_or_default())
            } else {
                n.to_string()
            }
        }
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
