//! Tabular preview builder for uploaded datasets.
//!
//! Turns the decoded text of a selected file into a small, bounded table
//! that the data panel can show before the dataset is cleaned server-side.
//!
//! - `types` - `FileKind`, `PreviewTable`, `PreviewError` and the size caps
//! - `delimited` - delimiter sniffing and CSV/TXT previews
//! - `json` - JSON shape classification and record previews

pub mod delimited;
pub mod json;
pub mod types;

pub use delimited::{detect_delimiter, Delimiter};
pub use json::JsonShape;
pub use types::{FileKind, PreviewError, PreviewTable, PREVIEW_MAX_COLUMNS, PREVIEW_MAX_ROWS};

/// Build a preview for already-decoded text of the given kind.
///
/// Delimited input with no non-empty lines yields `PreviewTable::empty()`,
/// which renders as the "no preview" placeholder. JSON input that is not a
/// list of records is an error so the caller can tell the user.
pub fn build_preview(text: &str, kind: FileKind) -> Result<PreviewTable, PreviewError> {
    match kind {
        FileKind::Delimited => Ok(delimited::preview(text)),
        FileKind::Json => json::preview(text),
        FileKind::Unsupported => Err(PreviewError::Unsupported),
    }
}

/// Decode raw file bytes and build a preview, classifying by file name.
///
/// Invalid UTF-8 sequences are replaced rather than rejected, which matches
/// how text files are read for display elsewhere in the app.
pub fn preview_file(file_name: &str, bytes: &[u8]) -> Result<PreviewTable, PreviewError> {
    let kind = FileKind::from_file_name(file_name);
    if kind == FileKind::Unsupported {
        return Err(PreviewError::Unsupported);
    }

    let text = String::from_utf8_lossy(bytes);
    let table = build_preview(&text, kind)?;

    tracing::debug!(
        "Built {:?} preview for {}: {} columns, {} rows",
        kind,
        file_name,
        table.headers.len(),
        table.rows.len()
    );

    Ok(table)
}
