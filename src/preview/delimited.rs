//! Previews for delimiter-separated text (CSV/TXT).

use serde::Serialize;
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use super::types::{PreviewTable, PREVIEW_MAX_ROWS};

/// Candidate field separators, in tie-break order
#[derive(AsRefStr, Clone, Copy, Debug, Default, EnumIter, PartialEq, Eq, Serialize)]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
    Tab,
    Pipe,
}

impl Delimiter {
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }
}

/// Pick the separator that occurs most often in `sample_line`.
///
/// Ties (including a line with none of the candidates) go to the earliest
/// candidate, so comma wins unless another separator is strictly more common.
pub fn detect_delimiter(sample_line: &str) -> Delimiter {
    let mut best = Delimiter::default();
    let mut best_count = None;

    for candidate in Delimiter::iter() {
        let count = sample_line.matches(candidate.as_char()).count();
        if best_count.is_none_or(|best_count| count > best_count) {
            best = candidate;
            best_count = Some(count);
        }
    }

    best
}

fn split_fields(line: &str, delimiter: Delimiter) -> Vec<String> {
    line.split(delimiter.as_char())
        .map(|field| field.trim().to_string())
        .collect()
}

/// Build a preview from delimited text.
///
/// Blank lines are skipped. The first remaining line is the header and
/// decides the delimiter; up to `PREVIEW_MAX_ROWS` following lines become rows.
pub(crate) fn preview(text: &str) -> PreviewTable {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return PreviewTable::empty();
    };

    let delimiter = detect_delimiter(header_line);
    tracing::debug!("Detected {} delimiter for preview", delimiter.as_ref());

    let headers = split_fields(header_line, delimiter);
    let rows = lines
        .take(PREVIEW_MAX_ROWS)
        .map(|line| split_fields(line, delimiter))
        .collect();

    PreviewTable::new(headers, rows)
}
