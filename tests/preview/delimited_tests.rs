//! Tests for CSV/TXT previews
//!
//! Tests cover:
//! - Delimiter selection on the first line
//! - Row and column caps
//! - Empty input

use vora::preview::{
    build_preview, detect_delimiter, Delimiter, FileKind, PREVIEW_MAX_COLUMNS, PREVIEW_MAX_ROWS,
};

use crate::common::SALES_CSV;

// ============================================
// Delimiter Detection Tests
// ============================================

#[test]
fn test_comma_beats_semicolon_by_count() {
    assert_eq!(detect_delimiter("a,b;c,d,e"), Delimiter::Comma);
}

#[test]
fn test_all_zero_counts_choose_comma() {
    assert_eq!(detect_delimiter("single column header"), Delimiter::Comma);
}

#[test]
fn test_full_tie_chooses_comma() {
    assert_eq!(detect_delimiter("a,b;c\td|e"), Delimiter::Comma);
}

#[test]
fn test_only_first_line_is_inspected() {
    let text = "a;b;c\n1,2,3,4,5,6\n";
    let table = build_preview(text, FileKind::Delimited).unwrap();
    assert_eq!(table.headers, vec!["a", "b", "c"]);
    assert_eq!(table.rows[0], vec!["1,2,3,4,5,6"]);
}

#[test]
fn test_tab_separated_file() {
    let text = "name\tage\nAna\t31\nBruno\t27\n";
    let table = build_preview(text, FileKind::Delimited).unwrap();
    assert_eq!(table.headers, vec!["name", "age"]);
    assert_eq!(table.rows, vec![vec!["Ana", "31"], vec!["Bruno", "27"]]);
}

// ============================================
// Caps Tests
// ============================================

#[test]
fn test_large_csv_is_capped_to_ten_by_five() {
    let header = (0..20)
        .map(|c| format!("col{}", c))
        .collect::<Vec<_>>()
        .join(",");
    let mut text = header;
    for r in 0..1000 {
        text.push('\n');
        text.push_str(
            &(0..20)
                .map(|c| format!("{}", r * 100 + c))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    let table = build_preview(&text, FileKind::Delimited).unwrap();
    assert_eq!(table.headers.len(), PREVIEW_MAX_COLUMNS);
    assert_eq!(table.row_count(), PREVIEW_MAX_ROWS);
    assert!(table.rows.iter().all(|row| row.len() == PREVIEW_MAX_COLUMNS));
    assert_eq!(table.rows[0], vec!["0", "1", "2", "3", "4"]);
    assert_eq!(table.rows[9][0], "900");
}

#[test]
fn test_sales_fixture_drops_extra_columns() {
    let table = build_preview(SALES_CSV, FileKind::Delimited).unwrap();
    assert_eq!(table.headers, vec!["date", "store", "units", "price", "region"]);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.rows[2], vec!["2024-01-03", "B", "7", "2.7", "south"]);
}

#[test]
fn test_rows_wider_than_header_are_cut() {
    let text = "a,b\n1,2,3\n";
    let table = build_preview(text, FileKind::Delimited).unwrap();
    assert_eq!(table.rows[0], vec!["1", "2"]);
}

// ============================================
// Empty Input Tests
// ============================================

#[test]
fn test_blank_file_is_empty_result() {
    let table = build_preview("\r\n\n   \n", FileKind::Delimited).unwrap();
    assert!(table.is_empty());
    assert!(table.rows.is_empty());
}

#[test]
fn test_crlf_line_endings() {
    let table = build_preview("x;y\r\n1;2\r\n", FileKind::Delimited).unwrap();
    assert_eq!(table.headers, vec!["x", "y"]);
    assert_eq!(table.rows, vec![vec!["1", "2"]]);
}
