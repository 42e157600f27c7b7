//! Boundary Tests for uxtidfmt
//!
//! Edge cases of the section-termination heuristic, the token length
//! threshold, and the input size limit.

use std::io::Cursor;
use uxtidfmt::{FormatterBuilder, InputFormat, UxtidFmtError};

fn run_plain(content: &str) -> Result<String, UxtidFmtError> {
    FormatterBuilder::new()
        .with_template("{values}")
        .build()
        .unwrap()
        .format_to_string(Cursor::new(content.as_bytes()), InputFormat::PlainText)
}

// --- Section termination ---

#[test]
fn test_two_char_line_always_terminates_section() {
    // A line of exactly 2 characters terminates the section even though it
    // carries no header-looking text.
    let content = "UXTID\nABCCOB1Fxxxxxxxxxxxxxxxxxxxx11\n1F\nABCCOB1Fyyyyyyyyyyyyyyyyyyyy22\n";
    let result = run_plain(content).unwrap();

    assert_eq!(result, "'ABCCOB1Fxxxxxxxxxxxxxxxxxxxx11',");
}

#[test]
fn test_two_char_line_directly_after_heading() {
    let content = "UXTID\n1F\nABCCOB1Fyyyyyyyyyyyyyyyyyyyy22\n";
    let result = run_plain(content);

    assert!(matches!(result, Err(UxtidFmtError::NoValuesFound(_))));
}

#[test]
fn test_header_line_with_plausible_token_still_terminates() {
    // Ends with "ID", so the header heuristic wins even though the line
    // would otherwise select a marker-bearing token.
    let content = "UXTID\nABCCOB1FXXXXXXXXXXXXXXXXXXID\n";
    let result = run_plain(content);

    assert!(matches!(result, Err(UxtidFmtError::NoValuesFound(_))));
}

#[test]
fn test_whitespace_only_lines_do_not_terminate() {
    let content = "UXTID\n\n \t \nABCCOB1Fxxxxxxxxxxxxxxxxxxxx11\n";
    let result = run_plain(content).unwrap();

    assert_eq!(result, "'ABCCOB1Fxxxxxxxxxxxxxxxxxxxx11',");
}

#[test]
fn test_trailing_section_runs_to_end_of_input() {
    // No terminating header: the section extends to end-of-input.
    let content = "UXTID\nABCCOB1Fxxxxxxxxxxxxxxxxxxxx11\nABCCOB1Fyyyyyyyyyyyyyyyyyyyy22";
    let result = run_plain(content).unwrap();

    assert_eq!(
        result,
        "'ABCCOB1Fxxxxxxxxxxxxxxxxxxxx11',\n'ABCCOB1Fyyyyyyyyyyyyyyyyyyyy22',"
    );
}

#[test]
fn test_crlf_input_lines_are_trimmed() {
    let content = "UXTID\r\nABCCOB1Fxxxxxxxxxxxxxxxxxxxx11\r\nID\r\n";
    let result = run_plain(content).unwrap();

    assert_eq!(result, "'ABCCOB1Fxxxxxxxxxxxxxxxxxxxx11',");
}

// --- Token length threshold ---

#[test]
fn test_token_of_exactly_threshold_length_is_skipped() {
    // 20 characters: not strictly greater than the threshold, so the line
    // is skipped (not an error), and the following line still selects.
    let content = "UXTID\nCOB1Fxxxxxxxxxxxxxxx\nABCCOB1Fyyyyyyyyyyyyyyyyyyyy22\n";
    let result = run_plain(content).unwrap();

    assert_eq!(result, "'ABCCOB1Fyyyyyyyyyyyyyyyyyyyy22',");
}

#[test]
fn test_token_one_char_over_threshold_is_selected() {
    // 21 characters
    let content = "UXTID\nCOB1Fxxxxxxxxxxxxxxxx\n";
    let result = run_plain(content).unwrap();

    assert_eq!(result, "'COB1Fxxxxxxxxxxxxxxxx',");
}

#[test]
fn test_last_column_fallback_can_pick_trailing_column() {
    // Known heuristic weakness: with no marker match, the last column is
    // trusted as long as it carries the prefix and enough length.
    let content = "UXTID\n2025-01-01 COBSTATUSCODE999999999999\n";
    let result = run_plain(content).unwrap();

    assert_eq!(result, "'COBSTATUSCODE999999999999',");
}

#[test]
fn test_custom_min_token_chars() {
    let formatter = FormatterBuilder::new()
        .with_template("{values}")
        .with_min_token_chars(5)
        .build()
        .unwrap();
    let content = "UXTID\nCOB1F9\n";

    let result = formatter
        .format_to_string(Cursor::new(content.as_bytes()), InputFormat::PlainText)
        .unwrap();

    assert_eq!(result, "'COB1F9',");
}

// --- Keyword matching ---

#[test]
fn test_keyword_matches_any_case() {
    for heading in ["uxtid", "Uxtid", "UXTID", "uXtId"] {
        let content = format!("{}\nABCCOB1Fxxxxxxxxxxxxxxxxxxxx11\n", heading);
        let result = run_plain(&content).unwrap();
        assert_eq!(result, "'ABCCOB1Fxxxxxxxxxxxxxxxxxxxx11',");
    }
}

#[test]
fn test_repeated_heading_lines_before_data() {
    // A second keyword-bearing line while already in the section: it ends
    // with "ID", so it terminates the section like any other header.
    let content = "UXTID\nABCCOB1Fxxxxxxxxxxxxxxxxxxxx11\nUXTID\nABCCOB1Fyyyyyyyyyyyyyyyyyyyy22\n";
    let result = run_plain(content).unwrap();

    assert_eq!(result, "'ABCCOB1Fxxxxxxxxxxxxxxxxxxxx11',");
}

// --- Input size limit ---

#[test]
fn test_input_at_exact_limit_is_accepted() {
    let mut content = String::from("UXTID\nABCCOB1Fxxxxxxxxxxxxxxxxxxxx11\n");
    let limit = 1024;
    while content.len() < limit {
        content.push(' ');
    }
    assert_eq!(content.len(), limit);

    let formatter = FormatterBuilder::new()
        .with_template("{values}")
        .with_max_input_size(limit as u64)
        .build()
        .unwrap();
    let result = formatter
        .format_to_string(Cursor::new(content.as_bytes()), InputFormat::PlainText)
        .unwrap();

    assert_eq!(result, "'ABCCOB1Fxxxxxxxxxxxxxxxxxxxx11',");
}

#[test]
fn test_input_one_byte_over_limit_is_rejected() {
    let content = "UXTID\nABCCOB1Fxxxxxxxxxxxxxxxxxxxx11\n";
    let limit = content.len() as u64 - 1;

    let formatter = FormatterBuilder::new()
        .with_max_input_size(limit)
        .build()
        .unwrap();
    let result = formatter.format_to_string(Cursor::new(content.as_bytes()), InputFormat::PlainText);

    match result {
        Err(UxtidFmtError::SizeExceeded { size, max }) => {
            assert_eq!(size, content.len() as u64);
            assert_eq!(max, limit);
        }
        _ => panic!("Expected SizeExceeded error"),
    }
}

#[test]
fn test_default_limit_rejects_oversized_input() {
    // 10MiB + 1 byte; rejected before any parsing happens
    let content = vec![b'a'; 10_485_761];

    let formatter = FormatterBuilder::new().build().unwrap();
    let result = formatter.format_to_string(Cursor::new(content), InputFormat::PlainText);

    assert!(matches!(
        result,
        Err(UxtidFmtError::SizeExceeded {
            size: 10_485_761,
            max: 10_485_760
        })
    ));
}

// --- Determinism ---

#[test]
fn test_pipeline_is_idempotent_on_identical_bytes() {
    let content = "UXTID\n2025-01-01\tABCCOB1Fxxxxxxxxxxxxxxxxxxxx11\tSUCCESS\nID\n";
    let formatter = FormatterBuilder::new().build().unwrap();

    let first = formatter
        .format_to_string(Cursor::new(content.as_bytes()), InputFormat::PlainText)
        .unwrap();
    let second = formatter
        .format_to_string(Cursor::new(content.as_bytes()), InputFormat::PlainText)
        .unwrap();

    assert_eq!(first, second);
}
