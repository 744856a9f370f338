//! Formatter properties exercised through the public API

use gistbar::chart::{chart_rows, render_lines};
use std::collections::HashMap;

fn tally(entries: &[(&str, u64)]) -> HashMap<String, u64> {
    entries
        .iter()
        .map(|(language, count)| (language.to_string(), *count))
        .collect()
}

#[test]
fn test_percentage_sum_stays_in_rounding_window() {
    let tallies = [
        tally(&[("Go", 300), ("Rust", 100), ("Markdown", 50)]),
        tally(&[("Rust", 1), ("Go", 1), ("C", 1)]),
        tally(&[("TypeScript", 123_456), ("CSS", 7_890), ("HTML", 4_321)]),
        tally(&[("Rust", 986_425)]),
    ];

    for tally in &tallies {
        let rows = chart_rows(tally, &[]);
        let sum: f64 = rows.iter().map(|row| row.percentage).sum();
        assert!((99.99..=100.01).contains(&sum), "sum was {}", sum);
    }
}

#[test]
fn test_excluded_language_never_appears() {
    let rows = chart_rows(
        &tally(&[("Rust", 100), ("HTML", 900)]),
        &["HTML".to_string()],
    );

    assert!(rows.iter().all(|row| row.language != "HTML"));
    assert_eq!(rows[0].percentage, 100.0);
}

#[test]
fn test_every_line_has_fixed_width() {
    let rows = chart_rows(
        &tally(&[
            ("AVeryLongLanguageName", 500),
            ("Go", 300),
            ("C", 150),
            ("Vim Script", 50),
        ]),
        &[],
    );

    for line in render_lines(&rows) {
        // label (12) + bar (20) + separator + percentage (6)
        assert_eq!(line.chars().count(), 39, "line was {:?}", line);
    }
}

#[test]
fn test_nonzero_percentage_always_fills_a_cell() {
    let rows = chart_rows(&tally(&[("A", 1), ("B", 9_999)]), &[]);
    assert!(rows.iter().all(|row| row.bars >= 1));
}
