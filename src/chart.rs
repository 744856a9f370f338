//! Bar-chart report rendering
//!
//! Pure formatting: a finalized language tally goes in, fixed-width report
//! lines come out. No I/O happens here.

use crate::constants::chart::{BAR_WIDTH, EMPTY, FILLED, LABEL_WIDTH, PERCENT_WIDTH};
use std::collections::HashMap;

/// One row of the rendered chart, computed once from a finalized tally
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub language: String,
    pub percentage: f64,
    pub bars: usize,
}

/// Build chart rows from a tally, dropping excluded languages first
///
/// Rows are ordered by count descending; equal counts fall back to language
/// name order so output is reproducible. The percentage denominator is the
/// total over the rows that remain after exclusion, so excluding a language
/// raises every other share.
pub fn chart_rows(tally: &HashMap<String, u64>, exclude: &[String]) -> Vec<ChartRow> {
    let mut entries: Vec<(&str, u64)> = tally
        .iter()
        .filter(|(language, _)| !exclude.iter().any(|excluded| excluded == *language))
        .map(|(language, count)| (language.as_str(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let total: u64 = entries.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Vec::new();
    }

    entries
        .into_iter()
        .map(|(language, count)| {
            let percentage = (count as f64 / total as f64 * 10_000.0).round() / 100.0;
            let bars = (percentage * BAR_WIDTH as f64 / 100.0).ceil() as usize;
            ChartRow {
                language: language.to_string(),
                percentage,
                bars,
            }
        })
        .collect()
}

/// Render one fixed-width line per row
pub fn render_lines(rows: &[ChartRow]) -> Vec<String> {
    rows.iter().map(render_row).collect()
}

fn render_row(row: &ChartRow) -> String {
    let label = truncate(&format!("{} ", row.language), LABEL_WIDTH);
    let bar = format!(
        "{}{}",
        FILLED.repeat(row.bars),
        EMPTY.repeat(BAR_WIDTH.saturating_sub(row.bars))
    );
    let percent = format!("{:.2}%", row.percentage);
    format!(
        "{label:>label_width$}{bar} {percent:>percent_width$}",
        label_width = LABEL_WIDTH,
        percent_width = PERCENT_WIDTH,
    )
}

/// Cut to `width` visible characters, ellipsis included, when too long
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width - 1).collect();
        format!("{}…", kept)
    } else {
        text.to_string()
    }
}
