//! Terminal bar charts for digit tables
//!
//! Each chart is an ASCII table (via [`tabled`]) with one row per digit,
//! its exact count, and a bar scaled to the largest count of that table.

use crate::app::report::{DigitReport, Distribution};
use crate::constants::{TEXT_BAR_CHAR, TEXT_BAR_WIDTH};
use crate::domain::digits::DigitTable;
use tabled::{Table, Tabled};

/// One chart row
#[derive(Debug, Clone, Tabled)]
pub struct DigitRow {
    #[tabled(rename = "Digit")]
    pub digit: u8,
    #[tabled(rename = "Count")]
    pub count: u64,
    #[tabled(rename = "Bar")]
    pub bar: String,
}

/// Bar length for `count`, scaled so that `max` fills `width`
///
/// Non-zero counts always get at least one character.
pub fn bar_length(count: u64, max: u64, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    let scaled = (count as u128 * width as u128).div_ceil(max as u128) as usize;
    scaled.clamp(1, width)
}

/// Build the rows of one chart
pub fn digit_rows(table: &DigitTable) -> Vec<DigitRow> {
    let max = table.max_count();
    table
        .iter()
        .map(|(digit, count)| DigitRow {
            digit,
            count,
            bar: TEXT_BAR_CHAR
                .to_string()
                .repeat(bar_length(count, max, TEXT_BAR_WIDTH)),
        })
        .collect()
}

/// Render one table as a titled ASCII chart
pub fn render_table(table: &DigitTable, title: &str) -> String {
    let chart = Table::new(digit_rows(table)).to_string();
    format!("{}\n{}\n{}", title, "=".repeat(title.len()), chart)
}

/// Render all three charts of a report
pub fn render_report(report: &DigitReport) -> String {
    let heading = report.heading();
    let mut out = format!("{}\n{}\n", heading, "#".repeat(heading.len()));

    for distribution in Distribution::ALL {
        out.push('\n');
        out.push_str(&render_table(
            report.table(distribution),
            &distribution.title(report.bound),
        ));
        out.push('\n');
    }

    out
}
