//! PNG bar charts for digit reports
//!
//! Draws the three distributions stacked vertically in one image using the
//! [`plotters`] bitmap backend. Every bar is annotated with its exact count.

use crate::app::report::{DigitReport, Distribution};
use crate::constants::{CHART_HEIGHT, CHART_WIDTH, NUM_DIGITS};
use crate::domain::digits::DigitTable;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fs;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save chart to file: {0}")]
    FileSave(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, ChartError>;

/// One bar chart of the figure
#[derive(Debug, Clone)]
pub struct ChartPanel<'a> {
    pub title: String,
    pub table: &'a DigitTable,
    pub color: (u8, u8, u8),
}

/// Panels of the figure, top to bottom
pub fn chart_panels(report: &DigitReport) -> Vec<ChartPanel<'_>> {
    Distribution::ALL
        .into_iter()
        .map(|distribution| ChartPanel {
            title: distribution.title(report.bound),
            table: report.table(distribution),
            color: distribution.color(),
        })
        .collect()
}

/// X axis range; segmented coordinates include the end value, so this yields digits 0-9
pub fn digit_axis() -> Range<u32> {
    0..(NUM_DIGITS as u32 - 1)
}

/// Upper end of the y axis, leaving headroom above the tallest bar
pub fn y_axis_limit(table: &DigitTable) -> u64 {
    let max = table.max_count();
    max + max / 10 + 1
}

/// Count annotations as `(digit, y position, text)`, placed at half bar height
pub fn bar_labels(table: &DigitTable) -> Vec<(u32, u64, String)> {
    table
        .iter()
        .map(|(digit, count)| (digit as u32, count / 2, count.to_string()))
        .collect()
}

/// Render all three distributions of `report` into a PNG file
///
/// Missing parent directories are created.
pub fn render_png(report: &DigitReport, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let root = BitMapBackend::new(output_path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let body = root
        .titled(&report.heading(), ("sans-serif", 36))
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let panels = chart_panels(report);
    for (area, panel) in body.split_evenly((panels.len(), 1)).iter().zip(&panels) {
        draw_bar_chart(area, panel)?;
    }

    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draw one digit table as a bar chart with count labels
fn draw_bar_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &ChartPanel<'_>,
) -> Result<()> {
    let table = panel.table;
    let (r, g, b) = panel.color;

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(digit_axis().into_segmented(), 0u64..y_axis_limit(table))
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(10)
        .x_desc("Digits")
        .y_desc("Occurrences")
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(RGBColor(r, g, b).filled())
                .margin(8)
                .data(table.iter().map(|(digit, count)| (digit as u32, count))),
        )
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    let label_style = TextStyle::from(("sans-serif", 14).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    chart
        .draw_series(bar_labels(table).into_iter().map(|(digit, y, text)| {
            Text::new(text, (SegmentValue::CenterOf(digit), y), label_style.clone())
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    Ok(())
}
