//! Multi-series comparison charts.
//!
//! A [`Chart`] is an explicit object accumulating labeled series against a
//! shared x-axis, rendered exactly once to an SVG page. There is no ambient
//! "current figure" state: everything a chart draws is owned by the value.
//!
//! The visual vocabulary is fixed across every chart in a report:
//! color encodes the execution target ([`TargetKind`]) and line style
//! encodes the machine context ([`MachineContext`], laptop solid with
//! filled markers, PC dashed with hollow markers), so the same series
//! identity looks identical on every page.

use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::{BLACK, BLUE, GREEN, RED, WHITE};
use tracing::info;

use crate::error::{Error, Result};
use crate::scenario::{MachineContext, TargetKind};

const CHART_SIZE: (u32, u32) = (1000, 650);
const TITLE_FONT_SIZE: u32 = 22;
const AXIS_FONT_SIZE: u32 = 16;
const TICK_FONT_SIZE: u32 = 13;
const LEGEND_FONT_SIZE: u32 = 13;
const LINE_WIDTH: u32 = 2;
const MARKER_SIZE: i32 = 3;

fn write_err(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::Write {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Visual identity of one series: which target it measures and on which
/// machine. Fully determines color, dash pattern, marker fill, and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    /// Execution-target identity, encoded as line color.
    pub target: TargetKind,
    /// Machine context, encoded as line style and marker fill.
    pub machine: MachineContext,
}

impl SeriesStyle {
    /// Creates the style for a (target, machine) series identity.
    #[must_use]
    pub fn new(target: TargetKind, machine: MachineContext) -> Self {
        SeriesStyle { target, machine }
    }

    /// Line color for this series, shared by every chart in a report.
    #[must_use]
    pub fn color(self) -> RGBColor {
        match self.target {
            TargetKind::Vanilla => RED,
            TargetKind::AcceleratedCpu => BLUE,
            TargetKind::AcceleratedGpu => GREEN,
            TargetKind::Specialized => BLACK,
        }
    }

    /// Whether this series draws dashed (PC context) rather than solid.
    #[must_use]
    pub fn dashed(self) -> bool {
        self.machine == MachineContext::Pc
    }

    /// Legend label, e.g. `"Vanilla Ruby (Laptop)"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{} ({})", self.target.label(), self.machine.label())
    }
}

struct ChartEntry {
    style: SeriesStyle,
    values: Vec<f64>,
}

/// A named line chart overlaying labeled series against one x-axis.
///
/// Build with [`Chart::new`], add series with [`Chart::push`], then
/// finalize with [`Chart::render_svg`]. Rendering overwrites any prior
/// artifact at the target path.
pub struct Chart {
    title: String,
    x_label: String,
    y_label: String,
    x: Vec<u64>,
    entries: Vec<ChartEntry>,
}

impl Chart {
    /// Creates an empty chart over the shared x-axis `x` (input sizes).
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        x: &[u64],
    ) -> Self {
        Chart {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            x: x.to_vec(),
            entries: Vec::new(),
        }
    }

    /// Adds one series to the overlay.
    ///
    /// # Errors
    ///
    /// Returns `Error::ShapeMismatch` if `values` does not align with the
    /// chart's x-axis.
    pub fn push(&mut self, style: SeriesStyle, values: Vec<f64>) -> Result<()> {
        if values.len() != self.x.len() {
            return Err(Error::ShapeMismatch {
                context: format!("chart '{}', series '{}'", self.title, style.label()),
                left: self.x.len(),
                right: values.len(),
            });
        }
        self.entries.push(ChartEntry { style, values });
        Ok(())
    }

    /// Number of series currently on the chart.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.entries.len()
    }

    fn axis_ranges(&self) -> (Range<f64>, Range<f64>) {
        let (x_min, x_max) = self
            .x
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &n| {
                let v = n as f64;
                (lo.min(v), hi.max(v))
            });
        let (x_min, x_max) = if x_min.is_finite() && x_max > x_min {
            (x_min, x_max)
        } else if x_min.is_finite() {
            (x_min, x_min + 1.0)
        } else {
            (0.0, 1.0)
        };

        // Non-finite values (zero-denominator artifacts) are excluded from
        // ranging; they cannot be placed on a linear axis.
        let (y_min, y_max) = self
            .entries
            .iter()
            .flat_map(|e| e.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        let (y_min, y_max) = if y_min.is_finite() && y_max.is_finite() {
            (y_min, y_max)
        } else {
            (0.0, 1.0)
        };
        let mut pad = (y_max - y_min) * 0.05;
        if pad <= 0.0 {
            pad = y_max.abs().max(1.0) * 0.05;
        }

        (x_min..x_max, (y_min - pad)..(y_max + pad))
    }

    /// Renders the chart as an SVG page at `path`, overwriting any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Write` if the artifact cannot be rendered or
    /// written; the run has no partial-chart recovery.
    pub fn render_svg(&self, path: &Path) -> Result<()> {
        let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(|e| write_err(path, e))?;

        let (x_range, y_range) = self.axis_ranges();
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", TITLE_FONT_SIZE))
            .margin(12)
            .x_label_area_size(48)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, y_range)
            .map_err(|e| write_err(path, e))?;

        chart
            .configure_mesh()
            .x_desc(self.x_label.clone())
            .y_desc(self.y_label.clone())
            .label_style(("sans-serif", TICK_FONT_SIZE))
            .axis_desc_style(("sans-serif", AXIS_FONT_SIZE))
            .draw()
            .map_err(|e| write_err(path, e))?;

        for entry in &self.entries {
            let color = entry.style.color();
            let points: Vec<(f64, f64)> = self
                .x
                .iter()
                .zip(entry.values.iter())
                .map(|(&n, &v)| (n as f64, v))
                .filter(|(_, v)| v.is_finite())
                .collect();

            if entry.style.dashed() {
                chart
                    .draw_series(DashedLineSeries::new(
                        points.clone(),
                        6,
                        4,
                        color.stroke_width(LINE_WIDTH),
                    ))
                    .map_err(|e| write_err(path, e))?
                    .label(entry.style.label())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(LINE_WIDTH))
                    });
                // Hollow markers distinguish the dashed context up close.
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&pt| Circle::new(pt, MARKER_SIZE, color.stroke_width(1))),
                    )
                    .map_err(|e| write_err(path, e))?;
            } else {
                chart
                    .draw_series(LineSeries::new(
                        points.clone(),
                        color.stroke_width(LINE_WIDTH),
                    ))
                    .map_err(|e| write_err(path, e))?
                    .label(entry.style.label())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(LINE_WIDTH))
                    });
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|&pt| Circle::new(pt, MARKER_SIZE, color.filled())),
                    )
                    .map_err(|e| write_err(path, e))?;
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", LEGEND_FONT_SIZE))
            .draw()
            .map_err(|e| write_err(path, e))?;

        root.present().map_err(|e| write_err(path, e))?;
        info!(path = %path.display(), series = self.entries.len(), "wrote chart");
        Ok(())
    }
}
