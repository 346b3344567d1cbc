//! Figure rendering.
//!
//! Panels are laid out with `split_evenly` and drawn one after the other. Each panel
//! picks its coordinate system from its axis scales, so a log x axis becomes a
//! `LogCoord` and a linear one a plain `f64` range.

use std::path::Path;

use plotters::coord::ranged1d::{AsRangedCoord, Ranged, ValueFormatter};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::figure::{Figure, Panel};
use crate::style::{AxisScale, LineStyle, Marker};

const CAPTION_FONT: (&str, i32) = ("sans-serif", 28);
const MARKER_SIZE: i32 = 4;
const DASH_LENGTH: i32 = 10;
const DASH_SPACING: i32 = 6;

/// What was drawn for one series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesReport {
    /// Legend label.
    pub label: String,
    /// Points placed on the chart.
    pub points_drawn: usize,
    /// Points that could not be placed (non-finite, or non-positive on a log axis).
    pub points_skipped: usize,
}

/// What was drawn for one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelReport {
    /// Panel caption.
    pub title: String,
    /// Scale the x axis was drawn with.
    pub x_scale: AxisScale,
    /// Scale the y axis was drawn with.
    pub y_scale: AxisScale,
    /// Drawn x range.
    pub x_range: (f64, f64),
    /// Drawn y range.
    pub y_range: (f64, f64),
    /// Per-series outcome, in drawing order.
    pub series: Vec<SeriesReport>,
}

impl PanelReport {
    /// Looks up a series by label.
    pub fn series(&self, label: &str) -> Option<&SeriesReport> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Points drawn across all series of the panel.
    pub fn points_drawn(&self) -> usize {
        self.series.iter().map(|s| s.points_drawn).sum()
    }
}

/// Outcome of rendering a [`Figure`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    /// One entry per panel, top to bottom.
    pub panels: Vec<PanelReport>,
}

impl RenderReport {
    /// Looks up a panel by title.
    pub fn panel(&self, title: &str) -> Option<&PanelReport> {
        self.panels.iter().find(|p| p.title == title)
    }
}

/// An SVG document together with its render report.
#[derive(Debug, Clone)]
pub struct RenderedFigure {
    /// The SVG document.
    pub svg: String,
    /// What was drawn.
    pub report: RenderReport,
}

/// Draws a figure onto a drawing area, splitting it into one row per panel.
pub fn render<DB: DrawingBackend>(
    figure: &Figure,
    root: &DrawingArea<DB, Shift>,
) -> ChartResult<RenderReport> {
    figure.validate()?;
    root.fill(&WHITE)?;

    let areas = root.split_evenly((figure.panels.len(), 1));
    let mut report = RenderReport::default();
    for (panel, area) in figure.panels.iter().zip(&areas) {
        report.panels.push(render_panel(panel, area)?);
    }

    root.present()?;
    Ok(report)
}

/// Renders a figure to an in-memory SVG document.
pub fn render_svg(figure: &Figure) -> ChartResult<RenderedFigure> {
    let mut svg = String::new();
    let report = {
        let root = SVGBackend::with_string(&mut svg, figure.size).into_drawing_area();
        render(figure, &root)?
    };
    Ok(RenderedFigure { svg, report })
}

/// Renders a figure and writes the SVG document to `path`.
pub fn save_svg(figure: &Figure, path: impl AsRef<Path>) -> ChartResult<RenderReport> {
    let path = path.as_ref();
    let rendered = render_svg(figure)?;
    std::fs::write(path, rendered.svg)?;
    debug!(path = %path.display(), "Wrote figure");
    Ok(rendered.report)
}

fn render_panel<DB: DrawingBackend>(
    panel: &Panel,
    area: &DrawingArea<DB, Shift>,
) -> ChartResult<PanelReport> {
    let mut layers = Vec::with_capacity(panel.series.len());
    let mut series = Vec::with_capacity(panel.series.len());

    for s in &panel.series {
        let kept: Vec<(f64, f64)> = s
            .points
            .iter()
            .copied()
            .filter(|&(x, y)| panel.x_scale.accepts(x) && panel.y_scale.accepts(y))
            .collect();
        let skipped = s.points.len() - kept.len();
        if skipped > 0 {
            warn!(
                panel = %panel.title,
                series = %s.label,
                skipped,
                "Skipped points that cannot be placed on the axes"
            );
        }
        series.push(SeriesReport {
            label: s.label.clone(),
            points_drawn: kept.len(),
            points_skipped: skipped,
        });
        layers.push(kept);
    }

    let x_range = panel
        .x_scale
        .range(layers.iter().flatten().map(|&(x, _)| x));
    let y_range = panel
        .y_scale
        .range(layers.iter().flatten().map(|&(_, y)| y));
    for (axis, scale, (lo, hi)) in [("x", panel.x_scale, x_range), ("y", panel.y_scale, y_range)] {
        if !scale.is_drawable((lo, hi)) {
            return Err(ChartError::InvalidFigure(format!(
                "panel '{}': {axis} values from {lo:e} to {hi:e} cannot be laid out on a {scale} axis",
                panel.title
            )));
        }
    }
    let (x0, x1) = x_range;
    let (y0, y1) = y_range;

    let drawn = match (panel.x_scale, panel.y_scale) {
        (AxisScale::Linear, AxisScale::Linear) => draw_panel(area, panel, &layers, x0..x1, y0..y1),
        (AxisScale::Log, AxisScale::Linear) => {
            draw_panel(area, panel, &layers, (x0..x1).log_scale(), y0..y1)
        }
        (AxisScale::Linear, AxisScale::Log) => {
            draw_panel(area, panel, &layers, x0..x1, (y0..y1).log_scale())
        }
        (AxisScale::Log, AxisScale::Log) => draw_panel(
            area,
            panel,
            &layers,
            (x0..x1).log_scale(),
            (y0..y1).log_scale(),
        ),
    };
    drawn?;

    debug!(
        panel = %panel.title,
        x_scale = %panel.x_scale,
        y_scale = %panel.y_scale,
        series = series.len(),
        "Rendered panel"
    );

    Ok(PanelReport {
        title: panel.title.clone(),
        x_scale: panel.x_scale,
        y_scale: panel.y_scale,
        x_range,
        y_range,
        series,
    })
}

fn draw_panel<DB, X, Y>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    layers: &[Vec<(f64, f64)>],
    x_spec: X,
    y_spec: Y,
) -> ChartResult<()>
where
    DB: DrawingBackend,
    X: AsRangedCoord<Value = f64>,
    Y: AsRangedCoord<Value = f64>,
    X::CoordDescType: ValueFormatter<f64>,
    Y::CoordDescType: ValueFormatter<f64>,
{
    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, CAPTION_FONT)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(x_spec, y_spec)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str());
    if !panel.grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for (series, points) in panel.series.iter().zip(layers) {
        let color = series.style.color.to_rgb();
        let line_style = color.stroke_width(series.style.line_width);

        let anno = match series.style.line {
            _ if points.is_empty() => {
                chart.draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?
            }
            LineStyle::Solid => {
                chart.draw_series(LineSeries::new(points.iter().copied(), line_style))?
            }
            LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(
                points.iter().copied(),
                DASH_LENGTH,
                DASH_SPACING,
                line_style,
            ))?,
            LineStyle::None => chart.draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?,
        };
        let marker_style = color.filled();
        let s = MARKER_SIZE;
        anno.label(series.label.as_str());
        // marker-only series show their marker in the legend
        match (series.style.line, series.style.marker) {
            (LineStyle::None, Marker::Circle) => {
                anno.legend(move |(x, y)| Circle::new((x + 10, y), s, marker_style));
            }
            (LineStyle::None, Marker::Square) => {
                anno.legend(move |(x, y)| {
                    Rectangle::new([(x + 10 - s, y - s), (x + 10 + s, y + s)], marker_style)
                });
            }
            (LineStyle::None, Marker::Triangle) => {
                anno.legend(move |(x, y)| TriangleMarker::new((x + 10, y), s + 1, marker_style));
            }
            (LineStyle::None, Marker::Cross) => {
                anno.legend(move |(x, y)| Cross::new((x + 10, y), s, marker_style));
            }
            _ => {
                anno.legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
            }
        }

        draw_markers(&mut chart, points, series.style.marker, marker_style)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}

fn draw_markers<DB, X, Y>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<X, Y>>,
    points: &[(f64, f64)],
    marker: Marker,
    style: ShapeStyle,
) -> ChartResult<()>
where
    DB: DrawingBackend,
    X: Ranged<ValueType = f64>,
    Y: Ranged<ValueType = f64>,
{
    let s = MARKER_SIZE;
    match marker {
        Marker::None => {}
        Marker::Circle => {
            chart.draw_series(points.iter().map(|&p| Circle::new(p, s, style)))?;
        }
        Marker::Square => {
            chart.draw_series(
                points
                    .iter()
                    .map(|&p| EmptyElement::at(p) + Rectangle::new([(-s, -s), (s, s)], style)),
            )?;
        }
        Marker::Triangle => {
            chart.draw_series(points.iter().map(|&p| TriangleMarker::new(p, s + 1, style)))?;
        }
        Marker::Cross => {
            chart.draw_series(points.iter().map(|&p| Cross::new(p, s, style)))?;
        }
    }
    Ok(())
}
