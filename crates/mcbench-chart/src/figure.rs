//! Figure description: panels stacked top to bottom, each with its own series.

use crate::error::{ChartError, ChartResult};
use crate::style::{AxisScale, SeriesStyle};

/// Default figure size in pixels (12 x 12 inches at 100 dpi).
pub const DEFAULT_SIZE: (u32, u32) = (1200, 1200);

/// A named sequence of points.
///
/// Points are joined in the order given. They are never sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// `(x, y)` pairs in drawing order.
    pub points: Vec<(f64, f64)>,
    /// Display attributes.
    pub style: SeriesStyle,
}

impl Series {
    /// Creates a series with the default style.
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
            style: SeriesStyle::default(),
        }
    }

    /// Sets the display attributes.
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One chart: title, axes, legend, grid and its series.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Caption above the chart.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// X axis scale.
    pub x_scale: AxisScale,
    /// Y axis scale.
    pub y_scale: AxisScale,
    /// Whether grid lines are drawn.
    pub grid: bool,
    /// Series, drawn in order.
    pub series: Vec<Series>,
}

impl Panel {
    /// Creates an empty panel with linear axes and a grid.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            x_scale: AxisScale::Linear,
            y_scale: AxisScale::Linear,
            grid: true,
            series: Vec::new(),
        }
    }

    /// Sets the x axis description.
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    /// Sets the y axis description.
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Sets the x axis scale.
    pub fn with_x_scale(mut self, scale: AxisScale) -> Self {
        self.x_scale = scale;
        self
    }

    /// Sets the y axis scale.
    pub fn with_y_scale(mut self, scale: AxisScale) -> Self {
        self.y_scale = scale;
        self
    }

    /// Turns grid lines on or off.
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Adds a series.
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Looks up a series by label.
    pub fn series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }
}

/// Panels stacked vertically in one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Width and height in pixels.
    pub size: (u32, u32),
    /// Panels, top to bottom.
    pub panels: Vec<Panel>,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl Figure {
    /// Creates an empty figure.
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            size,
            panels: Vec::new(),
        }
    }

    /// Adds a panel below the existing ones.
    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    /// Looks up a panel by title.
    pub fn panel(&self, title: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.title == title)
    }

    /// Checks that the figure can be drawn.
    pub fn validate(&self) -> ChartResult<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(ChartError::InvalidFigure(format!(
                "size {}x{} has a zero dimension",
                self.size.0, self.size.1
            )));
        }
        if self.panels.is_empty() {
            return Err(ChartError::InvalidFigure("no panels".into()));
        }
        if let Some(panel) = self.panels.iter().find(|p| p.series.is_empty()) {
            return Err(ChartError::InvalidFigure(format!(
                "panel '{}' has no series",
                panel.title
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::SeriesColor;

    fn sample_panel() -> Panel {
        Panel::new("Time Difference vs. Sample Size")
            .with_x_label("Sample Size")
            .with_y_label("Time Difference (s)")
            .with_x_scale(AxisScale::Log)
            .with_series(
                Series::new("European Option", vec![(1000.0, 0.1), (10000.0, 0.3)])
                    .with_style(SeriesStyle::new(SeriesColor::GREEN)),
            )
    }

    #[test]
    fn test_panel_builder() {
        let panel = sample_panel();
        assert_eq!(panel.x_scale, AxisScale::Log);
        assert_eq!(panel.y_scale, AxisScale::Linear);
        assert!(panel.grid);
        assert_eq!(panel.series("European Option").map(Series::len), Some(2));
        assert!(panel.series("Barrier Option").is_none());
    }

    #[test]
    fn test_figure_validate() {
        assert!(Figure::default().validate().is_err());
        assert!(Figure::new((0, 100))
            .with_panel(sample_panel())
            .validate()
            .is_err());
        assert!(Figure::default()
            .with_panel(Panel::new("empty"))
            .validate()
            .is_err());

        let figure = Figure::default().with_panel(sample_panel());
        assert!(figure.validate().is_ok());
        assert!(figure.panel("Time Difference vs. Sample Size").is_some());
    }

    #[test]
    fn test_empty_series_is_valid() {
        let figure = Figure::default()
            .with_panel(Panel::new("p").with_series(Series::new("Asian Option", vec![])));
        assert!(figure.validate().is_ok());
    }
}
