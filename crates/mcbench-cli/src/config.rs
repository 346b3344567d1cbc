//! Plot configuration.
//!
//! Every field has a default, and the defaults reproduce the standard two-panel
//! benchmark figure. A TOML file only needs the fields it changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mcbench_chart::{AxisScale, LineStyle, Marker, SeriesColor, SeriesStyle, DEFAULT_SIZE};
use mcbench_data::{OPTION_TYPE, SAMPLES, TIME_DIFF, TIME_STEPS};

use crate::error::{CliError, CliResult, ValidationError};

const EUROPEAN: &str = "European Option";
const BARRIER: &str = "Barrier Option";
const TIME_DIFF_LABEL: &str = "Time Difference (s)";

/// Which input file a panel reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableSource {
    /// `results_time.txt`
    Time,
    /// `results_samples.txt`
    Samples,
}

/// One line of a panel: the rows of a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Value of the `Option Type` column to select.
    pub category: String,
    /// Legend label. Defaults to the category.
    #[serde(default)]
    pub label: Option<String>,
    /// Line and marker color.
    pub color: SeriesColor,
    /// How points are joined.
    #[serde(default)]
    pub line: LineStyle,
    /// Shape at each point.
    #[serde(default)]
    pub marker: Marker,
    /// Line width in pixels.
    #[serde(default = "default_line_width")]
    pub line_width: u32,
}

fn default_line_width() -> u32 {
    2
}

impl SeriesConfig {
    fn new(category: &str, color: SeriesColor, line: LineStyle, marker: Marker) -> Self {
        Self {
            category: category.to_string(),
            label: None,
            color,
            line,
            marker,
            line_width: default_line_width(),
        }
    }

    /// The legend label.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.category)
    }

    /// Display attributes for the chart.
    pub fn style(&self) -> SeriesStyle {
        SeriesStyle::new(self.color)
            .with_line(self.line)
            .with_marker(self.marker)
            .with_line_width(self.line_width)
    }
}

/// One chart of the figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Caption above the chart.
    pub title: String,
    /// Input file the series are selected from.
    pub source: TableSource,
    /// Column plotted on the x axis.
    pub x_column: String,
    /// Column plotted on the y axis.
    #[serde(default = "default_y_column")]
    pub y_column: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    #[serde(default = "default_y_label")]
    pub y_label: String,
    /// X axis scale.
    #[serde(default)]
    pub x_scale: AxisScale,
    /// Y axis scale.
    #[serde(default)]
    pub y_scale: AxisScale,
    /// Whether grid lines are drawn.
    #[serde(default = "default_true")]
    pub grid: bool,
    /// Series, drawn in order.
    #[serde(default)]
    pub series: Vec<SeriesConfig>,
}

fn default_y_column() -> String {
    TIME_DIFF.to_string()
}

fn default_y_label() -> String {
    TIME_DIFF_LABEL.to_string()
}

fn default_true() -> bool {
    true
}

impl PanelConfig {
    /// Time difference against the number of time steps, linear axes.
    pub fn time_steps() -> Self {
        Self {
            title: "Time Difference vs. Time Steps".to_string(),
            source: TableSource::Time,
            x_column: TIME_STEPS.to_string(),
            y_column: default_y_column(),
            x_label: "Time Steps".to_string(),
            y_label: default_y_label(),
            x_scale: AxisScale::Linear,
            y_scale: AxisScale::Linear,
            grid: true,
            series: vec![
                SeriesConfig::new(EUROPEAN, SeriesColor::BLUE, LineStyle::Solid, Marker::Circle),
                SeriesConfig::new(BARRIER, SeriesColor::RED, LineStyle::Dashed, Marker::Square),
            ],
        }
    }

    /// Time difference against the sample size, log x axis.
    pub fn sample_size() -> Self {
        Self {
            title: "Time Difference vs. Sample Size".to_string(),
            source: TableSource::Samples,
            x_column: SAMPLES.to_string(),
            y_column: default_y_column(),
            x_label: "Sample Size".to_string(),
            y_label: default_y_label(),
            x_scale: AxisScale::Log,
            y_scale: AxisScale::Linear,
            grid: true,
            series: vec![
                SeriesConfig::new(EUROPEAN, SeriesColor::GREEN, LineStyle::Solid, Marker::Circle),
                SeriesConfig::new(BARRIER, SeriesColor::ORANGE, LineStyle::Dashed, Marker::Square),
            ],
        }
    }
}

/// Plot configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Time-steps results file.
    pub time_file: PathBuf,
    /// Sample-size results file.
    pub samples_file: PathBuf,
    /// Field delimiter of both files.
    pub delimiter: char,
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
    /// Stably sort every series by x before drawing.
    pub sort_x: bool,
    /// Write the SVG here instead of standard output.
    pub output: Option<PathBuf>,
    /// Panels, top to bottom.
    pub panels: Vec<PanelConfig>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            time_file: PathBuf::from("results_time.txt"),
            samples_file: PathBuf::from("results_samples.txt"),
            delimiter: ';',
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
            sort_x: false,
            output: None,
            panels: vec![PanelConfig::time_steps(), PanelConfig::sample_size()],
        }
    }
}

impl PlotConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CliResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| match e {
            CliError::Config(msg) => CliError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Path of the file a panel reads from.
    pub fn source_path(&self, source: TableSource) -> &Path {
        match source {
            TableSource::Time => &self.time_file,
            TableSource::Samples => &self.samples_file,
        }
    }

    /// The delimiter as a byte.
    pub fn delimiter_byte(&self) -> CliResult<u8> {
        let c = self.delimiter;
        if c.is_ascii() && !matches!(c, '"' | '\n' | '\r') {
            Ok(c as u8)
        } else {
            Err(CliError::InvalidDelimiter(c))
        }
    }

    /// Checks the configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.delimiter_byte().is_err() {
            errors.push(ValidationError::new(
                "delimiter",
                format!("{:?} is not a usable delimiter", self.delimiter),
            ));
        }
        if self.width == 0 || self.height == 0 {
            errors.push(ValidationError::new(
                "width/height",
                format!("{}x{} has a zero dimension", self.width, self.height),
            ));
        }
        if self.panels.is_empty() {
            errors.push(ValidationError::new("panels", "at least one panel is required"));
        }

        for (p, panel) in self.panels.iter().enumerate() {
            let field = |name: &str| format!("panels[{p}].{name}");
            if panel.title.is_empty() {
                errors.push(ValidationError::new(field("title"), "cannot be empty"));
            }
            if panel.x_column.is_empty() {
                errors.push(ValidationError::new(field("x_column"), "cannot be empty"));
            }
            if panel.y_column.is_empty() {
                errors.push(ValidationError::new(field("y_column"), "cannot be empty"));
            }
            if panel.series.is_empty() {
                errors.push(ValidationError::new(
                    field("series"),
                    "at least one series is required",
                ));
            }
            for (s, series) in panel.series.iter().enumerate() {
                if series.category.is_empty() {
                    errors.push(ValidationError::new(
                        field(&format!("series[{s}].category")),
                        "cannot be empty",
                    ));
                }
                if series.label().is_empty() {
                    errors.push(ValidationError::new(
                        field(&format!("series[{s}].label")),
                        "cannot be empty",
                    ));
                }
                if series.line_width == 0 && series.line != LineStyle::None {
                    errors.push(ValidationError::new(
                        field(&format!("series[{s}].line_width")),
                        "must be positive for a drawn line",
                    ));
                }
            }
        }

        errors
    }

    /// Validates and returns an error if invalid.
    pub fn validate_or_error(&self) -> CliResult<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::Invalid(errors))
        }
    }
}

/// Columns every panel reading from `source` needs.
pub fn required_columns(config: &PlotConfig, source: TableSource) -> Vec<&str> {
    let mut columns = vec![OPTION_TYPE];
    for panel in config.panels.iter().filter(|p| p.source == source) {
        for column in [panel.x_column.as_str(), panel.y_column.as_str()] {
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
    }
    columns
}
