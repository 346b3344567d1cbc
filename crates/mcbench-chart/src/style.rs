//! Series and axis styling.

use std::fmt;
use std::str::FromStr;

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Scale of one chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    /// Evenly spaced values.
    #[default]
    Linear,
    /// Base-10 logarithmic spacing. Only positive values can be placed.
    Log,
}

impl AxisScale {
    /// Whether a coordinate can be placed on an axis of this scale.
    pub fn accepts(self, value: f64) -> bool {
        match self {
            AxisScale::Linear => value.is_finite(),
            AxisScale::Log => value.is_finite() && value > 0.0,
        }
    }

    /// Padded `(min, max)` range covering `values`.
    ///
    /// Linear axes get 5 % of the span on each side, log axes a factor of 1.25.
    /// Without values the range is `0..1` (linear) or `1..10` (log). Both ends are
    /// always finite: padding that would overflow is clamped to `±f64::MAX`.
    pub fn range(self, values: impl IntoIterator<Item = f64>) -> (f64, f64) {
        let (lo, hi) = values
            .into_iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        let (lo, hi) = match self {
            _ if lo > hi => return self.empty_range(),
            AxisScale::Linear => {
                let span = hi - lo;
                let pad = if span > 0.0 {
                    span * 0.05
                } else if lo != 0.0 {
                    lo.abs() * 0.05
                } else {
                    0.5
                };
                (lo - pad, hi + pad)
            }
            AxisScale::Log => (lo / 1.25, hi * 1.25),
        };
        (lo.clamp(-f64::MAX, f64::MAX), hi.clamp(-f64::MAX, f64::MAX))
    }

    /// Whether a range can be laid out on an axis of this scale.
    ///
    /// A linear axis needs a span that is itself a finite `f64`.
    pub fn is_drawable(self, (lo, hi): (f64, f64)) -> bool {
        let finite = lo.is_finite() && hi.is_finite() && lo < hi;
        match self {
            AxisScale::Linear => finite && (hi - lo).is_finite(),
            AxisScale::Log => finite && lo > 0.0,
        }
    }

    fn empty_range(self) -> (f64, f64) {
        match self {
            AxisScale::Linear => (0.0, 1.0),
            AxisScale::Log => (1.0, 10.0),
        }
    }
}

impl fmt::Display for AxisScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisScale::Linear => f.write_str("linear"),
            AxisScale::Log => f.write_str("log"),
        }
    }
}

/// How consecutive points of a series are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Dashed line.
    Dashed,
    /// Markers only.
    None,
}

/// Shape drawn at every data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// Filled circle.
    #[default]
    Circle,
    /// Filled square.
    Square,
    /// Filled triangle.
    Triangle,
    /// Diagonal cross.
    Cross,
    /// No marker.
    None,
}

/// An opaque RGB series color.
///
/// Parsed from a name (`"blue"`, `"orange"`, ...) or a `#rrggbb` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeriesColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl SeriesColor {
    /// `blue`
    pub const BLUE: Self = Self::rgb(0x00, 0x00, 0xFF);
    /// `red`
    pub const RED: Self = Self::rgb(0xFF, 0x00, 0x00);
    /// `green`
    pub const GREEN: Self = Self::rgb(0x00, 0x80, 0x00);
    /// `orange`
    pub const ORANGE: Self = Self::rgb(0xFF, 0xA5, 0x00);
    /// `black`
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    /// `purple`
    pub const PURPLE: Self = Self::rgb(0x80, 0x00, 0x80);
    /// `brown`
    pub const BROWN: Self = Self::rgb(0xA5, 0x2A, 0x2A);
    /// `gray`
    pub const GRAY: Self = Self::rgb(0x80, 0x80, 0x80);

    const NAMED: &'static [(&'static str, SeriesColor)] = &[
        ("blue", Self::BLUE),
        ("red", Self::RED),
        ("green", Self::GREEN),
        ("orange", Self::ORANGE),
        ("black", Self::BLACK),
        ("purple", Self::PURPLE),
        ("brown", Self::BROWN),
        ("gray", Self::GRAY),
    ];

    /// Creates a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Name of the color, if it is one of the named ones.
    pub fn name(&self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(_, c)| c == self)
            .map(|(name, _)| *name)
    }

    /// The plotters color.
    pub fn to_rgb(self) -> RGBColor {
        RGBColor(self.r, self.g, self.b)
    }
}

impl FromStr for SeriesColor {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some((_, color)) = Self::NAMED.iter().find(|(name, _)| *name == lower) {
            return Ok(*color);
        }
        if lower == "grey" {
            return Ok(Self::GRAY);
        }

        let hex = lower
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ChartError::UnknownColor(s.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ChartError::UnknownColor(s.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for SeriesColor {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeriesColor> for String {
    fn from(color: SeriesColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for SeriesColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
        }
    }
}

/// Display attributes of one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
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

impl SeriesStyle {
    /// Solid line with circle markers in the given color.
    pub fn new(color: SeriesColor) -> Self {
        Self {
            color,
            line: LineStyle::Solid,
            marker: Marker::Circle,
            line_width: default_line_width(),
        }
    }

    /// Sets the line style.
    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    /// Sets the marker shape.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    /// Sets the line width.
    pub fn with_line_width(mut self, width: u32) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self::new(SeriesColor::BLUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_scale_display() {
        assert_eq!(AxisScale::Linear.to_string(), "linear");
        assert_eq!(AxisScale::Log.to_string(), "log");
    }

    #[test]
    fn test_axis_accepts() {
        assert!(AxisScale::Linear.accepts(-3.0));
        assert!(!AxisScale::Linear.accepts(f64::NAN));
        assert!(AxisScale::Log.accepts(1e-9));
        assert!(!AxisScale::Log.accepts(0.0));
        assert!(!AxisScale::Log.accepts(-10.0));
    }

    #[test]
    fn test_linear_range() {
        assert_eq!(AxisScale::Linear.range([0.0, 10.0]), (-0.5, 10.5));
        let (lo, hi) = AxisScale::Linear.range([4.0]);
        assert!((lo - 3.8).abs() < 1e-12 && (hi - 4.2).abs() < 1e-12);
        assert_eq!(AxisScale::Linear.range([0.0]), (-0.5, 0.5));
        assert_eq!(AxisScale::Linear.range(std::iter::empty()), (0.0, 1.0));
    }

    #[test]
    fn test_range_never_overflows() {
        let (lo, hi) = AxisScale::Linear.range([1e308, -1e308]);
        assert!(lo.is_finite() && hi.is_finite());
        assert_eq!((lo, hi), (-f64::MAX, f64::MAX));
        assert!(!AxisScale::Linear.is_drawable((lo, hi)));

        let (lo, hi) = AxisScale::Log.range([f64::MAX]);
        assert!(lo.is_finite() && hi.is_finite());
        assert!(AxisScale::Log.is_drawable((lo, hi)));
    }

    #[test]
    fn test_is_drawable() {
        assert!(AxisScale::Linear.is_drawable((-0.5, 10.5)));
        assert!(AxisScale::Linear.is_drawable(AxisScale::Linear.range([1e307, -1e307])));
        assert!(!AxisScale::Linear.is_drawable((1.0, 1.0)));
        assert!(!AxisScale::Log.is_drawable((0.0, 10.0)));
    }

    #[test]
    fn test_log_range() {
        assert_eq!(AxisScale::Log.range([10.0, 1000.0]), (8.0, 1250.0));
        assert_eq!(AxisScale::Log.range(std::iter::empty()), (1.0, 10.0));
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!("blue".parse::<SeriesColor>().unwrap(), SeriesColor::BLUE);
        assert_eq!("Orange".parse::<SeriesColor>().unwrap(), SeriesColor::ORANGE);
        assert_eq!("grey".parse::<SeriesColor>().unwrap(), SeriesColor::GRAY);
        assert_eq!(
            "#1f77b4".parse::<SeriesColor>().unwrap(),
            SeriesColor::rgb(0x1f, 0x77, 0xb4)
        );
        assert!(matches!(
            "#12345".parse::<SeriesColor>(),
            Err(ChartError::UnknownColor(_))
        ));
        assert!("teal".parse::<SeriesColor>().is_err());
    }

    #[test]
    fn test_color_display() {
        assert_eq!(SeriesColor::GREEN.to_string(), "green");
        assert_eq!(SeriesColor::rgb(0x1f, 0x77, 0xb4).to_string(), "#1f77b4");
    }

    #[test]
    fn test_style_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            style: SeriesStyle,
        }

        let parsed: Wrapper = toml::from_str(
            r#"
            [style]
            color = "red"
            line = "dashed"
            marker = "square"
            "#,
        )
        .unwrap();
        assert_eq!(
            parsed.style,
            SeriesStyle::new(SeriesColor::RED)
                .with_line(LineStyle::Dashed)
                .with_marker(Marker::Square)
        );
    }
}
