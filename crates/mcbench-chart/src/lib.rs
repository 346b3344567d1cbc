//! # mcbench Chart
//!
//! Stacked line-chart panels rendered to SVG with plotters.
//!
//! - **Model**: a [`Figure`] holds [`Panel`]s, each with its own axis scales and
//!   styled [`Series`]
//! - **Rendering**: [`render`] draws onto any plotters drawing area, [`render_svg`]
//!   and [`save_svg`] produce an SVG document
//! - **Reporting**: every render returns a [`RenderReport`] with the scales used and
//!   the number of points placed per series
//!
//! ## Example
//!
//! ```rust
//! use mcbench_chart::prelude::*;
//!
//! let figure = Figure::default().with_panel(
//!     Panel::new("Time Difference vs. Sample Size")
//!         .with_x_scale(AxisScale::Log)
//!         .with_series(Series::new("European Option", vec![(1000.0, 0.1), (10000.0, 0.3)])),
//! );
//!
//! let rendered = render_svg(&figure).unwrap();
//! assert!(rendered.svg.contains("Time Difference vs. Sample Size"));
//! assert_eq!(rendered.report.panels[0].x_scale, AxisScale::Log);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod figure;
mod render;
mod style;

pub use error::{ChartError, ChartResult};
pub use figure::{Figure, Panel, Series, DEFAULT_SIZE};
pub use render::{
    render, render_svg, save_svg, PanelReport, RenderReport, RenderedFigure, SeriesReport,
};
pub use style::{AxisScale, LineStyle, Marker, SeriesColor, SeriesStyle};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ChartError, ChartResult};
    pub use crate::figure::{Figure, Panel, Series};
    pub use crate::render::{render_svg, save_svg, RenderReport};
    pub use crate::style::{AxisScale, LineStyle, Marker, SeriesColor, SeriesStyle};
}
