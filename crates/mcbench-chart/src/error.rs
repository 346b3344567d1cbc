//! Chart error types.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Chart operation result type.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised while describing or rendering a figure.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The figure has nothing to draw or an unusable size.
    #[error("invalid figure: {0}")]
    InvalidFigure(String),

    /// A color name or hex code was not recognised.
    #[error("unknown color '{0}': use a name such as 'blue' or a '#rrggbb' code")]
    UnknownColor(String),

    /// The drawing backend failed.
    #[error("drawing error: {0}")]
    Draw(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(err.to_string())
    }
}
