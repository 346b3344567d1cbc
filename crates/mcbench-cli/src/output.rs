//! Output utilities.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use mcbench_chart::{render_svg, save_svg, Figure, RenderReport};

/// Renders the figure to `output`, or to standard output when no path is given.
///
/// Status lines are printed only when writing to a file, so standard output holds
/// nothing but the SVG otherwise.
pub fn write_figure(figure: &Figure, output: Option<&Path>, quiet: bool) -> Result<RenderReport> {
    let report = match output {
        Some(path) => {
            let report = save_svg(figure, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !quiet {
                print_success(&format!("Wrote {}", path.display()));
                print_summary(&report);
            }
            report
        }
        None => {
            let rendered = render_svg(figure).context("Failed to render figure")?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.svg.as_bytes())?;
            stdout.flush()?;
            rendered.report
        }
    };

    info!(
        panels = report.panels.len(),
        points = report.panels.iter().map(|p| p.points_drawn()).sum::<usize>(),
        "Rendered figure"
    );
    Ok(report)
}

/// Prints one line per panel.
fn print_summary(report: &RenderReport) {
    for panel in &report.panels {
        let series = panel
            .series
            .iter()
            .map(|s| format!("{} ({})", s.label, s.points_drawn))
            .collect::<Vec<_>>()
            .join(", ");
        print_info(&format!(
            "{} [x: {}, y: {}]: {}",
            panel.title.bold(),
            panel.x_scale,
            panel.y_scale,
            series
        ));
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcbench_chart::{Panel, Series};

    #[test]
    fn test_write_figure_to_file() {
        let figure = Figure::default()
            .with_panel(Panel::new("p").with_series(Series::new("s", vec![(1.0, 2.0)])));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let report = write_figure(&figure, Some(&path), true).unwrap();

        assert_eq!(report.panels[0].points_drawn(), 1);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_svg(&figure).unwrap().svg);
    }

    #[test]
    fn test_write_figure_to_missing_directory_fails() {
        let figure = Figure::default()
            .with_panel(Panel::new("p").with_series(Series::new("s", vec![])));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.svg");
        let err = write_figure(&figure, Some(&path), true).unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
