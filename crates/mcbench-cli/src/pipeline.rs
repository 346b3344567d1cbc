//! Load, filter and assemble the figure.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use mcbench_chart::{Figure, Panel, Series};
use mcbench_data::{
    categories, select_category, ColumnType, Schema, Table, TableLoader, OPTION_TYPE,
};

use crate::config::{required_columns, PlotConfig, TableSource};

/// The loaded input tables. A source no panel reads from is not loaded.
#[derive(Debug, Default)]
pub struct Tables {
    time: Option<Table>,
    samples: Option<Table>,
}

impl Tables {
    /// Table for a source, if it was loaded.
    pub fn get(&self, source: TableSource) -> Option<&Table> {
        match source {
            TableSource::Time => self.time.as_ref(),
            TableSource::Samples => self.samples.as_ref(),
        }
    }

    fn insert(&mut self, source: TableSource, table: Table) {
        match source {
            TableSource::Time => self.time = Some(table),
            TableSource::Samples => self.samples = Some(table),
        }
    }
}

/// Schema for a source: the benchmark column types, with every column a panel
/// plots from that source required.
pub fn schema_for(config: &PlotConfig, source: TableSource) -> Schema {
    required_columns(config, source)
        .into_iter()
        .fold(Schema::benchmark(), |schema, column| {
            let kind = schema.get(column).map_or(ColumnType::Float, |c| c.kind);
            schema.require(column, kind)
        })
}

/// Loads every source some panel reads from.
pub fn load_tables(config: &PlotConfig) -> Result<Tables> {
    let delimiter = config.delimiter_byte()?;
    let mut tables = Tables::default();

    for source in [TableSource::Time, TableSource::Samples] {
        if !config.panels.iter().any(|p| p.source == source) {
            continue;
        }
        let path = config.source_path(source);
        let table = TableLoader::new(delimiter)
            .with_schema(schema_for(config, source))
            .load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        info!(path = %path.display(), rows = table.len(), "Loaded results");
        tables.insert(source, table);
    }

    Ok(tables)
}

/// Stable sort by x. Points with equal x keep their relative order.
pub fn sort_by_x(points: &mut [(f64, f64)]) {
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
}

/// Turns the configured panels into a figure.
///
/// Each series is the panel table filtered to the series category, projected to
/// `(x_column, y_column)` in file order. A category with no rows yields an empty
/// series and a warning.
pub fn build_figure(config: &PlotConfig, tables: &Tables) -> Result<Figure> {
    let mut figure = Figure::new((config.width, config.height));

    for panel_config in &config.panels {
        let table = tables
            .get(panel_config.source)
            .with_context(|| format!("No table loaded for panel '{}'", panel_config.title))?;

        let mut panel = Panel::new(&panel_config.title)
            .with_x_label(&panel_config.x_label)
            .with_y_label(&panel_config.y_label)
            .with_x_scale(panel_config.x_scale)
            .with_y_scale(panel_config.y_scale)
            .with_grid(panel_config.grid);

        for series_config in &panel_config.series {
            let selection = select_category(table, OPTION_TYPE, &series_config.category)?;
            if selection.is_empty() {
                let present = categories(table, OPTION_TYPE)?;
                warn!(
                    panel = %panel_config.title,
                    category = %series_config.category,
                    present = ?present,
                    "No rows for category, the series will be empty"
                );
            }

            let mut points = selection
                .view(table)
                .points(&panel_config.x_column, &panel_config.y_column)
                .with_context(|| {
                    format!(
                        "Panel '{}', series '{}'",
                        panel_config.title,
                        series_config.label()
                    )
                })?;
            if config.sort_x {
                sort_by_x(&mut points);
            }

            debug!(
                panel = %panel_config.title,
                series = %series_config.label(),
                points = points.len(),
                "Built series"
            );
            let series = Series::new(series_config.label(), points).with_style(series_config.style());
            panel = panel.with_series(series);
        }

        figure = figure.with_panel(panel);
    }

    Ok(figure)
}

/// Validates the configuration, loads the inputs and assembles the figure.
pub fn prepare_figure(config: &PlotConfig) -> Result<Figure> {
    config.validate_or_error()?;
    let tables = load_tables(config)?;
    build_figure(config, &tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcbench_chart::{render_svg, AxisScale};
    use mcbench_data::DataError;
    use std::path::Path;

    const HEADER: &str = "Option Type;Time Steps;Samples;Error;Time(non constant) - Time(Constant) in (s)";

    fn write_inputs(dir: &Path, time_rows: &[&str], sample_rows: &[&str]) -> PlotConfig {
        let time = dir.join("results_time.txt");
        let samples = dir.join("results_samples.txt");
        std::fs::write(&time, format!("{HEADER}\n{}\n", time_rows.join("\n"))).unwrap();
        std::fs::write(&samples, format!("{HEADER}\n{}\n", sample_rows.join("\n"))).unwrap();
        PlotConfig {
            time_file: time,
            samples_file: samples,
            ..PlotConfig::default()
        }
    }

    fn standard_config(dir: &Path) -> PlotConfig {
        write_inputs(
            dir,
            &[
                "European Option;20;10000;0.01;0.7",
                "Barrier Option;10;10000;0.02;0.8",
                "European Option;10;10000;0.01;0.5",
            ],
            &[
                "European Option;100;1000;0.05;0.1",
                "European Option;100;100000;0.005;0.4",
                "Barrier Option;100;1000;0.06;0.2",
            ],
        )
    }

    #[test]
    fn test_build_default_figure() {
        let dir = tempfile::tempdir().unwrap();
        let config = standard_config(dir.path());
        let tables = load_tables(&config).unwrap();
        let figure = build_figure(&config, &tables).unwrap();

        assert_eq!(figure.size, (1200, 1200));
        assert_eq!(figure.panels.len(), 2);

        let steps = &figure.panels[0];
        assert_eq!(
            steps.series("European Option").unwrap().points,
            vec![(20.0, 0.7), (10.0, 0.5)]
        );
        assert_eq!(steps.series("Barrier Option").unwrap().points, vec![(10.0, 0.8)]);

        let samples = &figure.panels[1];
        assert_eq!(samples.x_scale, AxisScale::Log);
        assert_eq!(
            samples.series("European Option").unwrap().points,
            vec![(1000.0, 0.1), (100000.0, 0.4)]
        );
    }

    #[test]
    fn test_sort_x_is_opt_in() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = standard_config(dir.path());
        config.sort_x = true;
        let tables = load_tables(&config).unwrap();
        let figure = build_figure(&config, &tables).unwrap();

        assert_eq!(
            figure.panels[0].series("European Option").unwrap().points,
            vec![(10.0, 0.5), (20.0, 0.7)]
        );
    }

    #[test]
    fn test_sort_by_x_is_stable() {
        let mut points = vec![(2.0, 1.0), (1.0, 2.0), (2.0, 3.0), (1.0, 4.0)];
        sort_by_x(&mut points);
        assert_eq!(points, vec![(1.0, 2.0), (1.0, 4.0), (2.0, 1.0), (2.0, 3.0)]);
    }

    #[test]
    fn test_unknown_category_renders_empty_series() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = standard_config(dir.path());
        config.panels[1].series[1].category = "Asian Option".to_string();

        let figure = prepare_figure(&config).unwrap();
        let rendered = render_svg(&figure).unwrap();
        let panel = rendered
            .report
            .panel("Time Difference vs. Sample Size")
            .unwrap();
        assert_eq!(panel.series("Asian Option").unwrap().points_drawn, 0);
        assert_eq!(panel.x_scale.to_string(), "log");
        assert_eq!(
            rendered
                .report
                .panel("Time Difference vs. Time Steps")
                .unwrap()
                .x_scale
                .to_string(),
            "linear"
        );
    }

    #[test]
    fn test_malformed_row_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_inputs(
            dir.path(),
            &["European Option;abc;10000;0.01;0.5"],
            &["European Option;100;1000;0.05;0.1"],
        );

        let err = prepare_figure(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::MalformedRow { line: 2, .. })
        ));
    }

    #[test]
    fn test_missing_file_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = standard_config(dir.path());
        config.samples_file = dir.path().join("absent.txt");

        let err = prepare_figure(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::MissingFile { .. })
        ));
        assert!(format!("{err:#}").contains("absent.txt"));
    }

    #[test]
    fn test_unused_source_is_not_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = standard_config(dir.path());
        config.samples_file = dir.path().join("absent.txt");
        config.panels.truncate(1);

        let tables = load_tables(&config).unwrap();
        assert!(tables.get(TableSource::Time).is_some());
        assert!(tables.get(TableSource::Samples).is_none());
    }

    #[test]
    fn test_schema_requires_plotted_columns() {
        let config = PlotConfig::default();
        let schema = schema_for(&config, TableSource::Samples);
        let required: Vec<&str> = schema.required().collect();
        assert!(required.contains(&OPTION_TYPE));
        assert!(required.contains(&"Samples"));
        assert!(!required.contains(&"Time Steps"));
        assert_eq!(schema.get("Samples").unwrap().kind, ColumnType::Integer);
    }
}
