//! End-to-end tests for the `mcbench-plot` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str = "Option Type;Time Steps;Samples;Error;Time(non constant) - Time(Constant) in (s)";

const TIME_ROWS: &str = "European Option;10;10000;0.01;0.5\n\
                         Barrier Option;10;10000;0.02;0.8\n\
                         European Option;20;10000;0.01;0.7\n";

const SAMPLE_ROWS: &str = "European Option;100;1000;0.05;0.1\n\
                           Barrier Option;100;1000;0.06;0.2\n\
                           European Option;100;100000;0.005;0.4\n";

fn write(dir: &Path, name: &str, rows: &str) {
    std::fs::write(dir.join(name), format!("{HEADER}\n{rows}")).unwrap();
}

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "results_time.txt", TIME_ROWS);
    write(dir.path(), "results_samples.txt", SAMPLE_ROWS);
    dir
}

fn plot(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mcbench-plot").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_run_writes_svg_to_stdout() {
    let dir = workspace();
    plot(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stdout(predicate::str::contains("Time Difference vs. Time Steps"))
        .stdout(predicate::str::contains("Time Difference vs. Sample Size"))
        .stdout(predicate::str::contains("Barrier Option"));

    // nothing is persisted
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn test_output_flag_writes_file() {
    let dir = workspace();
    plot(dir.path())
        .args(["--output", "figure.svg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("figure.svg"))
        .stdout(predicate::str::contains("<svg").not());

    let svg = std::fs::read_to_string(dir.path().join("figure.svg")).unwrap();
    assert!(svg.contains("Sample Size"));
}

#[test]
fn test_missing_file_fails() {
    let dir = workspace();
    std::fs::remove_file(dir.path().join("results_samples.txt")).unwrap();

    plot(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("input file not found"))
        .stderr(predicate::str::contains("results_samples.txt"));
}

#[test]
fn test_malformed_row_fails() {
    let dir = workspace();
    write(dir.path(), "results_time.txt", "European Option;abc;10000;0.01;0.5\n");

    plot(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed row at line 2"));
}

#[test]
fn test_unknown_category_warns_and_succeeds() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("plot.toml"),
        r#"
        [[panels]]
        title = "Asian"
        source = "samples"
        x_column = "Samples"
        x_label = "Sample Size"
        x_scale = "log"

        [[panels.series]]
        category = "Asian Option"
        color = "purple"
        "#,
    )
    .unwrap();

    plot(dir.path())
        .args(["--config", "plot.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Asian Option"))
        .stderr(predicate::str::contains("No rows for category"))
        .stderr(predicate::str::contains("Barrier Option"));
}

#[test]
fn test_custom_delimiter_and_paths() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("time.csv"),
        format!("{}\n{}", HEADER.replace(';', ","), TIME_ROWS.replace(';', ",")),
    )
    .unwrap();
    std::fs::write(
        dir.path().join("samples.csv"),
        format!("{}\n{}", HEADER.replace(';', ","), SAMPLE_ROWS.replace(';', ",")),
    )
    .unwrap();

    plot(dir.path())
        .args(["--time-file", "time.csv", "--samples-file", "samples.csv", "-d", ",", "--sort-x"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = workspace();
    std::fs::write(dir.path().join("plot.toml"), "width = 0\npanels = []\n").unwrap();

    plot(dir.path())
        .args(["--config", "plot.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"))
        .stderr(predicate::str::contains("at least one panel is required"));
}

#[test]
fn test_quiet_silences_logs() {
    let dir = workspace();
    plot(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_help() {
    Command::cargo_bin("mcbench-plot")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--sort-x"));
}
