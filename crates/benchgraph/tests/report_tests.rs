//! End-to-end pipeline tests: run directory in, chart artifacts out.

mod common;

use benchgraph::error::Error;
use benchgraph::metrics::{per_unit_cost, relative_ratio};
use benchgraph::prelude::*;
use benchgraph::utils::{approx_eq, EPSILON};

use common::{write_base_run, write_specialized};

#[test]
fn test_full_run_with_specialized_writes_four_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    write_base_run(dir.path());
    write_specialized(dir.path());

    let scenario = Scenario::load(dir.path(), true).unwrap();
    let artifacts = write_report(&scenario, dir.path(), "sort").unwrap();

    assert_eq!(artifacts.len(), 4);
    for name in ["runtimes.svg", "prop_van.svg", "prop_bes.svg", "per_element.svg"] {
        assert!(dir.path().join(name).exists(), "missing {name}");
    }
}

#[test]
fn test_full_run_without_specialized_writes_three_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    write_base_run(dir.path());
    // bespoke.csv present on disk but excluded by the run mode: the
    // files must not be read and no specialized chart may appear.
    write_specialized(dir.path());

    let scenario = Scenario::load(dir.path(), false).unwrap();
    let artifacts = write_report(&scenario, dir.path(), "sort").unwrap();

    assert_eq!(artifacts.len(), 3);
    assert!(!dir.path().join("prop_bes.svg").exists());
}

#[test]
fn test_excluded_specialized_series_is_never_opened() {
    let dir = tempfile::tempdir().unwrap();
    write_base_run(dir.path());
    // Unparseable bespoke files: a load that opened them would fail.
    std::fs::write(dir.path().join("laptop/bespoke.csv"), "not,numbers,at all").unwrap();
    std::fs::write(dir.path().join("pc/bespoke.csv"), "still not numbers").unwrap();

    let scenario = Scenario::load(dir.path(), false).unwrap();
    assert_eq!(scenario.chart_count(), 3);
}

#[test]
fn test_documented_example_scenario_metrics() {
    let dir = tempfile::tempdir().unwrap();
    write_base_run(dir.path());

    let scenario = Scenario::load(dir.path(), false).unwrap();
    let base = scenario.base();

    let cpu_speedup = relative_ratio(&base.laptop.vanilla, &base.laptop.cpu).unwrap();
    assert_eq!(cpu_speedup, vec![2.0, 4.0, 4.0]);

    let vanilla_cost = per_unit_cost(&base.laptop.vanilla, &base.input_sizes).unwrap();
    for (got, want) in vanilla_cost.iter().zip([2.0, 0.4, 0.08]) {
        assert!(approx_eq(*got, want, EPSILON), "got {got}, want {want}");
    }
}

#[test]
fn test_malformed_input_sizes_fails_before_any_chart() {
    let dir = tempfile::tempdir().unwrap();
    write_base_run(dir.path());
    std::fs::write(dir.path().join("input_sizes.csv"), "1,ten,100").unwrap();

    let err = Scenario::load(dir.path(), false).unwrap_err();
    assert!(matches!(err, Error::DataFormat { .. }));
    assert!(!dir.path().join("runtimes.svg").exists());
}

#[test]
fn test_missing_mandatory_file_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    write_base_run(dir.path());
    std::fs::remove_file(dir.path().join("laptop/gpu.csv")).unwrap();

    let err = Scenario::load(dir.path(), false).unwrap_err();
    match err {
        Error::NotFound { path } => assert!(path.contains("gpu.csv")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_report_overwrites_previous_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    write_base_run(dir.path());
    std::fs::write(dir.path().join("runtimes.svg"), "stale artifact").unwrap();

    let scenario = Scenario::load(dir.path(), false).unwrap();
    write_report(&scenario, dir.path(), "sort").unwrap();

    let content = std::fs::read_to_string(dir.path().join("runtimes.svg")).unwrap();
    assert!(content.contains("<svg"));
}

#[test]
fn test_shape_mismatch_surfaces_during_derivation() {
    let dir = tempfile::tempdir().unwrap();
    write_base_run(dir.path());
    // One extra measurement on the pc cpu series.
    std::fs::write(dir.path().join("pc/cpu.csv"), "0.8,0.8,1.6,2.0").unwrap();

    let scenario = Scenario::load(dir.path(), false).unwrap();
    let err = write_report(&scenario, dir.path(), "sort").unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn test_zero_runtime_entries_do_not_abort_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_base_run(dir.path());
    // A zero measurement artifact in a denominator series.
    std::fs::write(dir.path().join("laptop/cpu.csv"), "0.0,1.0,2.0").unwrap();

    let scenario = Scenario::load(dir.path(), false).unwrap();
    let base = scenario.base();
    let ratio = relative_ratio(&base.laptop.vanilla, &base.laptop.cpu).unwrap();
    assert!(ratio[0].is_infinite());

    let artifacts = write_report(&scenario, dir.path(), "sort").unwrap();
    assert_eq!(artifacts.len(), 3);
}
