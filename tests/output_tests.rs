use pretty_assertions::assert_eq;
use repartition_studio::commands::build_report;
use repartition_studio::layout::LayoutConfig;
use repartition_studio::model::{Assignment, FileSize, NodeCapacity, Validity};
use repartition_studio::output::{read_report, render_terminal_summary, validate_path, write_report};
use repartition_studio::state::RepartitionStore;
use repartition_studio::utils::config::SCHEMA_VERSION;
use repartition_studio::utils::error::OutputError;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_write_and_read_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("layout.json");

    let store = RepartitionStore::with_seed();
    let report = build_report(&store);
    write_report(&report, &path).unwrap();

    let loaded = read_report(&path).unwrap();

    assert_eq!(loaded.version, SCHEMA_VERSION);
    assert_eq!(loaded.generated_at, report.generated_at);
    assert_eq!(loaded.snapshot.validity, Validity::Valid);
    assert_eq!(
        loaded.snapshot.node_load.keys().collect::<Vec<_>>(),
        report.snapshot.node_load.keys().collect::<Vec<_>>()
    );
    assert_eq!(loaded.layout.bin_index, report.layout.bin_index);
    assert_eq!(loaded.config.bin_count, report.config.bin_count);
}

#[test]
fn test_report_keeps_input_key_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("layout.json");

    let store = RepartitionStore::with_seed();
    write_report(&build_report(&store), &path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let node10 = json.find("\"node10\"").unwrap();
    let node2 = json.find("\"node2\"").unwrap();
    let node1 = json.find("\"node1\"").unwrap();
    assert!(node1 < node2 && node2 < node10);
}

#[test]
fn test_write_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("layout.json");

    write_report(&build_report(&RepartitionStore::with_seed()), &path).unwrap();

    assert!(path.is_file());
}

#[test]
fn test_validate_path_rejects_empty_and_directories() {
    let temp_dir = TempDir::new().unwrap();

    assert!(matches!(
        validate_path(Path::new("")),
        Err(OutputError::InvalidPath(_))
    ));
    assert!(matches!(
        validate_path(temp_dir.path()),
        Err(OutputError::InvalidPath(_))
    ));
    assert!(validate_path(&temp_dir.path().join("report.json")).is_ok());
}

#[test]
fn test_read_missing_report_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = read_report(temp_dir.path().join("missing.json"));

    assert!(matches!(result, Err(OutputError::WriteFailed(_))));
}

#[test]
fn test_summary_lists_bins_and_status() {
    colored::control::set_override(false);
    let store = RepartitionStore::with_config(
        [("n1", 100.0), ("n2", 50.0)].into_iter().collect(),
        [("f1", 30.0), ("f2", 40.0)].into_iter().collect(),
        [("f1", "n2".to_string()), ("f2", "n2".to_string())]
            .into_iter()
            .collect(),
        LayoutConfig::new().with_bin_count(2),
    )
    .unwrap();

    let summary = render_terminal_summary(&build_report(&store));

    assert!(summary.contains("Repartition Summary"));
    assert!(summary.contains("140.0%"));
    assert!(summary.contains("Idle Nodes: n1"));
    assert!(summary.contains("[1] 35 -> 70"));
    assert!(summary.contains("OVER CAPACITY (n2)"));
}

#[test]
fn test_summary_reports_invalid_repartition() {
    colored::control::set_override(false);
    let nodes: NodeCapacity = [("n1", 100.0)].into_iter().collect();
    let files: FileSize = [("f1", 30.0)].into_iter().collect();
    let assignment: Assignment = [("f1", "n3".to_string())].into_iter().collect();

    let summary = render_terminal_summary(&build_report(&RepartitionStore::new(
        nodes, files, assignment,
    )));

    assert!(summary.contains("INVALID REPARTITION"));
    assert!(summary.contains("unknown node 'n3'"));
}

#[test]
fn test_report_with_zero_capacity_node_reads_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("layout.json");

    let nodes: NodeCapacity = [("n1", 0.0)].into_iter().collect();
    let files: FileSize = [("f1", 5.0)].into_iter().collect();
    let assignment: Assignment = [("f1", "n1".to_string())].into_iter().collect();
    let store = RepartitionStore::with_config(
        nodes,
        files,
        assignment,
        LayoutConfig::new().with_show_files(true),
    )
    .unwrap();
    assert!(store.snapshot().is_valid());

    write_report(&build_report(&store), &path).unwrap();
    let loaded = read_report(&path).unwrap();

    assert_eq!(loaded.snapshot, *store.snapshot());
    assert_eq!(
        loaded.snapshot.node_load.get("n1").unwrap().relative_load,
        f64::INFINITY
    );
    assert_eq!(loaded.layout.file_segments[0].segments[0].x1, f64::INFINITY);
}
