use pretty_assertions::assert_eq;
use repartition_studio::commands::{
    execute_check, execute_layout, execute_seed, resolve_config, validate_args, CheckArgs,
    LayoutArgs,
};
use repartition_studio::input::load_inputs;
use repartition_studio::layout::ScalingMode;
use repartition_studio::model::{seed_assignment, seed_files, seed_nodes};
use repartition_studio::output::read_report;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_validate_args_rejects_bad_values() {
    assert!(validate_args(&LayoutArgs::default()).is_ok());

    let zero_bins = LayoutArgs {
        bin_count: Some(0),
        ..Default::default()
    };
    assert!(validate_args(&zero_bins).is_err());

    let bad_domain = LayoutArgs {
        reference_domain: Some(-1.0),
        ..Default::default()
    };
    assert!(validate_args(&bad_domain).is_err());

    let missing_input = LayoutArgs {
        nodes: Some("does/not/exist.json".into()),
        ..Default::default()
    };
    assert!(validate_args(&missing_input).is_err());
}

#[test]
fn test_resolve_config_flags_override_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("layout.toml");
    fs::write(
        &config_path,
        "bin_count = 8\nscaling_mode = \"ABSOLUTE\"\nscale_nodes = true\n",
    )
    .unwrap();

    let from_file = resolve_config(&LayoutArgs {
        config: Some(config_path.clone()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(from_file.bin_count, 8);
    assert_eq!(from_file.scaling_mode, ScalingMode::Absolute);
    assert!(from_file.scale_nodes);
    assert!(!from_file.show_files);

    let overridden = resolve_config(&LayoutArgs {
        config: Some(config_path),
        bin_count: Some(3),
        scaling_mode: Some(ScalingMode::Relative),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(overridden.bin_count, 3);
    assert_eq!(overridden.scaling_mode, ScalingMode::Relative);
    assert!(overridden.scale_nodes);
}

#[test]
fn test_resolve_config_rejects_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("layout.toml");
    fs::write(&config_path, "bin_count = 0\n").unwrap();

    let result = resolve_config(&LayoutArgs {
        config: Some(config_path),
        ..Default::default()
    });

    assert!(result.is_err());
}

#[test]
fn test_seed_round_trips_through_files() {
    let temp_dir = TempDir::new().unwrap();
    execute_seed(Some(temp_dir.path().to_path_buf())).unwrap();

    let nodes_path = temp_dir.path().join("nodes.json");
    let files_path = temp_dir.path().join("files.json");
    let assignment_path = temp_dir.path().join("assignment.json");
    let (nodes, files, assignment) = load_inputs(
        Some(nodes_path.as_path()),
        Some(files_path.as_path()),
        Some(assignment_path.as_path()),
    )
    .unwrap();

    assert_eq!(nodes, seed_nodes());
    assert_eq!(files, seed_files());
    assert_eq!(assignment, seed_assignment());
}

#[test]
fn test_check_fails_on_invalid_repartition() {
    let temp_dir = TempDir::new().unwrap();
    let assignment_path = temp_dir.path().join("assignment.json");

    assert!(execute_check(CheckArgs::default()).is_ok());

    fs::write(&assignment_path, r#"{"file1": "node99"}"#).unwrap();
    let result = execute_check(CheckArgs {
        assignment: Some(assignment_path),
        ..Default::default()
    });
    assert!(result.is_err());
}

#[test]
fn test_layout_writes_report() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out").join("layout.json");

    execute_layout(LayoutArgs {
        bin_count: Some(4),
        show_files: true,
        output: Some(output.clone()),
        ..Default::default()
    })
    .unwrap();

    let report = read_report(&output).unwrap();
    assert_eq!(report.layout.bin_count, 4);
    assert_eq!(report.layout.segments.len(), 10);
    assert_eq!(report.layout.file_segments.len(), 10);
}

#[test]
fn test_layout_with_invalid_inputs_still_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let assignment_path = temp_dir.path().join("assignment.json");
    let output = temp_dir.path().join("layout.json");
    fs::write(&assignment_path, r#"{"ghost": "node1"}"#).unwrap();

    execute_layout(LayoutArgs {
        assignment: Some(assignment_path),
        output: Some(output.clone()),
        ..Default::default()
    })
    .unwrap();

    let report = read_report(&output).unwrap();
    assert!(!report.snapshot.is_valid());
    assert!(report.layout.segments.is_empty());
}
