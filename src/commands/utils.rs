use crate::aggregator::find_violation;
use crate::commands::models::CheckArgs;
use crate::input::load_inputs;
use crate::model::{seed_assignment, seed_files, seed_nodes};
use crate::output::write_json;
use crate::utils::config::{ASSIGNMENT_FILE_NAME, FILES_FILE_NAME, NODES_FILE_NAME, SCHEMA_VERSION};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Check that an assignment only references known files and nodes
///
/// Fails when the repartition is invalid so scripts can rely on the exit code.
pub fn execute_check(args: CheckArgs) -> Result<()> {
    let (nodes, files, assignment) = load_inputs(
        args.nodes.as_deref(),
        args.files.as_deref(),
        args.assignment.as_deref(),
    )
    .context("Failed to load repartition inputs")?;

    println!(
        "Checking repartition: {} nodes, {} files, {} assignments",
        nodes.len(),
        files.len(),
        assignment.len()
    );

    match find_violation(&nodes, &files, &assignment) {
        None => {
            println!("✓ Valid repartition");
            Ok(())
        }
        Some(violation) => {
            println!("✗ Invalid repartition: {}", violation);
            Err(anyhow::anyhow!("Invalid repartition"))
        }
    }
}

/// Print the seed inputs, or write them as JSON files into a directory
pub fn execute_seed(output_dir: Option<PathBuf>) -> Result<()> {
    match output_dir {
        Some(dir) => {
            write_json(&seed_nodes(), dir.join(NODES_FILE_NAME))
                .context("Failed to write seed nodes")?;
            write_json(&seed_files(), dir.join(FILES_FILE_NAME))
                .context("Failed to write seed files")?;
            write_json(&seed_assignment(), dir.join(ASSIGNMENT_FILE_NAME))
                .context("Failed to write seed assignment")?;
            println!("Seed inputs written to {}", dir.display());
        }
        None => {
            println!("# {}", NODES_FILE_NAME);
            println!("{}", serde_json::to_string_pretty(&seed_nodes())?);
            println!("# {}", FILES_FILE_NAME);
            println!("{}", serde_json::to_string_pretty(&seed_files())?);
            println!("# {}", ASSIGNMENT_FILE_NAME);
            println!("{}", serde_json::to_string_pretty(&seed_assignment())?);
        }
    }
    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Repartition Studio Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string       - RFC 3339 timestamp");
        println!("  config: object             - Layout settings used");
        println!("  snapshot: object           - Validated inputs and per-node load");
        println!("    validity: string         - VALID or INVALID");
        println!("    violation: object?       - First dangling reference (if invalid)");
        println!("    node_load: object        - node id -> load");
        println!("      files: array           - File ids in assignment order");
        println!("      absolute_load: number  - Sum of file sizes");
        println!("      relative_load: number  - absolute_load / capacity");
        println!("  layout: object             - Binned stack layout");
        println!("    legend: array            - Bin intervals [low, high)");
        println!("    segments: array          - node_id, bin, y0, y1");
        println!("    file_segments: array?    - Per-file x0, x1 (if requested)");
        println!("    bin_index: object        - bin -> node ids");
        println!("  distribution: object       - Load statistics");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Repartition Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Load validation and chart layout for file-to-node repartitions.");
}
