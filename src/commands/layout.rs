//! Layout command implementation.
//!
//! The layout command:
//! 1. Resolves the layout config (defaults, TOML file, CLI flags)
//! 2. Loads node, file and assignment inputs
//! 3. Aggregates per-node load
//! 4. Computes the binned stack layout
//! 5. Calculates load metrics
//! 6. Writes the JSON report and/or prints a summary

use crate::aggregator::calculate_load_distribution;
use crate::commands::models::LayoutArgs;
use crate::input::load_inputs;
use crate::layout::{load_layout_config, LayoutConfig};
use crate::model::LayoutReport;
use crate::output::{render_terminal_summary, write_report};
use crate::state::RepartitionStore;
use crate::utils::config::{MAX_BIN_COUNT, SCHEMA_VERSION};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Execute the layout command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Layout command arguments
///
/// # Returns
/// Ok once the report is written or printed. An invalid repartition is
/// reported in the output, not returned as an error.
///
/// # Errors
/// * Config file read/parse failures
/// * Input read/parse failures
/// * File write errors
///
/// # Example
/// ```ignore
/// let args = LayoutArgs {
///     bin_count: Some(4),
///     print_summary: true,
///     ..Default::default()
/// };
///
/// execute_layout(args)?;
/// ```
pub fn execute_layout(args: LayoutArgs) -> Result<()> {
    let start_time = Instant::now();

    let config = resolve_config(&args)?;
    debug!("Layout config: {:?}", config);

    info!("Loading repartition inputs...");
    let (nodes, files, assignment) = load_inputs(
        args.nodes.as_deref(),
        args.files.as_deref(),
        args.assignment.as_deref(),
    )
    .context("Failed to load repartition inputs")?;

    info!("Computing snapshot and layout...");
    let store = RepartitionStore::with_config(nodes, files, assignment, config)
        .context("Invalid layout configuration")?;

    if !store.snapshot().is_valid() {
        warn!("Repartition is invalid, the layout will be empty");
    }

    let report = build_report(&store);
    info!("Load distribution: {}", report.distribution.summary());

    if let Some(path) = &args.output {
        write_report(&report, path).context("Failed to write layout report")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_summary {
        println!("{}", render_terminal_summary(&report));
    } else if args.output.is_none() {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    }

    info!(
        "Layout completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Assemble the report for the current store state
///
/// **Public** - also used by tests and library callers
pub fn build_report(store: &RepartitionStore) -> LayoutReport {
    let config = store.config();
    LayoutReport {
        version: SCHEMA_VERSION.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        config: config.clone(),
        snapshot: store.snapshot().clone(),
        layout: store.layout().clone(),
        distribution: calculate_load_distribution(
            store.snapshot(),
            &config.utilization_thresholds,
        ),
    }
}

/// Merge defaults, the optional TOML file and CLI overrides
///
/// **Public** - CLI flags win over the config file
pub fn resolve_config(args: &LayoutArgs) -> Result<LayoutConfig> {
    let mut config = match &args.config {
        Some(path) => load_layout_config(path)
            .with_context(|| format!("Failed to load layout config {}", path.display()))?,
        None => LayoutConfig::default(),
    };

    if let Some(bin_count) = args.bin_count {
        config = config.with_bin_count(bin_count);
    }
    if let Some(scaling_mode) = args.scaling_mode {
        config = config.with_scaling_mode(scaling_mode);
    }
    if args.scale_nodes {
        config = config.with_scale_nodes(true);
    }
    if args.show_files {
        config = config.with_show_files(true);
    }
    if args.reference_domain.is_some() {
        config = config.with_reference_domain(args.reference_domain);
    }

    config.validate().context("Invalid layout configuration")?;
    Ok(config)
}

/// Validate layout arguments before execution
///
/// **Public** - called by main.rs before execute_layout
pub fn validate_args(args: &LayoutArgs) -> Result<()> {
    if let Some(bin_count) = args.bin_count {
        if bin_count == 0 {
            anyhow::bail!("bins must be greater than 0");
        }

        if bin_count > MAX_BIN_COUNT {
            anyhow::bail!("bins is too large (max {})", MAX_BIN_COUNT);
        }
    }

    if let Some(domain) = args.reference_domain {
        if !domain.is_finite() || domain <= 0.0 {
            anyhow::bail!("domain must be a positive number");
        }
    }

    let inputs: [(&str, &Option<PathBuf>); 4] = [
        ("nodes", &args.nodes),
        ("files", &args.files),
        ("assignment", &args.assignment),
        ("config", &args.config),
    ];
    for (name, path) in inputs {
        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("{} file not found: {}", name, path.display());
            }
        }
    }

    Ok(())
}
