//! Repartition Studio CLI
//!
//! Checks file-to-node repartitions and computes their load and
//! binned chart layout.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use repartition_studio::commands::{
    display_schema, display_version, execute_check, execute_layout, execute_seed, validate_args,
    CheckArgs, LayoutArgs,
};
use repartition_studio::layout::ScalingMode;

/// Repartition Studio - load validation and chart layout for storage nodes
#[derive(Parser, Debug)]
#[command(name = "repartition")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute per-node load and the binned stack layout
    Layout {
        /// Node capacities JSON (defaults to seed data)
        #[arg(short, long)]
        nodes: Option<PathBuf>,

        /// File sizes JSON (defaults to seed data)
        #[arg(short, long)]
        files: Option<PathBuf>,

        /// Assignment JSON (defaults to seed data)
        #[arg(short, long)]
        assignment: Option<PathBuf>,

        /// Layout config TOML
        #[arg(short, long, env = "REPARTITION_CONFIG")]
        config: Option<PathBuf>,

        /// Number of bins
        #[arg(short, long)]
        bins: Option<usize>,

        /// Load used for stack heights
        #[arg(short, long, value_enum)]
        scaling: Option<ScalingMode>,

        /// Stack nodes by load instead of one unit per node
        #[arg(long)]
        scale_nodes: bool,

        /// Include per-file sub-segments
        #[arg(long)]
        show_files: bool,

        /// Fixed upper bound of the binned load domain
        #[arg(long)]
        domain: Option<f64>,

        /// Output path for the JSON report (prints JSON when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Check that an assignment only references known files and nodes
    Check {
        /// Node capacities JSON (defaults to seed data)
        #[arg(short, long)]
        nodes: Option<PathBuf>,

        /// File sizes JSON (defaults to seed data)
        #[arg(short, long)]
        files: Option<PathBuf>,

        /// Assignment JSON (defaults to seed data)
        #[arg(short, long)]
        assignment: Option<PathBuf>,
    },

    /// Print the seed inputs, or write them into a directory
    Seed {
        /// Directory receiving nodes.json, files.json and assignment.json
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Layout {
            nodes,
            files,
            assignment,
            config,
            bins,
            scaling,
            scale_nodes,
            show_files,
            domain,
            output,
            summary,
        } => {
            let args = LayoutArgs {
                nodes,
                files,
                assignment,
                config,
                bin_count: bins,
                scaling_mode: scaling,
                scale_nodes,
                show_files,
                reference_domain: domain,
                output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_layout(args)?;
        }

        Commands::Check {
            nodes,
            files,
            assignment,
        } => {
            execute_check(CheckArgs {
                nodes,
                files,
                assignment,
            })?;
        }

        Commands::Seed { output_dir } => {
            execute_seed(output_dir)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
