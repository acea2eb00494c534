use crate::layout::ScalingMode;
use std::path::PathBuf;

/// Arguments for the layout command
///
/// **Public** - used by main.rs to construct from CLI args
///
/// Every `Option` left as `None` falls back to the config file, then to
/// the built-in defaults. Missing input paths fall back to the seed data.
#[derive(Debug, Clone, Default)]
pub struct LayoutArgs {
    /// Node capacities JSON
    pub nodes: Option<PathBuf>,

    /// File sizes JSON
    pub files: Option<PathBuf>,

    /// Assignment JSON
    pub assignment: Option<PathBuf>,

    /// Layout config TOML
    pub config: Option<PathBuf>,

    /// Number of bins
    pub bin_count: Option<usize>,

    /// Scaling mode for stack heights
    pub scaling_mode: Option<ScalingMode>,

    /// Stack nodes by load instead of one unit each
    pub scale_nodes: bool,

    /// Include per-file sub-segments
    pub show_files: bool,

    /// Fixed upper bound for binning
    pub reference_domain: Option<f64>,

    /// Output path for the JSON report (optional)
    pub output: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

/// Arguments for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    pub nodes: Option<PathBuf>,
    pub files: Option<PathBuf>,
    pub assignment: Option<PathBuf>,
}
