//! Configuration and constants for the CLI and the layout engine.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Number of bins used when neither a config file nor the CLI sets one
pub const DEFAULT_BIN_COUNT: usize = 5;

/// Upper bound on the bin count accepted by config validation
pub const MAX_BIN_COUNT: usize = 1000;

// Relative-load thresholds splitting nodes into utilization bands.
// 6 bands: <30%, 30-45%, 45-51%, 51-95%, 95-100%, over capacity
pub const DEFAULT_UTILIZATION_THRESHOLDS: &[f64] = &[0.3, 0.45, 0.51, 0.95, 1.0];

/// Default file names used by `seed --output-dir`
pub const NODES_FILE_NAME: &str = "nodes.json";
pub const FILES_FILE_NAME: &str = "files.json";
pub const ASSIGNMENT_FILE_NAME: &str = "assignment.json";
