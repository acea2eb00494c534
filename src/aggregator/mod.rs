//! Validation and aggregation of repartition inputs.
//!
//! This module transforms the raw node/file/assignment maps into:
//! - A validity verdict (with the first dangling reference, if any)
//! - Per-node absolute and relative load
//! - Load distribution statistics

pub mod load_builder;
pub mod metrics;
pub mod validator;

// Re-export main types and functions
pub use load_builder::{aggregate, build_node_load};
pub use metrics::{calculate_load_distribution, classify_utilization, LoadDistribution};
pub use validator::{find_violation, validate};
