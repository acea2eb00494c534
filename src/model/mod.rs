//! Data model shared by the aggregator, the layout engine and the outputs.
//!
//! This module defines:
//! - The ordered input mappings (capacities, sizes, assignment)
//! - The derived per-node load and system snapshot
//! - The JSON report schema
//! - The default seed data

pub mod ordered_map;
pub mod schema;
pub mod seed;

// Re-export main types
pub use ordered_map::OrderedMap;
pub use schema::{
    Assignment, FileSize, LayoutReport, NodeCapacity, NodeLoad, SystemSnapshot, Validity,
    Violation,
};
pub use seed::{seed_assignment, seed_files, seed_nodes};
