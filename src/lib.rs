//! Repartition Studio
//!
//! Validates how a set of files is spread over a set of storage nodes,
//! computes per-node load, and lays the nodes out as a binned, stacked
//! bar chart that any renderer can draw.
//!
//! ## Getting Started
//!
//! ```ignore
//! use repartition_studio::state::RepartitionStore;
//!
//! let store = RepartitionStore::with_seed();
//! for segment in &store.layout().segments {
//!     println!("{} in bin {}: {}..{}", segment.node_id, segment.bin, segment.y0, segment.y1);
//! }
//! ```
//!
//! The `repartition` binary wraps the same pipeline:
//!
//! ```bash
//! repartition layout --nodes nodes.json --files files.json --assignment assignment.json --summary
//! ```

pub mod aggregator;
pub mod commands;
pub mod input;
pub mod layout;
pub mod model;
pub mod output;
pub mod state;
pub mod utils;
