//! Explicit application state and the table views built from it.

pub mod store;
pub mod tables;

pub use store::RepartitionStore;
pub use tables::{
    distribution_rows, node_rows, DistributionRow, DistributionSortKey, NodeRow, NodeSortKey,
    SortOrder,
};
