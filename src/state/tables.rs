//! Tabular views of a snapshot: one row per loaded node, one per placed file.

use crate::model::SystemSnapshot;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascend,
    Descend,
}

/// Column a node table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeSortKey {
    NodeId,
    Capacity,
    AbsoluteLoad,
    RelativeLoad,
    FileCount,
}

/// Column a distribution table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionSortKey {
    FileId,
    NodeId,
    Size,
}

/// One loaded node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRow {
    pub node_id: String,
    pub capacity: f64,
    pub absolute_load: f64,
    pub relative_load: f64,
    pub files: Vec<String>,
}

/// One placed file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow {
    pub file_id: String,
    pub node_id: String,
    pub size: f64,
}

fn apply_order(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascend => ordering,
        SortOrder::Descend => ordering.reverse(),
    }
}

/// Rows for the node table
///
/// Unsorted rows follow node-load order. Sorting is stable; floats are
/// compared with `total_cmp` so non-finite ratios sort deterministically.
pub fn node_rows(snapshot: &SystemSnapshot, sort: Option<(NodeSortKey, SortOrder)>) -> Vec<NodeRow> {
    let mut rows: Vec<NodeRow> = snapshot
        .node_load
        .values()
        .filter_map(|load| {
            let capacity = snapshot.capacity_of(&load.node_id).ok()?;
            Some(NodeRow {
                node_id: load.node_id.clone(),
                capacity,
                absolute_load: load.absolute_load,
                relative_load: load.relative_load,
                files: load.files.clone(),
            })
        })
        .collect();

    if let Some((key, order)) = sort {
        rows.sort_by(|a, b| {
            let ordering = match key {
                NodeSortKey::NodeId => a.node_id.cmp(&b.node_id),
                NodeSortKey::Capacity => a.capacity.total_cmp(&b.capacity),
                NodeSortKey::AbsoluteLoad => a.absolute_load.total_cmp(&b.absolute_load),
                NodeSortKey::RelativeLoad => a.relative_load.total_cmp(&b.relative_load),
                NodeSortKey::FileCount => a.files.len().cmp(&b.files.len()),
            };
            apply_order(ordering, order)
        });
    }

    rows
}

/// Rows for the distribution table
///
/// Unsorted rows follow assignment order. An invalid snapshot has no rows.
pub fn distribution_rows(
    snapshot: &SystemSnapshot,
    sort: Option<(DistributionSortKey, SortOrder)>,
) -> Vec<DistributionRow> {
    let mut rows: Vec<DistributionRow> = snapshot
        .assignment
        .iter()
        .filter_map(|(file_id, node_id)| {
            let size = snapshot.size_of(file_id).ok()?;
            Some(DistributionRow {
                file_id: file_id.to_string(),
                node_id: node_id.clone(),
                size,
            })
        })
        .collect();

    if let Some((key, order)) = sort {
        rows.sort_by(|a, b| {
            let ordering = match key {
                DistributionSortKey::FileId => a.file_id.cmp(&b.file_id),
                DistributionSortKey::NodeId => a.node_id.cmp(&b.node_id),
                DistributionSortKey::Size => a.size.total_cmp(&b.size),
            };
            apply_order(ordering, order)
        });
    }

    rows
}
