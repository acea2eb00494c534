//! Build the per-node load snapshot from the raw inputs.
//!
//! Two passes over a valid assignment:
//! 1. Group files by node, summing their sizes into the absolute load
//! 2. Divide each absolute load by the node capacity
//!
//! Nodes without files are left out of the result: "no files" and
//! "files of total size zero" stay distinguishable.

use super::validator::find_violation;
use crate::model::{Assignment, FileSize, NodeCapacity, NodeLoad, OrderedMap, SystemSnapshot, Validity};
use crate::utils::error::LookupError;
use log::{debug, error, warn};

/// Validate the inputs and compute the full system snapshot
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `nodes` - Node capacities
/// * `files` - File sizes
/// * `assignment` - File to node mapping
///
/// # Returns
/// A VALID snapshot with per-node load, or an INVALID snapshot with empty
/// load and assignment. Never fails: an invalid repartition is a reported
/// state, not an error.
pub fn aggregate(nodes: &NodeCapacity, files: &FileSize, assignment: &Assignment) -> SystemSnapshot {
    debug!(
        "Aggregating {} assignments over {} nodes and {} files",
        assignment.len(),
        nodes.len(),
        files.len()
    );

    if let Some(violation) = find_violation(nodes, files, assignment) {
        warn!("Invalid repartition: {}", violation);
        return SystemSnapshot::invalid(nodes.clone(), files.clone(), Some(violation));
    }

    match build_node_load(nodes, files, assignment) {
        Ok(node_load) => {
            debug!("Computed load for {} nodes", node_load.len());
            SystemSnapshot {
                nodes: nodes.clone(),
                files: files.clone(),
                assignment: assignment.clone(),
                node_load,
                validity: Validity::Valid,
                violation: None,
            }
        }
        Err(e) => {
            // Unreachable after validation
            error!("Lookup failed during aggregation: {}", e);
            SystemSnapshot::invalid(nodes.clone(), files.clone(), None)
        }
    }
}

/// Group files per node and compute absolute and relative load
///
/// **Public** - expects an assignment that already passed validation
///
/// # Errors
/// * `LookupError::UnknownFile` / `LookupError::UnknownNode` - dangling reference
pub fn build_node_load(
    nodes: &NodeCapacity,
    files: &FileSize,
    assignment: &Assignment,
) -> Result<OrderedMap<NodeLoad>, LookupError> {
    let mut node_load: OrderedMap<NodeLoad> = OrderedMap::new();

    // Pass 1: grouping
    for (file_id, node_id) in assignment.iter() {
        let size = files
            .get(file_id)
            .copied()
            .ok_or_else(|| LookupError::UnknownFile(file_id.to_string()))?;

        match node_load.get_mut(node_id) {
            Some(load) => {
                load.files.push(file_id.to_string());
                load.absolute_load += size;
            }
            None => {
                node_load.insert(
                    node_id.clone(),
                    NodeLoad {
                        node_id: node_id.clone(),
                        files: vec![file_id.to_string()],
                        absolute_load: size,
                        relative_load: 0.0,
                    },
                );
            }
        }
    }

    // Pass 2: normalization
    for load in node_load.values_mut() {
        let capacity = nodes
            .get(&load.node_id)
            .copied()
            .ok_or_else(|| LookupError::UnknownNode(load.node_id.clone()))?;

        if capacity == 0.0 {
            warn!(
                "Node {} has zero capacity, relative load is not finite",
                load.node_id
            );
        }
        load.relative_load = load.absolute_load / capacity;
    }

    Ok(node_load)
}
