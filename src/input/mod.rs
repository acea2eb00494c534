//! Input provider: node, file and assignment maps from JSON.
//!
//! Each input is a flat JSON object. Key order in the document is kept:
//! it decides stacking order (nodes) and per-node file order (assignment).
//!
//! ```json
//! {"node1": 1234, "node2": 1432}
//! {"file1": 25, "file2": 252}
//! {"file1": "node2", "file2": "node1"}
//! ```
//!
//! Shape checks stop at "object of numbers/strings"; semantic checks belong
//! to the aggregator.

use crate::model::{seed_assignment, seed_files, seed_nodes, Assignment, FileSize, NodeCapacity};
use crate::utils::error::InputError;
use log::debug;
use std::fs;
use std::path::Path;

/// Parse node capacities from JSON text
pub fn parse_node_capacity(json: &str) -> Result<NodeCapacity, InputError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse file sizes from JSON text
pub fn parse_file_sizes(json: &str) -> Result<FileSize, InputError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a file to node assignment from JSON text
pub fn parse_assignment(json: &str) -> Result<Assignment, InputError> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_node_capacity(path: impl AsRef<Path>) -> Result<NodeCapacity, InputError> {
    let path = path.as_ref();
    debug!("Reading node capacities from: {}", path.display());
    parse_node_capacity(&fs::read_to_string(path)?)
}

pub fn read_file_sizes(path: impl AsRef<Path>) -> Result<FileSize, InputError> {
    let path = path.as_ref();
    debug!("Reading file sizes from: {}", path.display());
    parse_file_sizes(&fs::read_to_string(path)?)
}

pub fn read_assignment(path: impl AsRef<Path>) -> Result<Assignment, InputError> {
    let path = path.as_ref();
    debug!("Reading assignment from: {}", path.display());
    parse_assignment(&fs::read_to_string(path)?)
}

/// Read the three inputs, using the seed data for any path not given
///
/// **Public** - used by the `layout` and `check` commands
pub fn load_inputs(
    nodes: Option<&Path>,
    files: Option<&Path>,
    assignment: Option<&Path>,
) -> Result<(NodeCapacity, FileSize, Assignment), InputError> {
    let nodes = match nodes {
        Some(path) => read_node_capacity(path)?,
        None => seed_nodes(),
    };
    let files = match files {
        Some(path) => read_file_sizes(path)?,
        None => seed_files(),
    };
    let assignment = match assignment {
        Some(path) => read_assignment(path)?,
        None => seed_assignment(),
    };

    debug!(
        "Loaded {} nodes, {} files, {} assignments",
        nodes.len(),
        files.len(),
        assignment.len()
    );

    Ok((nodes, files, assignment))
}
