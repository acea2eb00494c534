//! Core data model and the JSON report schema.
//!
//! The three input mappings are plain ordered maps; everything else is
//! derived from them and rebuilt wholesale on every input change.
//! Report schema is versioned to allow future evolution.

use super::ordered_map::OrderedMap;
use crate::aggregator::LoadDistribution;
use crate::layout::{ChartLayout, LayoutConfig};
use crate::utils::error::LookupError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Node id -> capacity
pub type NodeCapacity = OrderedMap<f64>;

/// File id -> size
pub type FileSize = OrderedMap<f64>;

/// File id -> id of the node holding it
pub type Assignment = OrderedMap<String>;

/// Outcome of checking an assignment against the node and file sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Validity {
    Valid,
    Invalid,
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validity::Valid => write!(f, "VALID"),
            Validity::Invalid => write!(f, "INVALID"),
        }
    }
}

/// First dangling reference found in an assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The assignment names a file that has no size
    UnknownFile { file_id: String },

    /// The assignment places a file on a node that has no capacity
    UnknownNode { file_id: String, node_id: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnknownFile { file_id } => {
                write!(f, "file '{}' is not a known file", file_id)
            }
            Violation::UnknownNode { file_id, node_id } => {
                write!(f, "file '{}' is assigned to unknown node '{}'", file_id, node_id)
            }
        }
    }
}

/// Load carried by one node that holds at least one file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLoad {
    /// Node identifier
    pub node_id: String,

    /// Files on this node, in assignment order
    pub files: Vec<String>,

    /// Sum of the sizes of `files`
    pub absolute_load: f64,

    /// `absolute_load / capacity`; may exceed 1.0, not finite for zero capacity
    #[serde(with = "crate::utils::float")]
    pub relative_load: f64,
}

/// Root aggregate: the inputs plus everything derived from them
///
/// An invalid snapshot never carries partial aggregation: `node_load` and
/// `assignment` are both empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub nodes: NodeCapacity,
    pub files: FileSize,

    /// Effective assignment (empty when invalid)
    pub assignment: Assignment,

    /// Per-node load, ordered by first appearance in the assignment
    pub node_load: OrderedMap<NodeLoad>,

    pub validity: Validity,

    /// Why the assignment was rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
}

impl SystemSnapshot {
    /// Snapshot reported for a rejected assignment
    pub fn invalid(nodes: NodeCapacity, files: FileSize, violation: Option<Violation>) -> Self {
        Self {
            nodes,
            files,
            assignment: Assignment::new(),
            node_load: OrderedMap::new(),
            validity: Validity::Invalid,
            violation,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    /// Capacity of a node, or `LookupError::UnknownNode`
    pub fn capacity_of(&self, node_id: &str) -> Result<f64, LookupError> {
        self.nodes
            .get(node_id)
            .copied()
            .ok_or_else(|| LookupError::UnknownNode(node_id.to_string()))
    }

    /// Size of a file, or `LookupError::UnknownFile`
    pub fn size_of(&self, file_id: &str) -> Result<f64, LookupError> {
        self.files
            .get(file_id)
            .copied()
            .ok_or_else(|| LookupError::UnknownFile(file_id.to_string()))
    }
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// Layout settings the chart was computed with
    pub config: LayoutConfig,

    pub snapshot: SystemSnapshot,
    pub layout: ChartLayout,
    pub distribution: LoadDistribution,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> SystemSnapshot {
        let nodes: NodeCapacity = [("n1", 100.0), ("n2", 0.0)].into_iter().collect();
        let files: FileSize = [("f1", 0.0)].into_iter().collect();
        SystemSnapshot::invalid(nodes, files, None)
    }

    #[test]
    fn test_lookup_zero_is_not_missing() {
        let snapshot = sample_snapshot();

        assert_eq!(snapshot.capacity_of("n2"), Ok(0.0));
        assert_eq!(snapshot.size_of("f1"), Ok(0.0));
        assert_eq!(
            snapshot.capacity_of("n3"),
            Err(LookupError::UnknownNode("n3".to_string()))
        );
        assert_eq!(
            snapshot.size_of("f9"),
            Err(LookupError::UnknownFile("f9".to_string()))
        );
    }

    #[test]
    fn test_validity_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Validity::Invalid).unwrap(), "\"INVALID\"");
        assert_eq!(Validity::Valid.to_string(), "VALID");
    }

    #[test]
    fn test_violation_display() {
        let violation = Violation::UnknownNode {
            file_id: "f1".to_string(),
            node_id: "n3".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "file 'f1' is assigned to unknown node 'n3'"
        );
    }
}
