//! Check that an assignment only references known files and nodes.

use crate::model::{Assignment, FileSize, NodeCapacity, Validity, Violation};

/// Find the first dangling reference in an assignment
///
/// **Public** - used by the aggregator and the `check` command
///
/// Walks the assignment in order and stops at the first file id missing
/// from `files` or target node id missing from `nodes`. Presence is a key
/// lookup, so zero sizes and capacities are accepted.
pub fn find_violation(
    nodes: &NodeCapacity,
    files: &FileSize,
    assignment: &Assignment,
) -> Option<Violation> {
    assignment.iter().find_map(|(file_id, node_id)| {
        if !files.contains_key(file_id) {
            Some(Violation::UnknownFile {
                file_id: file_id.to_string(),
            })
        } else if !nodes.contains_key(node_id) {
            Some(Violation::UnknownNode {
                file_id: file_id.to_string(),
                node_id: node_id.clone(),
            })
        } else {
            None
        }
    })
}

/// Decide whether an assignment is well-formed
///
/// **Public** - an empty assignment is vacuously valid
pub fn validate(nodes: &NodeCapacity, files: &FileSize, assignment: &Assignment) -> Validity {
    match find_violation(nodes, files, assignment) {
        Some(_) => Validity::Invalid,
        None => Validity::Valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> NodeCapacity {
        [("n1", 100.0), ("n2", 50.0)].into_iter().collect()
    }

    fn files() -> FileSize {
        [("f1", 30.0), ("f2", 40.0), ("empty", 0.0)].into_iter().collect()
    }

    #[test]
    fn test_empty_assignment_is_valid() {
        assert_eq!(validate(&nodes(), &files(), &Assignment::new()), Validity::Valid);
    }

    #[test]
    fn test_zero_size_file_is_known() {
        let assignment: Assignment = [("empty", "n2".to_string())].into_iter().collect();
        assert_eq!(validate(&nodes(), &files(), &assignment), Validity::Valid);
    }

    #[test]
    fn test_unknown_file() {
        let assignment: Assignment = [("f1", "n1".to_string()), ("f9", "n1".to_string())]
            .into_iter()
            .collect();

        assert_eq!(
            find_violation(&nodes(), &files(), &assignment),
            Some(Violation::UnknownFile {
                file_id: "f9".to_string()
            })
        );
    }

    #[test]
    fn test_stops_at_first_violation() {
        let assignment: Assignment = [("f1", "n3".to_string()), ("f9", "n1".to_string())]
            .into_iter()
            .collect();

        assert_eq!(
            find_violation(&nodes(), &files(), &assignment),
            Some(Violation::UnknownNode {
                file_id: "f1".to_string(),
                node_id: "n3".to_string()
            })
        );
    }
}
