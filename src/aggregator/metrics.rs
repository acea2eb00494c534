//! Calculate balance metrics from a system snapshot.
//!
//! Over-capacity and idle nodes are the primary targets when
//! rebalancing a repartition.

use crate::model::SystemSnapshot;
use log::debug;
use serde::{Deserialize, Serialize};

/// Load distribution statistics
///
/// **Public** - returned from calculate_load_distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadDistribution {
    /// Number of declared nodes
    pub node_count: usize,

    /// Number of nodes holding at least one file
    pub loaded_node_count: usize,

    /// Nodes holding no file, in declaration order
    pub idle_nodes: Vec<String>,

    /// Number of declared files
    pub file_count: usize,

    /// Number of files placed on a node
    pub assigned_file_count: usize,

    /// Files not placed on any node, in declaration order
    pub unassigned_files: Vec<String>,

    /// Sum of all node capacities
    pub total_capacity: f64,

    /// Sum of all node absolute loads
    pub total_load: f64,

    /// `total_load / total_capacity`
    pub overall_utilization: f64,

    /// Highest relative load among loaded nodes
    pub max_relative_load: f64,

    /// Lowest relative load among loaded nodes
    pub min_relative_load: f64,

    /// Mean relative load among loaded nodes
    pub mean_relative_load: f64,

    /// Nodes whose relative load exceeds 1.0
    pub over_capacity_nodes: Vec<String>,

    /// Number of loaded nodes per utilization band
    pub band_counts: Vec<usize>,
}

impl Default for LoadDistribution {
    fn default() -> Self {
        Self {
            node_count: 0,
            loaded_node_count: 0,
            idle_nodes: Vec::new(),
            file_count: 0,
            assigned_file_count: 0,
            unassigned_files: Vec::new(),
            total_capacity: 0.0,
            total_load: 0.0,
            overall_utilization: 0.0,
            max_relative_load: 0.0,
            min_relative_load: 0.0,
            mean_relative_load: 0.0,
            over_capacity_nodes: Vec::new(),
            band_counts: Vec::new(),
        }
    }
}

impl LoadDistribution {
    /// Check if any node holds more than its capacity
    ///
    /// **Public** - drives the status line of the terminal summary
    pub fn is_overloaded(&self) -> bool {
        !self.over_capacity_nodes.is_empty()
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Load: {} / {} ({:.1}%) | Nodes: {} loaded, {} idle | Files: {} assigned, {} unassigned | Over capacity: {}",
            self.total_load,
            self.total_capacity,
            self.overall_utilization * 100.0,
            self.loaded_node_count,
            self.idle_nodes.len(),
            self.assigned_file_count,
            self.unassigned_files.len(),
            self.over_capacity_nodes.len()
        )
    }
}

/// Calculate load distribution statistics
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `snapshot` - Snapshot produced by the aggregator
/// * `thresholds` - Ascending relative-load thresholds for utilization bands
///
/// # Returns
/// Statistics about how load is spread over the nodes. An invalid snapshot
/// has no load, so every file is reported unassigned.
pub fn calculate_load_distribution(
    snapshot: &SystemSnapshot,
    thresholds: &[f64],
) -> LoadDistribution {
    debug!(
        "Calculating load distribution over {} loaded nodes",
        snapshot.node_load.len()
    );

    let idle_nodes: Vec<String> = snapshot
        .nodes
        .keys()
        .filter(|id| !snapshot.node_load.contains_key(id))
        .map(str::to_string)
        .collect();

    let unassigned_files: Vec<String> = snapshot
        .files
        .keys()
        .filter(|id| !snapshot.assignment.contains_key(id))
        .map(str::to_string)
        .collect();

    let total_capacity: f64 = snapshot.nodes.values().sum();
    let total_load: f64 = snapshot.node_load.values().map(|l| l.absolute_load).sum();

    // Zero-capacity nodes produce non-finite ratios; keep them out of the stats
    let ratios: Vec<f64> = snapshot
        .node_load
        .values()
        .map(|l| l.relative_load)
        .filter(|r| r.is_finite())
        .collect();

    let (max_relative_load, min_relative_load, mean_relative_load) = if ratios.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        (
            ratios.iter().copied().fold(f64::MIN, f64::max),
            ratios.iter().copied().fold(f64::MAX, f64::min),
            ratios.iter().sum::<f64>() / ratios.len() as f64,
        )
    };

    let over_capacity_nodes: Vec<String> = snapshot
        .node_load
        .values()
        .filter(|l| l.relative_load > 1.0)
        .map(|l| l.node_id.clone())
        .collect();

    let mut band_counts = vec![0; thresholds.len() + 1];
    for load in snapshot.node_load.values() {
        band_counts[classify_utilization(load.relative_load, thresholds)] += 1;
    }

    LoadDistribution {
        node_count: snapshot.nodes.len(),
        loaded_node_count: snapshot.node_load.len(),
        idle_nodes,
        file_count: snapshot.files.len(),
        assigned_file_count: snapshot.assignment.len(),
        unassigned_files,
        total_capacity,
        total_load,
        overall_utilization: if total_capacity > 0.0 {
            total_load / total_capacity
        } else {
            0.0
        },
        max_relative_load,
        min_relative_load,
        mean_relative_load,
        over_capacity_nodes,
        band_counts,
    }
}

/// Utilization band of a relative load
///
/// **Public** - also used by renderers to pick a band color
///
/// Returns the number of thresholds that are `<= ratio`, so a ratio equal to
/// a threshold falls in the band above it. `NaN` falls in band 0.
pub fn classify_utilization(ratio: f64, thresholds: &[f64]) -> usize {
    thresholds.iter().take_while(|&&t| ratio >= t).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::model::{Assignment, FileSize, NodeCapacity};

    fn snapshot() -> SystemSnapshot {
        let nodes: NodeCapacity = [("n1", 100.0), ("n2", 50.0), ("n3", 10.0)]
            .into_iter()
            .collect();
        let files: FileSize = [("f1", 30.0), ("f2", 40.0), ("f3", 20.0), ("f4", 5.0)]
            .into_iter()
            .collect();
        let assignment: Assignment = [
            ("f1", "n1".to_string()),
            ("f2", "n1".to_string()),
            ("f3", "n3".to_string()),
        ]
        .into_iter()
        .collect();
        aggregate(&nodes, &files, &assignment)
    }

    #[test]
    fn test_calculate_load_distribution() {
        let dist = calculate_load_distribution(&snapshot(), &[0.5, 1.0]);

        assert_eq!(dist.node_count, 3);
        assert_eq!(dist.loaded_node_count, 2);
        assert_eq!(dist.idle_nodes, vec!["n2".to_string()]);
        assert_eq!(dist.unassigned_files, vec!["f4".to_string()]);
        assert_eq!(dist.total_capacity, 160.0);
        assert_eq!(dist.total_load, 90.0);
        assert_eq!(dist.max_relative_load, 2.0);
        assert_eq!(dist.min_relative_load, 0.7);
        assert_eq!(dist.over_capacity_nodes, vec!["n3".to_string()]);
        assert_eq!(dist.band_counts, vec![0, 1, 1]);
        assert!(dist.is_overloaded());
    }

    #[test]
    fn test_load_distribution_invalid_snapshot() {
        let nodes: NodeCapacity = [("n1", 100.0)].into_iter().collect();
        let files: FileSize = [("f1", 30.0)].into_iter().collect();
        let assignment: Assignment = [("f1", "n9".to_string())].into_iter().collect();

        let dist = calculate_load_distribution(&aggregate(&nodes, &files, &assignment), &[]);

        assert_eq!(dist.total_load, 0.0);
        assert_eq!(dist.loaded_node_count, 0);
        assert_eq!(dist.unassigned_files, vec!["f1".to_string()]);
        assert_eq!(dist.band_counts, vec![0]);
        assert!(!dist.is_overloaded());
    }

    #[test]
    fn test_classify_utilization_boundaries() {
        let thresholds = [0.3, 0.45, 0.51, 0.95, 1.0];

        assert_eq!(classify_utilization(0.0, &thresholds), 0);
        assert_eq!(classify_utilization(0.3, &thresholds), 1);
        assert_eq!(classify_utilization(0.5, &thresholds), 2);
        assert_eq!(classify_utilization(1.0, &thresholds), 5);
        assert_eq!(classify_utilization(f64::INFINITY, &thresholds), 5);
        assert_eq!(classify_utilization(f64::NAN, &thresholds), 0);
    }

    #[test]
    fn test_summary_mentions_totals() {
        let dist = calculate_load_distribution(&snapshot(), &[]);
        assert!(dist.summary().contains("Load: 90 / 160"));
    }
}
