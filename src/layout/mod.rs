//! Binned, stacked chart layout built from a system snapshot.
//!
//! This module converts per-node load into renderer-agnostic chart data:
//! - Which bin each node falls in, and the legend of bin intervals
//! - The stacked vertical extent of each node within its bin
//! - Optionally, the per-file split of each node segment
//! - A reverse index from bin to nodes

pub mod binning;
pub mod config;
pub mod stack;

// Re-export main types
pub use binning::{assign_bin, assign_bins, bin_thresholds, compute_domain, BinRange};
pub use config::{load_layout_config, LayoutConfig, ScalingMode};
pub use stack::{
    build_bin_index, build_file_sub_segments, build_stack, stack_height, FileSubSegment,
    NodeFileSegments, StackSegment,
};

use crate::model::SystemSnapshot;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete chart layout for one snapshot and one config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub bin_count: usize,
    pub scaling_mode: ScalingMode,
    pub scale_nodes: bool,

    /// Upper bound of the binned absolute-load domain
    pub bin_domain: f64,

    /// Maximum load under `scaling_mode` (vertical scale hint)
    pub load_domain: f64,

    /// Height of the tallest bin stack
    pub stack_max: f64,

    /// One interval per bin
    pub legend: Vec<BinRange>,

    /// Stack segments ordered by bin, then node order
    pub segments: Vec<StackSegment>,

    /// Per-file detail, empty unless requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_segments: Vec<NodeFileSegments>,

    /// Bin -> nodes stacked in it
    pub bin_index: BTreeMap<usize, Vec<String>>,
}

impl ChartLayout {
    /// Segment of a node, if it was placed
    pub fn segment_of(&self, node_id: &str) -> Option<&StackSegment> {
        self.segments.iter().find(|s| s.node_id == node_id)
    }

    /// Nodes sharing a bin with `node_id` (the node included)
    ///
    /// Empty for a node that was not placed.
    pub fn siblings(&self, node_id: &str) -> &[String] {
        self.segment_of(node_id)
            .and_then(|segment| self.bin_index.get(&segment.bin))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Compute the full chart layout
///
/// **Public** - main entry point for the layout engine
///
/// # Arguments
/// * `snapshot` - Snapshot from the aggregator
/// * `config` - Bin count, scaling and detail settings
///
/// # Returns
/// The layout. An invalid snapshot has no node load and yields no segments;
/// the legend still covers the domain.
///
/// `config` is expected to have passed [`LayoutConfig::validate`], as it
/// does through the store and the CLI. With zero bins no node is placed.
pub fn compute_layout(snapshot: &SystemSnapshot, config: &LayoutConfig) -> ChartLayout {
    if config.bin_count == 0 {
        warn!("Layout requested with zero bins, no node can be placed");
    }

    let bin_domain = config
        .reference_domain
        .unwrap_or_else(|| compute_domain(&snapshot.node_load, ScalingMode::Absolute));
    let load_domain = compute_domain(&snapshot.node_load, config.scaling_mode);

    debug!(
        "Computing layout: {} bins over [0, {}], {} mode",
        config.bin_count, bin_domain, config.scaling_mode
    );

    let bins = assign_bins(&snapshot.node_load, bin_domain, config.bin_count);
    let segments = build_stack(
        &snapshot.nodes,
        &snapshot.node_load,
        &bins,
        config.scaling_mode,
        config.scale_nodes,
    );

    let file_segments = if config.show_files {
        build_node_file_segments(snapshot, &segments)
    } else {
        Vec::new()
    };

    let stack_max = segments.iter().map(|s| s.y1).fold(0.0, f64::max);
    let bin_index = build_bin_index(&segments);

    debug!(
        "Built {} segments in {} occupied bins",
        segments.len(),
        bin_index.len()
    );

    ChartLayout {
        bin_count: config.bin_count,
        scaling_mode: config.scaling_mode,
        scale_nodes: config.scale_nodes,
        bin_domain,
        load_domain,
        stack_max,
        legend: bin_thresholds(bin_domain, config.bin_count),
        segments,
        file_segments,
        bin_index,
    }
}

/// Per-file split of every placed node, in stack order
///
/// **Private** - a failed lookup drops that node's detail, not the layout
fn build_node_file_segments(
    snapshot: &SystemSnapshot,
    segments: &[StackSegment],
) -> Vec<NodeFileSegments> {
    segments
        .iter()
        .filter_map(|segment| {
            let load = snapshot.node_load.get(&segment.node_id)?;
            let detail = snapshot
                .capacity_of(&segment.node_id)
                .and_then(|capacity| build_file_sub_segments(load, capacity, &snapshot.files));

            match detail {
                Ok(files) => Some(NodeFileSegments {
                    node_id: segment.node_id.clone(),
                    bin: segment.bin,
                    segments: files,
                }),
                Err(e) => {
                    warn!("Skipping file detail for node {}: {}", segment.node_id, e);
                    None
                }
            }
        })
        .collect()
}
