//! Stack nodes inside their bins and split node segments by file.
//!
//! Heights are in load units (or node counts), never pixels: mapping to
//! screen space is the renderer's job.

use super::config::ScalingMode;
use crate::model::{FileSize, NodeCapacity, NodeLoad, OrderedMap};
use crate::utils::error::LookupError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vertical extent `[y0, y1]` of a node inside its bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSegment {
    pub node_id: String,
    pub bin: usize,
    pub y0: f64,
    pub y1: f64,
}

impl StackSegment {
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// Horizontal share `[x0, x1]` of one file within its node's unit width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSubSegment {
    pub file_id: String,
    #[serde(with = "crate::utils::float")]
    pub x0: f64,
    #[serde(with = "crate::utils::float")]
    pub x1: f64,
}

/// Per-file partition of one node segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeFileSegments {
    pub node_id: String,
    pub bin: usize,
    pub segments: Vec<FileSubSegment>,
}

impl NodeFileSegments {
    /// Right edge of the last file; below 1.0 means free capacity
    pub fn used_width(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.x1)
    }
}

/// Height a node occupies in its bin's stack
///
/// One unit per node unless `scale_nodes` is set, in which case the load
/// selected by `scaling_mode` is used. Non-finite loads stack as 0.
pub fn stack_height(load: &NodeLoad, scaling_mode: ScalingMode, scale_nodes: bool) -> f64 {
    if !scale_nodes {
        return 1.0;
    }

    let height = match scaling_mode {
        ScalingMode::Absolute => load.absolute_load,
        ScalingMode::Relative => load.relative_load,
    };

    if height.is_finite() {
        height
    } else {
        0.0
    }
}

/// Stack the nodes of every bin
///
/// **Public** - main entry point for stack building
///
/// # Arguments
/// * `nodes` - Capacity map; its key order is the stacking order
/// * `node_load` - Per-node load from the aggregator
/// * `bins` - Bin of every loaded node
/// * `scaling_mode` / `scale_nodes` - Height policy, see [`stack_height`]
///
/// # Returns
/// Segments ordered by bin, then by node order. Within a bin the first
/// segment starts at 0 and each next one starts where the previous ended.
/// Empty bins produce nothing.
pub fn build_stack(
    nodes: &NodeCapacity,
    node_load: &OrderedMap<NodeLoad>,
    bins: &OrderedMap<usize>,
    scaling_mode: ScalingMode,
    scale_nodes: bool,
) -> Vec<StackSegment> {
    let mut placed: Vec<(usize, &NodeLoad)> = nodes
        .keys()
        .filter_map(|node_id| Some((*bins.get(node_id)?, node_load.get(node_id)?)))
        .collect();

    // Stable: node order is kept within a bin
    placed.sort_by_key(|&(bin, _)| bin);

    let mut segments: Vec<StackSegment> = Vec::with_capacity(placed.len());
    for (bin, load) in placed {
        let y0 = match segments.last() {
            Some(prev) if prev.bin == bin => prev.y1,
            _ => 0.0,
        };
        let height = stack_height(load, scaling_mode, scale_nodes);

        segments.push(StackSegment {
            node_id: load.node_id.clone(),
            bin,
            y0,
            y1: y0 + height,
        });
    }

    segments
}

/// Split a node's unit width between its files
///
/// **Public** - only used when per-file detail is requested
///
/// Files are packed left to right in the node's file order, each taking
/// `size / capacity`. The total is not clamped: it stays below 1.0 for
/// free capacity and goes past 1.0 for an over-capacity node.
///
/// # Errors
/// * `LookupError::UnknownFile` - a file of the node has no size
pub fn build_file_sub_segments(
    load: &NodeLoad,
    capacity: f64,
    files: &FileSize,
) -> Result<Vec<FileSubSegment>, LookupError> {
    let mut x = 0.0;
    load.files
        .iter()
        .map(|file_id| -> Result<FileSubSegment, LookupError> {
            let size = files
                .get(file_id)
                .copied()
                .ok_or_else(|| LookupError::UnknownFile(file_id.clone()))?;
            let x0 = x;
            x += size / capacity;
            Ok(FileSubSegment {
                file_id: file_id.clone(),
                x0,
                x1: x,
            })
        })
        .collect()
}

/// Reverse index from bin to the nodes stacked in it
///
/// **Public** - lets a renderer highlight every sibling of a node
///
/// Only occupied bins appear; node ids keep stack order.
pub fn build_bin_index(segments: &[StackSegment]) -> BTreeMap<usize, Vec<String>> {
    let mut index: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for segment in segments {
        index
            .entry(segment.bin)
            .or_default()
            .push(segment.node_id.clone());
    }
    index
}
