//! Equal-width quantization of node load into bins.
//!
//! The domain `[0, domain_max]` is cut into `bin_count` intervals at
//! `domain_max * i / bin_count`. Bin assignment and the legend both use
//! these boundaries, so a node always lands in the interval the legend
//! shows for its bin.

use super::config::ScalingMode;
use crate::model::{NodeLoad, OrderedMap};
use serde::{Deserialize, Serialize};

/// One legend entry: the half-open interval `[low, high)` of a bin
///
/// The last bin also contains `high`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinRange {
    pub bin: usize,
    pub low: f64,
    pub high: f64,
}

impl BinRange {
    /// Axis label, e.g. "0 -> 250"
    pub fn label(&self) -> String {
        format!("{} -> {}", self.low, self.high)
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Compute the data-driven upper bound of the load domain
///
/// **Public** - recomputed whenever node load or scaling mode changes
///
/// Maximum absolute load (ABSOLUTE) or relative load (RELATIVE) over all
/// nodes. Non-finite loads are skipped; no nodes gives 0.
pub fn compute_domain(node_load: &OrderedMap<NodeLoad>, scaling_mode: ScalingMode) -> f64 {
    node_load
        .values()
        .map(|load| match scaling_mode {
            ScalingMode::Absolute => load.absolute_load,
            ScalingMode::Relative => load.relative_load,
        })
        .filter(|value| value.is_finite())
        .fold(0.0, f64::max)
}

/// Lower bound of bin `index`
///
/// Divides first so a domain near `f64::MAX` does not overflow.
fn boundary(domain_max: f64, index: usize, bin_count: usize) -> f64 {
    domain_max / bin_count as f64 * index as f64
}

/// Quantize a load value into one of `bin_count` equal-width bins
///
/// **Public** - a node maps to exactly one bin
///
/// # Returns
/// * `None` when `bin_count` is 0
/// * the number of inner boundaries `<= value` otherwise, so `domain_max`
///   belongs to the last bin and out-of-domain values clamp to the ends
///
/// Runs in constant time whatever the bin count.
///
/// A zero or non-finite domain sends every value to bin 0, except `+inf`
/// which always goes to the last bin.
pub fn assign_bin(value: f64, domain_max: f64, bin_count: usize) -> Option<usize> {
    if bin_count == 0 {
        return None;
    }

    let last = bin_count - 1;
    if value == f64::INFINITY {
        return Some(last);
    }
    if !domain_max.is_finite() || domain_max <= 0.0 {
        return Some(0);
    }

    // Estimate from the bin width, then settle against the exact boundaries
    // (NaN and negative values saturate to 0)
    let mut bin = ((value / (domain_max / bin_count as f64)) as usize).min(last);
    if bin > 0 && value < boundary(domain_max, bin, bin_count) {
        bin -= 1;
    } else if bin < last && value >= boundary(domain_max, bin + 1, bin_count) {
        bin += 1;
    }
    Some(bin)
}

/// Assign every node to a bin by its absolute load
///
/// **Public** - iteration order follows `node_load`
pub fn assign_bins(
    node_load: &OrderedMap<NodeLoad>,
    domain_max: f64,
    bin_count: usize,
) -> OrderedMap<usize> {
    node_load
        .iter()
        .filter_map(|(node_id, load)| {
            assign_bin(load.absolute_load, domain_max, bin_count).map(|bin| (node_id, bin))
        })
        .collect()
}

/// Build the legend for the bins of `[0, domain_max]`
///
/// **Public** - used for axis labeling
///
/// Returns `bin_count` contiguous intervals: the first starts at 0, the
/// last ends at `domain_max`, and each `high` is the next `low`.
pub fn bin_thresholds(domain_max: f64, bin_count: usize) -> Vec<BinRange> {
    (0..bin_count)
        .map(|bin| BinRange {
            bin,
            low: if bin == 0 {
                0.0
            } else {
                boundary(domain_max, bin, bin_count)
            },
            high: if bin + 1 == bin_count {
                domain_max
            } else {
                boundary(domain_max, bin + 1, bin_count)
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(node_id: &str, absolute_load: f64, relative_load: f64) -> NodeLoad {
        NodeLoad {
            node_id: node_id.to_string(),
            files: vec![],
            absolute_load,
            relative_load,
        }
    }

    #[test]
    fn test_compute_domain_by_mode() {
        let node_load: OrderedMap<NodeLoad> = [
            ("n1", load("n1", 70.0, 0.7)),
            ("n2", load("n2", 40.0, 1.6)),
        ]
        .into_iter()
        .collect();

        assert_eq!(compute_domain(&node_load, ScalingMode::Absolute), 70.0);
        assert_eq!(compute_domain(&node_load, ScalingMode::Relative), 1.6);
    }

    #[test]
    fn test_compute_domain_skips_infinite() {
        let node_load: OrderedMap<NodeLoad> = [
            ("n1", load("n1", 70.0, f64::INFINITY)),
            ("n2", load("n2", 40.0, 0.4)),
        ]
        .into_iter()
        .collect();

        assert_eq!(compute_domain(&node_load, ScalingMode::Relative), 0.4);
        assert_eq!(compute_domain(&OrderedMap::new(), ScalingMode::Absolute), 0.0);
    }

    #[test]
    fn test_assign_bin_upper_boundary() {
        assert_eq!(assign_bin(99.0, 100.0, 2), Some(1));
        assert_eq!(assign_bin(100.0, 100.0, 2), Some(1));
        assert_eq!(assign_bin(50.0, 100.0, 2), Some(1));
        assert_eq!(assign_bin(49.9, 100.0, 2), Some(0));
        assert_eq!(assign_bin(0.0, 100.0, 2), Some(0));
    }

    #[test]
    fn test_assign_bin_clamps_out_of_domain() {
        assert_eq!(assign_bin(1500.0, 1000.0, 5), Some(4));
        assert_eq!(assign_bin(-3.0, 1000.0, 5), Some(0));
        assert_eq!(assign_bin(f64::INFINITY, 1000.0, 5), Some(4));
    }

    #[test]
    fn test_assign_bin_degenerate() {
        assert_eq!(assign_bin(10.0, 100.0, 0), None);
        assert_eq!(assign_bin(0.0, 0.0, 4), Some(0));
        assert_eq!(assign_bin(f64::NAN, 100.0, 4), Some(0));
    }

    #[test]
    fn test_assign_bin_huge_domain() {
        assert_eq!(assign_bin(f64::MAX, f64::MAX, 1000), Some(999));
        assert_eq!(assign_bin(0.0, f64::MAX, 1000), Some(0));

        let legend = bin_thresholds(f64::MAX, 1000);
        assert!(legend.iter().all(|r| r.low.is_finite() && r.high.is_finite()));
        assert_eq!(legend[999].high, f64::MAX);
    }

    #[test]
    fn test_assign_bin_huge_bin_count_returns() {
        let bin = assign_bin(5.0, 10.0, usize::MAX).unwrap();
        assert!(bin > 0 && bin < usize::MAX);
        assert_eq!(assign_bin(10.0, 10.0, usize::MAX), Some(usize::MAX - 1));
    }

    #[test]
    fn test_assign_bin_agrees_with_legend() {
        let legend = bin_thresholds(907.0, 7);
        for step in 0..=907 {
            let value = step as f64;
            let bin = assign_bin(value, 907.0, 7).unwrap();
            assert!(value >= legend[bin].low);
            assert!(value < legend[bin].high || bin == 6);
        }
    }

    #[test]
    fn test_bin_thresholds_cover_domain() {
        let legend = bin_thresholds(1000.0, 5);

        assert_eq!(legend.len(), 5);
        assert_eq!(legend[0].low, 0.0);
        assert_eq!(legend[4].high, 1000.0);
        for pair in legend.windows(2) {
            assert_eq!(pair[0].high, pair[1].low);
        }
        assert_eq!(legend[1].label(), "200 -> 400");
    }
}
