//! Terminal output rendering for layout reports.
//!
//! Provides a human-readable summary of a repartition: validity, load
//! totals, the node table and the nodes of every bin.

use crate::model::{LayoutReport, Validity};
use crate::state::{node_rows, NodeSortKey, SortOrder};
use colored::*;

const RULE: &str = "---------------------------------------------------\n";

/// Render a human-readable summary of a layout report for the terminal
pub fn render_terminal_summary(report: &LayoutReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    out.push_str(&render_distribution(report));
    out.push_str(&render_node_table(report));
    out.push_str(&render_bins(report));
    out.push_str(&render_status(report));

    out
}

/// Format a ratio as a percentage, e.g. 0.7 -> "70.0%"
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn render_header(report: &LayoutReport) -> String {
    let mut out = String::new();
    out.push_str("\n📦 ");
    out.push_str(&"Repartition Summary".bold().to_string());
    out.push('\n');
    out.push_str(RULE);
    out.push_str(&format!(
        "Nodes: {}   Files: {}   Bins: {} ({} mode)\n",
        report.snapshot.nodes.len(),
        report.snapshot.files.len(),
        report.layout.bin_count,
        report.layout.scaling_mode
    ));
    out.push_str(RULE);
    out
}

fn render_distribution(report: &LayoutReport) -> String {
    let dist = &report.distribution;
    let mut out = String::new();

    out.push_str(&format!(
        "Total Load: {} / {} ({})\n",
        dist.total_load,
        dist.total_capacity,
        format_percent(dist.overall_utilization)
    ));
    out.push_str(&format!(
        "Relative Load: min {}  mean {}  max {}\n",
        format_percent(dist.min_relative_load),
        format_percent(dist.mean_relative_load),
        format_percent(dist.max_relative_load)
    ));

    if !dist.idle_nodes.is_empty() {
        out.push_str(&format!("Idle Nodes: {}\n", dist.idle_nodes.join(", ")));
    }
    if !dist.unassigned_files.is_empty() {
        out.push_str(&format!(
            "Unassigned Files: {}\n",
            dist.unassigned_files.join(", ")
        ));
    }
    out
}

fn render_node_table(report: &LayoutReport) -> String {
    let rows = node_rows(
        &report.snapshot,
        Some((NodeSortKey::RelativeLoad, SortOrder::Descend)),
    );
    if rows.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("\nNodes by Relative Load:\n");
    for row in rows {
        let percent = format_percent(row.relative_load);
        let percent = if row.relative_load > 1.0 {
            percent.red().bold()
        } else {
            percent.normal()
        };
        out.push_str(&format!(
            "  {:<12} {:>10} / {:<10} {:>8}  [{}]\n",
            row.node_id,
            row.absolute_load,
            row.capacity,
            percent,
            row.files.join(", ")
        ));
    }
    out
}

fn render_bins(report: &LayoutReport) -> String {
    let layout = &report.layout;
    let mut out = String::new();

    out.push_str("\nBins:\n");
    for range in &layout.legend {
        let nodes = layout
            .bin_index
            .get(&range.bin)
            .map(|ids| ids.join(", "))
            .unwrap_or_default();
        let count = layout.bin_index.get(&range.bin).map_or(0, Vec::len);
        out.push_str(&format!(
            "  [{}] {:<24} {:<20} {}\n",
            range.bin,
            range.label(),
            "#".repeat(count),
            nodes
        ));
    }
    out
}

fn render_status(report: &LayoutReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(RULE);

    let status_msg = match report.snapshot.validity {
        Validity::Invalid => {
            let reason = report
                .snapshot
                .violation
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "unknown reason".to_string());
            format!("❌ STATUS: INVALID REPARTITION ({})", reason)
                .red()
                .bold()
        }
        Validity::Valid if report.distribution.is_overloaded() => format!(
            "⚠️  STATUS: OVER CAPACITY ({})",
            report.distribution.over_capacity_nodes.join(", ")
        )
        .yellow()
        .bold(),
        Validity::Valid => "✅ STATUS: VALID".green().bold(),
    };
    out.push_str(&status_msg.to_string());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.7), "70.0%");
        assert_eq!(format_percent(1.25), "125.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
