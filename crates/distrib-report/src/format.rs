//! Human-readable capacity report.

use distrib_core::Node;
use distrib_placement::Allocation;

use crate::{ReportResult, check_nodes};

pub fn format_report(nodes: &[Node], allocation: &Allocation) -> ReportResult<String> {
    check_nodes(nodes, allocation)?;

    let mut out = String::new();
    let placed = allocation.placed_count();
    let unplaced = allocation.unplaced_count();
    let capacity: f64 = nodes.iter().map(Node::capacity).sum();
    let used: f64 = allocation.used.iter().sum();

    out.push_str("\n╔══════════════════════════════════════════╗\n");
    out.push_str("║  distrib placement report                ║\n");
    out.push_str("╠══════════════════════════════════════════╣\n");
    out.push_str(&format!("║  Nodes:    {:<30}║\n", nodes.len()));
    out.push_str(&format!("║  Items:    {:<30}║\n", placed + unplaced));
    out.push_str(&format!("║  Placed:   {:<30}║\n", placed));
    out.push_str(&format!("║  Unplaced: {:<30}║\n", unplaced));
    out.push_str("╚══════════════════════════════════════════╝\n\n");

    out.push_str(&format!("Capacity: {used} used of {capacity}\n\n"));

    if !nodes.is_empty() {
        let width = nodes.iter().map(|n| n.name().len()).max().unwrap_or(0);
        out.push_str("Nodes:\n");
        for (i, node) in nodes.iter().enumerate() {
            out.push_str(&format!(
                "  {:<width$}  {} / {}  leftover {}  ({} items)\n",
                node.name(),
                allocation.used(i),
                node.capacity(),
                allocation.residual[i],
                allocation.placements[i].len(),
            ));
        }
        out.push('\n');
    }

    if allocation.unplaced.is_empty() {
        out.push_str("Unplaced (0): none\n");
    } else {
        out.push_str(&format!("Unplaced ({unplaced}):\n"));
        for item in &allocation.unplaced {
            out.push_str(&format!("  • {} ({})\n", item.name(), item.size()));
        }
    }

    Ok(out)
}
