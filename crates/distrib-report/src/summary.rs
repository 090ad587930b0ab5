//! Placement summary: one `(item, node)` line per item.
//!
//! Lines are grouped by node in node order and, within a node, kept in
//! placement order (largest first). Unplaced items follow, labelled with
//! [`NULL_NODE`].

use std::fmt;

use distrib_core::Node;
use distrib_placement::Allocation;
use serde::{Deserialize, Serialize};

use crate::{ReportResult, check_nodes};

/// Node label written for items that could not be placed.
pub const NULL_NODE: &str = "NULL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub item: String,
    /// `None` for unplaced items.
    pub node: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub lines: Vec<SummaryLine>,
}

impl Summary {
    pub fn build(nodes: &[Node], allocation: &Allocation) -> ReportResult<Self> {
        check_nodes(nodes, allocation)?;

        let mut lines = Vec::with_capacity(allocation.placed_count() + allocation.unplaced_count());
        for (node, placed) in nodes.iter().zip(&allocation.placements) {
            lines.extend(placed.iter().map(|item| SummaryLine {
                item: item.name().to_string(),
                node: Some(node.name().to_string()),
            }));
        }
        lines.extend(allocation.unplaced.iter().map(|item| SummaryLine {
            item: item.name().to_string(),
            node: None,
        }));

        Ok(Self { lines })
    }

    pub fn unplaced(&self) -> impl Iterator<Item = &SummaryLine> {
        self.lines.iter().filter(|l| l.node.is_none())
    }

    /// Newline-joined `ITEM NODE` text with no trailing newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let node = line.node.as_deref().unwrap_or(NULL_NODE);
            write!(f, "{} {}", line.item, node)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use distrib_core::Item;
    use distrib_placement::allocate;

    fn node(name: &str, cap: f64) -> Node {
        Node::new(name, cap).unwrap()
    }

    fn item(name: &str, size: f64) -> Item {
        Item::new(name, size).unwrap()
    }

    #[test]
    fn overflow_summary_lists_null_last() {
        let nodes = vec![node("node", 100.0)];
        let alloc = allocate(&nodes, &[item("file_1", 26.0), item("file_2", 75.0)]).unwrap();
        let summary = Summary::build(&nodes, &alloc).unwrap();

        assert_eq!(summary.render(), "file_2 node\nfile_1 NULL");
        assert_eq!(summary.unplaced().count(), 1);
    }

    #[test]
    fn groups_by_node_in_node_order() {
        let nodes = vec![node("a", 100.0), node("b", 100.0)];
        let items = vec![
            item("f1", 40.0),
            item("f2", 30.0),
            item("f3", 20.0),
            item("f4", 10.0),
        ];
        let alloc = allocate(&nodes, &items).unwrap();
        let summary = Summary::build(&nodes, &alloc).unwrap();

        assert_eq!(summary.render(), "f1 a\nf4 a\nf2 b\nf3 b");
    }

    #[test]
    fn empty_allocation_renders_empty() {
        let nodes = vec![node("a", 1.0)];
        let alloc = allocate(&nodes, &[]).unwrap();
        let summary = Summary::build(&nodes, &alloc).unwrap();

        assert!(summary.lines.is_empty());
        assert_eq!(summary.render(), "");
    }

    #[test]
    fn zero_nodes_all_null() {
        let alloc = allocate(&[], &[item("x", 1.0), item("y", 2.0)]).unwrap();
        let summary = Summary::build(&[], &alloc).unwrap();

        assert_eq!(summary.render(), "y NULL\nx NULL");
    }

    #[test]
    fn rejects_mismatched_node_list() {
        let alloc = allocate(&[node("a", 1.0)], &[]).unwrap();
        let err = Summary::build(&[], &alloc).unwrap_err();
        assert_eq!(
            err,
            crate::ReportError::NodeCountMismatch { nodes: 0, allocation: 1 }
        );
    }
}
