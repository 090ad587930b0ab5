//! Chartable series for a stacked bar chart.
//!
//! One bar per node: the placed items stacked in placement order, topped by
//! a leftover segment equal to the node's residual capacity.

use distrib_core::Node;
use distrib_placement::Allocation;
use serde::{Deserialize, Serialize};

use crate::{ReportResult, check_nodes};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub item: String,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBar {
    pub node: String,
    pub capacity: f64,
    /// Bottom to top.
    pub segments: Vec<Segment>,
    pub leftover: f64,
}

impl NodeBar {
    pub fn used(&self) -> f64 {
        self.segments.iter().map(|s| s.size).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub bars: Vec<NodeBar>,
}

impl ChartSeries {
    pub fn build(nodes: &[Node], allocation: &Allocation) -> ReportResult<Self> {
        check_nodes(nodes, allocation)?;

        let bars = nodes
            .iter()
            .zip(&allocation.placements)
            .zip(&allocation.residual)
            .map(|((node, placed), &leftover)| NodeBar {
                node: node.name().to_string(),
                capacity: node.capacity(),
                segments: placed
                    .iter()
                    .map(|item| Segment {
                        item: item.name().to_string(),
                        size: item.size(),
                    })
                    .collect(),
                leftover,
            })
            .collect();

        Ok(Self { bars })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
