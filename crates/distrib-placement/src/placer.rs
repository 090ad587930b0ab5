//! Placement engine — greedy decreasing-size, least-used-first fit.
//!
//! 1. Items are ordered by descending size (stable: equal sizes keep their
//!    input order).
//! 2. Each item goes to the node with the smallest used space among those
//!    with `capacity - used >= size`, lowest node index on ties.
//! 3. Items with no such node are collected as unplaced.
//!
//! The run is a single iterative pass. Node order is never changed, so
//! `placements[i]` and `residual[i]` always refer to `nodes[i]`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use distrib_core::{InvalidEntity, Item, Node};

use crate::error::{AllocateError, AllocateResult};
use crate::interrupt::{Interrupt, Never};
use crate::ledger::NodeLedger;

/// Poll the interrupt every 4096 items.
const INTERRUPT_CHECK_MASK: usize = 0xFFF;

/// The outcome of one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Items per node, indexed like the node list, in assignment order.
    pub placements: Vec<Vec<Item>>,
    /// Items that fit on no node when they were considered, in the order
    /// they were considered.
    pub unplaced: Vec<Item>,
    /// Space taken on each node.
    pub used: Vec<f64>,
    /// `capacity - used` for each node.
    pub residual: Vec<f64>,
}

impl Allocation {
    pub fn node_count(&self) -> usize {
        self.placements.len()
    }

    pub fn placed_count(&self) -> usize {
        self.placements.iter().map(Vec::len).sum()
    }

    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Whether every item found a node.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    pub fn used(&self, node: usize) -> f64 {
        self.used[node]
    }
}

/// Allocate `items` onto `nodes`. Never interrupted.
pub fn allocate(nodes: &[Node], items: &[Item]) -> AllocateResult<Allocation> {
    allocate_with(nodes, items, &Never)
}

/// Allocate `items` onto `nodes`, polling `interrupt` periodically.
///
/// Returns [`AllocateError::Interrupted`] if the interrupt fires before the
/// pass completes; no partial allocation is returned.
pub fn allocate_with<I>(nodes: &[Node], items: &[Item], interrupt: &I) -> AllocateResult<Allocation>
where
    I: Interrupt + ?Sized,
{
    validate(nodes, items)?;

    debug!(nodes = nodes.len(), items = items.len(), "Starting allocation");

    let mut order: Vec<usize> = (0..items.len()).collect();
    // `sort_by` is stable, which keeps equal sizes in input order. NaN was
    // rejected above, and `partial_cmp` treats `-0.0` and `0.0` as equal.
    order.sort_by(|&a, &b| {
        items[b]
            .size()
            .partial_cmp(&items[a].size())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ledger = NodeLedger::new(nodes);
    let mut placements: Vec<Vec<Item>> = vec![Vec::new(); nodes.len()];
    let mut unplaced = Vec::new();

    for (processed, &item_idx) in order.iter().enumerate() {
        if processed & INTERRUPT_CHECK_MASK == 0 && interrupt.should_stop() {
            warn!(processed, total = items.len(), "Allocation interrupted");
            return Err(AllocateError::Interrupted {
                processed,
                total: items.len(),
            });
        }

        let item = &items[item_idx];
        match ledger.select(item.size()) {
            Some(node_idx) => {
                trace!(item = item.name(), node = nodes[node_idx].name(), "Placing item");
                ledger.commit(node_idx, item.size());
                placements[node_idx].push(item.clone());
            }
            None => {
                trace!(item = item.name(), size = item.size(), "No node can fit item");
                unplaced.push(item.clone());
            }
        }
    }

    let (used, residual) = ledger.finish();
    let allocation = Allocation {
        placements,
        unplaced,
        used,
        residual,
    };

    if !allocation.is_complete() {
        warn!(
            unplaced = allocation.unplaced_count(),
            "Could not place all items: insufficient node capacity"
        );
    }
    debug!(
        placed = allocation.placed_count(),
        unplaced = allocation.unplaced_count(),
        "Allocation finished"
    );

    Ok(allocation)
}

/// Reject entities that bypassed the checked constructors (e.g. via serde).
fn validate(nodes: &[Node], items: &[Item]) -> Result<(), InvalidEntity> {
    for node in nodes {
        Node::new(node.name(), node.capacity())?;
    }
    for item in items {
        Item::new(item.name(), item.size())?;
    }
    Ok(())
}
