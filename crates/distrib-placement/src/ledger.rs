//! Working state for one allocation run.
//!
//! Used space is tracked here, indexed by node position, rather than on the
//! `Node` values themselves. Two ordered indexes keep selection cheap:
//!
//! - `by_used`: `(used, index)` ascending, so the first fitting entry is the
//!   least-used candidate with the lowest index on ties.
//! - `by_residual`: `(residual, index)`, whose maximum rejects items that
//!   fit nowhere without walking any nodes.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use distrib_core::Node;

/// Totally ordered `f64` for use as a set key. Values are never NaN here.
#[derive(Debug, Clone, Copy)]
struct Key(f64);

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug)]
pub struct NodeLedger {
    capacity: Vec<f64>,
    used: Vec<f64>,
    by_used: BTreeSet<(Key, usize)>,
    by_residual: BTreeSet<(Key, usize)>,
}

impl NodeLedger {
    /// Start a run with every node empty, in the given order.
    pub fn new(nodes: &[Node]) -> Self {
        let capacity: Vec<f64> = nodes.iter().map(Node::capacity).collect();
        let used = vec![0.0; nodes.len()];
        let by_used = (0..nodes.len()).map(|i| (Key(0.0), i)).collect();
        let by_residual = capacity
            .iter()
            .enumerate()
            .map(|(i, &cap)| (Key(cap), i))
            .collect();

        Self {
            capacity,
            used,
            by_used,
            by_residual,
        }
    }

    pub fn len(&self) -> usize {
        self.capacity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capacity.is_empty()
    }

    pub fn used(&self, index: usize) -> f64 {
        self.used[index]
    }

    pub fn residual(&self, index: usize) -> f64 {
        self.capacity[index] - self.used[index]
    }

    pub fn fits(&self, index: usize, size: f64) -> bool {
        self.residual(index) >= size
    }

    /// Largest residual capacity over all nodes, `None` with no nodes.
    pub fn max_residual(&self) -> Option<f64> {
        self.by_residual.last().map(|(key, _)| key.0)
    }

    /// The least-used node that can take `size`, lowest index on ties.
    pub fn select(&self, size: f64) -> Option<usize> {
        if self.max_residual()? < size {
            return None;
        }
        self.by_used
            .iter()
            .map(|&(_, index)| index)
            .find(|&index| self.fits(index, size))
    }

    /// Record `size` as placed on `index`.
    pub fn commit(&mut self, index: usize, size: f64) {
        debug_assert!(self.fits(index, size), "commit would exceed capacity");

        let old_used = self.used[index];
        let old_residual = self.residual(index);
        self.by_used.remove(&(Key(old_used), index));
        self.by_residual.remove(&(Key(old_residual), index));

        self.used[index] = old_used + size;

        self.by_used.insert((Key(self.used[index]), index));
        self.by_residual.insert((Key(self.residual(index)), index));
    }

    /// Consume the ledger into `(used, residual)` vectors in node order.
    pub fn finish(self) -> (Vec<f64>, Vec<f64>) {
        let residual = self
            .capacity
            .iter()
            .zip(&self.used)
            .map(|(cap, used)| cap - used)
            .collect();
        (self.used, residual)
    }
}
