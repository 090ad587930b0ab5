//! Type conversions from parsed records to placement entities.
//!
//! Bridges `distrib_core::Record` (what the parser yields for both node
//! and file lists) to `Node` and `Item`.

use distrib_core::{InvalidEntity, Item, Node, Record};

use crate::error::{AllocateError, AllocateResult};

/// Convert `NAME CAPACITY` records into nodes, keeping their order.
pub fn records_to_nodes(records: &[Record]) -> Result<Vec<Node>, InvalidEntity> {
    records
        .iter()
        .map(|r| Node::new(r.name.clone(), r.value))
        .collect()
}

/// Convert `NAME SIZE` records into items, keeping their order.
pub fn records_to_items(records: &[Record]) -> Result<Vec<Item>, InvalidEntity> {
    records
        .iter()
        .map(|r| Item::new(r.name.clone(), r.value))
        .collect()
}

/// Build nodes from parallel name and capacity columns.
pub fn nodes_from_columns<S: AsRef<str>>(names: &[S], capacities: &[f64]) -> AllocateResult<Vec<Node>> {
    if names.len() != capacities.len() {
        return Err(AllocateError::LengthMismatch {
            names: names.len(),
            values: capacities.len(),
        });
    }

    names
        .iter()
        .zip(capacities)
        .map(|(name, &cap)| Node::new(name.as_ref(), cap).map_err(AllocateError::from))
        .collect()
}
