//! Entity model: capacity-bounded nodes and sized items.
//!
//! Both types are immutable once built. Their constructors reject negative
//! and non-finite values, so anything holding a `Node` or `Item` can rely
//! on `size >= 0.0` and `capacity >= 0.0`.

use serde::{Deserialize, Serialize};

use crate::error::InvalidEntity;

/// A placement target with a fixed capacity.
///
/// Used space is not tracked here; the allocator keeps it in its own
/// working state indexed by node position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    name: String,
    capacity: f64,
}

impl Node {
    pub fn new(name: impl Into<String>, capacity: f64) -> Result<Self, InvalidEntity> {
        let name = name.into();
        let capacity = check_magnitude("node", &name, capacity)?;
        Ok(Self { name, capacity })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }
}

/// A sized unit ("file") to be placed on exactly one node.
///
/// Duplicate names are allowed; items are identified by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    size: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, size: f64) -> Result<Self, InvalidEntity> {
        let name = name.into();
        let size = check_magnitude("item", &name, size)?;
        Ok(Self { name, size })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> f64 {
        self.size
    }
}

/// Returns the value with `-0.0` folded to `0.0`.
fn check_magnitude(what: &'static str, name: &str, value: f64) -> Result<f64, InvalidEntity> {
    if value.is_finite() && value >= 0.0 {
        Ok(value + 0.0)
    } else {
        Err(InvalidEntity {
            what,
            name: name.to_string(),
            value,
        })
    }
}
