//! distrib allocator — greedy bin-packing of sized items onto nodes.
//!
//! Items are considered largest first. Each one goes to the node with the
//! least used space among the nodes it still fits on; items that fit
//! nowhere are returned as unplaced. Node order is caller-supplied and
//! preserved in every per-node output.
//!
//! # Components
//!
//! - **`placer`** — `allocate` / `allocate_with` and the `Allocation` result
//! - **`ledger`** — per-run working state (used space per node position)
//! - **`interrupt`** — cooperative cancellation and time limits
//! - **`convert`** — parsed records to `Node` / `Item`

pub mod convert;
pub mod error;
pub mod interrupt;
pub mod ledger;
pub mod placer;

pub use convert::{nodes_from_columns, records_to_items, records_to_nodes};
pub use error::{AllocateError, AllocateResult};
pub use interrupt::{CancellationToken, Deadline, Interrupt, Never};
pub use placer::{Allocation, allocate, allocate_with};
