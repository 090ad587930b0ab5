//! Allocator error types.

use distrib_core::InvalidEntity;
use thiserror::Error;

/// Errors that can occur during an allocation run.
///
/// Items that fit on no node are not an error; they are reported in
/// [`Allocation::unplaced`](crate::Allocation::unplaced).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocateError {
    #[error(transparent)]
    InvalidEntity(#[from] InvalidEntity),

    #[error("length mismatch: {names} names but {values} values")]
    LengthMismatch { names: usize, values: usize },

    #[error("allocation interrupted after {processed} of {total} items")]
    Interrupted { processed: usize, total: usize },
}

pub type AllocateResult<T> = Result<T, AllocateError>;
