//! distrib reports — read-only views over an [`Allocation`].
//!
//! - **`summary`** — `ITEM NODE` lines, `NULL` for unplaced items
//! - **`chart`** — per-node stacked segments plus a leftover segment
//! - **`format`** — human-readable capacity overview
//!
//! Nothing here performs I/O; writing files and drawing charts is left to
//! the caller.

pub mod chart;
pub mod format;
pub mod summary;

use distrib_core::Node;
use distrib_placement::Allocation;
use thiserror::Error;

pub use chart::{ChartSeries, NodeBar, Segment};
pub use format::format_report;
pub use summary::{NULL_NODE, Summary, SummaryLine};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    #[error("allocation covers {allocation} nodes but {nodes} nodes were given")]
    NodeCountMismatch { nodes: usize, allocation: usize },
}

pub type ReportResult<T> = Result<T, ReportError>;

pub(crate) fn check_nodes(nodes: &[Node], allocation: &Allocation) -> ReportResult<()> {
    if nodes.len() != allocation.node_count()
        || nodes.len() != allocation.residual.len()
        || nodes.len() != allocation.used.len()
    {
        return Err(ReportError::NodeCountMismatch {
            nodes: nodes.len(),
            allocation: allocation.node_count(),
        });
    }
    Ok(())
}
