//! Cooperative interruption of long allocation runs.
//!
//! The placer polls an [`Interrupt`] every few thousand items and stops
//! with [`AllocateError::Interrupted`](crate::AllocateError::Interrupted)
//! once it reports `true`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// A stop condition polled by the placer.
pub trait Interrupt {
    fn should_stop(&self) -> bool;
}

/// Never interrupts. Used by [`allocate`](crate::allocate).
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Interrupt for Never {
    fn should_stop(&self) -> bool {
        false
    }
}

/// A cloneable, thread-safe cancellation flag.
///
/// All clones observe the same flag; cancelling any of them stops every
/// run polling it.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Interrupt for CancellationToken {
    fn should_stop(&self) -> bool {
        self.is_cancelled()
    }
}

/// Stops once a wall-clock instant has passed.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    /// A deadline `limit` from now.
    pub fn after(limit: Duration) -> Self {
        Self::at(Instant::now() + limit)
    }
}

impl Interrupt for Deadline {
    fn should_stop(&self) -> bool {
        Instant::now() >= self.at
    }
}

impl<I: Interrupt + ?Sized> Interrupt for &I {
    fn should_stop(&self) -> bool {
        (**self).should_stop()
    }
}

impl<A: Interrupt, B: Interrupt> Interrupt for (A, B) {
    fn should_stop(&self) -> bool {
        self.0.should_stop() || self.1.should_stop()
    }
}
