//! Memory accounting for the container under test

use crate::set::KeySet;
use serde::Serialize;

/// Object bytes plus index bytes reported by the container
#[inline]
pub fn memory_used<S: KeySet + ?Sized>(set: &S) -> usize {
    set.object_memory_used() + set.set_memory_used()
}

/// Footprint around a workload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryDelta {
    pub before: usize,
    pub after: usize,
}

impl MemoryDelta {
    /// Bytes released by the workload, zero if usage grew.
    pub fn released(&self) -> usize {
        self.before.saturating_sub(self.after)
    }
}
