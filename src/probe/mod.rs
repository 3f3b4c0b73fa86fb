//! Timing probe
//! Wraps one operation between two fenced clock reads

pub mod clock;

pub use clock::{serialize, Clock, CycleClock, MonotonicClock};

use std::hint::black_box;

/// Measures single operations against a fixed clock
pub struct Probe<C: Clock> {
    clock: C,
}

impl<C: Clock> Probe<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Run `op` once and return the elapsed ticks alongside its result.
    #[inline(always)]
    pub fn measure<F, R>(&self, op: F) -> (i64, R)
    where
        F: FnOnce() -> R,
    {
        let start = self.clock.now();
        let result = black_box(op());
        serialize();
        let end = self.clock.now();
        (end - start, result)
    }
}
