//! Tick sources and the serializing fence used around measured operations

use std::time::Instant;

/// A monotonic tick source. Ticks are signed so that two readings can be
/// subtracted without casts at every call site.
pub trait Clock {
    fn now(&self) -> i64;
}

/// Nanoseconds since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    anchor: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            anchor: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline(always)]
    fn now(&self) -> i64 {
        self.anchor.elapsed().as_nanos() as i64
    }
}

/// Raw processor cycle counter.
///
/// Falls back to monotonic nanoseconds on targets without a readable
/// counter, so the tick unit is only "cycles" on x86_64 and aarch64.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleClock {
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    fallback: MonotonicClock,
}

impl Clock for CycleClock {
    #[inline(always)]
    fn now(&self) -> i64 {
        #[cfg(target_arch = "x86_64")]
        {
            unsafe { std::arch::x86_64::_rdtsc() as i64 }
        }
        #[cfg(target_arch = "aarch64")]
        {
            let ticks: u64;
            unsafe {
                std::arch::asm!("mrs {}, cntvct_el0", out(reg) ticks, options(nomem, nostack));
            }
            ticks as i64
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            self.fallback.now()
        }
    }
}

/// Full serializing fence for the executing core.
///
/// Keeps the closing timestamp read from being hoisted above the measured
/// work by out-of-order execution.
#[inline(always)]
pub fn serialize() {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        std::arch::x86_64::_mm_lfence();
    }
    #[cfg(target_arch = "x86")]
    unsafe {
        std::arch::x86::_mm_lfence();
    }
    #[cfg(target_arch = "aarch64")]
    unsafe {
        std::arch::asm!("isb", options(nostack, preserves_flags));
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);
}
