//! Benchmark module
//! Workload drivers, latency aggregation and memory accounting

pub mod histogram;
pub mod memory;
pub mod runner;
pub mod workload;

pub use histogram::{LatencyHistogram, LatencySummary, JIFFY_TICKS};
pub use memory::{memory_used, MemoryDelta};
pub use runner::{run, run_on};
pub use workload::{
    bench_add,
    bench_erase,
    bench_find,
    clamp_fraction,
    populate,
    sample_count,
    KeyUniverse,
};
