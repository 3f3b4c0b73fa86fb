//! String Set Benchmark
//!
//! Measures per-operation latency and memory footprint of a string set under
//! insert, erase and find workloads.
//!
//! ## Architecture
//! - Keygen: seeded fixed-length keys, one-character mutation per candidate
//! - Probe: fenced tick reads around a single operation (nanos or cycles)
//! - Set: the `KeySet` seam and the reference `StringSet`
//! - Bench: workload drivers, latency histogram, memory accounting, runner
//! - Report: console and JSON rendering of a finished workload

pub mod bench;
pub mod cli;
pub mod config;
pub mod error;
pub mod keygen;
pub mod probe;
pub mod report;
pub mod set;
pub mod types;

pub use bench::{run, run_on, LatencyHistogram};
pub use cli::Args;
pub use config::{Config, RunConfig};
pub use error::BenchError;
pub use keygen::KeyGenerator;
pub use probe::{Clock, CycleClock, MonotonicClock, Probe};
pub use report::Report;
pub use set::{KeySet, StringSet};
pub use types::{ClockSource, Operation, ReportFormat, WorkloadOutcome};
