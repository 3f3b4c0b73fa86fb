//! Runs the configured workload and assembles its report

use tracing::info;

use crate::bench::histogram::LatencyHistogram;
use crate::bench::memory::memory_used;
use crate::bench::workload::{bench_add, bench_erase, bench_find, populate};
use crate::config::RunConfig;
use crate::error::Result;
use crate::keygen::KeyGenerator;
use crate::probe::{Clock, CycleClock, MonotonicClock, Probe};
use crate::report::Report;
use crate::set::{KeySet, StringSet};
use crate::types::{ClockSource, Operation};

/// Run one workload against a fresh [`StringSet`] with the configured clock.
pub fn run(config: &RunConfig) -> Result<Report> {
    let mut set = StringSet::new();
    match config.clock {
        ClockSource::Nanos => run_on(&mut set, config, &Probe::new(MonotonicClock::new())),
        ClockSource::Cycles => run_on(&mut set, config, &Probe::new(CycleClock::default())),
    }
}

/// Run one workload against `set`.
///
/// Erase and find first populate the set untimed; only the workload's own
/// operations reach the histogram.
pub fn run_on<S, C>(set: &mut S, config: &RunConfig, probe: &Probe<C>) -> Result<Report>
where
    S: KeySet,
    C: Clock,
{
    let mut keys = KeyGenerator::new(config.seed);
    let mut hist = LatencyHistogram::new()?;
    let (n_keys, key_size, fraction) = (config.n_keys, config.key_size, config.fraction);

    info!(operation = %config.operation, n_keys, key_size, "Running benchmark");

    let (outcome, memory_before) = match config.operation {
        Operation::Add => {
            let outcome = bench_add(set, &mut keys, probe, &mut hist, n_keys, key_size);
            (outcome, None)
        }
        Operation::Erase => {
            let universe = populate(set, &mut keys, n_keys, key_size);
            let before = memory_used(&*set);
            let outcome = bench_erase(set, &universe, probe, &mut hist, n_keys, fraction);
            (outcome, Some(before))
        }
        Operation::Find => {
            let universe = populate(set, &mut keys, n_keys, key_size);
            let outcome = bench_find(&*set, &universe, probe, &mut hist, n_keys, fraction);
            (outcome, None)
        }
    };

    let report = Report::new(config, outcome, memory_before, memory_used(&*set), &hist);
    info!("Latency (jiffies) {}", report.latency);
    Ok(report)
}
