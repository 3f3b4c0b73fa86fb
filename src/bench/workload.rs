//! Workload drivers
//!
//! Each driver takes the container, probe and histogram explicitly and
//! returns a [`WorkloadOutcome`], so a workload can be run in isolation.
//!
//! Insert-until-N keeps mutating a candidate until the set holds `n_keys`
//! entries. If the alphabet cannot produce that many distinct keys of
//! `key_size` characters (36^key_size < n_keys) the loop never terminates;
//! picking a large enough key size is on the caller.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::bench::histogram::LatencyHistogram;
use crate::keygen::KeyGenerator;
use crate::probe::{Clock, Probe};
use crate::set::KeySet;
use crate::types::WorkloadOutcome;

/// Keys inserted during pre-population, owned apart from the container
pub type KeyUniverse = HashSet<String>;

/// Clamp an erase/find fraction into [0, 1].
pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0)
}

/// `floor(n_keys * fraction)` with the fraction clamped first.
pub fn sample_count(n_keys: usize, fraction: f64) -> usize {
    (n_keys as f64 * clamp_fraction(fraction)).floor() as usize
}

/// Time one insertion per fresh key until the set holds `n_keys` entries.
///
/// Candidates the set already contains are discarded untimed and counted in
/// `rejected`.
pub fn bench_add<S, C>(
    set: &mut S,
    keys: &mut KeyGenerator,
    probe: &Probe<C>,
    hist: &mut LatencyHistogram,
    n_keys: usize,
    key_size: usize,
) -> WorkloadOutcome
where
    S: KeySet,
    C: Clock,
{
    info!(n_keys, key_size, "Starting insert workload");

    let mut outcome = WorkloadOutcome::default();
    let mut candidate = keys.random_key(key_size);

    while set.upper_bound_size() < n_keys {
        keys.mutate(&mut candidate);
        if set.contains(&candidate) {
            outcome.rejected += 1;
            continue;
        }

        let (ticks, _) = probe.measure(|| set.add(candidate.clone()));
        hist.record(ticks);
        outcome.charge(ticks);
    }

    debug!(rejected = outcome.rejected, "Insert workload rejected duplicates");
    info!(timed_ops = outcome.timed_ops, total_ticks = outcome.total_ticks, "Insert workload done");
    outcome
}

/// Fill the set to `n_keys` entries without timing, recording every key.
pub fn populate<S: KeySet>(
    set: &mut S,
    keys: &mut KeyGenerator,
    n_keys: usize,
    key_size: usize,
) -> KeyUniverse {
    info!(n_keys, key_size, "Populating string set");

    let mut universe = KeyUniverse::with_capacity(n_keys);
    let mut candidate = keys.random_key(key_size);

    while set.upper_bound_size() < n_keys {
        keys.mutate(&mut candidate);
        if set.add(candidate.clone()) {
            universe.insert(candidate.clone());
        }
    }

    debug!(universe = universe.len(), "Population done");
    universe
}

/// Time an erase for the first `floor(n_keys * fraction)` keys of the universe.
pub fn bench_erase<S, C>(
    set: &mut S,
    universe: &KeyUniverse,
    probe: &Probe<C>,
    hist: &mut LatencyHistogram,
    n_keys: usize,
    fraction: f64,
) -> WorkloadOutcome
where
    S: KeySet,
    C: Clock,
{
    info!(n_keys, fraction, "Starting erase workload");
    let outcome = sample_universe(universe, probe, hist, n_keys, fraction, |key| set.erase(key));
    info!(timed_ops = outcome.timed_ops, total_ticks = outcome.total_ticks, "Erase workload done");
    outcome
}

/// Time a find for the first `floor(n_keys * fraction)` keys of the universe.
pub fn bench_find<S, C>(
    set: &S,
    universe: &KeyUniverse,
    probe: &Probe<C>,
    hist: &mut LatencyHistogram,
    n_keys: usize,
    fraction: f64,
) -> WorkloadOutcome
where
    S: KeySet,
    C: Clock,
{
    info!(n_keys, fraction, "Starting find workload");
    let outcome = sample_universe(universe, probe, hist, n_keys, fraction, |key| {
        set.find(key).is_some()
    });
    info!(timed_ops = outcome.timed_ops, total_ticks = outcome.total_ticks, "Find workload done");
    outcome
}

// Walks the universe in its own iteration order, not a random subsample.
fn sample_universe<C, F, R>(
    universe: &KeyUniverse,
    probe: &Probe<C>,
    hist: &mut LatencyHistogram,
    n_keys: usize,
    fraction: f64,
    mut op: F,
) -> WorkloadOutcome
where
    C: Clock,
    F: FnMut(&str) -> R,
{
    let mut outcome = WorkloadOutcome::default();
    for key in universe.iter().take(sample_count(n_keys, fraction)) {
        let (ticks, _) = probe.measure(|| op(key));
        hist.record(ticks);
        outcome.charge(ticks);
    }
    outcome
}
