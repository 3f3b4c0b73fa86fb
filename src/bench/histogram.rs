//! Latency histogram
//! Per-operation samples bucketed in jiffies (100 ticks)

use hdrhistogram::Histogram;
use serde::Serialize;
use std::fmt;

use crate::error::Result;

/// Ticks per recorded jiffy
pub const JIFFY_TICKS: i64 = 100;

/// Width of the widest bar in the rendered distribution
const BAR_WIDTH: f64 = 20.0;

/// Append-only latency distribution
pub struct LatencyHistogram {
    inner: Histogram<u64>,
}

impl LatencyHistogram {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // 3 significant figures, auto-resizing upper bound
            inner: Histogram::<u64>::new(3)?,
        })
    }

    /// Record one measured interval given in raw ticks.
    #[inline]
    pub fn record(&mut self, ticks: i64) {
        let jiffies = (ticks / JIFFY_TICKS).max(0) as u64;
        self.inner.saturating_record(jiffies);
    }

    /// Number of recorded samples
    pub fn len(&self) -> u64 {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> LatencySummary {
        if self.is_empty() {
            return LatencySummary::default();
        }
        LatencySummary {
            count: self.inner.len(),
            mean: self.inner.mean(),
            min: self.inner.min(),
            p50: self.inner.value_at_quantile(0.50),
            p99: self.inner.value_at_quantile(0.99),
            max: self.inner.max(),
        }
    }

    /// Textual distribution, one row per power-of-two jiffy bucket.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LatencyHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary();
        writeln!(
            f,
            "Count: {}  Average: {:.4}  StdDev: {:.2}",
            summary.count,
            summary.mean,
            self.inner.stdev()
        )?;
        writeln!(f, "Min: {}  Median: {}  Max: {}", summary.min, summary.p50, summary.max)?;
        writeln!(f, "{}", "-".repeat(64))?;
        if summary.count == 0 {
            return Ok(());
        }

        let total = summary.count as f64;
        let mut lower = 0u64;
        for step in self.inner.iter_log(1, 2.0) {
            let upper = step.value_iterated_to();
            let count = step.count_since_last_iteration();
            if count > 0 {
                let pct = count as f64 * 100.0 / total;
                writeln!(
                    f,
                    "[ {:>8}, {:>8} ] {:>10} {:>8.3}% {:>8.3}% {}",
                    lower,
                    upper,
                    count,
                    pct,
                    step.percentile(),
                    "#".repeat((pct * BAR_WIDTH / 100.0).round() as usize)
                )?;
            }
            lower = upper + 1;
        }
        Ok(())
    }
}

/// Quantile summary in jiffies
#[derive(Debug, Clone, Default, Serialize)]
pub struct LatencySummary {
    pub count: u64,
    pub mean: f64,
    pub min: u64,
    pub p50: u64,
    pub p99: u64,
    pub max: u64,
}

impl fmt::Display for LatencySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n: {:>8} | avg: {:>8.2} | min: {:>6} | p50: {:>6} | p99: {:>6} | max: {:>6}",
            self.count, self.mean, self.min, self.p50, self.p99, self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let hist = LatencyHistogram::new().unwrap();
        assert!(hist.is_empty());
        assert_eq!(hist.summary().count, 0);
    }

    #[test]
    fn test_record_counts_samples() {
        let mut hist = LatencyHistogram::new().unwrap();
        for ticks in [0, 99, 100, 250, 10_000] {
            hist.record(ticks);
        }
        assert_eq!(hist.len(), 5);

        let summary = hist.summary();
        assert_eq!(summary.min, 0);
        assert_eq!(summary.max, 100);
        assert!(summary.p50 <= summary.p99);
    }

    #[test]
    fn test_negative_ticks_clamp_to_zero() {
        let mut hist = LatencyHistogram::new().unwrap();
        hist.record(-500);
        assert_eq!(hist.len(), 1);
        assert_eq!(hist.summary().max, 0);
    }

    #[test]
    fn test_render_empty() {
        let hist = LatencyHistogram::new().unwrap();
        let text = hist.render();
        assert!(text.starts_with("Count: 0"));
        assert!(!text.contains('['));
    }

    #[test]
    fn test_render_buckets_sum_to_count() {
        let mut hist = LatencyHistogram::new().unwrap();
        for i in 0..1000i64 {
            hist.record(i * 37);
        }
        let text = hist.render();
        assert!(text.starts_with("Count: 1000"));

        let bucketed: u64 = text
            .lines()
            .filter(|l| l.starts_with('['))
            .map(|l| {
                let after = l.split(']').nth(1).unwrap();
                after.split_whitespace().next().unwrap().parse::<u64>().unwrap()
            })
            .sum();
        assert_eq!(bucketed, 1000);
    }
}
