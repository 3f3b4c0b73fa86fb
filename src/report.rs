//! Console report for a finished workload

use serde::Serialize;
use std::fmt;

use crate::bench::histogram::{LatencyHistogram, LatencySummary};
use crate::bench::memory::MemoryDelta;
use crate::bench::workload::sample_count;
use crate::config::RunConfig;
use crate::types::{ClockSource, Operation, WorkloadOutcome};

/// Everything printed after a workload
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub operation: Operation,
    pub n_keys: usize,
    pub key_size: usize,
    pub fraction: f64,
    pub clock: ClockSource,
    pub outcome: WorkloadOutcome,
    /// Only sampled for erase, where the workload frees memory
    pub memory_before: Option<usize>,
    pub memory_after: usize,
    pub latency: LatencySummary,
    pub histogram: String,
}

impl Report {
    pub fn new(
        config: &RunConfig,
        outcome: WorkloadOutcome,
        memory_before: Option<usize>,
        memory_after: usize,
        hist: &LatencyHistogram,
    ) -> Self {
        Self {
            operation: config.operation,
            n_keys: config.n_keys,
            key_size: config.key_size,
            fraction: config.fraction,
            clock: config.clock,
            outcome,
            memory_before,
            memory_after,
            latency: hist.summary(),
            histogram: hist.render(),
        }
    }

    pub fn memory_delta(&self) -> Option<MemoryDelta> {
        self.memory_before.map(|before| MemoryDelta {
            before,
            after: self.memory_after,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// 0.3 -> "30", 0.125 -> "12.5"
fn percent(fraction: f64) -> String {
    let text = format!("{:.2}", fraction * 100.0);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.outcome.total_ms();
        let sampled = sample_count(self.n_keys, self.fraction);

        match self.operation {
            Operation::Add => {
                writeln!(
                    f,
                    "Total time taken to insert {} keys with each key is size of {} is: {} ms",
                    self.n_keys, self.key_size, ms
                )?;
                writeln!(
                    f,
                    "Memory consumed after performing insert operation is : {} Bytes",
                    self.memory_after
                )?;
            }
            Operation::Erase => {
                writeln!(
                    f,
                    "Total time taken to Erase {} keys with each key is size of {} is: {} ms",
                    sampled, self.key_size, ms
                )?;
                writeln!(
                    f,
                    "Memory consumed before erasing {}% of string set is {} Bytes and after performing erase operation is {} Bytes",
                    percent(self.fraction),
                    self.memory_before.unwrap_or(self.memory_after),
                    self.memory_after
                )?;
            }
            Operation::Find => {
                writeln!(
                    f,
                    "Total time taken to Find {} keys with each key is size of {} is: {} ms",
                    sampled, self.key_size, ms
                )?;
                writeln!(
                    f,
                    "Memory consumed after performing find operation is : {} Bytes",
                    self.memory_after
                )?;
            }
        }

        if self.clock == ClockSource::Cycles {
            writeln!(f, "Ticks are processor cycles, time figures are in mega-cycles")?;
        }
        writeln!(
            f,
            "String Set individual {} latencies histogram (jiffies, {}):",
            match self.operation {
                Operation::Add => "insert",
                Operation::Erase => "erase",
                Operation::Find => "find",
            },
            match self.clock {
                ClockSource::Nanos => "100ns",
                ClockSource::Cycles => "100 cycles",
            }
        )?;
        write!(f, "{}", self.histogram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReportFormat;

    fn run_config(operation: Operation) -> RunConfig {
        RunConfig {
            operation,
            key_size: 10,
            n_keys: 100,
            fraction: 0.3,
            clock: ClockSource::Nanos,
            seed: 0,
            format: ReportFormat::Text,
        }
    }

    fn outcome(total_ticks: i64, timed_ops: u64) -> WorkloadOutcome {
        WorkloadOutcome {
            total_ticks,
            timed_ops,
            rejected: 0,
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.3), "30");
        assert_eq!(percent(0.125), "12.5");
        assert_eq!(percent(1.0), "100");
        assert_eq!(percent(0.0), "0");
    }

    #[test]
    fn test_add_report_lines() {
        let mut hist = LatencyHistogram::new().unwrap();
        hist.record(300);
        let report = Report::new(&run_config(Operation::Add), outcome(3_400_000, 1), None, 2048, &hist);
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Total time taken to insert 100 keys with each key is size of 10 is: 3 ms"
        );
        assert_eq!(lines[1], "Memory consumed after performing insert operation is : 2048 Bytes");
        assert_eq!(lines[2], "String Set individual insert latencies histogram (jiffies, 100ns):");
        assert!(lines[3].starts_with("Count: 1"));
    }

    #[test]
    fn test_erase_report_has_memory_pair() {
        let hist = LatencyHistogram::new().unwrap();
        let report = Report::new(
            &run_config(Operation::Erase),
            outcome(0, 0),
            Some(5000),
            4000,
            &hist,
        );
        let text = report.to_string();

        assert!(text.starts_with("Total time taken to Erase 30 keys"));
        assert!(text.contains(
            "Memory consumed before erasing 30% of string set is 5000 Bytes and after performing erase operation is 4000 Bytes"
        ));
        assert_eq!(report.memory_delta().unwrap().released(), 1000);
    }

    #[test]
    fn test_find_report() {
        let hist = LatencyHistogram::new().unwrap();
        let report = Report::new(&run_config(Operation::Find), outcome(0, 0), None, 777, &hist);
        let text = report.to_string();
        assert!(text.starts_with("Total time taken to Find 30 keys"));
        assert!(text.contains("find latencies histogram"));
        assert!(report.memory_delta().is_none());
    }

    #[test]
    fn test_cycle_clock_jiffy_label() {
        let mut config = run_config(Operation::Add);
        config.clock = ClockSource::Cycles;
        let hist = LatencyHistogram::new().unwrap();
        let text = Report::new(&config, outcome(0, 0), None, 64, &hist).to_string();

        assert!(text.contains("insert latencies histogram (jiffies, 100 cycles):"));
        assert!(!text.contains("100ns"));
    }

    #[test]
    fn test_json_report() {
        let mut hist = LatencyHistogram::new().unwrap();
        hist.record(1000);
        let report = Report::new(&run_config(Operation::Add), outcome(1000, 1), None, 64, &hist);

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["operation"], "add");
        assert_eq!(value["outcome"]["timed_ops"], 1);
        assert_eq!(value["memory_after"], 64);
        assert!(value["memory_before"].is_null());
        assert_eq!(value["latency"]["count"], 1);
    }
}
