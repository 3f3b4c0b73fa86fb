//! Core types for the string set benchmark

use crate::error::BenchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workload selected for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Erase,
    Find,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Erase => "erase",
            Operation::Find => "find",
        }
    }
}

impl FromStr for Operation {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "erase" => Ok(Operation::Erase),
            "find" => Ok(Operation::Find),
            other => Err(BenchError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tick source used by the timing probe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockSource {
    /// Monotonic wall clock, ticks are nanoseconds
    #[default]
    Nanos,
    /// Raw processor cycle counter
    Cycles,
}

impl FromStr for ClockSource {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nanos" => Ok(ClockSource::Nanos),
            "cycles" => Ok(ClockSource::Cycles),
            other => Err(BenchError::UnknownClock(other.to_string())),
        }
    }
}

/// How the final report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(BenchError::UnknownFormat(other.to_string())),
        }
    }
}

/// Result of a single workload driver call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkloadOutcome {
    /// Sum of all measured intervals, in clock ticks
    pub total_ticks: i64,
    /// Number of operations that were timed and recorded
    pub timed_ops: u64,
    /// Candidate keys discarded because the set already held them
    pub rejected: u64,
}

impl WorkloadOutcome {
    pub(crate) fn charge(&mut self, ticks: i64) {
        self.total_ticks += ticks;
        self.timed_ops += 1;
    }

    /// Total elapsed in whole milliseconds (mega-ticks for the cycle clock).
    pub fn total_ms(&self) -> i64 {
        self.total_ticks / 1_000_000
    }
}
