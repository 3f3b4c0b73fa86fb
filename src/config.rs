//! Configuration module

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bench::workload::clamp_fraction;
use crate::error::{BenchError, Result};
use crate::keygen::DEFAULT_SEED;
use crate::types::{ClockSource, Operation, ReportFormat};

/// Environment variable naming the JSON config file
pub const CONFIG_ENV: &str = "SSET_BENCH_CONFIG";

/// Config file used when the environment does not name one
pub const DEFAULT_CONFIG_PATH: &str = "config/sset-bench.json";

/// Main configuration struct, as loaded from file and flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Workload settings
    pub bench: BenchConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Raw workload settings. Names stay strings until [`Config::validate`] so a
/// bad operation is reported as such rather than as a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BenchConfig {
    pub operation: String,
    pub key_size: usize,
    pub n_keys: usize,
    pub fraction: f64,
    pub clock: String,
    pub seed: u64,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json_output: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            operation: "add".to_string(),
            key_size: 100,
            n_keys: 10_000,
            fraction: 0.5,
            clock: "nanos".to_string(),
            seed: DEFAULT_SEED,
            format: "text".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_output: false,
        }
    }
}

/// Validated, immutable settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub operation: Operation,
    pub key_size: usize,
    pub n_keys: usize,
    /// Always within [0, 1]
    pub fraction: f64,
    pub clock: ClockSource,
    pub seed: u64,
    pub format: ReportFormat,
}

impl Config {
    /// Load config from the file named by the environment, or defaults if
    /// that file does not exist.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_path(path)
    }

    /// Load config from `path`, falling back to defaults if it is missing.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| BenchError::ConfigParse {
            path: PathBuf::from(path),
            source,
        })
    }

    /// Save config to file
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check names and ranges once, before any workload runs.
    ///
    /// The fraction is clamped into [0, 1] and never rejected.
    pub fn validate(&self) -> Result<RunConfig> {
        let bench = &self.bench;
        let operation = bench.operation.parse::<Operation>()?;
        if bench.key_size == 0 {
            return Err(BenchError::InvalidKeySize);
        }

        Ok(RunConfig {
            operation,
            key_size: bench.key_size,
            n_keys: bench.n_keys,
            fraction: clamp_fraction(bench.fraction),
            clock: bench.clock.parse()?,
            seed: bench.seed,
            format: bench.format.parse()?,
        })
    }
}
