//! Command line flags
//!
//! Every flag is optional; a flag given on the command line overrides the
//! value loaded from the config file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "String set latency and memory benchmark", long_about = None)]
pub struct Args {
    /// Operation to benchmark. Only add, erase and find are allowed.
    #[arg(long)]
    pub operation: Option<String>,

    /// Size of each key.
    #[arg(long = "keySize")]
    pub key_size: Option<usize>,

    /// Number of keys to run the benchmark on.
    #[arg(long = "nKeys")]
    pub n_keys: Option<usize>,

    /// Fraction of the string set to erase/find, clamped to [0, 1].
    #[arg(long, allow_negative_numbers = true)]
    pub fraction: Option<f64>,

    /// Tick source: nanos or cycles.
    #[arg(long)]
    pub clock: Option<String>,

    /// Key generator seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report format: text or json.
    #[arg(long)]
    pub format: Option<String>,

    /// JSON config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective config to this file before running.
    #[arg(long = "save-config")]
    pub save_config: Option<PathBuf>,
}

impl Args {
    /// Load the file named by `--config`, or the one the environment names.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)?,
            None => Config::from_env()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, config: &mut Config) {
        let bench = &mut config.bench;
        if let Some(operation) = &self.operation {
            bench.operation = operation.clone();
        }
        if let Some(key_size) = self.key_size {
            bench.key_size = key_size;
        }
        if let Some(n_keys) = self.n_keys {
            bench.n_keys = n_keys;
        }
        if let Some(fraction) = self.fraction {
            bench.fraction = fraction;
        }
        if let Some(clock) = &self.clock {
            bench.clock = clock.clone();
        }
        if let Some(seed) = self.seed {
            bench.seed = seed;
        }
        if let Some(format) = &self.format {
            bench.format = format.clone();
        }
    }
}
