//! String set benchmark CLI

use clap::Parser;
use mimalloc::MiMalloc;
use sset_bench::config::LoggingConfig;
use sset_bench::{run, Args, ReportFormat};
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn init_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if logging.json_output {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let start = Instant::now();

    let args = Args::parse();
    let config = args.load_config()?;
    init_logging(&config.logging)?;

    if let Some(path) = &args.save_config {
        config.save(path)?;
        info!("Saved effective config to {}", path.display());
    }

    let run_config = match config.validate() {
        Ok(run_config) => run_config,
        Err(e) => {
            error!("{}", e);
            return Err(e.into());
        }
    };

    let report = run(&run_config)?;
    match run_config.format {
        ReportFormat::Text => {
            print!("{}", report);
            println!("Took {} ms", start.elapsed().as_millis());
        }
        ReportFormat::Json => {
            // keep stdout a single JSON document
            println!("{}", report.to_json()?);
            info!("Took {} ms", start.elapsed().as_millis());
        }
    }
    Ok(())
}
