// Entry point: loads config, samples, and writes the concentration figures.
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ndnormal::app;
use ndnormal::cli::Args;
use ndnormal::config::AppConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut cfg = AppConfig::load_or_default(&args.config);
    app::apply_overrides(&mut cfg, &args);

    match app::run(&cfg, args.figure) {
        Ok(paths) => info!("Saved {} figure(s) to {}", paths.len(), cfg.output.dir.display()),
        Err(err) => {
            error!("ndnormal failed: {err}");
            std::process::exit(1);
        }
    }
}
