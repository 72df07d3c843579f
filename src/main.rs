use std::process::ExitCode;

use clap::Parser;
use crew_datascore::{args::Args, processor};
use tracing::{error, info};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Load .env before clap reads the environment
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logging(&args.log_level);

    match processor::run(&args) {
        Ok(summary) => {
            info!(
                "Scoring complete: {} ranked, {} total, written: {}",
                summary.ranked, summary.total, summary.written
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            error!("Roster was not modified");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}
