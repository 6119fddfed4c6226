use std::io;
use std::process::ExitCode;

use rydz::booking::BookingDesk;
use rydz::cli;
use rydz::config::{Config, PricingMode};
use rydz::pricer::Pricer;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only responses
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rydz=info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let ratebook = match config.ratebook() {
        Ok(ratebook) => ratebook,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mode = match &config.pricing {
        PricingMode::Postcode { .. } => "postcode",
        PricingMode::Distance { .. } => "distance",
    };
    tracing::info!(pricing = mode, "rydz ready, reading requests from stdin");

    let mut desk = BookingDesk::in_memory(Pricer::new(ratebook));
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = cli::run(&mut desk, stdin.lock(), stdout.lock()) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
