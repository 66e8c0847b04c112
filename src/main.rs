//! CLI entry point for the corridor map generator

use clap::Parser;
use tilepath::io::cli::{Cli, MapProcessor};
use tilepath::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> tilepath::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut processor = MapProcessor::new(cli);
    processor.process()
}
