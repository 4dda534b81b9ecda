// src/bin/pagerank.rs
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use pagerank_core::cli::{self, Cli};
use pagerank_core::exit::RankExit;

fn main() -> RankExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli::run(&cli) {
        Ok(()) => RankExit::Success,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            RankExit::from_error(&e)
        }
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
