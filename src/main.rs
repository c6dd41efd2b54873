// Rust Timetable command-line entry point

use clap::Parser;
use rust_timetable::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.as_filter())
        .parse_default_env()
        .init();

    log::debug!("Starting rust-timetable");

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
