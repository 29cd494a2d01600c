//! client-search - search client records from the command line
//!
//! Usage:
//!     client-search search "John Doe"
//!     client-search search gmail --field email --format json
//!     client-search duplicates --file clients.json
//!     client-search serve --port 4567

use clap::Parser;
use client_search::cli::Cli;
use client_search::config;

fn main() {
    config::load_dotenv();

    let cli = Cli::parse();
    client_search::tracing::init_with_filter(client_search::tracing::filter_for_level(
        &cli.log_level,
    ));

    if let Err(e) = cli.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
