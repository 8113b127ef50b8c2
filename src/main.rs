//! repofuse binary entry point.

mod cli;

use cli::style::Stylize;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        anstream::eprintln!("{} {e}", "Error:".error());
        std::process::exit(1);
    }
}
