use clap::Parser;
use codepoint::{codepoint, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let results = codepoint(&cli, &mut std::io::stdout().lock());
    if results.is_err() {
        eprintln!("Usage: codepoint [OPTIONS] <INPUT>...");
    }
    results
}
