use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use neurofocus_cli::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so stdout stays clean for results.
    if std::env::var_os("NEUROFOCUS_LOG_JSON").is_some() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    neurofocus_cli::commands::run(Cli::parse()).await
}
