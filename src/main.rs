//! pede compiler CLI entry point

use clap::Parser;

fn main() {
    let cli = pede::cli::Cli::parse();

    // Initialize structured logging; --log wins over RUST_LOG, defaulting to info
    let rust_log = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
    let filter = pede::cli::log_filter(cli.log, rust_log.as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    pede::cli::run(cli);
}
