//! ssl-expiry - batch TLS certificate expiry checker
//!
//! Reads a list of hosts, probes each one with a bounded number of
//! concurrent TLS handshakes and reports whether its certificate is
//! expired, expiring soon or healthy.

use clap::Parser;
use ssl_expiry::cli::Cli;
use ssl_expiry::commands;
use ssl_expiry::config::Settings;
use ssl_expiry::output::print_error;
use ssl_expiry::utils::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Install the ring crypto provider for rustls
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::load_default()?,
    };
    cli.apply_overrides(&mut settings.probe);

    commands::run_batch(&cli.urls, settings, cli.format).await?;
    Ok(())
}
