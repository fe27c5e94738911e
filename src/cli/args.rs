//! CLI argument definitions using clap

use crate::config::ProbeSettings;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ssl-expiry")]
#[command(version)]
#[command(about = "Check TLS certificates of many hosts for upcoming expiry", long_about = None)]
pub struct Cli {
    /// Path to file containing the hosts, one per line ('-' reads stdin)
    #[arg(short, long, value_name = "FILE")]
    pub urls: PathBuf,

    /// Warn of certificate expiration due in NUM days [default: 7]
    #[arg(short, long, value_name = "NUM")]
    pub days: Option<i64>,

    /// Maximum number of hosts probed at once [default: 4]
    #[arg(short, long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// TCP connect timeout in seconds [default: 15]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// TLS handshake timeout in seconds [default: 15]
    #[arg(long, value_name = "SECS")]
    pub handshake_timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Settings file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored line per host plus a summary
    Text,
    /// One JSON object per host
    Json,
}

impl Cli {
    /// Apply flags given on the command line over file-based settings
    pub fn apply_overrides(&self, probe: &mut ProbeSettings) {
        if let Some(days) = self.days {
            probe.threshold_days = days;
        }
        if let Some(concurrency) = self.concurrency {
            probe.concurrency = concurrency;
        }
        if let Some(timeout) = self.timeout {
            probe.connect_timeout_secs = timeout;
        }
        if let Some(timeout) = self.handshake_timeout {
            probe.handshake_timeout_secs = timeout;
        }
    }
}
