//! ssl-expiry library
//!
//! Checks a list of TLS hosts for certificate expiry:
//! - Bounded concurrent probing of every host in a batch
//! - Leaf certificate selection from the negotiated chain
//! - Expired / expiring soon / healthy classification against a threshold
//! - Streaming terminal and JSON reporting
//!
//! # Usage
//!
//! ```rust,ignore
//! use ssl_expiry::checks::CertificateInspector;
//! use ssl_expiry::config::ProbeSettings;
//! use ssl_expiry::models::HostAddress;
//!
//! #[tokio::main]
//! async fn main() {
//!     let inspector = CertificateInspector::new(ProbeSettings::default());
//!     let result = inspector.inspect(&HostAddress::new("example.com")).await;
//!     println!("{}: {}", result.host(), result.status());
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod hosts;
pub mod models;
pub mod output;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use checks::CertificateInspector;
pub use cli::Cli;
pub use config::{ProbeSettings, Settings};
pub use models::{BatchSummary, ExpiryStatus, ExpiryThreshold, HostAddress, ProbeResult};
pub use output::Reporter;
pub use runner::Scheduler;
pub use utils::{Result, ToolkitError};
