//! Data models for ssl-expiry
//!
//! This module contains all the data structures shared by the probe engine
//! and its reporters.

pub mod batch_summary;
pub mod host;
pub mod probe_result;

pub use batch_summary::BatchSummary;
pub use host::{ExpiryThreshold, HostAddress, DEFAULT_PORT};
pub use probe_result::{ExpiryStatus, ProbeResult};
