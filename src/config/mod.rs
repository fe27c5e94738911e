//! Configuration module for ssl-expiry
//!
//! Handles loading and managing configuration from TOML files.

pub mod settings;

pub use settings::{ProbeSettings, Settings};
