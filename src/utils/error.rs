//! Custom error types for ssl-expiry
//!
//! Startup failures (`InputError`, `ConfigError`) abort the run. Probe
//! failures (`TcpError`, `SslError`, `CertificateError`) are folded into a
//! per-host [`ProbeError`] and never leave the probe task.

use thiserror::Error;

/// Top-level error type for the ssl-expiry application
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Host list error: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Host-list loading errors
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Host list not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read host list {path}: {message}")]
    Unreadable { path: String, message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// TCP connection errors
#[derive(Error, Debug)]
pub enum TcpError {
    #[error("Failed to resolve {addr}: {message}")]
    Resolve { addr: String, message: String },

    #[error("Connection refused to {addr}")]
    ConnectionRefused { addr: String },

    #[error("Connection timed out to {addr} after {secs}s")]
    Timeout { addr: String, secs: u64 },

    #[error("TCP connection failed to {addr}: {message}")]
    ConnectionFailed { addr: String, message: String },
}

/// SSL/TLS session errors
#[derive(Error, Debug)]
pub enum SslError {
    #[error("Invalid server name: {host}")]
    InvalidServerName { host: String },

    #[error("SSL handshake failed: {message}")]
    HandshakeFailed { message: String },

    #[error("TLS handshake timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("No certificates received from server")]
    NoPeerCertificates,
}

/// Certificate parsing errors
#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("Failed to parse certificate: {message}")]
    ParseError { message: String },

    #[error("Invalid timestamp in certificate")]
    InvalidTimestamp,

    #[error("No leaf certificate found in chain")]
    NoLeafCertificate,
}

/// Any failure while probing a single host
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error(transparent)]
    Tcp(#[from] TcpError),

    #[error(transparent)]
    Ssl(#[from] SslError),

    #[error(transparent)]
    Certificate(#[from] CertificateError),
}

/// Result type alias using ToolkitError
pub type Result<T> = std::result::Result<T, ToolkitError>;
