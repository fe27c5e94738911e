//! Utility modules for ssl-expiry
//!
//! This module contains the error taxonomy shared by the library and binary.

pub mod error;

pub use error::{
    CertificateError, ConfigError, InputError, ProbeError, Result, SslError, TcpError,
    ToolkitError,
};
