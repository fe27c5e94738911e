//! Per-host probe results

use super::HostAddress;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Outcome of probing one host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Healthy,
    ExpiringSoon,
    Expired,
    Error,
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryStatus::Healthy => write!(f, "Healthy"),
            ExpiryStatus::ExpiringSoon => write!(f, "Expiring soon"),
            ExpiryStatus::Expired => write!(f, "Expired"),
            ExpiryStatus::Error => write!(f, "Error"),
        }
    }
}

/// Result of inspecting one host. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    host: HostAddress,
    status: ExpiryStatus,
    not_after: Option<DateTime<Utc>>,
    expires: Option<String>,
    error: Option<String>,
}

impl ProbeResult {
    /// A successful inspection of the leaf certificate
    pub fn classified(
        host: HostAddress,
        status: ExpiryStatus,
        not_after: DateTime<Utc>,
        expires: impl Into<String>,
    ) -> Self {
        Self {
            host,
            status,
            not_after: Some(not_after),
            expires: Some(expires.into()),
            error: None,
        }
    }

    /// A probe that could not produce a classification
    pub fn failed(host: HostAddress, error: impl fmt::Display) -> Self {
        Self {
            host,
            status: ExpiryStatus::Error,
            not_after: None,
            expires: None,
            error: Some(error.to_string()),
        }
    }

    pub fn host(&self) -> &HostAddress {
        &self.host
    }

    pub fn status(&self) -> ExpiryStatus {
        self.status
    }

    /// The leaf certificate's "not valid after" moment
    pub fn not_after(&self) -> Option<DateTime<Utc>> {
        self.not_after
    }

    /// Relative description of the expiry moment, e.g. "in 3 days"
    pub fn expires(&self) -> Option<&str> {
        self.expires.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
