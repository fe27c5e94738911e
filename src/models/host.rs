//! Host addresses and the expiry threshold

use chrono::TimeDelta;
use serde::Serialize;
use std::fmt;

/// Port assumed when a host entry does not name one
pub const DEFAULT_PORT: u16 = 443;

/// A TLS endpoint as written in the host list.
///
/// The original text is kept for reporting; [`HostAddress::endpoint`] yields
/// the `host:port` form that is actually dialed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HostAddress(String);

impl HostAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The address exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `host:port` string to connect to, with the default port appended
    /// when the entry has none.
    ///
    /// Bracketed IPv6 literals keep their brackets; a bare IPv6 literal is
    /// bracketed before the port is added.
    pub fn endpoint(&self) -> String {
        let raw = self.0.as_str();

        if raw.starts_with('[') {
            if raw.contains("]:") {
                return raw.to_string();
            }
            return format!("{}:{}", raw, DEFAULT_PORT);
        }

        match raw.matches(':').count() {
            0 => format!("{}:{}", raw, DEFAULT_PORT),
            1 => raw.to_string(),
            _ => format!("[{}]:{}", raw, DEFAULT_PORT),
        }
    }

    /// The host part, without port or brackets, used as the TLS server name
    pub fn server_name(&self) -> &str {
        let raw = self.0.as_str();

        if let Some(rest) = raw.strip_prefix('[') {
            return rest.split(']').next().unwrap_or(rest);
        }

        match raw.matches(':').count() {
            1 => raw.split(':').next().unwrap_or(raw),
            _ => raw,
        }
    }
}

impl fmt::Display for HostAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lead time before expiry at which a certificate is reported as expiring soon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryThreshold(TimeDelta);

impl ExpiryThreshold {
    pub const DEFAULT_DAYS: i64 = 7;

    /// Largest threshold accepted from configuration (about 100 years)
    pub const MAX_DAYS: i64 = 36_500;

    /// Days beyond what `TimeDelta` can hold saturate to its maximum
    pub fn from_days(days: i64) -> Self {
        let delta = TimeDelta::try_days(days).unwrap_or(if days < 0 {
            TimeDelta::MIN
        } else {
            TimeDelta::MAX
        });
        Self(delta)
    }

    pub fn as_delta(&self) -> TimeDelta {
        self.0
    }

    pub fn days(&self) -> i64 {
        self.0.num_days()
    }
}

impl Default for ExpiryThreshold {
    fn default() -> Self {
        Self::from_days(Self::DEFAULT_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_default_port() {
        assert_eq!(HostAddress::new("example.com").endpoint(), "example.com:443");
        assert_eq!(
            HostAddress::new("example.com:443").endpoint(),
            HostAddress::new("example.com").endpoint()
        );
    }

    #[test]
    fn test_endpoint_keeps_explicit_port() {
        assert_eq!(HostAddress::new("example.com:8443").endpoint(), "example.com:8443");
        assert_eq!(HostAddress::new("10.0.0.1:993").endpoint(), "10.0.0.1:993");
    }

    #[test]
    fn test_endpoint_ipv6() {
        assert_eq!(HostAddress::new("[::1]:8443").endpoint(), "[::1]:8443");
        assert_eq!(HostAddress::new("[::1]").endpoint(), "[::1]:443");
        assert_eq!(HostAddress::new("2001:db8::1").endpoint(), "[2001:db8::1]:443");
    }

    #[test]
    fn test_server_name() {
        assert_eq!(HostAddress::new("example.com").server_name(), "example.com");
        assert_eq!(HostAddress::new("example.com:8443").server_name(), "example.com");
        assert_eq!(HostAddress::new("[::1]:8443").server_name(), "::1");
        assert_eq!(HostAddress::new("2001:db8::1").server_name(), "2001:db8::1");
    }

    #[test]
    fn test_display_keeps_original_text() {
        assert_eq!(HostAddress::new("example.com").to_string(), "example.com");
    }

    #[test]
    fn test_threshold_default() {
        assert_eq!(ExpiryThreshold::default().days(), 7);
    }

    #[test]
    fn test_threshold_out_of_range_saturates() {
        assert_eq!(ExpiryThreshold::from_days(i64::MAX).as_delta(), TimeDelta::MAX);
        assert_eq!(
            ExpiryThreshold::from_days(1_000_000_000_000).as_delta(),
            TimeDelta::MAX
        );
    }
}
