//! JSON lines output

use super::Reporter;
use crate::models::ProbeResult;
use tracing::warn;

/// Prints one JSON object per probe result
#[derive(Debug, Default)]
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for JsonReporter {
    fn report(&self, result: &ProbeResult) {
        match serde_json::to_string(result) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!(host = %result.host(), error = %e, "failed to serialize result"),
        }
    }
}
