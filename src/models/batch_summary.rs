//! Tally of outcomes for a finished batch

use super::ExpiryStatus;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub healthy: usize,
    pub expiring_soon: usize,
    pub expired: usize,
    pub errors: usize,
}

impl BatchSummary {
    pub fn record(&mut self, status: ExpiryStatus) {
        self.total += 1;
        match status {
            ExpiryStatus::Healthy => self.healthy += 1,
            ExpiryStatus::ExpiringSoon => self.expiring_soon += 1,
            ExpiryStatus::Expired => self.expired += 1,
            ExpiryStatus::Error => self.errors += 1,
        }
    }

    /// Hosts with a certificate that needs attention, errors included
    pub fn issues(&self) -> usize {
        self.expiring_soon + self.expired + self.errors
    }
}
