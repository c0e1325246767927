//! Dashboard and activity service

use crate::models::{Activity, DashboardCounts};

use super::SharedLedger;

#[derive(Clone)]
pub struct StatsService {
    ledger: SharedLedger,
}

impl StatsService {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    pub async fn get_stats(&self) -> DashboardCounts {
        self.ledger.read().await.dashboard_counts()
    }

    pub async fn recent_activity(&self) -> Vec<Activity> {
        self.ledger.read().await.recent_activity()
    }
}
