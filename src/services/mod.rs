//! Business logic services

pub mod catalog;
pub mod loans;
pub mod members;
pub mod stats;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{config::LedgerConfig, ledger::Ledger};

/// Ledger shared by every service; writers are serialised by the lock
pub type SharedLedger = Arc<RwLock<Ledger>>;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub members: members::MembersService,
    pub loans: loans::LoansService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services on top of a ledger built from configuration
    pub fn new(config: &LedgerConfig) -> Self {
        let ledger = if config.seed_sample_data {
            Ledger::seeded(crate::ledger::SystemClock)
        } else {
            Ledger::default()
        };
        Self::with_ledger(ledger)
    }

    /// Create all services around an existing ledger
    pub fn with_ledger(ledger: Ledger) -> Self {
        let ledger: SharedLedger = Arc::new(RwLock::new(ledger));
        Self {
            catalog: catalog::CatalogService::new(ledger.clone()),
            members: members::MembersService::new(ledger.clone()),
            loans: loans::LoansService::new(ledger.clone()),
            stats: stats::StatsService::new(ledger),
        }
    }
}
