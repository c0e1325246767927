//! Dashboard counters

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Counts shown on the dashboard, recomputed on every call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DashboardCounts {
    pub total_books: usize,
    pub total_members: usize,
    /// Loans not yet returned
    pub active_loans: usize,
    pub available_books: usize,
}
