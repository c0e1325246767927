//! Activity log entries

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One line of the recent activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Activity {
    pub message: String,
    /// Wall-clock time, e.g. "02:05 PM"
    pub time: String,
    /// Local timestamp the entry was recorded at
    pub at: NaiveDateTime,
}
