//! Dashboard statistics endpoint

use axum::{extract::State, Json};

use crate::{models::DashboardCounts, AppState};

/// Dashboard counters
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Current counts", body = DashboardCounts)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> Json<DashboardCounts> {
    Json(state.services.stats.get_stats().await)
}
