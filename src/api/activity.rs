//! Recent activity endpoint

use axum::{extract::State, Json};

use crate::{models::Activity, AppState};

/// Up to five most recent actions, newest first
#[utoipa::path(
    get,
    path = "/activity",
    tag = "activity",
    responses(
        (status = 200, description = "Recent activity", body = Vec<Activity>)
    )
)]
pub async fn recent_activity(State(state): State<AppState>) -> Json<Vec<Activity>> {
    Json(state.services.stats.recent_activity().await)
}
