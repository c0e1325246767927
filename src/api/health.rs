//! Liveness endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{ledger::LOAN_PERIOD_DAYS, AppState};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Whether the ledger started with the sample catalogue
    pub seeded: bool,
    pub loan_period_days: i64,
}

/// Report that the server is up and how its ledger was configured
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        seeded: state.config.ledger.seed_sample_data,
        loan_period_days: LOAN_PERIOD_DAYS,
    })
}
