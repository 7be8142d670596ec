use axum::{Json, extract::State, response::IntoResponse};

use crate::{model::scheduler::SchedulerMetricsDto, server::state::AppState};

/// Tag for grouping scheduler endpoints in OpenAPI documentation
pub static SCHEDULER_TAG: &str = "scheduler";

/// Snapshot of the lifecycle scheduler counters since process start.
#[utoipa::path(
    get,
    path = "/api/scheduler/metrics",
    tag = SCHEDULER_TAG,
    responses(
        (status = 200, description = "Scheduler counters", body = SchedulerMetricsDto)
    ),
)]
pub async fn get_scheduler_metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.snapshot())
}
