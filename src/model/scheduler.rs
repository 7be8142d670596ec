use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Point-in-time copy of the lifecycle scheduler counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SchedulerMetricsDto {
    pub event_start_success: u64,
    pub event_start_failure: u64,
    pub event_end_success: u64,
    pub event_end_failure: u64,
    pub track_start_success: u64,
    pub track_start_failure: u64,
    pub track_end_success: u64,
    pub track_end_failure: u64,
    pub registration_success: u64,
    pub registration_failure: u64,
}
