use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state of an event or track as exposed over the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatusDto {
    Scheduled,
    InProcess,
    Completed,
}
