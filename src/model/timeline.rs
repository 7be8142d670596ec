use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimelineDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub is_blocking: bool,
    pub is_scoring: bool,
    pub status: String,
    pub track_id: i32,
    pub timeline_status_id: i32,
    /// Position of the timeline within its track, starting at 1.
    pub count_num: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTimelineDto {
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    pub is_blocking: bool,
    #[serde(default)]
    pub is_scoring: bool,
    pub status: String,
    pub track_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTimelineDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_blocking: Option<bool>,
    #[serde(default)]
    pub is_scoring: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimelineStatusDto {
    pub id: i32,
    pub count_num: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTimelineStatusDto {
    pub count_num: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MaxValueDto {
    pub track_id: i32,
    pub max_value: i64,
}
