use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamActionStatusDto {
    pub track_team_id: i32,
    pub timeline_id: i32,
    pub result_value: i32,
    pub resolution_link: String,
    pub completed_at: DateTime<Utc>,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTeamActionStatusDto {
    pub track_team_id: i32,
    pub timeline_id: i32,
    #[serde(default)]
    pub result_value: i32,
    #[serde(default)]
    pub resolution_link: String,
    /// Defaults to the time of submission.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTeamActionStatusDto {
    #[serde(default)]
    pub result_value: Option<i32>,
    #[serde(default)]
    pub resolution_link: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}
