use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::status::LifecycleStatusDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrackDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub is_score_based: bool,
    pub status: LifecycleStatusDto,
    pub event_id: i32,
    pub date_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTrackDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub is_score_based: bool,
    pub event_id: i32,
    pub date_id: i32,
}

/// Partial track update. `is_score_based` is fixed at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTrackDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<LifecycleStatusDto>,
    #[serde(default)]
    pub date_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrackTeamDto {
    pub id: i32,
    pub team_id: i32,
    pub track_id: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterTeamDto {
    pub team_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTrackTeamDto {
    #[serde(default)]
    pub is_active: Option<bool>,
}
