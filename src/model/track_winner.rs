use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrackWinnerDto {
    pub track_id: i32,
    pub track_team_id: i32,
    /// 0-based rank within the track.
    pub place: i32,
    pub is_awardee: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTrackWinnerDto {
    pub track_id: i32,
    pub track_team_id: i32,
    pub place: i32,
    #[serde(default)]
    pub is_awardee: bool,
}

/// One row of a track's standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamResultDto {
    pub team_id: i32,
    pub total_value: i64,
}
