//! Team action status domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::team_action_status::{
    CreateTeamActionStatusDto, TeamActionStatusDto, UpdateTeamActionStatusDto,
};

/// A team's submitted result for one timeline, keyed by `(track_team_id, timeline_id)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamActionStatus {
    pub track_team_id: i32,
    pub timeline_id: i32,
    pub result_value: i32,
    pub resolution_link: String,
    pub completed_at: DateTime<Utc>,
    pub notes: String,
}

impl TeamActionStatus {
    pub fn from_entity(entity: entity::team_action_status::Model) -> Self {
        Self {
            track_team_id: entity.track_team_id,
            timeline_id: entity.timeline_id,
            result_value: entity.result_value,
            resolution_link: entity.resolution_link,
            completed_at: entity.completed_at,
            notes: entity.notes,
        }
    }

    pub fn into_dto(self) -> TeamActionStatusDto {
        TeamActionStatusDto {
            track_team_id: self.track_team_id,
            timeline_id: self.timeline_id,
            result_value: self.result_value,
            resolution_link: self.resolution_link,
            completed_at: self.completed_at,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamActionStatusParams {
    pub track_team_id: i32,
    pub timeline_id: i32,
    pub result_value: i32,
    pub resolution_link: String,
    pub completed_at: DateTime<Utc>,
    pub notes: String,
}

impl CreateTeamActionStatusParams {
    /// Converts a request body, stamping `completed_at` with `now` when it is absent.
    pub fn from_dto(dto: CreateTeamActionStatusDto, now: DateTime<Utc>) -> Self {
        Self {
            track_team_id: dto.track_team_id,
            timeline_id: dto.timeline_id,
            result_value: dto.result_value,
            resolution_link: dto.resolution_link,
            completed_at: dto.completed_at.unwrap_or(now),
            notes: dto.notes,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTeamActionStatusParams {
    pub track_team_id: i32,
    pub timeline_id: i32,
    pub result_value: Option<i32>,
    pub resolution_link: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl UpdateTeamActionStatusParams {
    pub fn from_dto(timeline_id: i32, track_team_id: i32, dto: UpdateTeamActionStatusDto) -> Self {
        Self {
            track_team_id,
            timeline_id,
            result_value: dto.result_value,
            resolution_link: dto.resolution_link,
            completed_at: dto.completed_at,
            notes: dto.notes,
        }
    }
}
