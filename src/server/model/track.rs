//! Track and track team domain models and parameters.

use sea_orm::DbErr;

use crate::{
    model::track::{
        CreateTrackDto, RegisterTeamDto, TrackDto, TrackTeamDto, UpdateTrackDto,
        UpdateTrackTeamDto,
    },
    server::model::status::LifecycleStatus,
};

/// A competition stream within an event.
///
/// `is_score_based` is set at creation and never changes. It decides whether winners are
/// generated from submitted results or entered manually.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub is_score_based: bool,
    pub status: LifecycleStatus,
    pub event_id: i32,
    pub date_id: i32,
}

impl Track {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Track)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not a lifecycle status
    pub fn from_entity(entity: entity::track::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            is_score_based: entity.is_score_based,
            status: LifecycleStatus::from_column(&entity.status)?,
            event_id: entity.event_id,
            date_id: entity.date_id,
        })
    }

    /// Whether winners may be generated from aggregated results.
    pub fn accepts_generated_results(&self) -> bool {
        self.is_score_based && self.status == LifecycleStatus::Completed
    }

    pub fn into_dto(self) -> TrackDto {
        TrackDto {
            id: self.id,
            title: self.title,
            description: self.description,
            is_score_based: self.is_score_based,
            status: self.status.into_dto(),
            event_id: self.event_id,
            date_id: self.date_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTrackParams {
    pub title: String,
    pub description: String,
    pub is_score_based: bool,
    pub event_id: i32,
    pub date_id: i32,
}

impl CreateTrackParams {
    pub fn from_dto(dto: CreateTrackDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            is_score_based: dto.is_score_based,
            event_id: dto.event_id,
            date_id: dto.date_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTrackParams {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<LifecycleStatus>,
    pub date_id: Option<i32>,
}

impl UpdateTrackParams {
    pub fn from_dto(id: i32, dto: UpdateTrackDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
            status: dto.status.map(LifecycleStatus::from_dto),
            date_id: dto.date_id,
        }
    }

    /// Update that only moves the track to `status`.
    pub fn status_only(id: i32, status: LifecycleStatus) -> Self {
        Self {
            id,
            status: Some(status),
            ..Default::default()
        }
    }
}

/// A team's registration on a track. `id` is the `track_team_id` referenced by
/// results and winners.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackTeam {
    pub id: i32,
    pub team_id: i32,
    pub track_id: i32,
    pub is_active: bool,
}

impl TrackTeam {
    pub fn from_entity(entity: entity::track_team::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            track_id: entity.track_id,
            is_active: entity.is_active,
        }
    }

    pub fn into_dto(self) -> TrackTeamDto {
        TrackTeamDto {
            id: self.id,
            team_id: self.team_id,
            track_id: self.track_id,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterTeamParams {
    pub track_id: i32,
    pub team_id: i32,
}

impl RegisterTeamParams {
    pub fn from_dto(track_id: i32, dto: RegisterTeamDto) -> Self {
        Self {
            track_id,
            team_id: dto.team_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTrackTeamParams {
    pub track_id: i32,
    pub team_id: i32,
    pub is_active: Option<bool>,
}

impl UpdateTrackTeamParams {
    pub fn from_dto(track_id: i32, team_id: i32, dto: UpdateTrackTeamDto) -> Self {
        Self {
            track_id,
            team_id,
            is_active: dto.is_active,
        }
    }
}
