//! Timeline domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::timeline::{
    CreateTimelineDto, TimelineDto, TimelineStatusDto, UpdateTimelineDto,
};

/// Points a single scoring timeline contributes to a track's maximum.
pub const MAX_VALUE_PER_SCORING_TIMELINE: i64 = 100;

/// A stage within a track, ordered by the `count_num` of its timeline status.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub is_blocking: bool,
    pub is_scoring: bool,
    pub status: String,
    pub track_id: i32,
    pub timeline_status_id: i32,
    pub count_num: i32,
}

impl Timeline {
    /// Converts a timeline and its status row to a domain model.
    pub fn from_entity(
        entity: entity::timeline::Model,
        status: entity::timeline_status::Model,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            deadline: entity.deadline,
            is_blocking: entity.is_blocking,
            is_scoring: entity.is_scoring,
            status: entity.status,
            track_id: entity.track_id,
            timeline_status_id: entity.timeline_status_id,
            count_num: status.count_num,
        }
    }

    pub fn into_dto(self) -> TimelineDto {
        TimelineDto {
            id: self.id,
            title: self.title,
            description: self.description,
            deadline: self.deadline,
            is_blocking: self.is_blocking,
            is_scoring: self.is_scoring,
            status: self.status,
            track_id: self.track_id,
            timeline_status_id: self.timeline_status_id,
            count_num: self.count_num,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineStatus {
    pub id: i32,
    pub count_num: i32,
}

impl TimelineStatus {
    pub fn from_entity(entity: entity::timeline_status::Model) -> Self {
        Self {
            id: entity.id,
            count_num: entity.count_num,
        }
    }

    pub fn into_dto(self) -> TimelineStatusDto {
        TimelineStatusDto {
            id: self.id,
            count_num: self.count_num,
        }
    }
}

/// New timeline; its ordinal is allocated by the service.
#[derive(Debug, Clone)]
pub struct CreateTimelineParams {
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub is_blocking: bool,
    pub is_scoring: bool,
    pub status: String,
    pub track_id: i32,
}

impl CreateTimelineParams {
    pub fn from_dto(dto: CreateTimelineDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            deadline: dto.deadline,
            is_blocking: dto.is_blocking,
            is_scoring: dto.is_scoring,
            status: dto.status,
            track_id: dto.track_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTimelineParams {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub is_blocking: Option<bool>,
    pub is_scoring: Option<bool>,
    pub status: Option<String>,
}

impl UpdateTimelineParams {
    pub fn from_dto(id: i32, dto: UpdateTimelineDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
            deadline: dto.deadline,
            is_blocking: dto.is_blocking,
            is_scoring: dto.is_scoring,
            status: dto.status,
        }
    }
}
