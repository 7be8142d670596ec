//! Date window domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::date::{CreateDateDto, DateDto, UpdateDateDto};

/// Start and end timestamps shared by events and tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct Date {
    pub id: i32,
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
}

impl Date {
    pub fn from_entity(entity: entity::date::Model) -> Self {
        Self {
            id: entity.id,
            date_start: entity.date_start,
            date_end: entity.date_end,
        }
    }

    pub fn into_dto(self) -> DateDto {
        DateDto {
            id: self.id,
            date_start: self.date_start,
            date_end: self.date_end,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDateParams {
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
}

impl CreateDateParams {
    pub fn from_dto(dto: CreateDateDto) -> Self {
        Self {
            date_start: dto.date_start,
            date_end: dto.date_end,
        }
    }
}

/// Partial update; `None` leaves the bound unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateDateParams {
    pub id: i32,
    pub date_start: Option<DateTime<Utc>>,
    pub date_end: Option<DateTime<Utc>>,
}

impl UpdateDateParams {
    pub fn from_dto(id: i32, dto: UpdateDateDto) -> Self {
        Self {
            id,
            date_start: dto.date_start,
            date_end: dto.date_end,
        }
    }
}
