//! Event domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::event::{CreateEventDto, EventDto, UpdateEventDto},
    server::model::status::LifecycleStatus,
};

/// A competitive event running inside one date window.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub redirect_link: String,
    pub status: LifecycleStatus,
    pub date_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Event)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not a lifecycle status
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            redirect_link: entity.redirect_link,
            status: LifecycleStatus::from_column(&entity.status)?,
            date_id: entity.date_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            redirect_link: self.redirect_link,
            status: self.status.into_dto(),
            date_id: self.date_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// New events always start as `scheduled`.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub title: String,
    pub description: String,
    pub redirect_link: String,
    pub date_id: i32,
}

impl CreateEventParams {
    pub fn from_dto(dto: CreateEventDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            redirect_link: dto.redirect_link,
            date_id: dto.date_id,
        }
    }
}

/// Partial update; every `None` field keeps its stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub redirect_link: Option<String>,
    pub status: Option<LifecycleStatus>,
    pub date_id: Option<i32>,
}

impl UpdateEventParams {
    pub fn from_dto(id: i32, dto: UpdateEventDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
            redirect_link: dto.redirect_link,
            status: dto.status.map(LifecycleStatus::from_dto),
            date_id: dto.date_id,
        }
    }

    /// Update that only moves the event to `status`.
    pub fn status_only(id: i32, status: LifecycleStatus) -> Self {
        Self {
            id,
            status: Some(status),
            ..Default::default()
        }
    }
}
