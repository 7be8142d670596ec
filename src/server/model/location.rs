//! Location domain models and parameters.

use crate::model::location::{CreateLocationDto, LocationDto, UpdateLocationDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            id: self.id,
            title: self.title,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLocationParams {
    pub title: String,
    pub description: Option<String>,
}

impl CreateLocationParams {
    pub fn from_dto(dto: CreateLocationDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
        }
    }
}

/// Partial update.
///
/// `description` is doubly optional: `None` leaves it unchanged, `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateLocationParams {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
}

impl UpdateLocationParams {
    pub fn from_dto(id: i32, dto: UpdateLocationDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
        }
    }
}
