use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::location::{CreateLocationParams, Location, UpdateLocationParams};

/// Locations and their links to events and tracks.
pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateLocationParams) -> Result<Location, DbErr> {
        let location = entity::location::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Location::from_entity(location))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Location>, DbErr> {
        let location = entity::prelude::Location::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(location.map(Location::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Location>, DbErr> {
        let locations = entity::prelude::Location::find()
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await?;

        Ok(locations.into_iter().map(Location::from_entity).collect())
    }

    /// Applies a partial update, returning `None` if the location doesn't exist
    pub async fn update(&self, params: UpdateLocationParams) -> Result<Option<Location>, DbErr> {
        let Some(location) = entity::prelude::Location::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::location::ActiveModel = location.clone().into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }

        let updated = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            location
        };

        Ok(Some(Location::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Location::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the locations linked to an event
    pub async fn get_by_event_id(&self, event_id: i32) -> Result<Vec<Location>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        let locations = event
            .find_related(entity::prelude::Location)
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await?;

        Ok(locations.into_iter().map(Location::from_entity).collect())
    }

    pub async fn add_to_event(&self, event_id: i32, location_id: i32) -> Result<(), DbErr> {
        entity::event_location::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            location_id: ActiveValue::Set(location_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn remove_from_event(&self, event_id: i32, location_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::EventLocation::delete_many()
            .filter(entity::event_location::Column::EventId.eq(event_id))
            .filter(entity::event_location::Column::LocationId.eq(location_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the locations linked to a track
    pub async fn get_by_track_id(&self, track_id: i32) -> Result<Vec<Location>, DbErr> {
        let Some(track) = entity::prelude::Track::find_by_id(track_id)
            .one(self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        let locations = track
            .find_related(entity::prelude::Location)
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await?;

        Ok(locations.into_iter().map(Location::from_entity).collect())
    }

    pub async fn add_to_track(&self, track_id: i32, location_id: i32) -> Result<(), DbErr> {
        entity::location_track::ActiveModel {
            track_id: ActiveValue::Set(track_id),
            location_id: ActiveValue::Set(location_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn remove_from_track(&self, track_id: i32, location_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LocationTrack::delete_many()
            .filter(entity::location_track::Column::TrackId.eq(track_id))
            .filter(entity::location_track::Column::LocationId.eq(location_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
