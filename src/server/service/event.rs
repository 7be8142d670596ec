use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{date::DateRepository, event::EventRepository, location::LocationRepository},
    error::AppError,
    model::{
        event::{CreateEventParams, Event, UpdateEventParams},
        location::Location,
        status::LifecycleStatus,
    },
    scheduler::lifecycle::{LifecycleKind, LifecycleTarget},
    service::location::location_not_found,
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists events, optionally restricted to one lifecycle status
    pub async fn list(&self, status: Option<LifecycleStatus>) -> Result<Vec<Event>, AppError> {
        let repo = EventRepository::new(self.db);

        let events = match status {
            Some(status) => repo.get_by_status(status).await?,
            None => repo.get_all().await?,
        };

        Ok(events)
    }

    pub async fn get(&self, id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| event_not_found(id))
    }

    /// Creates an event in the `scheduled` state
    ///
    /// # Returns
    /// - `Ok(Event)`: The created event
    /// - `Err(AppError::NotFound)`: The referenced date window doesn't exist
    /// - `Err(AppError::DbErr)`: Title already taken or other database failure
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        let txn = self.db.begin().await?;

        if DateRepository::new(&txn)
            .get_by_id(params.date_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Date {} not found",
                params.date_id
            )));
        }

        let event = EventRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::debug!(event_id = event.id, "Event created");

        Ok(event)
    }

    /// Merges the provided fields onto the stored event
    pub async fn update(&self, params: UpdateEventParams) -> Result<Event, AppError> {
        let id = params.id;

        let txn = self.db.begin().await?;

        if let Some(date_id) = params.date_id {
            if DateRepository::new(&txn).get_by_id(date_id).await?.is_none() {
                return Err(AppError::NotFound(format!("Date {} not found", date_id)));
            }
        }

        let event = EventRepository::new(&txn)
            .update(params)
            .await?
            .ok_or_else(|| event_not_found(id))?;

        txn.commit().await?;

        Ok(event)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !EventRepository::new(&txn).delete(id).await? {
            return Err(event_not_found(id));
        }

        txn.commit().await?;

        Ok(())
    }

    /// Scheduled events whose window has opened at `now`
    pub async fn list_to_start(&self, now: DateTime<Utc>) -> Result<Vec<Event>, AppError> {
        let events = EventRepository::new(self.db).get_to_start(now).await?;

        Ok(events)
    }

    /// Events not yet completed whose window has closed at `now`
    pub async fn list_to_end(&self, now: DateTime<Utc>) -> Result<Vec<Event>, AppError> {
        let events = EventRepository::new(self.db).get_to_end(now).await?;

        Ok(events)
    }

    /// Moves an event to `in_process`
    pub async fn start(&self, id: i32) -> Result<Event, AppError> {
        self.update(UpdateEventParams::status_only(id, LifecycleStatus::InProcess))
            .await
    }

    /// Moves an event to `completed`
    pub async fn end(&self, id: i32) -> Result<Event, AppError> {
        self.update(UpdateEventParams::status_only(id, LifecycleStatus::Completed))
            .await
    }

    pub async fn list_locations(&self, event_id: i32) -> Result<Vec<Location>, AppError> {
        let txn = self.db.begin().await?;

        if EventRepository::new(&txn).get_by_id(event_id).await?.is_none() {
            return Err(event_not_found(event_id));
        }

        let locations = LocationRepository::new(&txn)
            .get_by_event_id(event_id)
            .await?;
        txn.commit().await?;

        Ok(locations)
    }

    /// Links an existing location to an event
    pub async fn add_location(&self, event_id: i32, location_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let locations = LocationRepository::new(&txn);

        if EventRepository::new(&txn).get_by_id(event_id).await?.is_none() {
            return Err(event_not_found(event_id));
        }
        if locations.get_by_id(location_id).await?.is_none() {
            return Err(location_not_found(location_id));
        }

        locations.add_to_event(event_id, location_id).await?;
        txn.commit().await?;

        Ok(())
    }

    pub async fn remove_location(&self, event_id: i32, location_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !LocationRepository::new(&txn)
            .remove_from_event(event_id, location_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Location {} is not linked to event {}",
                location_id, event_id
            )));
        }

        txn.commit().await?;

        Ok(())
    }
}

#[async_trait]
impl LifecycleTarget for EventService<'_> {
    fn kind(&self) -> LifecycleKind {
        LifecycleKind::Event
    }

    async fn find_to_start(&self, now: DateTime<Utc>) -> Result<Vec<i32>, AppError> {
        let events = self.list_to_start(now).await?;

        Ok(events.into_iter().map(|event| event.id).collect())
    }

    async fn find_to_end(&self, now: DateTime<Utc>) -> Result<Vec<i32>, AppError> {
        let events = self.list_to_end(now).await?;

        Ok(events.into_iter().map(|event| event.id).collect())
    }

    async fn start(&self, id: i32) -> Result<(), AppError> {
        EventService::start(self, id).await.map(|_| ())
    }

    async fn end(&self, id: i32) -> Result<(), AppError> {
        EventService::end(self, id).await.map(|_| ())
    }
}

fn event_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Event {} not found", id))
}
