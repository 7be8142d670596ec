use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    event::{CreateEventParams, Event, UpdateEventParams},
    status::LifecycleStatus,
};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new event in the `scheduled` state
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let now = Utc::now();

        let event = entity::event::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            redirect_link: ActiveValue::Set(params.redirect_link),
            status: ActiveValue::Set(LifecycleStatus::Scheduled.as_str().to_string()),
            date_id: ActiveValue::Set(params.date_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Event::from_entity(event)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .map(Event::from_entity)
            .transpose()
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        let events = entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        events.into_iter().map(Event::from_entity).collect()
    }

    pub async fn get_by_status(&self, status: LifecycleStatus) -> Result<Vec<Event>, DbErr> {
        let events = entity::prelude::Event::find()
            .filter(entity::event::Column::Status.eq(status.as_str()))
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        events.into_iter().map(Event::from_entity).collect()
    }

    /// Gets events whose date window has opened but which are still `scheduled`
    ///
    /// # Arguments
    /// - `now`: Reference time compared against `date.date_start`
    pub async fn get_to_start(&self, now: DateTime<Utc>) -> Result<Vec<Event>, DbErr> {
        let events = entity::prelude::Event::find()
            .inner_join(entity::prelude::Date)
            .filter(entity::date::Column::DateStart.lte(now))
            .filter(entity::event::Column::Status.eq(LifecycleStatus::Scheduled.as_str()))
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        events.into_iter().map(Event::from_entity).collect()
    }

    /// Gets events whose date window has closed but which are not yet `completed`
    ///
    /// # Arguments
    /// - `now`: Reference time compared against `date.date_end`
    pub async fn get_to_end(&self, now: DateTime<Utc>) -> Result<Vec<Event>, DbErr> {
        let events = entity::prelude::Event::find()
            .inner_join(entity::prelude::Date)
            .filter(entity::date::Column::DateEnd.lte(now))
            .filter(entity::event::Column::Status.ne(LifecycleStatus::Completed.as_str()))
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        events.into_iter().map(Event::from_entity).collect()
    }

    /// Applies a partial update and bumps `updated_at`
    ///
    /// Returns `None` if the event doesn't exist.
    pub async fn update(&self, params: UpdateEventParams) -> Result<Option<Event>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::event::ActiveModel = event.into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(redirect_link) = params.redirect_link {
            active_model.redirect_link = ActiveValue::Set(redirect_link);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(date_id) = params.date_id {
            active_model.date_id = ActiveValue::Set(date_id);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Event::from_entity(updated).map(Some)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
