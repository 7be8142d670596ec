use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::date::{CreateDateParams, Date, UpdateDateParams};

pub struct DateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateDateParams) -> Result<Date, DbErr> {
        let date = entity::date::ActiveModel {
            date_start: ActiveValue::Set(params.date_start),
            date_end: ActiveValue::Set(params.date_end),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Date::from_entity(date))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Date>, DbErr> {
        let date = entity::prelude::Date::find_by_id(id).one(self.db).await?;

        Ok(date.map(Date::from_entity))
    }

    /// Gets all date windows ordered by start
    pub async fn get_all(&self) -> Result<Vec<Date>, DbErr> {
        let dates = entity::prelude::Date::find()
            .order_by_asc(entity::date::Column::DateStart)
            .order_by_asc(entity::date::Column::Id)
            .all(self.db)
            .await?;

        Ok(dates.into_iter().map(Date::from_entity).collect())
    }

    /// Applies a partial update, returning `None` if the date doesn't exist
    pub async fn update(&self, params: UpdateDateParams) -> Result<Option<Date>, DbErr> {
        let Some(date) = entity::prelude::Date::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::date::ActiveModel = date.clone().into();

        if let Some(date_start) = params.date_start {
            active_model.date_start = ActiveValue::Set(date_start);
        }
        if let Some(date_end) = params.date_end {
            active_model.date_end = ActiveValue::Set(date_end);
        }

        let updated = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            date
        };

        Ok(Some(Date::from_entity(updated)))
    }

    /// Deletes a date window, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Date::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
