use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::date::DateRepository,
    error::AppError,
    model::date::{CreateDateParams, Date, UpdateDateParams},
};

pub struct DateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Date>, AppError> {
        let dates = DateRepository::new(self.db).get_all().await?;

        Ok(dates)
    }

    pub async fn get(&self, id: i32) -> Result<Date, AppError> {
        DateRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Date {} not found", id)))
    }

    /// Creates a date window
    ///
    /// # Returns
    /// - `Ok(Date)`: The created window
    /// - `Err(AppError::BadRequest)`: `date_end` precedes `date_start`
    pub async fn create(&self, params: CreateDateParams) -> Result<Date, AppError> {
        ensure_ordered(&params.date_start, &params.date_end)?;

        let txn = self.db.begin().await?;
        let date = DateRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        Ok(date)
    }

    /// Applies a partial update; the merged window must still be ordered.
    pub async fn update(&self, params: UpdateDateParams) -> Result<Date, AppError> {
        let txn = self.db.begin().await?;
        let repo = DateRepository::new(&txn);

        let existing = repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Date {} not found", params.id)))?;

        ensure_ordered(
            params.date_start.as_ref().unwrap_or(&existing.date_start),
            params.date_end.as_ref().unwrap_or(&existing.date_end),
        )?;

        let date = repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Date {} not found", existing.id)))?;

        txn.commit().await?;

        Ok(date)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !DateRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound(format!("Date {} not found", id)));
        }

        txn.commit().await?;

        Ok(())
    }
}

fn ensure_ordered(
    date_start: &chrono::DateTime<chrono::Utc>,
    date_end: &chrono::DateTime<chrono::Utc>,
) -> Result<(), AppError> {
    if date_end < date_start {
        return Err(AppError::BadRequest(
            "date_end must not precede date_start".to_string(),
        ));
    }

    Ok(())
}
