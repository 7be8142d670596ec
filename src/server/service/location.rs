use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::location::LocationRepository,
    error::AppError,
    model::location::{CreateLocationParams, Location, UpdateLocationParams},
};

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Location>, AppError> {
        let locations = LocationRepository::new(self.db).get_all().await?;

        Ok(locations)
    }

    pub async fn get(&self, id: i32) -> Result<Location, AppError> {
        LocationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| location_not_found(id))
    }

    pub async fn create(&self, params: CreateLocationParams) -> Result<Location, AppError> {
        let txn = self.db.begin().await?;
        let location = LocationRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        Ok(location)
    }

    pub async fn update(&self, params: UpdateLocationParams) -> Result<Location, AppError> {
        let id = params.id;

        let txn = self.db.begin().await?;
        let location = LocationRepository::new(&txn)
            .update(params)
            .await?
            .ok_or_else(|| location_not_found(id))?;
        txn.commit().await?;

        Ok(location)
    }

    /// Deletes a location along with its event and track links
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !LocationRepository::new(&txn).delete(id).await? {
            return Err(location_not_found(id));
        }

        txn.commit().await?;

        Ok(())
    }
}

pub(crate) fn location_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Location {} not found", id))
}
