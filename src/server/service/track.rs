use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        date::DateRepository, event::EventRepository, location::LocationRepository,
        track::TrackRepository, track_team::TrackTeamRepository,
    },
    error::AppError,
    model::{
        location::Location,
        status::LifecycleStatus,
        track::{
            CreateTrackParams, RegisterTeamParams, Track, TrackTeam, UpdateTrackParams,
            UpdateTrackTeamParams,
        },
    },
    scheduler::lifecycle::{LifecycleKind, LifecycleTarget},
    service::location::location_not_found,
};

pub struct TrackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Track>, AppError> {
        let tracks = TrackRepository::new(self.db).get_all().await?;

        Ok(tracks)
    }

    pub async fn list_by_event(&self, event_id: i32) -> Result<Vec<Track>, AppError> {
        let tracks = TrackRepository::new(self.db)
            .get_by_event_id(event_id)
            .await?;

        Ok(tracks)
    }

    pub async fn get(&self, id: i32) -> Result<Track, AppError> {
        TrackRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| track_not_found(id))
    }

    /// Creates a track in the `scheduled` state
    ///
    /// `is_score_based` is fixed at creation and cannot be changed afterwards.
    pub async fn create(&self, params: CreateTrackParams) -> Result<Track, AppError> {
        let txn = self.db.begin().await?;

        if EventRepository::new(&txn)
            .get_by_id(params.event_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Event {} not found",
                params.event_id
            )));
        }
        ensure_date_exists(&txn, params.date_id).await?;

        let track = TrackRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::debug!(
            track_id = track.id,
            is_score_based = track.is_score_based,
            "Track created"
        );

        Ok(track)
    }

    pub async fn update(&self, params: UpdateTrackParams) -> Result<Track, AppError> {
        let id = params.id;

        let txn = self.db.begin().await?;

        if let Some(date_id) = params.date_id {
            ensure_date_exists(&txn, date_id).await?;
        }

        let track = TrackRepository::new(&txn)
            .update(params)
            .await?
            .ok_or_else(|| track_not_found(id))?;

        txn.commit().await?;

        Ok(track)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !TrackRepository::new(&txn).delete(id).await? {
            return Err(track_not_found(id));
        }

        txn.commit().await?;

        Ok(())
    }

    pub async fn list_to_start(&self, now: DateTime<Utc>) -> Result<Vec<Track>, AppError> {
        let tracks = TrackRepository::new(self.db).get_to_start(now).await?;

        Ok(tracks)
    }

    pub async fn list_to_end(&self, now: DateTime<Utc>) -> Result<Vec<Track>, AppError> {
        let tracks = TrackRepository::new(self.db).get_to_end(now).await?;

        Ok(tracks)
    }

    /// Moves a track to `in_process`
    pub async fn start(&self, id: i32) -> Result<Track, AppError> {
        self.update(UpdateTrackParams::status_only(id, LifecycleStatus::InProcess))
            .await
    }

    /// Moves a track to `completed`, which unlocks result generation for score-based tracks
    pub async fn end(&self, id: i32) -> Result<Track, AppError> {
        self.update(UpdateTrackParams::status_only(id, LifecycleStatus::Completed))
            .await
    }

    pub async fn list_locations(&self, track_id: i32) -> Result<Vec<Location>, AppError> {
        let txn = self.db.begin().await?;

        ensure_track_exists(&txn, track_id).await?;
        let locations = LocationRepository::new(&txn)
            .get_by_track_id(track_id)
            .await?;
        txn.commit().await?;

        Ok(locations)
    }

    pub async fn add_location(&self, track_id: i32, location_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let locations = LocationRepository::new(&txn);

        ensure_track_exists(&txn, track_id).await?;
        if locations.get_by_id(location_id).await?.is_none() {
            return Err(location_not_found(location_id));
        }

        locations.add_to_track(track_id, location_id).await?;
        txn.commit().await?;

        Ok(())
    }

    pub async fn remove_location(&self, track_id: i32, location_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !LocationRepository::new(&txn)
            .remove_from_track(track_id, location_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Location {} is not linked to track {}",
                location_id, track_id
            )));
        }

        txn.commit().await?;

        Ok(())
    }

    pub async fn list_teams(&self, track_id: i32) -> Result<Vec<TrackTeam>, AppError> {
        let txn = self.db.begin().await?;

        ensure_track_exists(&txn, track_id).await?;
        let teams = TrackTeamRepository::new(&txn)
            .get_by_track_id(track_id)
            .await?;
        txn.commit().await?;

        Ok(teams)
    }

    /// Registers a team on a track as active
    ///
    /// # Returns
    /// - `Ok(TrackTeam)`: The registration, whose `id` is the `track_team_id` used by
    ///   results and winners
    /// - `Err(AppError::NotFound)`: Track doesn't exist
    /// - `Err(AppError::DbErr)`: Team already registered on the track
    pub async fn register_team(&self, params: RegisterTeamParams) -> Result<TrackTeam, AppError> {
        let txn = self.db.begin().await?;

        ensure_track_exists(&txn, params.track_id).await?;
        let team = TrackTeamRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        Ok(team)
    }

    pub async fn get_team(&self, track_id: i32, team_id: i32) -> Result<TrackTeam, AppError> {
        TrackTeamRepository::new(self.db)
            .find(track_id, team_id)
            .await?
            .ok_or_else(|| team_not_found(track_id, team_id))
    }

    pub async fn update_team(&self, params: UpdateTrackTeamParams) -> Result<TrackTeam, AppError> {
        let (track_id, team_id) = (params.track_id, params.team_id);

        let txn = self.db.begin().await?;
        let team = TrackTeamRepository::new(&txn)
            .update(params)
            .await?
            .ok_or_else(|| team_not_found(track_id, team_id))?;
        txn.commit().await?;

        Ok(team)
    }

    pub async fn delete_team(&self, track_id: i32, team_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !TrackTeamRepository::new(&txn)
            .delete(track_id, team_id)
            .await?
        {
            return Err(team_not_found(track_id, team_id));
        }

        txn.commit().await?;

        Ok(())
    }
}

#[async_trait]
impl LifecycleTarget for TrackService<'_> {
    fn kind(&self) -> LifecycleKind {
        LifecycleKind::Track
    }

    async fn find_to_start(&self, now: DateTime<Utc>) -> Result<Vec<i32>, AppError> {
        let tracks = self.list_to_start(now).await?;

        Ok(tracks.into_iter().map(|track| track.id).collect())
    }

    async fn find_to_end(&self, now: DateTime<Utc>) -> Result<Vec<i32>, AppError> {
        let tracks = self.list_to_end(now).await?;

        Ok(tracks.into_iter().map(|track| track.id).collect())
    }

    async fn start(&self, id: i32) -> Result<(), AppError> {
        TrackService::start(self, id).await.map(|_| ())
    }

    async fn end(&self, id: i32) -> Result<(), AppError> {
        TrackService::end(self, id).await.map(|_| ())
    }
}

/// Fails with `NotFound` unless the track exists; returns it otherwise.
pub(crate) async fn ensure_track_exists<C: ConnectionTrait>(
    db: &C,
    track_id: i32,
) -> Result<Track, AppError> {
    TrackRepository::new(db)
        .get_by_id(track_id)
        .await?
        .ok_or_else(|| track_not_found(track_id))
}

async fn ensure_date_exists<C: ConnectionTrait>(db: &C, date_id: i32) -> Result<(), AppError> {
    if DateRepository::new(db).get_by_id(date_id).await?.is_none() {
        return Err(AppError::NotFound(format!("Date {} not found", date_id)));
    }

    Ok(())
}

pub(crate) fn track_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Track {} not found", id))
}

fn team_not_found(track_id: i32, team_id: i32) -> AppError {
    AppError::NotFound(format!(
        "Team {} is not registered on track {}",
        team_id, track_id
    ))
}
