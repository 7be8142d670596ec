//! Track standings and winners.
//!
//! Standings are computed on the fly from the results teams submitted on the track's
//! timelines. Winners are either entered by hand (tracks judged without scores) or
//! generated once from the standings after a score-based track has completed.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{team_action_status::TeamActionStatusRepository, track_winner::TrackWinnerRepository},
    error::AppError,
    model::track_winner::{CreateTrackWinnerParams, TeamResult, TrackWinner, rank_results},
    service::track::ensure_track_exists,
};

pub struct TrackWinnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackWinnerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Winner records of one track team
    pub async fn list_by_team(&self, track_team_id: i32) -> Result<Vec<TrackWinner>, AppError> {
        let winners = TrackWinnerRepository::new(self.db)
            .get_by_track_team_id(track_team_id)
            .await?;

        Ok(winners)
    }

    /// Winners of a track ordered by place
    ///
    /// # Returns
    /// - `Ok(Vec<TrackWinner>)`: Winners, empty until some are recorded
    /// - `Err(AppError::NotFound)`: Track doesn't exist
    pub async fn list_by_track(&self, track_id: i32) -> Result<Vec<TrackWinner>, AppError> {
        let txn = self.db.begin().await?;

        ensure_track_exists(&txn, track_id).await?;
        let winners = TrackWinnerRepository::new(&txn)
            .get_by_track_id(track_id)
            .await?;

        txn.commit().await?;

        Ok(winners)
    }

    pub async fn get(&self, track_id: i32, track_team_id: i32) -> Result<TrackWinner, AppError> {
        TrackWinnerRepository::new(self.db)
            .get(track_id, track_team_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Team {} is not a winner of track {}",
                    track_team_id, track_id
                ))
            })
    }

    /// Records a winner by hand
    ///
    /// # Returns
    /// - `Ok(TrackWinner)`: The created record
    /// - `Err(AppError::NotFound)`: Track doesn't exist
    /// - `Err(AppError::Forbidden)`: Track is score-based; its winners come from `set_results`
    pub async fn create(&self, params: CreateTrackWinnerParams) -> Result<TrackWinner, AppError> {
        let txn = self.db.begin().await?;

        let track = ensure_track_exists(&txn, params.track_id).await?;
        if track.is_score_based {
            return Err(AppError::Forbidden(
                "manually creation of winners of track forbidden".to_string(),
            ));
        }

        let winner = TrackWinnerRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        Ok(winner)
    }

    /// Current standings of a track
    ///
    /// Sums every result submitted on the track's timelines per track team, orders
    /// the totals descending (equal totals by team id ascending) and then applies
    /// `offset` and `limit`. Returns an empty list when no results exist.
    pub async fn calculate_rating(
        &self,
        track_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<TeamResult>, AppError> {
        let results = aggregate_results(self.db, track_id, limit, offset).await?;

        Ok(results)
    }

    /// Generates the winners of a completed score-based track from its standings
    ///
    /// Takes the top `limit` standings; the team at index `i` gets place `i` and is an
    /// awardee when its total reaches `threshold`. All rows are written in one
    /// transaction, so either every winner is stored or none is.
    ///
    /// # Arguments
    /// - `track_id`: Track to generate winners for
    /// - `threshold`: Minimum total for the awardee flag (inclusive)
    /// - `limit`: Maximum number of winners
    ///
    /// # Returns
    /// - `Ok(Vec<TrackWinner>)`: Created winners ordered by place
    /// - `Err(AppError::NotFound)`: Track doesn't exist
    /// - `Err(AppError::InvalidState)`: Track isn't score-based and completed, or its
    ///   winners were already generated
    /// - `Err(AppError::DbErr)`: Any write failed; nothing was committed
    pub async fn set_results(
        &self,
        track_id: i32,
        threshold: i64,
        limit: u64,
    ) -> Result<Vec<TrackWinner>, AppError> {
        let txn = self.db.begin().await?;
        let winners = TrackWinnerRepository::new(&txn);

        let track = ensure_track_exists(&txn, track_id).await?;
        if !track.accepts_generated_results() {
            return Err(AppError::InvalidState(
                "results can be generated only for completed tracks based on score".to_string(),
            ));
        }

        if winners.count_by_track_id(track_id).await? > 0 {
            return Err(AppError::InvalidState(
                "winners already generated for track".to_string(),
            ));
        }

        let standings = aggregate_results(&txn, track_id, limit, 0).await?;

        let mut created = Vec::with_capacity(standings.len());
        for (place, result) in standings.into_iter().enumerate() {
            let winner = winners
                .create(CreateTrackWinnerParams {
                    track_id,
                    track_team_id: result.team_id,
                    place: place as i32,
                    is_awardee: result.total_value >= threshold,
                })
                .await?;

            created.push(winner);
        }

        txn.commit().await?;

        tracing::info!(
            track_id,
            threshold,
            winners = created.len(),
            "Track results generated"
        );

        Ok(created)
    }
}

async fn aggregate_results<C: ConnectionTrait>(
    db: &C,
    track_id: i32,
    limit: u64,
    offset: u64,
) -> Result<Vec<TeamResult>, AppError> {
    let mut results = TeamActionStatusRepository::new(db)
        .sum_results_by_track(track_id)
        .await?;

    rank_results(&mut results);

    Ok(results
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect())
}
