use axum::{
    Json,
    extract::{Path, Query, State, rejection::{JsonRejection, PathRejection, QueryRejection}},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        track_winner::{CreateTrackWinnerDto, TeamResultDto, TrackWinnerDto},
    },
    server::{
        error::AppError,
        model::track_winner::{CreateTrackWinnerParams, DEFAULT_RATING_LIMIT},
        service::track_winner::TrackWinnerService,
        state::AppState,
    },
};

/// Tag for grouping track winner endpoints in OpenAPI documentation
pub static TRACK_WINNER_TAG: &str = "track-winner";

#[derive(Deserialize)]
pub struct TeamQuery {
    #[serde(rename = "TeamId", default)]
    pub team_id: Option<i32>,
}

impl TeamQuery {
    fn require(self) -> Result<i32, AppError> {
        self.team_id
            .ok_or_else(|| AppError::BadRequest("TeamId query parameter is required".to_string()))
    }
}

#[derive(Deserialize)]
pub struct RatingQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

#[derive(Deserialize)]
pub struct ResultsQuery {
    pub threshold: i64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_RATING_LIMIT
}

/// List the winner records of a team.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - `TeamId`, the track team ID
///
/// # Returns
/// - `200 OK` - Winner records of the team across tracks
/// - `400 Bad Request` - `TeamId` missing or not a number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/track-winner",
    tag = TRACK_WINNER_TAG,
    params(("TeamId" = i32, Query, description = "Track team ID")),
    responses(
        (status = 200, description = "Winner records of the team", body = Vec<TrackWinnerDto>),
        (status = 400, description = "Missing or invalid TeamId", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_team_wins(
    State(state): State<AppState>,
    query: Result<Query<TeamQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let team_id = query.require()?;

    let winners = TrackWinnerService::new(&state.db)
        .list_by_team(team_id)
        .await?;

    Ok(Json(
        winners.into_iter().map(|w| w.into_dto()).collect::<Vec<_>>(),
    ))
}

/// List the winners of a track ordered by place.
///
/// # Returns
/// - `200 OK` - Winners of the track, empty until recorded or generated
/// - `404 Not Found` - Track doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/track-winner/track/{track_id}",
    tag = TRACK_WINNER_TAG,
    params(("track_id" = i32, Path, description = "Track ID")),
    responses(
        (status = 200, description = "Winners of the track", body = Vec<TrackWinnerDto>),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_track_winners(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(track_id) = path?;

    let winners = TrackWinnerService::new(&state.db)
        .list_by_track(track_id)
        .await?;

    Ok(Json(
        winners.into_iter().map(|w| w.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get the winner record of a team on one track.
#[utoipa::path(
    get,
    path = "/api/track-winner/{track_id}",
    tag = TRACK_WINNER_TAG,
    params(
        ("track_id" = i32, Path, description = "Track ID"),
        ("TeamId" = i32, Query, description = "Track team ID")
    ),
    responses(
        (status = 200, description = "Winner record", body = TrackWinnerDto),
        (status = 400, description = "Missing or invalid TeamId", body = ErrorDto),
        (status = 404, description = "Team is not a winner of the track", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_track_winner(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<TeamQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(track_id) = path?;
    let Query(query) = query?;

    let team_id = query.require()?;

    let winner = TrackWinnerService::new(&state.db)
        .get(track_id, team_id)
        .await?;

    Ok(Json(winner.into_dto()))
}

/// Record a winner by hand.
///
/// Only allowed for tracks that are not score-based; winners of score-based tracks
/// are generated from their results.
///
/// # Returns
/// - `201 Created` - Winner recorded
/// - `400 Bad Request` - Malformed body
/// - `403 Forbidden` - Track is score-based
/// - `404 Not Found` - Track doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/track-winner",
    tag = TRACK_WINNER_TAG,
    request_body = CreateTrackWinnerDto,
    responses(
        (status = 201, description = "Winner recorded", body = TrackWinnerDto),
        (status = 400, description = "Invalid winner data", body = ErrorDto),
        (status = 403, description = "Track is score-based", body = ErrorDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_track_winner(
    State(state): State<AppState>,
    payload: Result<Json<CreateTrackWinnerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let winner = TrackWinnerService::new(&state.db)
        .create(CreateTrackWinnerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(winner.into_dto())))
}

/// Calculate the current standings of a track.
///
/// Sums each team's results over the track's timelines. Standings are sorted by total
/// descending, equal totals by team ID ascending, and then paginated. Nothing is
/// persisted.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `track_id` - Track to rate
/// - `query` - `limit` (default 100) and `offset` (default 0)
///
/// # Returns
/// - `200 OK` - Standings page, empty when no results were submitted
/// - `400 Bad Request` - Non-numeric pagination parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/track-winner/{track_id}",
    tag = TRACK_WINNER_TAG,
    params(
        ("track_id" = i32, Path, description = "Track ID"),
        ("limit" = Option<u64>, Query, description = "Maximum entries (default: 100)"),
        ("offset" = Option<u64>, Query, description = "Entries to skip (default: 0)")
    ),
    responses(
        (status = 200, description = "Standings of the track", body = Vec<TeamResultDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn calculate_rating(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<RatingQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(track_id) = path?;
    let Query(query) = query?;

    let standings = TrackWinnerService::new(&state.db)
        .calculate_rating(track_id, query.limit, query.offset)
        .await?;

    Ok(Json(
        standings
            .into_iter()
            .map(|r| r.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Generate the winners of a completed score-based track.
///
/// The top `limit` teams of the standings become winners; place is their 0-based
/// rank and teams whose total reaches `threshold` are awardees. Winners can only be
/// generated once per track.
///
/// # Returns
/// - `201 Created` - Generated winners ordered by place
/// - `400 Bad Request` - Missing or invalid `threshold`
/// - `404 Not Found` - Track doesn't exist
/// - `409 Conflict` - Track isn't score-based and completed, or already has winners
/// - `500 Internal Server Error` - Database error; nothing was stored
#[utoipa::path(
    post,
    path = "/api/track-winner/{track_id}/results",
    tag = TRACK_WINNER_TAG,
    params(
        ("track_id" = i32, Path, description = "Track ID"),
        ("threshold" = i64, Query, description = "Minimum total for awardees"),
        ("limit" = Option<u64>, Query, description = "Maximum winners (default: 100)")
    ),
    responses(
        (status = 201, description = "Winners generated", body = Vec<TrackWinnerDto>),
        (status = 400, description = "Invalid parameters", body = ErrorDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 409, description = "Track not eligible for result generation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_track_results(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<ResultsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(track_id) = path?;
    let Query(query) = query?;

    let winners = TrackWinnerService::new(&state.db)
        .set_results(track_id, query.threshold, query.limit)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(
            winners
                .into_iter()
                .map(|w| w.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
