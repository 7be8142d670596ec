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
        location::{LinkLocationDto, LocationDto},
        track::{
            CreateTrackDto, RegisterTeamDto, TrackDto, TrackTeamDto, UpdateTrackDto,
            UpdateTrackTeamDto,
        },
    },
    server::{
        error::AppError,
        model::track::{
            CreateTrackParams, RegisterTeamParams, UpdateTrackParams, UpdateTrackTeamParams,
        },
        service::track::TrackService,
        state::AppState,
    },
};

/// Tag for grouping track endpoints in OpenAPI documentation
pub static TRACK_TAG: &str = "track";

#[derive(Deserialize)]
pub struct TrackFilter {
    #[serde(rename = "EventId", default)]
    pub event_id: Option<i32>,
}

/// List tracks, optionally only those of one event.
#[utoipa::path(
    get,
    path = "/api/tracks",
    tag = TRACK_TAG,
    params(
        ("EventId" = Option<i32>, Query, description = "Only tracks of this event")
    ),
    responses(
        (status = 200, description = "Tracks", body = Vec<TrackDto>),
        (status = 400, description = "Non-numeric EventId", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tracks(
    State(state): State<AppState>,
    query: Result<Query<TrackFilter>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(filter) = query?;

    let service = TrackService::new(&state.db);

    let tracks = match filter.event_id {
        Some(event_id) => service.list_by_event(event_id).await?,
        None => service.list().await?,
    };

    Ok(Json(
        tracks.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Create a track.
///
/// Whether the track is score-based is decided here and can't be changed later;
/// it controls whether winners are generated from results or entered by hand.
///
/// # Returns
/// - `201 Created` - Track created in `scheduled` state
/// - `400 Bad Request` - Malformed body
/// - `404 Not Found` - Event or date doesn't exist
#[utoipa::path(
    post,
    path = "/api/tracks",
    tag = TRACK_TAG,
    request_body = CreateTrackDto,
    responses(
        (status = 201, description = "Track created", body = TrackDto),
        (status = 400, description = "Invalid track data", body = ErrorDto),
        (status = 404, description = "Event or date not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_track(
    State(state): State<AppState>,
    payload: Result<Json<CreateTrackDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let track = TrackService::new(&state.db)
        .create(CreateTrackParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(track.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/tracks/{id}",
    tag = TRACK_TAG,
    params(("id" = i32, Path, description = "Track ID")),
    responses(
        (status = 200, description = "Track", body = TrackDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_track(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let track = TrackService::new(&state.db).get(id).await?;

    Ok(Json(track.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/tracks/{id}",
    tag = TRACK_TAG,
    params(("id" = i32, Path, description = "Track ID")),
    request_body = UpdateTrackDto,
    responses(
        (status = 200, description = "Track updated", body = TrackDto),
        (status = 400, description = "Invalid track data", body = ErrorDto),
        (status = 404, description = "Track or date not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_track(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateTrackDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let track = TrackService::new(&state.db)
        .update(UpdateTrackParams::from_dto(id, payload))
        .await?;

    Ok(Json(track.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/tracks/{id}",
    tag = TRACK_TAG,
    params(("id" = i32, Path, description = "Track ID")),
    responses(
        (status = 204, description = "Track deleted"),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_track(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    TrackService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/tracks/{id}/locations",
    tag = TRACK_TAG,
    params(("id" = i32, Path, description = "Track ID")),
    responses(
        (status = 200, description = "Locations of the track", body = Vec<LocationDto>),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_track_locations(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let locations = TrackService::new(&state.db).list_locations(id).await?;

    Ok(Json(
        locations
            .into_iter()
            .map(|l| l.into_dto())
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/tracks/{id}/locations",
    tag = TRACK_TAG,
    params(("id" = i32, Path, description = "Track ID")),
    request_body = LinkLocationDto,
    responses(
        (status = 204, description = "Location linked"),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Track or location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_track_location(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<LinkLocationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    TrackService::new(&state.db)
        .add_location(id, payload.location_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/tracks/{id}/locations/{location_id}",
    tag = TRACK_TAG,
    params(
        ("id" = i32, Path, description = "Track ID"),
        ("location_id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 204, description = "Location unlinked"),
        (status = 404, description = "Location not linked to track", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_track_location(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((id, location_id)) = path?;

    TrackService::new(&state.db)
        .remove_location(id, location_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/tracks/{id}/teams",
    tag = TRACK_TAG,
    params(("id" = i32, Path, description = "Track ID")),
    responses(
        (status = 200, description = "Teams registered on the track", body = Vec<TrackTeamDto>),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_track_teams(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let teams = TrackService::new(&state.db).list_teams(id).await?;

    Ok(Json(
        teams.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Register a team on a track.
///
/// The returned `id` is the track team id that results and winners refer to.
#[utoipa::path(
    post,
    path = "/api/tracks/{id}/teams",
    tag = TRACK_TAG,
    params(("id" = i32, Path, description = "Track ID")),
    request_body = RegisterTeamDto,
    responses(
        (status = 201, description = "Team registered", body = TrackTeamDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_track_team(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<RegisterTeamDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let team = TrackService::new(&state.db)
        .register_team(RegisterTeamParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/tracks/{id}/teams/{team_id}",
    tag = TRACK_TAG,
    params(
        ("id" = i32, Path, description = "Track ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team registration", body = TrackTeamDto),
        (status = 404, description = "Team not registered on track", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_track_team(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((id, team_id)) = path?;

    let team = TrackService::new(&state.db).get_team(id, team_id).await?;

    Ok(Json(team.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/tracks/{id}/teams/{team_id}",
    tag = TRACK_TAG,
    params(
        ("id" = i32, Path, description = "Track ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    request_body = UpdateTrackTeamDto,
    responses(
        (status = 200, description = "Team registration updated", body = TrackTeamDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Team not registered on track", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_track_team(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
    payload: Result<Json<UpdateTrackTeamDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((id, team_id)) = path?;
    let Json(payload) = payload?;

    let team = TrackService::new(&state.db)
        .update_team(UpdateTrackTeamParams::from_dto(id, team_id, payload))
        .await?;

    Ok(Json(team.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/tracks/{id}/teams/{team_id}",
    tag = TRACK_TAG,
    params(
        ("id" = i32, Path, description = "Track ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Team unregistered"),
        (status = 404, description = "Team not registered on track", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_track_team(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((id, team_id)) = path?;

    TrackService::new(&state.db).delete_team(id, team_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
