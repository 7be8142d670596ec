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
        timeline::{
            CreateTimelineDto, CreateTimelineStatusDto, MaxValueDto, TimelineDto,
            TimelineStatusDto, UpdateTimelineDto,
        },
    },
    server::{
        error::AppError,
        model::timeline::{CreateTimelineParams, UpdateTimelineParams},
        service::timeline::TimelineService,
        state::AppState,
    },
};

/// Tag for grouping timeline endpoints in OpenAPI documentation
pub static TIMELINE_TAG: &str = "timeline";

#[derive(Deserialize)]
pub struct TimelineFilter {
    #[serde(rename = "TrackId", default)]
    pub track_id: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
}

fn require_track_id(track_id: Option<i32>) -> Result<i32, AppError> {
    track_id.ok_or_else(|| AppError::BadRequest("TrackId query parameter is required".to_string()))
}

/// List the timelines of a track.
///
/// Timelines are returned in evaluation order (`count_num` ascending).
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `filter` - Required `TrackId` and an optional exact `status`
///
/// # Returns
/// - `200 OK` - Timelines of the track
/// - `400 Bad Request` - `TrackId` missing or not a number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/timelines",
    tag = TIMELINE_TAG,
    params(
        ("TrackId" = i32, Query, description = "Track ID"),
        ("status" = Option<String>, Query, description = "Only timelines with this status")
    ),
    responses(
        (status = 200, description = "Timelines of the track", body = Vec<TimelineDto>),
        (status = 400, description = "Missing or invalid TrackId", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_timelines(
    State(state): State<AppState>,
    query: Result<Query<TimelineFilter>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(filter) = query?;

    let track_id = require_track_id(filter.track_id)?;

    let timelines = TimelineService::new(&state.db)
        .list_by_track(track_id, filter.status.as_deref())
        .await?;

    Ok(Json(
        timelines
            .into_iter()
            .map(|t| t.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Create a timeline at the end of its track.
#[utoipa::path(
    post,
    path = "/api/timelines",
    tag = TIMELINE_TAG,
    request_body = CreateTimelineDto,
    responses(
        (status = 201, description = "Timeline created", body = TimelineDto),
        (status = 400, description = "Invalid timeline data", body = ErrorDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_timeline(
    State(state): State<AppState>,
    payload: Result<Json<CreateTimelineDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let timeline = TimelineService::new(&state.db)
        .create(CreateTimelineParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(timeline.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/timelines/{id}",
    tag = TIMELINE_TAG,
    params(("id" = i32, Path, description = "Timeline ID")),
    responses(
        (status = 200, description = "Timeline", body = TimelineDto),
        (status = 404, description = "Timeline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_timeline(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let timeline = TimelineService::new(&state.db).get(id).await?;

    Ok(Json(timeline.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/timelines/{id}",
    tag = TIMELINE_TAG,
    params(("id" = i32, Path, description = "Timeline ID")),
    request_body = UpdateTimelineDto,
    responses(
        (status = 200, description = "Timeline updated", body = TimelineDto),
        (status = 400, description = "Invalid timeline data", body = ErrorDto),
        (status = 404, description = "Timeline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_timeline(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateTimelineDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let timeline = TimelineService::new(&state.db)
        .update(UpdateTimelineParams::from_dto(id, payload))
        .await?;

    Ok(Json(timeline.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/timelines/{id}",
    tag = TIMELINE_TAG,
    params(("id" = i32, Path, description = "Timeline ID")),
    responses(
        (status = 204, description = "Timeline deleted"),
        (status = 404, description = "Timeline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_timeline(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    TimelineService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Highest total a team can reach on a track.
///
/// Each scoring timeline is worth 100 points.
#[utoipa::path(
    get,
    path = "/api/timelines/max-value",
    tag = TIMELINE_TAG,
    params(("TrackId" = i32, Query, description = "Track ID")),
    responses(
        (status = 200, description = "Maximum achievable value", body = MaxValueDto),
        (status = 400, description = "Missing or invalid TrackId", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_max_value(
    State(state): State<AppState>,
    query: Result<Query<TimelineFilter>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(filter) = query?;

    let track_id = require_track_id(filter.track_id)?;

    let max_value = TimelineService::new(&state.db).max_value(track_id).await?;

    Ok(Json(MaxValueDto {
        track_id,
        max_value,
    }))
}

#[utoipa::path(
    get,
    path = "/api/timelines/status",
    tag = TIMELINE_TAG,
    responses(
        (status = 200, description = "Timeline statuses", body = Vec<TimelineStatusDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_timeline_statuses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let statuses = TimelineService::new(&state.db).list_statuses().await?;

    Ok(Json(
        statuses
            .into_iter()
            .map(|s| s.into_dto())
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/timelines/status",
    tag = TIMELINE_TAG,
    request_body = CreateTimelineStatusDto,
    responses(
        (status = 201, description = "Timeline status created", body = TimelineStatusDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_timeline_status(
    State(state): State<AppState>,
    payload: Result<Json<CreateTimelineStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let status = TimelineService::new(&state.db)
        .create_status(payload.count_num)
        .await?;

    Ok((StatusCode::CREATED, Json(status.into_dto())))
}
