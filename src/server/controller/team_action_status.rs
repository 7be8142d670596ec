use axum::{
    Json,
    extract::{Path, Query, State, rejection::{JsonRejection, PathRejection, QueryRejection}},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        team_action_status::{
            CreateTeamActionStatusDto, TeamActionStatusDto, UpdateTeamActionStatusDto,
        },
    },
    server::{
        error::AppError,
        model::team_action_status::{
            CreateTeamActionStatusParams, UpdateTeamActionStatusParams,
        },
        service::team_action_status::TeamActionStatusService,
        state::AppState,
    },
};

/// Tag for grouping team result endpoints in OpenAPI documentation
pub static TEAM_ACTION_STATUS_TAG: &str = "team-action-status";

#[derive(Deserialize)]
pub struct TeamActionStatusFilter {
    #[serde(rename = "TeamId", default)]
    pub team_id: Option<i32>,
    #[serde(rename = "TimelineId", default)]
    pub timeline_id: Option<i32>,
}

/// List submitted results.
///
/// Filters by track team when `TeamId` is given, otherwise by timeline. One of the
/// two is required.
#[utoipa::path(
    get,
    path = "/api/team-action-status",
    tag = TEAM_ACTION_STATUS_TAG,
    params(
        ("TeamId" = Option<i32>, Query, description = "Track team ID"),
        ("TimelineId" = Option<i32>, Query, description = "Timeline ID")
    ),
    responses(
        (status = 200, description = "Submitted results", body = Vec<TeamActionStatusDto>),
        (status = 400, description = "Neither TeamId nor TimelineId given", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_team_action_statuses(
    State(state): State<AppState>,
    query: Result<Query<TeamActionStatusFilter>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(filter) = query?;

    let service = TeamActionStatusService::new(&state.db);

    let statuses = match (filter.team_id, filter.timeline_id) {
        (Some(team_id), _) => service.list_by_team(team_id).await?,
        (None, Some(timeline_id)) => service.list_by_timeline(timeline_id).await?,
        (None, None) => {
            return Err(AppError::BadRequest(
                "TeamId or TimelineId query parameter is required".to_string(),
            ));
        }
    };

    Ok(Json(
        statuses
            .into_iter()
            .map(|s| s.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Submit a team's result for a timeline.
///
/// `completed_at` defaults to the time of submission.
///
/// # Returns
/// - `201 Created` - Result recorded
/// - `400 Bad Request` - Malformed body
/// - `500 Internal Server Error` - Database error, including a second result for the
///   same team and timeline
#[utoipa::path(
    post,
    path = "/api/team-action-status",
    tag = TEAM_ACTION_STATUS_TAG,
    request_body = CreateTeamActionStatusDto,
    responses(
        (status = 201, description = "Result recorded", body = TeamActionStatusDto),
        (status = 400, description = "Invalid result data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team_action_status(
    State(state): State<AppState>,
    payload: Result<Json<CreateTeamActionStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let status = TeamActionStatusService::new(&state.db)
        .create(CreateTeamActionStatusParams::from_dto(payload, Utc::now()))
        .await?;

    Ok((StatusCode::CREATED, Json(status.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/team-action-status/{timeline_id}/{team_id}",
    tag = TEAM_ACTION_STATUS_TAG,
    params(
        ("timeline_id" = i32, Path, description = "Timeline ID"),
        ("team_id" = i32, Path, description = "Track team ID")
    ),
    responses(
        (status = 200, description = "Submitted result", body = TeamActionStatusDto),
        (status = 404, description = "No result for team and timeline", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_action_status(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((timeline_id, team_id)) = path?;

    let status = TeamActionStatusService::new(&state.db)
        .get(timeline_id, team_id)
        .await?;

    Ok(Json(status.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/team-action-status/{timeline_id}/{team_id}",
    tag = TEAM_ACTION_STATUS_TAG,
    params(
        ("timeline_id" = i32, Path, description = "Timeline ID"),
        ("team_id" = i32, Path, description = "Track team ID")
    ),
    request_body = UpdateTeamActionStatusDto,
    responses(
        (status = 200, description = "Result updated", body = TeamActionStatusDto),
        (status = 400, description = "Invalid result data", body = ErrorDto),
        (status = 404, description = "No result for team and timeline", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team_action_status(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
    payload: Result<Json<UpdateTeamActionStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((timeline_id, team_id)) = path?;
    let Json(payload) = payload?;

    let status = TeamActionStatusService::new(&state.db)
        .update(UpdateTeamActionStatusParams::from_dto(
            timeline_id,
            team_id,
            payload,
        ))
        .await?;

    Ok(Json(status.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/team-action-status/{timeline_id}/{team_id}",
    tag = TEAM_ACTION_STATUS_TAG,
    params(
        ("timeline_id" = i32, Path, description = "Timeline ID"),
        ("team_id" = i32, Path, description = "Track team ID")
    ),
    responses(
        (status = 204, description = "Result deleted"),
        (status = 404, description = "No result for team and timeline", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team_action_status(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((timeline_id, team_id)) = path?;

    TeamActionStatusService::new(&state.db)
        .delete(timeline_id, team_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
