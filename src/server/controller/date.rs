use axum::{
    Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        date::{CreateDateDto, DateDto, UpdateDateDto},
    },
    server::{
        error::AppError,
        model::date::{CreateDateParams, UpdateDateParams},
        service::date::DateService,
        state::AppState,
    },
};

/// Tag for grouping date endpoints in OpenAPI documentation
pub static DATE_TAG: &str = "date";

/// List all date windows.
#[utoipa::path(
    get,
    path = "/api/dates",
    tag = DATE_TAG,
    responses(
        (status = 200, description = "Date windows", body = Vec<DateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_dates(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dates = DateService::new(&state.db).list().await?;

    Ok(Json(
        dates.into_iter().map(|d| d.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Create a date window.
///
/// # Returns
/// - `201 Created` - Window created
/// - `400 Bad Request` - Malformed body or `date_end` before `date_start`
#[utoipa::path(
    post,
    path = "/api/dates",
    tag = DATE_TAG,
    request_body = CreateDateDto,
    responses(
        (status = 201, description = "Date window created", body = DateDto),
        (status = 400, description = "Invalid date window", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_date(
    State(state): State<AppState>,
    payload: Result<Json<CreateDateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let date = DateService::new(&state.db)
        .create(CreateDateParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(date.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/dates/{id}",
    tag = DATE_TAG,
    params(("id" = i32, Path, description = "Date ID")),
    responses(
        (status = 200, description = "Date window", body = DateDto),
        (status = 404, description = "Date not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_date(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let date = DateService::new(&state.db).get(id).await?;

    Ok(Json(date.into_dto()))
}

/// Update a date window. Omitted bounds keep their stored value.
#[utoipa::path(
    put,
    path = "/api/dates/{id}",
    tag = DATE_TAG,
    params(("id" = i32, Path, description = "Date ID")),
    request_body = UpdateDateDto,
    responses(
        (status = 200, description = "Date window updated", body = DateDto),
        (status = 400, description = "Invalid date window", body = ErrorDto),
        (status = 404, description = "Date not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_date(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateDateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let date = DateService::new(&state.db)
        .update(UpdateDateParams::from_dto(id, payload))
        .await?;

    Ok(Json(date.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/dates/{id}",
    tag = DATE_TAG,
    params(("id" = i32, Path, description = "Date ID")),
    responses(
        (status = 204, description = "Date window deleted"),
        (status = 404, description = "Date not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_date(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    DateService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
