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
        event::{CreateEventDto, EventDto, UpdateEventDto},
        location::{LinkLocationDto, LocationDto},
        status::LifecycleStatusDto,
    },
    server::{
        error::AppError,
        model::{
            event::{CreateEventParams, UpdateEventParams},
            status::LifecycleStatus,
        },
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

#[derive(Deserialize)]
pub struct EventFilter {
    #[serde(default)]
    pub status: Option<LifecycleStatusDto>,
}

/// List events.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `filter` - Optional lifecycle status to filter by
///
/// # Returns
/// - `200 OK` - Events, all of them when no status is given
/// - `400 Bad Request` - Unknown status value
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("status" = Option<LifecycleStatusDto>, Query, description = "Only events in this lifecycle state")
    ),
    responses(
        (status = 200, description = "Events", body = Vec<EventDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<EventFilter>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(filter) = query?;

    let events = EventService::new(&state.db)
        .list(filter.status.map(LifecycleStatus::from_dto))
        .await?;

    Ok(Json(
        events.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Create an event.
///
/// New events start `scheduled`; the lifecycle scheduler moves them on once their
/// date window opens.
///
/// # Returns
/// - `201 Created` - Event created
/// - `400 Bad Request` - Malformed body
/// - `404 Not Found` - Referenced date doesn't exist
/// - `500 Internal Server Error` - Database error, including a duplicate title
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Date not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let event = EventService::new(&state.db)
        .create(CreateEventParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let event = EventService::new(&state.db).get(id).await?;

    Ok(Json(event.into_dto()))
}

/// Update an event. Only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Event or date not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateEventDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let event = EventService::new(&state.db)
        .update(UpdateEventParams::from_dto(id, payload))
        .await?;

    Ok(Json(event.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    EventService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/events/{id}/locations",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Locations of the event", body = Vec<LocationDto>),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_event_locations(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let locations = EventService::new(&state.db).list_locations(id).await?;

    Ok(Json(
        locations
            .into_iter()
            .map(|l| l.into_dto())
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/locations",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = LinkLocationDto,
    responses(
        (status = 204, description = "Location linked"),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Event or location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_event_location(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<LinkLocationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    EventService::new(&state.db)
        .add_location(id, payload.location_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}/locations/{location_id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID"),
        ("location_id" = i32, Path, description = "Location ID")
    ),
    responses(
        (status = 204, description = "Location unlinked"),
        (status = 404, description = "Location not linked to event", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_event_location(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((id, location_id)) = path?;

    EventService::new(&state.db)
        .remove_location(id, location_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
