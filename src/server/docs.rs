//! OpenAPI document and Swagger UI.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Eventboard API", description = "Events, tracks, timelines and track standings"),
    paths(
        crate::server::controller::date::list_dates,
        crate::server::controller::date::create_date,
        crate::server::controller::date::get_date,
        crate::server::controller::date::update_date,
        crate::server::controller::date::delete_date,
        crate::server::controller::location::list_locations,
        crate::server::controller::location::create_location,
        crate::server::controller::location::get_location,
        crate::server::controller::location::update_location,
        crate::server::controller::location::delete_location,
        crate::server::controller::event::list_events,
        crate::server::controller::event::create_event,
        crate::server::controller::event::get_event,
        crate::server::controller::event::update_event,
        crate::server::controller::event::delete_event,
        crate::server::controller::event::list_event_locations,
        crate::server::controller::event::add_event_location,
        crate::server::controller::event::remove_event_location,
        crate::server::controller::track::list_tracks,
        crate::server::controller::track::create_track,
        crate::server::controller::track::get_track,
        crate::server::controller::track::update_track,
        crate::server::controller::track::delete_track,
        crate::server::controller::track::list_track_locations,
        crate::server::controller::track::add_track_location,
        crate::server::controller::track::remove_track_location,
        crate::server::controller::track::list_track_teams,
        crate::server::controller::track::register_track_team,
        crate::server::controller::track::get_track_team,
        crate::server::controller::track::update_track_team,
        crate::server::controller::track::delete_track_team,
        crate::server::controller::timeline::list_timelines,
        crate::server::controller::timeline::create_timeline,
        crate::server::controller::timeline::get_timeline,
        crate::server::controller::timeline::update_timeline,
        crate::server::controller::timeline::delete_timeline,
        crate::server::controller::timeline::get_max_value,
        crate::server::controller::timeline::list_timeline_statuses,
        crate::server::controller::timeline::create_timeline_status,
        crate::server::controller::team_action_status::list_team_action_statuses,
        crate::server::controller::team_action_status::create_team_action_status,
        crate::server::controller::team_action_status::get_team_action_status,
        crate::server::controller::team_action_status::update_team_action_status,
        crate::server::controller::team_action_status::delete_team_action_status,
        crate::server::controller::track_winner::list_team_wins,
        crate::server::controller::track_winner::list_track_winners,
        crate::server::controller::track_winner::get_track_winner,
        crate::server::controller::track_winner::create_track_winner,
        crate::server::controller::track_winner::calculate_rating,
        crate::server::controller::track_winner::set_track_results,
        crate::server::controller::scheduler::get_scheduler_metrics,
    ),
    components(
        schemas(
            crate::model::api::ErrorDto,
            crate::model::status::LifecycleStatusDto,
            crate::model::date::DateDto,
            crate::model::date::CreateDateDto,
            crate::model::date::UpdateDateDto,
            crate::model::location::LocationDto,
            crate::model::location::CreateLocationDto,
            crate::model::location::UpdateLocationDto,
            crate::model::location::LinkLocationDto,
            crate::model::event::EventDto,
            crate::model::event::CreateEventDto,
            crate::model::event::UpdateEventDto,
            crate::model::track::TrackDto,
            crate::model::track::CreateTrackDto,
            crate::model::track::UpdateTrackDto,
            crate::model::track::TrackTeamDto,
            crate::model::track::RegisterTeamDto,
            crate::model::track::UpdateTrackTeamDto,
            crate::model::timeline::TimelineDto,
            crate::model::timeline::CreateTimelineDto,
            crate::model::timeline::UpdateTimelineDto,
            crate::model::timeline::TimelineStatusDto,
            crate::model::timeline::CreateTimelineStatusDto,
            crate::model::timeline::MaxValueDto,
            crate::model::team_action_status::TeamActionStatusDto,
            crate::model::team_action_status::CreateTeamActionStatusDto,
            crate::model::team_action_status::UpdateTeamActionStatusDto,
            crate::model::track_winner::TrackWinnerDto,
            crate::model::track_winner::CreateTrackWinnerDto,
            crate::model::track_winner::TeamResultDto,
            crate::model::scheduler::SchedulerMetricsDto,
        )
    ),
    tags(
        (name = "date", description = "Date windows of events and tracks"),
        (name = "location", description = "Venues"),
        (name = "event", description = "Events and their locations"),
        (name = "track", description = "Tracks, their locations and registered teams"),
        (name = "timeline", description = "Ordered stages of a track"),
        (name = "team-action-status", description = "Results submitted by teams"),
        (name = "track-winner", description = "Standings and winners of tracks"),
        (name = "scheduler", description = "Lifecycle scheduler counters"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, backed by the generated document at `/api-doc/openapi.json`.
pub fn router() -> Router {
    SwaggerUi::new("/docs")
        .url("/api-doc/openapi.json", ApiDoc::openapi())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_core_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/track-winner/{track_id}"));
        assert!(doc.paths.paths.contains_key("/api/track-winner/{track_id}/results"));
        assert!(doc.paths.paths.contains_key("/api/track-winner/track/{track_id}"));
        assert!(doc.paths.paths.contains_key("/api/scheduler/metrics"));
    }
}
