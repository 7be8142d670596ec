use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::server::{
    controller::{
        date::{create_date, delete_date, get_date, list_dates, update_date},
        event::{
            add_event_location, create_event, delete_event, get_event, list_event_locations,
            list_events, remove_event_location, update_event,
        },
        location::{
            create_location, delete_location, get_location, list_locations, update_location,
        },
        scheduler::get_scheduler_metrics,
        team_action_status::{
            create_team_action_status, delete_team_action_status, get_team_action_status,
            list_team_action_statuses, update_team_action_status,
        },
        timeline::{
            create_timeline, create_timeline_status, delete_timeline, get_max_value,
            get_timeline, list_timeline_statuses, list_timelines, update_timeline,
        },
        track::{
            add_track_location, create_track, delete_track, delete_track_team, get_track,
            get_track_team, list_track_locations, list_track_teams, list_tracks,
            register_track_team, remove_track_location, update_track, update_track_team,
        },
        track_winner::{
            calculate_rating, create_track_winner, get_track_winner, list_team_wins,
            list_track_winners, set_track_results,
        },
    },
    docs,
    middleware::auth::require_auth,
    state::AppState,
};

/// API routes behind the auth pass-through, plus the unauthenticated Swagger UI.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/dates", get(list_dates).post(create_date))
        .route(
            "/dates/{id}",
            get(get_date).put(update_date).delete(delete_date),
        )
        .route("/locations", get(list_locations).post(create_location))
        .route(
            "/locations/{id}",
            get(get_location)
                .put(update_location)
                .delete(delete_location),
        )
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route(
            "/events/{id}/locations",
            get(list_event_locations).post(add_event_location),
        )
        .route(
            "/events/{id}/locations/{location_id}",
            axum::routing::delete(remove_event_location),
        )
        .route("/tracks", get(list_tracks).post(create_track))
        .route(
            "/tracks/{id}",
            get(get_track).put(update_track).delete(delete_track),
        )
        .route(
            "/tracks/{id}/locations",
            get(list_track_locations).post(add_track_location),
        )
        .route(
            "/tracks/{id}/locations/{location_id}",
            axum::routing::delete(remove_track_location),
        )
        .route(
            "/tracks/{id}/teams",
            get(list_track_teams).post(register_track_team),
        )
        .route(
            "/tracks/{id}/teams/{team_id}",
            get(get_track_team)
                .put(update_track_team)
                .delete(delete_track_team),
        )
        .route("/timelines", get(list_timelines).post(create_timeline))
        .route("/timelines/max-value", get(get_max_value))
        .route(
            "/timelines/status",
            get(list_timeline_statuses).post(create_timeline_status),
        )
        .route(
            "/timelines/{id}",
            get(get_timeline)
                .put(update_timeline)
                .delete(delete_timeline),
        )
        .route(
            "/team-action-status",
            get(list_team_action_statuses).post(create_team_action_status),
        )
        .route(
            "/team-action-status/{timeline_id}/{team_id}",
            get(get_team_action_status)
                .put(update_team_action_status)
                .delete(delete_team_action_status),
        )
        .route(
            "/track-winner",
            get(list_team_wins).post(create_track_winner),
        )
        .route(
            "/track-winner/{track_id}",
            get(get_track_winner).post(calculate_rating),
        )
        .route("/track-winner/{track_id}/results", post(set_track_results))
        .route("/track-winner/track/{track_id}", get(list_track_winners))
        .route("/scheduler/metrics", get(get_scheduler_metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .merge(docs::router())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use test_utils::builder::TestBuilder;
    use tower::ServiceExt;

    use super::*;
    use crate::server::scheduler::metrics::AtomicSchedulerMetrics;

    async fn app(auth_url: Option<String>) -> (Router, test_utils::context::TestContext) {
        let test = TestBuilder::new()
            .with_scoring_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let state = AppState::new(
            db,
            reqwest::Client::new(),
            auth_url,
            Arc::new(AtomicSchedulerMetrics::new()),
        );

        (router(state), test)
    }

    async fn error_message(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        body["error"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn missing_team_id_is_bad_request() {
        let (app, _test) = app(None).await;

        let response = app
            .oneshot(
                Request::get("/api/track-winner")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (app, _test) = app(None).await;

        let response = app
            .oneshot(
                Request::post("/api/dates")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"date_start\": 5"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_track_is_not_found() {
        let (app, _test) = app(None).await;

        let response = app
            .oneshot(
                Request::get("/api/tracks/41")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn auth_requires_header_when_configured() {
        let (app, _test) = app(Some("http://127.0.0.1:9/check".to_string())).await;

        let response = app
            .oneshot(
                Request::get("/api/scheduler/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_numeric_path_is_json_bad_request() {
        let (app, _test) = app(None).await;

        let response = app
            .oneshot(
                Request::get("/api/tracks/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!error_message(response).await.is_empty());
    }

    #[tokio::test]
    async fn non_numeric_query_is_json_bad_request() {
        let (app, _test) = app(None).await;

        let response = app
            .oneshot(
                Request::get("/api/timelines?TrackId=first")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!error_message(response).await.is_empty());
    }

    #[tokio::test]
    async fn track_winners_of_unknown_track_are_not_found() {
        let (app, _test) = app(None).await;

        let response = app
            .oneshot(
                Request::get("/api/track-winner/track/41")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(error_message(response).await.contains("41"));
    }
}
