//! Authentication pass-through.
//!
//! Tokens are never inspected locally. The request's `Authorization` header is
//! forwarded to the configured auth service, which answers `{"status": "ok"}` for
//! requests that may proceed.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::server::{
    error::{AppError, auth::AuthError},
    state::AppState,
};

#[derive(Debug, Deserialize)]
struct AuthServiceResponse {
    #[serde(default)]
    status: String,
}

pub struct AuthGuard<'a> {
    client: &'a reqwest::Client,
    auth_url: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(client: &'a reqwest::Client, auth_url: &'a str) -> Self {
        Self { client, auth_url }
    }

    /// Asks the auth service whether the request carrying `headers` may proceed
    ///
    /// # Returns
    /// - `Ok(())`: Auth service answered with status `ok`
    /// - `Err(AuthError::MissingAuthorization)`: No `Authorization` header
    /// - `Err(AuthError::ServiceUnavailable)`: Auth service couldn't be reached
    /// - `Err(AuthError::AccessDenied)`: Any other answer, including an unreadable one
    pub async fn require(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let Some(authorization) = headers.get(AUTHORIZATION).filter(|v| !v.is_empty()) else {
            return Err(AuthError::MissingAuthorization);
        };

        let response = self
            .client
            .get(self.auth_url)
            .header(AUTHORIZATION, HeaderValue::clone(authorization))
            .send()
            .await
            .map_err(|e| AuthError::ServiceUnavailable(e.to_string()))?;

        let body = match response.json::<AuthServiceResponse>().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Unreadable auth service response: {}", e);
                return Err(AuthError::AccessDenied);
            }
        };

        if body.status != "ok" {
            tracing::debug!(status = %body.status, "Auth service denied request");
            return Err(AuthError::AccessDenied);
        }

        Ok(())
    }
}

/// Axum middleware guarding the API routes. A no-op when no auth URL is configured.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(auth_url) = state.auth_url.as_deref() {
        AuthGuard::new(&state.http_client, auth_url)
            .require(request.headers())
            .await?;
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, routing::get};
    use serde_json::json;

    use super::*;

    /// Serves a fake auth service answering every request with `body`.
    async fn spawn_auth_service(body: serde_json::Value) -> String {
        let app = Router::new().route(
            "/check",
            get(move || {
                let body = body.clone();
                async move { Json(body) }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/check", addr)
    }

    fn bearer() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let client = reqwest::Client::new();

        let result = AuthGuard::new(&client, "http://127.0.0.1:9/check")
            .require(&HeaderMap::new())
            .await;

        assert!(matches!(result, Err(AuthError::MissingAuthorization)));
    }

    #[tokio::test]
    async fn ok_status_passes() {
        let url = spawn_auth_service(json!({ "status": "ok", "user": 1 })).await;
        let client = reqwest::Client::new();

        let result = AuthGuard::new(&client, &url).require(&bearer()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn other_status_is_denied() {
        let url = spawn_auth_service(json!({ "status": "expired" })).await;
        let client = reqwest::Client::new();

        let result = AuthGuard::new(&client, &url).require(&bearer()).await;

        assert!(matches!(result, Err(AuthError::AccessDenied)));
    }

    #[tokio::test]
    async fn unreachable_service_is_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = reqwest::Client::new();

        let result = AuthGuard::new(&client, &format!("http://{}/check", addr))
            .require(&bearer())
            .await;

        assert!(matches!(result, Err(AuthError::ServiceUnavailable(_))));
    }
}
