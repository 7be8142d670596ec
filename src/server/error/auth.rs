use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing Authorization header")]
    MissingAuthorization,

    /// The external auth service could not be reached.
    ///
    /// Results in a 503 Service Unavailable response.
    #[error("External auth service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The external auth service did not answer with status `ok`.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Access denied by external auth service")]
    AccessDenied,
}

/// Converts authentication errors into HTTP responses.
///
/// Service failures are logged; the client only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingAuthorization => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::ServiceUnavailable(reason) => {
                tracing::error!("Auth service unavailable: {}", reason);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "External service unavailable".to_string(),
                )
            }
            Self::AccessDenied => (StatusCode::FORBIDDEN, self.to_string()),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
