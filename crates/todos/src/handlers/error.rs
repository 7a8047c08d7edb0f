use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use todos_core::{todo_error_to_status_code, ApiResponse, TodoError};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}

/// Render errors raised by the middleware stack (request timeouts, mostly).
pub async fn handle_middleware_error(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::error!("Request timed out");
    } else {
        tracing::error!(error = %err, "Unhandled middleware error");
    }

    internal_error_response()
}

/// Render a panic raised while serving a request.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Request handler panicked");

    internal_error_response()
}

/// Handler error rendered as an [`ApiResponse`] envelope.
///
/// `TodoError`s pick their status from `todo_error_to_status_code`; anything
/// else is a 500. Server errors are logged with their full detail and
/// answered with a generic message.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self.0.downcast_ref::<TodoError>() {
            Some(todo_error) => {
                let code = todo_error_to_status_code(todo_error);
                (
                    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    todo_error.public_message(),
                )
            }
            None => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        };

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        (status_code, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
