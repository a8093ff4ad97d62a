// ============================================================================
// Error Handling - HTML error pages
// ============================================================================
//
// Store errors and handler panics are logged server-side with full detail
// and rendered as the generic error page. The visitor never sees store
// messages, SQL or file paths.
//
// ============================================================================

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::views;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                server_error_response()
            }
            // The contact form turns validation failures into a flash redirect,
            // so no current route renders this page.
            AppError::Validation(errors) => {
                tracing::debug!("Validation failed: {}", errors);
                (StatusCode::BAD_REQUEST, Html(views::bad_request_page())).into_response()
            }
            AppError::NotFound(what) => {
                tracing::debug!("Not found: {}", what);
                not_found_response()
            }
        }
    }
}

pub fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response()
}

pub fn server_error_response() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(views::server_error_page())).into_response()
}

/// Turns a panic inside a handler into the generic error page.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);
    server_error_response()
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_is_generic_500() {
        let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Submission 3".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_errors_classified() {
        let err = AppError::Validation(ValidationErrors::new());
        assert!(err.is_validation());
        assert!(!AppError::NotFound("x".to_string()).is_validation());
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation(ValidationErrors::new()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_panic_payload_renders_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
