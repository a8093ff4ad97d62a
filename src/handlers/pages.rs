use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::PrivateCookieJar;

use crate::{
    config::AppState,
    middleware::error_handling::not_found_response,
    utils::flash::Flash,
    views,
};

/// Homepage with company information and the contact form. Consumes any
/// pending flash message.
pub async fn home(jar: PrivateCookieJar) -> (PrivateCookieJar, Html<String>) {
    let (jar, flash) = Flash::take(jar);
    (jar, Html(views::home_page(flash.as_ref())))
}

pub async fn not_found() -> Response {
    not_found_response()
}

/// Liveness probe that also checks the store answers.
pub async fn health_check(State(state): State<AppState>) -> Response {
    match sqlx::query("SELECT 1").execute(&state.database_pool).await {
        Ok(_) => (StatusCode::OK, "ok").into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "database unavailable").into_response()
        }
    }
}
