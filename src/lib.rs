pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod views;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use config::AppState;

pub fn create_app(state: AppState) -> Router {
    use crate::handlers::{
        admin_submissions, admin_submissions_json, contact_redirect, health_check, home,
        not_found, submit_contact,
    };

    Router::new()
        .route("/", get(home))
        .route("/contact", get(contact_redirect).post(submit_contact))
        .route("/admin/submissions", get(admin_submissions))
        .route("/admin/submissions.json", get(admin_submissions_json))
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(crate::middleware::request_id_middleware))
                .layer(axum_middleware::from_fn(crate::middleware::security_headers_middleware))
                .layer(CatchPanicLayer::custom(crate::middleware::handle_panic)),
        )
        .with_state(state)
}
