use axum::{extract::State, response::Html, Json};

use crate::{
    config::AppState,
    middleware::error_handling::Result,
    services::ContactService,
    views,
};

/// List every contact submission, newest first.
pub async fn admin_submissions(State(state): State<AppState>) -> Result<Html<String>> {
    let service = ContactService::new(state.database_pool.clone());
    let submissions = service.list_submissions().await?;

    Ok(Html(views::submissions_page(&submissions)))
}

/// Same listing as [`admin_submissions`], as a JSON array.
///
/// ```json
/// [{"id": 2, "name": "Maria Silva", "status": "new", "created_at": "...", ...}]
/// ```
pub async fn admin_submissions_json(
    State(state): State<AppState>,
) -> Result<Json<Vec<serde_json::Value>>> {
    let service = ContactService::new(state.database_pool.clone());
    let submissions = service.list_submissions().await?;

    Ok(Json(submissions.iter().map(|s| s.to_json()).collect()))
}
