pub mod designs;
pub mod error;
pub mod generate;
pub mod state;

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use draftsmith_types::api::ErrorResponse;

pub use error::ApiError;
pub use state::{AppState, AppStateInner};

/// All JSON endpoints, mounted under `/api`. Unknown `/api/*` paths answer
/// with a JSON 404 instead of reaching whatever fallback the caller adds.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/designs", get(designs::list_designs).post(designs::create_design))
        .route("/designs/{id}", get(designs::get_design))
        .route("/generate", post(generate::generate_design))
        .fallback(not_found)
        .with_state(state);

    Router::new().nest("/api", api)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::message("Not found")))
}
