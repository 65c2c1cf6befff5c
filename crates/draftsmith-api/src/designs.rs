use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::info;

use draftsmith_types::models::Design;
use draftsmith_types::validation::{NewDesign, ValidationIssue};

use crate::ApiError;
use crate::state::{AppState, run_store};

/// GET /api/designs
pub async fn list_designs(State(state): State<AppState>) -> Result<Json<Vec<Design>>, ApiError> {
    let designs = run_store(&state, "Failed to fetch designs", |store| store.get_all_designs()).await?;
    Ok(Json(designs))
}

/// GET /api/designs/{id}
pub async fn get_design(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Design>, ApiError> {
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid design ID"))?;

    run_store(&state, "Failed to fetch design", move |store| store.get_design(id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Design not found"))
}

/// POST /api/designs. `createdAt` is always the server's clock.
pub async fn create_design(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    const INVALID: &str = "Invalid design data";

    let Json(body) = body.map_err(|rejection| ApiError::Validation {
        message: INVALID,
        issues: vec![ValidationIssue::invalid_object(Vec::new(), rejection.body_text())],
    })?;

    let new_design = NewDesign::from_json(&body).map_err(|e| ApiError::Validation {
        message: INVALID,
        issues: e.issues,
    })?;

    let draft = new_design.stamped(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
    let design = run_store(&state, "Failed to create design", move |store| {
        store.create_design(draft)
    })
    .await?;

    info!("Design {} created ({})", design.id, design.name);
    Ok((StatusCode::CREATED, Json(design)))
}
