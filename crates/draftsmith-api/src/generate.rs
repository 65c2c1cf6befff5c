use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

use draftsmith_types::api::GenerationOptions;
use draftsmith_types::models::GeneratedDesignResponse;
use draftsmith_types::validation::ValidationIssue;

use crate::ApiError;
use crate::state::AppState;

/// POST /api/generate with `{ prompt, options? }`. The provider is only called
/// once the body has been validated.
pub async fn generate_design(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GeneratedDesignResponse>, ApiError> {
    let Ok(Json(body)) = body else {
        return Err(prompt_required());
    };

    let prompt = match body.get("prompt") {
        Some(Value::String(p)) if !p.is_empty() => p.as_str(),
        _ => return Err(prompt_required()),
    };

    let options = match body.get("options") {
        None | Some(Value::Null) => GenerationOptions::default(),
        Some(raw) => serde_json::from_value(raw.clone()).map_err(|e| ApiError::Validation {
            message: "Invalid generation options",
            issues: vec![ValidationIssue::invalid_type("options", e.to_string())],
        })?,
    };

    let design = state.generator.generate(prompt, &options).await?;
    Ok(Json(design))
}

fn prompt_required() -> ApiError {
    ApiError::BadRequest("Prompt is required")
}
