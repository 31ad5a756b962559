//! Story Generation Handlers
//!
//! Generates a marketing story for the artisan's craft and stores it.
//! Story creations count toward the `stories_generated` analytic.

use axum::{extract::State, response::Json};

use super::router::AppState;
use crate::errors::{AppError, GenerationErrorExt, ValidationErrorExt};
use crate::metrics;
use crate::models::{NewStory, Story};
use crate::storage::DEMO_USER_ID;
use crate::validation;

// =============================================================================
// REQUEST/RESPONSE TYPES
// =============================================================================

/// Story generation request
///
/// Fields default to empty so a missing field fails the presence check with
/// the dashboard's message instead of a deserialization error.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStoryRequest {
    #[serde(default)]
    pub craft_type: String,
    #[serde(default)]
    pub focus: String,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// POST /api/stories/generate - Generate and store a marketing story
#[tracing::instrument(skip(state))]
pub async fn generate_story(
    State(state): State<AppState>,
    Json(req): Json<GenerateStoryRequest>,
) -> Result<Json<Story>, AppError> {
    validation::require_fields(
        "Craft type and focus are required",
        &[&req.craft_type, &req.focus],
    )
    .map_validation_err()?;
    validation::validate_field_length("craftType", &req.craft_type).map_validation_err()?;
    validation::validate_field_length("focus", &req.focus).map_validation_err()?;

    let draft = state
        .generator
        .generate_story(&req.craft_type, &req.focus)
        .await
        .map_generation_err("Failed to generate story. Please try again later.")?;

    let story = state.storage.create_story(NewStory {
        user_id: DEMO_USER_ID.to_string(),
        title: draft.title,
        content: draft.content,
        craft_type: req.craft_type,
        focus: Some(req.focus),
    });

    metrics::RECORDS_CREATED_TOTAL
        .with_label_values(&["story"])
        .inc();

    Ok(Json(story))
}

/// GET /api/stories - Stories for the current artisan
pub async fn list_stories(State(state): State<AppState>) -> Json<Vec<Story>> {
    Json(state.storage.stories_by_user(DEMO_USER_ID))
}
