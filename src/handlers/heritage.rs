//! Heritage Story Handlers
//!
//! Generates a plain-text narrative about a traditional technique and its
//! cultural context. Heritage stories do not feed the analytics counters.

use axum::{extract::State, response::Json};

use super::router::AppState;
use crate::errors::{AppError, GenerationErrorExt, ValidationErrorExt};
use crate::metrics;
use crate::models::{HeritageStory, NewHeritageStory};
use crate::storage::DEMO_USER_ID;
use crate::validation;

// =============================================================================
// REQUEST/RESPONSE TYPES
// =============================================================================

/// Heritage story request
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateHeritageRequest {
    #[serde(default)]
    pub technique: String,
    #[serde(default)]
    pub cultural_context: String,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// POST /api/heritage/generate - Generate and store a heritage narrative
#[tracing::instrument(skip(state))]
pub async fn generate_heritage(
    State(state): State<AppState>,
    Json(req): Json<GenerateHeritageRequest>,
) -> Result<Json<HeritageStory>, AppError> {
    validation::require_fields(
        "Technique and cultural context are required",
        &[&req.technique, &req.cultural_context],
    )
    .map_validation_err()?;
    validation::validate_field_length("culturalContext", &req.cultural_context)
        .map_validation_err()?;

    let story_text = state
        .generator
        .heritage_story(&req.technique, &req.cultural_context)
        .await
        .map_generation_err("Failed to generate heritage story")?;

    let story = state.storage.create_heritage_story(NewHeritageStory {
        user_id: DEMO_USER_ID.to_string(),
        technique: req.technique,
        cultural_context: req.cultural_context,
        story: story_text,
    });

    metrics::RECORDS_CREATED_TOTAL
        .with_label_values(&["heritage"])
        .inc();

    Ok(Json(story))
}

/// GET /api/heritage - Heritage stories for the current artisan
pub async fn list_heritage_stories(State(state): State<AppState>) -> Json<Vec<HeritageStory>> {
    Json(state.storage.heritage_stories_by_user(DEMO_USER_ID))
}
