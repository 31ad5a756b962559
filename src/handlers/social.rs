//! Social Content Handlers
//!
//! Rewrites draft social content for a target platform. The stored record
//! carries the optimized content, not the artisan's draft. Social posts
//! count toward the `social_posts` analytic.

use axum::{extract::State, response::Json};

use super::router::AppState;
use crate::errors::{AppError, GenerationErrorExt, ValidationErrorExt};
use crate::metrics;
use crate::models::{NewSocialPost, SocialPost};
use crate::storage::DEMO_USER_ID;
use crate::validation;

// =============================================================================
// REQUEST/RESPONSE TYPES
// =============================================================================

/// Social optimization request
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeSocialRequest {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub craft_type: String,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// POST /api/social/optimize - Rewrite content for a social platform
#[tracing::instrument(skip(state))]
pub async fn optimize_social(
    State(state): State<AppState>,
    Json(req): Json<OptimizeSocialRequest>,
) -> Result<Json<SocialPost>, AppError> {
    validation::require_fields(
        "Platform, content, and craft type are required",
        &[&req.platform, &req.content, &req.craft_type],
    )
    .map_validation_err()?;
    validation::validate_field_length("content", &req.content).map_validation_err()?;

    let rewrite = state
        .generator
        .optimize_social(&req.platform, &req.content, &req.craft_type)
        .await
        .map_generation_err("Failed to optimize social content")?;

    let post = state.storage.create_social_post(NewSocialPost {
        user_id: DEMO_USER_ID.to_string(),
        platform: req.platform,
        content: rewrite.optimized_content,
        hashtags: rewrite.hashtags,
        caption: rewrite.caption,
    });

    metrics::RECORDS_CREATED_TOTAL
        .with_label_values(&["social"])
        .inc();

    Ok(Json(post))
}

/// GET /api/social - Social posts for the current artisan
pub async fn list_social_posts(State(state): State<AppState>) -> Json<Vec<SocialPost>> {
    Json(state.storage.social_posts_by_user(DEMO_USER_ID))
}
