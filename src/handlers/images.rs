//! Image Analysis Handlers
//!
//! Accepts a multipart photo upload, asks the model for a description and
//! marketing copy, and stores the result with the image inlined as a data
//! URL. Image analyses count toward the `images_analyzed` analytic.

use axum::{
    extract::{Multipart, State},
    response::Json,
};
use base64::Engine;

use super::router::AppState;
use crate::errors::{AppError, GenerationErrorExt, ValidationErrorExt};
use crate::metrics;
use crate::models::{ImageAnalysis, NewImageAnalysis};
use crate::storage::DEMO_USER_ID;
use crate::validation;

/// POST /api/images/analyze - Analyze an uploaded product photo
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImageAnalysis>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("image") {
            // Capture the content type before `bytes()` consumes the field
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to read upload: {e}")))?;
            upload = Some((content_type, data.to_vec()));
            break;
        }
    }

    let (mime_type, data) =
        upload.ok_or_else(|| AppError::validation("No image file provided"))?;

    validation::validate_image_upload(&mime_type, data.len(), state.config.max_upload_bytes)
        .map_validation_err()?;
    metrics::UPLOAD_BYTES.observe(data.len() as f64);

    let insights = state
        .generator
        .analyze_image(&data, &mime_type)
        .await
        .map_generation_err("Failed to analyze image. Please try again later.")?;

    // The store is in-memory, so the upload is kept inline rather than on disk
    let image_url = format!(
        "data:{};base64,{}",
        mime_type,
        base64::engine::general_purpose::STANDARD.encode(&data)
    );

    let analysis = state.storage.create_image_analysis(NewImageAnalysis {
        user_id: DEMO_USER_ID.to_string(),
        image_url,
        description: insights.description,
        marketing_copy: insights.marketing_copy,
    });

    metrics::RECORDS_CREATED_TOTAL
        .with_label_values(&["image"])
        .inc();

    Ok(Json(analysis))
}

/// GET /api/images - Image analyses for the current artisan
pub async fn list_image_analyses(State(state): State<AppState>) -> Json<Vec<ImageAnalysis>> {
    Json(state.storage.image_analyses_by_user(DEMO_USER_ID))
}
