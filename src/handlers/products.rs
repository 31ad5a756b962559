//! Product Listing Handlers
//!
//! Rewrites a marketplace listing for search. The description is optional
//! on the way in; the stored record carries the optimized description.
//! Listings do not feed the analytics counters.

use axum::{extract::State, response::Json};

use super::router::AppState;
use crate::errors::{AppError, GenerationErrorExt, ValidationErrorExt};
use crate::metrics;
use crate::models::{NewProductListing, ProductListing};
use crate::storage::DEMO_USER_ID;
use crate::validation;

// =============================================================================
// REQUEST/RESPONSE TYPES
// =============================================================================

/// Listing optimization request. `description` may be omitted.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeProductRequest {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub description: String,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// POST /api/products/optimize - Rewrite a listing for a marketplace
#[tracing::instrument(skip(state))]
pub async fn optimize_product(
    State(state): State<AppState>,
    Json(req): Json<OptimizeProductRequest>,
) -> Result<Json<ProductListing>, AppError> {
    validation::require_fields(
        "Product name and platform are required",
        &[&req.product_name, &req.platform],
    )
    .map_validation_err()?;
    validation::validate_field_length("description", &req.description).map_validation_err()?;

    let rewrite = state
        .generator
        .optimize_product(&req.product_name, &req.description, &req.platform)
        .await
        .map_generation_err("Failed to optimize product listing")?;

    let listing = state.storage.create_product_listing(NewProductListing {
        user_id: DEMO_USER_ID.to_string(),
        product_name: req.product_name,
        platform: req.platform,
        optimized_title: rewrite.optimized_title,
        description: rewrite.optimized_description,
        keywords: rewrite.keywords,
    });

    metrics::RECORDS_CREATED_TOTAL
        .with_label_values(&["product"])
        .inc();

    Ok(Json(listing))
}

/// GET /api/products - Product listings for the current artisan
pub async fn list_product_listings(State(state): State<AppState>) -> Json<Vec<ProductListing>> {
    Json(state.storage.product_listings_by_user(DEMO_USER_ID))
}
