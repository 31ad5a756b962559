//! Market Trends Handler
//!
//! Asks the model for a demand estimate for a craft category. This endpoint
//! never fails: any generator error falls back to canned defaults so the
//! trends card always renders.

use axum::{
    extract::{Query, State},
    response::Json,
};

use super::router::AppState;
use crate::gemini::MarketTrends;

// =============================================================================
// REQUEST/RESPONSE TYPES
// =============================================================================

/// Query parameters for trends endpoint
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsQuery {
    #[serde(default = "default_craft_type")]
    pub craft_type: String,
}

fn default_craft_type() -> String {
    "Pottery".to_string()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// GET /api/market-trends?craftType= - Market estimate for a craft category
#[tracing::instrument(skip(state))]
pub async fn market_trends(
    State(state): State<AppState>,
    Query(query): Query<TrendsQuery>,
) -> Json<MarketTrends> {
    let trends = match state.generator.market_trends(&query.craft_type).await {
        Ok(trends) => trends,
        Err(e) => {
            tracing::warn!(
                craft_type = %query.craft_type,
                "Market trends generation failed, serving defaults: {e:#}"
            );
            MarketTrends::fallback()
        }
    };

    Json(trends)
}
