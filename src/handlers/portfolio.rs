//! Portfolio Handlers
//!
//! Two-step flow: the artisan first generates a statement from their
//! journey (nothing stored), then submits the curated portfolio entry.
//! Portfolios do not feed the analytics counters.

use axum::{extract::State, response::Json};

use super::router::AppState;
use crate::errors::{AppError, GenerationErrorExt, ValidationErrorExt};
use crate::metrics;
use crate::models::{NewPortfolio, Portfolio};
use crate::storage::DEMO_USER_ID;
use crate::validation;

// =============================================================================
// REQUEST/RESPONSE TYPES
// =============================================================================

/// Artist statement request. Inspiration and philosophy are optional angles.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStatementRequest {
    #[serde(default)]
    pub artist_journey: String,
    #[serde(default)]
    pub inspiration: Option<String>,
    #[serde(default)]
    pub philosophy: Option<String>,
}

/// Artist statement response. The statement is returned, never stored.
#[derive(Debug, serde::Serialize)]
pub struct GenerateStatementResponse {
    pub statement: String,
}

/// Portfolio creation request. No generator call; stores what was sent.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolioRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist_statement: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// POST /api/portfolio/generate-statement - Draft an artist statement
#[tracing::instrument(skip(state))]
pub async fn generate_statement(
    State(state): State<AppState>,
    Json(req): Json<GenerateStatementRequest>,
) -> Result<Json<GenerateStatementResponse>, AppError> {
    validation::require_fields("Artist journey is required", &[&req.artist_journey])
        .map_validation_err()?;
    validation::validate_field_length("artistJourney", &req.artist_journey)
        .map_validation_err()?;

    let statement = state
        .generator
        .artist_statement(
            &req.artist_journey,
            req.inspiration.as_deref(),
            req.philosophy.as_deref(),
        )
        .await
        .map_generation_err("Failed to generate artist statement")?;

    Ok(Json(GenerateStatementResponse { statement }))
}

/// POST /api/portfolio - Store a curated portfolio entry
///
/// Publishing is out of scope for the dashboard, so entries are always
/// private.
#[tracing::instrument(skip(state))]
pub async fn create_portfolio(
    State(state): State<AppState>,
    Json(req): Json<CreatePortfolioRequest>,
) -> Result<Json<Portfolio>, AppError> {
    validation::require_fields(
        "Title, artist statement, and description are required",
        &[&req.title, &req.artist_statement, &req.description],
    )
    .map_validation_err()?;
    validation::validate_field_length("artistStatement", &req.artist_statement)
        .map_validation_err()?;
    validation::validate_field_length("description", &req.description).map_validation_err()?;

    let portfolio = state.storage.create_portfolio(NewPortfolio {
        user_id: DEMO_USER_ID.to_string(),
        title: req.title,
        artist_statement: req.artist_statement,
        description: req.description,
        tags: req.tags,
        is_public: false,
    });

    metrics::RECORDS_CREATED_TOTAL
        .with_label_values(&["portfolio"])
        .inc();

    Ok(Json(portfolio))
}

/// GET /api/portfolio - Portfolio entries for the current artisan
pub async fn list_portfolios(State(state): State<AppState>) -> Json<Vec<Portfolio>> {
    Json(state.storage.portfolios_by_user(DEMO_USER_ID))
}
