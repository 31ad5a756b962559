//! Router Configuration - Centralized route definitions
//!
//! This module builds the Axum router using handlers from the submodules.
//! All `/api` routes operate on the implied demo user; `/health` and
//! `/metrics` serve probes and Prometheus scraping.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::state::StudioState;
use super::{activity, health, heritage, images, portfolio, products, social, stories, trends, users};

/// Application state type alias
pub type AppState = Arc<StudioState>;

/// Build the complete router
///
/// Note: This function does NOT apply the metrics middleware, concurrency
/// limit, or CORS. The caller (main.rs) applies those layers.
pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        // =================================================================
        // HEALTH & PROBES
        // =================================================================
        .route("/health", get(health::health))
        .route("/health/live", get(health::health_live))
        .route("/health/ready", get(health::health_ready))
        // =================================================================
        // METRICS (PROMETHEUS)
        // =================================================================
        .route("/metrics", get(health::metrics_endpoint))
        // =================================================================
        // USER & ANALYTICS
        // =================================================================
        .route("/api/user", get(users::get_user))
        .route("/api/analytics", get(users::get_analytics))
        // =================================================================
        // STORIES
        // =================================================================
        .route("/api/stories/generate", post(stories::generate_story))
        .route("/api/stories", get(stories::list_stories))
        // =================================================================
        // IMAGE ANALYSIS
        // =================================================================
        .route(
            "/api/images/analyze",
            post(images::analyze_image).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/images", get(images::list_image_analyses))
        // =================================================================
        // SOCIAL CONTENT
        // =================================================================
        .route("/api/social/optimize", post(social::optimize_social))
        .route("/api/social", get(social::list_social_posts))
        // =================================================================
        // PRODUCT LISTINGS
        // =================================================================
        .route("/api/products/optimize", post(products::optimize_product))
        .route("/api/products", get(products::list_product_listings))
        // =================================================================
        // HERITAGE STORIES
        // =================================================================
        .route("/api/heritage/generate", post(heritage::generate_heritage))
        .route("/api/heritage", get(heritage::list_heritage_stories))
        // =================================================================
        // PORTFOLIO
        // =================================================================
        .route(
            "/api/portfolio/generate-statement",
            post(portfolio::generate_statement),
        )
        .route("/api/portfolio", post(portfolio::create_portfolio))
        .route("/api/portfolio", get(portfolio::list_portfolios))
        // =================================================================
        // MARKET TRENDS
        // =================================================================
        .route("/api/market-trends", get(trends::market_trends))
        // =================================================================
        // ACTIVITY FEED
        // =================================================================
        .route("/api/activity", get(activity::recent_activity))
        // =================================================================
        // STATE
        // =================================================================
        .with_state(state)
}
