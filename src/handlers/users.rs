//! User and Analytics Handlers
//!
//! The dashboard runs single-user: both routes resolve the seeded demo
//! artisan.

use axum::{extract::State, response::Json};

use super::router::AppState;
use crate::errors::AppError;
use crate::models::{Analytics, User};
use crate::storage::DEMO_USER_ID;

/// GET /api/user - Current artisan profile
pub async fn get_user(State(state): State<AppState>) -> Result<Json<User>, AppError> {
    let user = state
        .storage
        .get_user(DEMO_USER_ID)
        .ok_or_else(|| AppError::not_found("User"))?;
    Ok(Json(user))
}

/// GET /api/analytics - Dashboard counters for the current artisan
pub async fn get_analytics(State(state): State<AppState>) -> Result<Json<Analytics>, AppError> {
    let analytics = state
        .storage
        .get_analytics(DEMO_USER_ID)
        .ok_or_else(|| AppError::not_found("Analytics"))?;
    Ok(Json(analytics))
}
