//! Activity Feed Handler
//!
//! Merges stories, image analyses, social posts and heritage stories into
//! one reverse-chronological feed for the dashboard's sidebar. Product
//! listings and portfolios do not appear in the feed.

use axum::{extract::State, response::Json};

use super::router::AppState;
use crate::models::{ActivityItem, ActivityKind};
use crate::storage::DEMO_USER_ID;

/// Feed length served to the dashboard.
const FEED_LIMIT: usize = 10;

/// GET /api/activity - Most recent generation activity, newest first
pub async fn recent_activity(State(state): State<AppState>) -> Json<Vec<ActivityItem>> {
    let storage = &state.storage;
    let mut items: Vec<ActivityItem> = Vec::new();

    items.extend(storage.stories_by_user(DEMO_USER_ID).into_iter().map(|s| {
        ActivityItem {
            kind: ActivityKind::Story,
            title: format!("Generated story for {}", s.craft_type),
            created_at: s.created_at,
        }
    }));

    items.extend(
        storage
            .image_analyses_by_user(DEMO_USER_ID)
            .into_iter()
            .map(|a| ActivityItem {
                kind: ActivityKind::Image,
                title: "Analyzed product image".to_string(),
                created_at: a.created_at,
            }),
    );

    items.extend(
        storage
            .social_posts_by_user(DEMO_USER_ID)
            .into_iter()
            .map(|p| ActivityItem {
                kind: ActivityKind::Social,
                title: format!("Optimized {} content", p.platform),
                created_at: p.created_at,
            }),
    );

    items.extend(
        storage
            .heritage_stories_by_user(DEMO_USER_ID)
            .into_iter()
            .map(|h| ActivityItem {
                kind: ActivityKind::Heritage,
                title: format!("Created heritage story for {}", h.technique),
                created_at: h.created_at,
            }),
    );

    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items.truncate(FEED_LIMIT);

    Json(items)
}
