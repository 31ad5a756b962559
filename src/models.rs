//! Record types for the studio dashboard
//!
//! Flat records, camelCase on the wire. Every record is immutable after
//! creation except the analytics counters, which are bumped by the storage
//! layer on each counted creation event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// STORED RECORDS
// ============================================================================

/// An artisan account. The demo dashboard runs single-user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub craft_type: String,
    pub email: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A generated marketing story.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub craft_type: String,
    pub focus: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The model's read of an uploaded product photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    pub id: String,
    pub user_id: String,
    pub image_url: String,
    pub description: String,
    pub marketing_copy: String,
    pub created_at: DateTime<Utc>,
}

/// Platform-optimized social content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub id: String,
    pub user_id: String,
    pub platform: String,
    pub content: String,
    pub hashtags: Vec<String>,
    pub caption: String,
    pub created_at: DateTime<Utc>,
}

/// A marketplace listing rewritten for search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub id: String,
    pub user_id: String,
    pub product_name: String,
    pub platform: String,
    pub optimized_title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A narrative about a traditional technique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeritageStory {
    pub id: String,
    pub user_id: String,
    pub technique: String,
    pub cultural_context: String,
    pub story: String,
    pub created_at: DateTime<Utc>,
}

/// A curated portfolio entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub artist_statement: String,
    pub description: String,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

/// Per-user dashboard counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub id: String,
    pub user_id: String,
    pub stories_generated: u32,
    pub images_analyzed: u32,
    pub social_posts: u32,
    pub revenue_growth: u32,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// INSERT PAYLOADS
// ============================================================================
// Storage assigns id and created_at; handlers never do.

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub craft_type: String,
    pub email: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewStory {
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub craft_type: String,
    pub focus: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewImageAnalysis {
    pub user_id: String,
    pub image_url: String,
    pub description: String,
    pub marketing_copy: String,
}

#[derive(Debug, Clone)]
pub struct NewSocialPost {
    pub user_id: String,
    pub platform: String,
    pub content: String,
    pub hashtags: Vec<String>,
    pub caption: String,
}

#[derive(Debug, Clone)]
pub struct NewProductListing {
    pub user_id: String,
    pub product_name: String,
    pub platform: String,
    pub optimized_title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NewHeritageStory {
    pub user_id: String,
    pub technique: String,
    pub cultural_context: String,
    pub story: String,
}

#[derive(Debug, Clone)]
pub struct NewPortfolio {
    pub user_id: String,
    pub title: String,
    pub artist_statement: String,
    pub description: String,
    pub tags: Vec<String>,
    pub is_public: bool,
}

// ============================================================================
// ACTIVITY FEED
// ============================================================================

/// Record class an activity item came from, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Story,
    Image,
    Social,
    Heritage,
}

/// One row of the merged recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_wire_names() {
        let story = Story {
            id: "s1".to_string(),
            user_id: "demo-user-1".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            craft_type: "Pottery".to_string(),
            focus: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&story).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("craftType").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_activity_kind_wire_values() {
        let item = ActivityItem {
            kind: ActivityKind::Heritage,
            title: "Created heritage story for Raku".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "heritage");
        assert_eq!(
            serde_json::to_value(ActivityKind::Image).unwrap(),
            serde_json::json!("image")
        );
    }
}
