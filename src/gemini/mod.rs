//! Gemini generation client
//!
//! Everything the studio asks the model for goes through the [`Generator`]
//! trait: handlers depend on the trait, production wires in the REST-backed
//! [`GeminiClient`], and tests substitute a canned implementation.

pub mod client;
pub mod prompts;
pub mod wire;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;

pub use client::GeminiClient;

/// Title and body for a generated marketing story.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    pub content: String,
}

/// What the model saw in an uploaded product photo.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInsights {
    pub description: String,
    pub marketing_copy: String,
}

/// Platform-tuned rewrite of a social post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialRewrite {
    pub optimized_content: String,
    pub hashtags: Vec<String>,
    pub caption: String,
}

/// Search-tuned rewrite of a product listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRewrite {
    pub optimized_title: String,
    pub optimized_description: String,
    pub keywords: Vec<String>,
}

/// Market estimate for a craft category. Serialized straight to the wire by
/// the trends endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrends {
    pub demand_increase: u32,
    pub avg_price: u32,
    pub keywords: Vec<String>,
}

impl MarketTrends {
    /// Defaults served when the model cannot be reached. The trends card
    /// always renders something.
    pub fn fallback() -> Self {
        Self {
            demand_increase: 28,
            avg_price: 45,
            keywords: vec![
                "sustainable".to_string(),
                "handmade".to_string(),
                "eco-friendly".to_string(),
            ],
        }
    }
}

/// The seam between HTTP handlers and the generative model.
///
/// Errors are plain `anyhow` chains; the handlers classify them into 401/503/500
/// with [`crate::errors::GenerationErrorExt`].
#[async_trait]
pub trait Generator: Send + Sync {
    /// Narrative story for an artisan's craft and chosen focus area.
    async fn generate_story(&self, craft_type: &str, focus: &str) -> Result<StoryDraft>;

    /// Description and marketing copy for an uploaded product image.
    async fn analyze_image(&self, image: &[u8], mime_type: &str) -> Result<ImageInsights>;

    /// Platform-optimized rewrite of social content.
    async fn optimize_social(
        &self,
        platform: &str,
        content: &str,
        craft_type: &str,
    ) -> Result<SocialRewrite>;

    /// SEO rewrite of a product listing.
    async fn optimize_product(
        &self,
        product_name: &str,
        description: &str,
        platform: &str,
    ) -> Result<ListingRewrite>;

    /// Plain-text heritage narrative for a traditional technique.
    async fn heritage_story(&self, technique: &str, cultural_context: &str) -> Result<String>;

    /// Plain-text professional artist statement.
    async fn artist_statement(
        &self,
        artist_journey: &str,
        inspiration: Option<&str>,
        philosophy: Option<&str>,
    ) -> Result<String>;

    /// Market estimate for a craft category. Callers fall back to
    /// [`MarketTrends::fallback`] on error.
    async fn market_trends(&self, craft_type: &str) -> Result<MarketTrends>;
}

/// Build the production generator from configuration.
pub fn create_generator(config: &GeminiConfig) -> Result<Arc<dyn Generator>> {
    Ok(Arc::new(GeminiClient::new(config.clone())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trends_fallback_values() {
        let trends = MarketTrends::fallback();
        assert_eq!(trends.demand_increase, 28);
        assert_eq!(trends.avg_price, 45);
        assert_eq!(trends.keywords, vec!["sustainable", "handmade", "eco-friendly"]);
    }

    #[test]
    fn test_trends_wire_shape() {
        let json = serde_json::to_value(MarketTrends::fallback()).unwrap();
        assert_eq!(json["demandIncrease"], 28);
        assert_eq!(json["avgPrice"], 45);
    }
}
