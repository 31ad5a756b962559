//! REST client for the Gemini generateContent endpoint

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use base64::Engine;
use serde_json::json;

use crate::config::GeminiConfig;
use crate::metrics::{GEMINI_REQUESTS_TOTAL, GEMINI_REQUEST_DURATION};

use super::prompts;
use super::wire::{self, Content, GenerateContentRequest, GenerateContentResponse, Part};
use super::{Generator, ImageInsights, ListingRewrite, MarketTrends, SocialRewrite, StoryDraft};

/// Production [`Generator`] backed by generativelanguage.googleapis.com.
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            tracing::warn!("GEMINI_API_KEY is not set - generation calls will fail");
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build Gemini HTTP client")?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// One generateContent round-trip, returning the reply text. The text is
    /// empty (not an error) when the model produced no candidates.
    async fn generate(
        &self,
        operation: &'static str,
        parts: Vec<Part>,
        generation_config: Option<serde_json::Value>,
    ) -> Result<String> {
        tracing::debug!(operation, model = %self.config.model, "Calling Gemini generateContent");
        let start = Instant::now();

        let result = self.send(parts, generation_config).await;

        GEMINI_REQUEST_DURATION
            .with_label_values(&[operation])
            .observe(start.elapsed().as_secs_f64());
        let outcome = if result.is_ok() { "success" } else { "error" };
        GEMINI_REQUESTS_TOTAL
            .with_label_values(&[operation, outcome])
            .inc();

        result
    }

    async fn send(
        &self,
        parts: Vec<Part>,
        generation_config: Option<serde_json::Value>,
    ) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config,
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to reach Gemini API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Gemini API returned an error");
            bail!("Gemini API error (status {}): {}", status.as_u16(), body);
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to decode Gemini API response")?;

        Ok(parsed.text())
    }

    /// generateContent in JSON mode with a response schema, parsed into `T`.
    async fn generate_json<T: serde::de::DeserializeOwned>(
        &self,
        operation: &'static str,
        parts: Vec<Part>,
        schema: serde_json::Value,
    ) -> Result<T> {
        let config = json!({
            "responseMimeType": "application/json",
            "responseSchema": schema,
        });

        let text = self.generate(operation, parts, Some(config)).await?;
        if text.trim().is_empty() {
            bail!("Empty response from model");
        }
        wire::parse_json_reply(&text)
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate_story(&self, craft_type: &str, focus: &str) -> Result<StoryDraft> {
        let schema = json!({
            "type": "object",
            "properties": {
                "title": {"type": "string"},
                "content": {"type": "string"},
            },
            "required": ["title", "content"],
        });

        self.generate_json(
            "story",
            vec![Part::text(prompts::story_prompt(craft_type, focus))],
            schema,
        )
        .await
    }

    async fn analyze_image(&self, image: &[u8], mime_type: &str) -> Result<ImageInsights> {
        let schema = json!({
            "type": "object",
            "properties": {
                "description": {"type": "string"},
                "marketingCopy": {"type": "string"},
            },
            "required": ["description", "marketingCopy"],
        });

        // Image part first, instruction text second
        let encoded = base64::engine::general_purpose::STANDARD.encode(image);
        self.generate_json(
            "image",
            vec![
                Part::inline_image(mime_type, encoded),
                Part::text(prompts::IMAGE_PROMPT),
            ],
            schema,
        )
        .await
    }

    async fn optimize_social(
        &self,
        platform: &str,
        content: &str,
        craft_type: &str,
    ) -> Result<SocialRewrite> {
        let schema = json!({
            "type": "object",
            "properties": {
                "optimizedContent": {"type": "string"},
                "hashtags": {
                    "type": "array",
                    "items": {"type": "string"},
                },
                "caption": {"type": "string"},
            },
            "required": ["optimizedContent", "hashtags", "caption"],
        });

        self.generate_json(
            "social",
            vec![Part::text(prompts::social_prompt(platform, content, craft_type))],
            schema,
        )
        .await
    }

    async fn optimize_product(
        &self,
        product_name: &str,
        description: &str,
        platform: &str,
    ) -> Result<ListingRewrite> {
        let schema = json!({
            "type": "object",
            "properties": {
                "optimizedTitle": {"type": "string"},
                "optimizedDescription": {"type": "string"},
                "keywords": {
                    "type": "array",
                    "items": {"type": "string"},
                },
            },
            "required": ["optimizedTitle", "optimizedDescription", "keywords"],
        });

        self.generate_json(
            "product",
            vec![Part::text(prompts::product_prompt(
                product_name,
                description,
                platform,
            ))],
            schema,
        )
        .await
    }

    async fn heritage_story(&self, technique: &str, cultural_context: &str) -> Result<String> {
        let text = self
            .generate(
                "heritage",
                vec![Part::text(prompts::heritage_prompt(technique, cultural_context))],
                None,
            )
            .await?;

        if text.trim().is_empty() {
            return Ok("Unable to generate heritage story at this time.".to_string());
        }
        Ok(text)
    }

    async fn artist_statement(
        &self,
        artist_journey: &str,
        inspiration: Option<&str>,
        philosophy: Option<&str>,
    ) -> Result<String> {
        let text = self
            .generate(
                "statement",
                vec![Part::text(prompts::statement_prompt(
                    artist_journey,
                    inspiration,
                    philosophy,
                ))],
                None,
            )
            .await?;

        if text.trim().is_empty() {
            return Ok("Unable to generate artist statement at this time.".to_string());
        }
        Ok(text)
    }

    async fn market_trends(&self, craft_type: &str) -> Result<MarketTrends> {
        let schema = json!({
            "type": "object",
            "properties": {
                "demandIncrease": {"type": "number"},
                "avgPrice": {"type": "number"},
                "keywords": {
                    "type": "array",
                    "items": {"type": "string"},
                },
            },
            "required": ["demandIncrease", "avgPrice", "keywords"],
        });

        self.generate_json(
            "trends",
            vec![Part::text(prompts::trends_prompt(craft_type))],
            schema,
        )
        .await
    }
}
