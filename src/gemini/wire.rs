//! Wire types for the generativelanguage.googleapis.com REST API
//!
//! Only the slices of the generateContent schema the studio uses: text and
//! inline-image parts out, candidate text back in. Model replies that should
//! be JSON still arrive as text and go through the lenient extractor below.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline_image(mime_type: impl Into<String>, base64_data: String) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: base64_data,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts, like the SDK's
    /// `response.text` accessor. Empty when the model returned nothing.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Extract a JSON object from a model reply that may be wrapped in markdown
/// fences or surrounded by prose.
pub fn extract_json(response: &str) -> String {
    let trimmed = response.trim();

    // Handle markdown code blocks
    let without_fence = trimmed
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    // Find the first balanced { ... } object
    if let Some(start) = without_fence.find('{') {
        let mut depth = 0;
        for (i, c) in without_fence[start..].char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return without_fence[start..start + i + 1].to_string();
                    }
                }
                _ => {}
            }
        }
    }

    without_fence.to_string()
}

/// Parse a JSON-shaped model reply into a typed value.
pub fn parse_json_reply<T: DeserializeOwned>(text: &str) -> Result<T> {
    let cleaned = extract_json(text);
    serde_json::from_str(&cleaned)
        .with_context(|| format!("Model reply was not the expected JSON shape: {cleaned}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json() {
        let raw = r#"{"title": "The Potter's Hands", "content": "..."}"#;
        assert_eq!(extract_json(raw), raw);
    }

    #[test]
    fn test_extract_json_with_markdown() {
        let raw = "```json\n{\"title\": \"t\", \"content\": \"c\"}\n```";
        assert_eq!(extract_json(raw), "{\"title\": \"t\", \"content\": \"c\"}");
    }

    #[test]
    fn test_extract_json_with_prose() {
        let raw = "Here is your story:\n{\"title\": \"t\", \"content\": \"c\"}\nEnjoy!";
        assert_eq!(extract_json(raw), "{\"title\": \"t\", \"content\": \"c\"}");
    }

    #[test]
    fn test_extract_json_nested_braces() {
        let raw = r#"{"a": {"b": 1}, "c": 2} trailing"#;
        assert_eq!(extract_json(raw), r#"{"a": {"b": 1}, "c": 2}"#);
    }

    #[test]
    fn test_parse_json_reply_camel_case() {
        let reply = "```json\n{\"optimizedContent\": \"x\", \"hashtags\": [\"#clay\"], \"caption\": \"y\"}\n```";
        let parsed: super::super::SocialRewrite = parse_json_reply(reply).unwrap();
        assert_eq!(parsed.optimized_content, "x");
        assert_eq!(parsed.hashtags, vec!["#clay"]);
        assert_eq!(parsed.caption, "y");
    }

    #[test]
    fn test_request_wire_names() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::inline_image("image/jpeg", "QUJD".to_string()),
                    Part::text("describe this"),
                ],
            }],
            generation_config: Some(serde_json::json!({
                "responseMimeType": "application/json",
            })),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(json["contents"][0]["parts"][1]["text"], "describe this");
        assert!(json.get("generationConfig").is_some());
    }

    #[test]
    fn test_response_text_joins_parts() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello "}, {"text": "world"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), "Hello world");

        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text(), "");
    }
}
