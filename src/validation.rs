//! Input validation for the studio API
//! Presence checks carry the exact message the dashboard shows the artisan

use anyhow::{anyhow, Result};

/// Maximum length for free-text request fields
pub const MAX_FIELD_LENGTH: usize = 4_000;

/// Require every listed field to be non-blank, failing with the route's
/// combined message (e.g. "Craft type and focus are required").
pub fn require_fields(message: &str, fields: &[&str]) -> Result<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(anyhow!("{message}"));
    }
    Ok(())
}

/// Validate a free-text field length
pub fn validate_field_length(name: &str, value: &str) -> Result<()> {
    if value.len() > MAX_FIELD_LENGTH {
        return Err(anyhow!(
            "{name} too long: {} chars (max: {})",
            value.len(),
            MAX_FIELD_LENGTH
        ));
    }
    Ok(())
}

/// Validate an uploaded image before it is sent to the model
pub fn validate_image_upload(content_type: &str, size: usize, max_bytes: usize) -> Result<()> {
    if !content_type.starts_with("image/") {
        return Err(anyhow!("Unsupported upload type: {content_type}"));
    }

    if size == 0 {
        return Err(anyhow!("Uploaded image is empty"));
    }

    if size > max_bytes {
        return Err(anyhow!(
            "Image too large: {size} bytes (max: {max_bytes})"
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_fields_present() {
        assert!(require_fields("Craft type and focus are required", &["Pottery", "tradition"]).is_ok());
    }

    #[test]
    fn test_require_fields_missing() {
        let err = require_fields("Craft type and focus are required", &["Pottery", ""])
            .unwrap_err();
        assert_eq!(err.to_string(), "Craft type and focus are required");

        // Whitespace-only counts as missing
        assert!(require_fields("Artist journey is required", &["   "]).is_err());
    }

    #[test]
    fn test_field_length() {
        assert!(validate_field_length("craftType", "Pottery").is_ok());
        assert!(validate_field_length("content", &"x".repeat(5_000)).is_err());
    }

    #[test]
    fn test_image_upload_valid() {
        assert!(validate_image_upload("image/jpeg", 1024, 10 * 1024 * 1024).is_ok());
        assert!(validate_image_upload("image/png", 512, 10 * 1024 * 1024).is_ok());
    }

    #[test]
    fn test_image_upload_invalid() {
        assert!(validate_image_upload("application/pdf", 1024, 10_000_000).is_err());
        assert!(validate_image_upload("image/jpeg", 0, 10_000_000).is_err());
        assert!(validate_image_upload("image/jpeg", 20_000_000, 10_000_000).is_err());
    }
}
