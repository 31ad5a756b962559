//! Configuration management for Kala Studio
//!
//! All configurable parameters in one place with environment variable overrides.
//! Follows the principle: sensible defaults, configurable in production.

use std::env;
use tracing::info;

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Allowed origins (empty = allow all)
    pub allowed_origins: Vec<String>,
    /// Allowed HTTP methods
    pub allowed_methods: Vec<String>,
    /// Allowed headers
    pub allowed_headers: Vec<String>,
    /// Whether to allow credentials
    pub allow_credentials: bool,
    /// Max age for preflight cache (seconds)
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(), // Empty = allow all origins
            allowed_methods: vec![
                "GET".to_string(),
                "POST".to_string(),
                "OPTIONS".to_string(),
            ],
            allowed_headers: vec![
                "Content-Type".to_string(),
                "Authorization".to_string(),
                "X-Request-ID".to_string(),
            ],
            allow_credentials: false,
            max_age_seconds: 86400, // 24 hours
        }
    }
}

impl CorsConfig {
    /// Load from environment variables with production safety checks
    ///
    /// In production mode (KALA_ENV=production), warns if CORS origins are not
    /// configured. This prevents accidentally running in production with
    /// permissive CORS.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(origins) = env::var("KALA_CORS_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(methods) = env::var("KALA_CORS_METHODS") {
            config.allowed_methods = methods
                .split(',')
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(headers) = env::var("KALA_CORS_HEADERS") {
            config.allowed_headers = headers
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(val) = env::var("KALA_CORS_CREDENTIALS") {
            config.allow_credentials = val.to_lowercase() == "true" || val == "1";
        }

        if let Ok(val) = env::var("KALA_CORS_MAX_AGE") {
            if let Ok(n) = val.parse() {
                config.max_age_seconds = n;
            }
        }

        // Production safety check: warn if CORS is permissive in production
        let is_production = env::var("KALA_ENV")
            .map(|v| {
                let v = v.to_lowercase();
                v == "production" || v == "prod"
            })
            .unwrap_or(false);

        if is_production && config.allowed_origins.is_empty() {
            tracing::warn!(
                "⚠️  PRODUCTION WARNING: CORS allows all origins. Set KALA_CORS_ORIGINS for security."
            );
        }

        config
    }

    /// Check if any origin restrictions are configured
    pub fn is_restricted(&self) -> bool {
        !self.allowed_origins.is_empty()
    }

    /// Convert to tower-http CorsLayer
    pub fn to_layer(&self) -> tower_http::cors::CorsLayer {
        use tower_http::cors::{AllowOrigin, Any, CorsLayer};

        let mut layer = CorsLayer::new();

        // Configure allowed origins
        if self.allowed_origins.is_empty() {
            // Intentionally permissive - no origins configured
            layer = layer.allow_origin(Any);
        } else {
            // Parse configured origins, tracking failures
            let mut valid_origins = Vec::new();
            let mut invalid_origins = Vec::new();

            for origin_str in &self.allowed_origins {
                match origin_str.parse::<axum::http::HeaderValue>() {
                    Ok(origin) => valid_origins.push(origin),
                    Err(_) => invalid_origins.push(origin_str.clone()),
                }
            }

            // Log any invalid origins
            for invalid in &invalid_origins {
                tracing::warn!("CORS: Invalid origin '{}' - skipping", invalid);
            }

            if valid_origins.is_empty() {
                // All configured origins failed to parse - this is a config error
                // Do NOT fall back to permissive - that would be a security hole
                tracing::error!(
                    "CORS: All {} configured origin(s) failed to parse. \
                     Rejecting all cross-origin requests. Fix KALA_CORS_ORIGINS.",
                    self.allowed_origins.len()
                );
                // Use an impossible origin to effectively deny all CORS
                layer =
                    layer.allow_origin(AllowOrigin::list(Vec::<axum::http::HeaderValue>::new()));
            } else {
                if !invalid_origins.is_empty() {
                    tracing::info!(
                        "CORS: Using {} valid origin(s), {} invalid skipped",
                        valid_origins.len(),
                        invalid_origins.len()
                    );
                }
                layer = layer.allow_origin(AllowOrigin::list(valid_origins));
            }
        }

        // Configure allowed methods
        let methods: Vec<axum::http::Method> = self
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();
        if methods.is_empty() {
            layer = layer.allow_methods(Any);
        } else {
            layer = layer.allow_methods(methods);
        }

        // Configure allowed headers
        let headers: Vec<axum::http::HeaderName> = self
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        if headers.is_empty() {
            layer = layer.allow_headers(Any);
        } else {
            layer = layer.allow_headers(headers);
        }

        // Configure credentials
        if self.allow_credentials {
            layer = layer.allow_credentials(true);
        }

        // Configure max age
        layer = layer.max_age(std::time::Duration::from_secs(self.max_age_seconds));

        layer
    }
}

/// Gemini API configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for the generative language API (GEMINI_API_KEY)
    pub api_key: String,

    /// Base URL of the API, overridable for tests and proxies
    pub base_url: String,

    /// Model identifier used for every generation call
    pub model: String,

    /// Per-request timeout in seconds (default: 60)
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-pro".to_string(),
            timeout_secs: 60,
        }
    }
}

impl GeminiConfig {
    /// Load from environment variables with defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = env::var("GEMINI_API_KEY") {
            config.api_key = val;
        }

        if let Ok(val) = env::var("KALA_GEMINI_BASE_URL") {
            config.base_url = val.trim_end_matches('/').to_string();
        }

        if let Ok(val) = env::var("KALA_GEMINI_MODEL") {
            config.model = val;
        }

        if let Ok(val) = env::var("KALA_GEMINI_TIMEOUT") {
            if let Ok(n) = val.parse() {
                config.timeout_secs = n;
            }
        }

        config
    }
}

/// Server configuration loaded from environment with defaults
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Server host address (default: 127.0.0.1)
    /// Set to 0.0.0.0 for Docker or network-accessible deployments
    pub host: String,

    /// Server port (default: 5000)
    pub port: u16,

    /// Maximum concurrent requests (default: 200)
    pub max_concurrent_requests: usize,

    /// Upload cap for image analysis, in bytes (default: 10 MB)
    pub max_upload_bytes: usize,

    /// Whether running in production mode
    pub is_production: bool,

    /// CORS configuration
    pub cors: CorsConfig,

    /// Gemini API configuration
    pub gemini: GeminiConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_concurrent_requests: 200,
            max_upload_bytes: 10 * 1024 * 1024, // 10 MB, matches the dashboard uploader
            is_production: false,
            cors: CorsConfig::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl StudioConfig {
    /// Load configuration from environment variables with defaults
    #[allow(clippy::field_reassign_with_default)] // Environment overrides require mutable config
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check production mode first
        config.is_production = env::var("KALA_ENV")
            .map(|v| {
                let v = v.to_lowercase();
                v == "production" || v == "prod"
            })
            .unwrap_or(false);

        // Host (bind address)
        if let Ok(val) = env::var("KALA_HOST") {
            config.host = val;
        }

        // Port
        if let Ok(val) = env::var("KALA_PORT") {
            if let Ok(port) = val.parse() {
                config.port = port;
            }
        }

        // Concurrency
        if let Ok(val) = env::var("KALA_MAX_CONCURRENT") {
            if let Ok(n) = val.parse() {
                config.max_concurrent_requests = n;
            }
        }

        // Upload cap
        if let Ok(val) = env::var("KALA_MAX_UPLOAD_BYTES") {
            if let Ok(n) = val.parse() {
                config.max_upload_bytes = n;
            }
        }

        // CORS configuration
        config.cors = CorsConfig::from_env();

        // Gemini configuration
        config.gemini = GeminiConfig::from_env();

        config
    }

    /// Log the current configuration
    pub fn log(&self) {
        info!("📋 Configuration:");
        info!(
            "   Mode: {}",
            if self.is_production {
                "PRODUCTION"
            } else {
                "Development"
            }
        );
        info!("   Port: {}", self.port);
        info!("   Max concurrent: {}", self.max_concurrent_requests);
        info!(
            "   Upload cap: {} MB",
            self.max_upload_bytes / (1024 * 1024)
        );
        if self.cors.is_restricted() {
            info!("   CORS origins: {:?}", self.cors.allowed_origins);
        } else {
            info!("   CORS: Permissive (all origins allowed)");
        }
        info!(
            "   Gemini model: {} ({})",
            self.gemini.model, self.gemini.base_url
        );
        if self.gemini.api_key.is_empty() {
            info!("   Gemini API key: NOT SET (generation calls will fail)");
        } else {
            info!("   Gemini API key: configured");
        }
    }
}

/// Environment variable documentation
#[allow(unused)] // Public API - available for CLI help output
pub fn print_env_help() {
    println!("Kala Studio Configuration Environment Variables:");
    println!();
    println!("  KALA_ENV               - Set to 'production' or 'prod' for production mode");
    println!(
        "  KALA_HOST              - Bind address (default: 127.0.0.1, use 0.0.0.0 for Docker)"
    );
    println!("  KALA_PORT              - Server port (default: 5000)");
    println!("  KALA_MAX_CONCURRENT    - Max concurrent requests (default: 200)");
    println!("  KALA_MAX_UPLOAD_BYTES  - Image upload cap in bytes (default: 10485760 = 10 MB)");
    println!();
    println!("Gemini API:");
    println!("  GEMINI_API_KEY         - Gemini Developer API key (required for generation)");
    println!("  KALA_GEMINI_BASE_URL   - API base URL (default: https://generativelanguage.googleapis.com)");
    println!("  KALA_GEMINI_MODEL      - Model identifier (default: gemini-2.5-pro)");
    println!("  KALA_GEMINI_TIMEOUT    - Per-request timeout in seconds (default: 60)");
    println!();
    println!("CORS Configuration:");
    println!("  KALA_CORS_ORIGINS      - Comma-separated allowed origins (default: all)");
    println!("  KALA_CORS_METHODS      - Comma-separated allowed methods (default: GET,POST,OPTIONS)");
    println!("  KALA_CORS_HEADERS      - Comma-separated allowed headers (default: Content-Type,Authorization,X-Request-ID)");
    println!("  KALA_CORS_CREDENTIALS  - Allow credentials true/false (default: false)");
    println!("  KALA_CORS_MAX_AGE      - Preflight cache seconds (default: 86400)");
    println!();
    println!("  RUST_LOG               - Log level (e.g., info, debug, trace)");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StudioConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert!(!config.is_production);
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
    }

    #[test]
    fn test_env_override() {
        env::set_var("KALA_PORT", "8080");
        env::set_var("KALA_MAX_UPLOAD_BYTES", "1048576");

        let config = StudioConfig::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_upload_bytes, 1_048_576);

        env::remove_var("KALA_PORT");
        env::remove_var("KALA_MAX_UPLOAD_BYTES");
    }

    #[test]
    fn test_gemini_base_url_trailing_slash() {
        env::set_var("KALA_GEMINI_BASE_URL", "http://localhost:9090/");

        let config = GeminiConfig::from_env();
        assert_eq!(config.base_url, "http://localhost:9090");

        env::remove_var("KALA_GEMINI_BASE_URL");
    }

    #[test]
    fn test_cors_default_is_permissive() {
        let cors = CorsConfig::default();
        assert!(!cors.is_restricted());
        assert!(cors.allowed_origins.is_empty());
        assert!(!cors.allowed_methods.is_empty());
        assert!(!cors.allowed_headers.is_empty());
    }

    #[test]
    fn test_cors_with_origins_is_restricted() {
        let cors = CorsConfig {
            allowed_origins: vec!["https://example.com".to_string()],
            ..Default::default()
        };
        assert!(cors.is_restricted());
    }

    #[test]
    fn test_cors_to_layer_permissive() {
        let cors = CorsConfig::default();
        let _layer = cors.to_layer(); // Should not panic
    }

    #[test]
    fn test_cors_to_layer_restricted() {
        let cors = CorsConfig {
            allowed_origins: vec!["https://example.com".to_string()],
            ..Default::default()
        };
        let _layer = cors.to_layer(); // Should not panic
    }
}
