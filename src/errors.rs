//! Structured error handling with typed error codes
//! Maps validation, lookup, and upstream Gemini failures to stable HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds a client should wait before retrying an overloaded model.
pub const MODEL_RETRY_AFTER_SECONDS: u64 = 30;

/// Structured error response for API clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,

    /// Request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Application error types with proper categorization
#[derive(Debug)]
pub enum AppError {
    // Validation Errors (400)
    Validation(String),

    // Not Found Errors (404)
    NotFound { resource: String },

    // Upstream model errors (401 / 503)
    InvalidApiKey,
    ModelOverloaded,

    // Generation failures (500) - upstream cause kept for logs, not leaked
    Generation {
        message: String,
        source: anyhow::Error,
    },

    // Generic wrapper for external errors
    Internal(anyhow::Error),
}

impl AppError {
    /// Create a validation error carrying the exact client-facing message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error for a named resource ("User", "Analytics", ...)
    pub fn not_found(resource: &str) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
        }
    }

    /// Classify an upstream generation failure: bad API key maps to 401,
    /// model overload to 503, anything else to a 500 carrying
    /// `failure_message` as the client-visible text.
    pub fn from_generation(err: anyhow::Error, failure_message: &str) -> Self {
        let chain = format!("{err:#}");
        if chain.to_lowercase().contains("api key not valid") {
            return Self::InvalidApiKey;
        }
        if chain.contains("overloaded") || chain.contains("503") {
            return Self::ModelOverloaded;
        }
        Self::Generation {
            message: failure_message.to_string(),
            source: err,
        }
    }

    /// Get error code for client identification
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::ModelOverloaded => "MODEL_OVERLOADED",
            Self::Generation { .. } => "GENERATION_FAILED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,

            Self::NotFound { .. } => StatusCode::NOT_FOUND,

            Self::InvalidApiKey => StatusCode::UNAUTHORIZED,

            Self::ModelOverloaded => StatusCode::SERVICE_UNAVAILABLE,

            Self::Generation { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get detailed error message
    pub fn message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::NotFound { resource } => format!("{resource} not found"),
            Self::InvalidApiKey => {
                "Invalid Gemini API key. Update GEMINI_API_KEY and restart the server."
                    .to_string()
            }
            Self::ModelOverloaded => {
                "AI service is temporarily overloaded. Please try again in a moment.".to_string()
            }
            Self::Generation { message, .. } => message.clone(),
            Self::Internal(err) => format!("Internal error: {err}"),
        }
    }

    /// Convert to structured error response
    pub fn to_response(&self) -> ErrorResponse {
        let details = match self {
            Self::ModelOverloaded => Some(serde_json::json!({
                "retry_after_seconds": MODEL_RETRY_AFTER_SECONDS,
            })),
            _ => None,
        };

        ErrorResponse {
            code: self.code().to_string(),
            message: self.message(),
            details,
            request_id: None, // Can be set by middleware
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

/// Convert from anyhow::Error to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

/// Axum IntoResponse implementation for proper HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Generation { source, .. } => {
                tracing::error!("Generation error: {source:#}");
            }
            Self::Internal(err) => {
                tracing::error!("Internal error: {err:#}");
            }
            _ => {}
        }
        crate::metrics::ERRORS_TOTAL
            .with_label_values(&[self.code()])
            .inc();

        let status = self.status_code();
        let body = self.to_response();

        (status, Json(body)).into_response()
    }
}

/// Helper trait to convert validation errors
pub trait ValidationErrorExt<T> {
    fn map_validation_err(self) -> Result<T>;
}

impl<T> ValidationErrorExt<T> for anyhow::Result<T> {
    fn map_validation_err(self) -> Result<T> {
        self.map_err(|e| AppError::Validation(e.to_string()))
    }
}

/// Helper trait to classify upstream generator errors per endpoint
pub trait GenerationErrorExt<T> {
    fn map_generation_err(self, failure_message: &str) -> Result<T>;
}

impl<T> GenerationErrorExt<T> for anyhow::Result<T> {
    fn map_generation_err(self, failure_message: &str) -> Result<T> {
        self.map_err(|e| AppError::from_generation(e, failure_message))
    }
}

/// Type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;
