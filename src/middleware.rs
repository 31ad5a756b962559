//! HTTP request tracking middleware for observability

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::Instant;

/// Middleware to track HTTP request latency and counts
pub async fn track_metrics(req: Request, next: Next) -> Result<Response, StatusCode> {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    // Process request
    let response = next.run(req).await;

    // Record metrics
    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    // Normalize path to avoid high cardinality (group dynamic IDs)
    let normalized_path = normalize_path(&path);

    crate::metrics::HTTP_REQUEST_DURATION
        .with_label_values(&[&method, &normalized_path, &status])
        .observe(duration);

    crate::metrics::HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &normalized_path, &status])
        .inc();

    Ok(response)
}

/// Normalize path to prevent metric cardinality explosion.
///
/// The API itself has no id-bearing routes, but unmatched requests still get
/// tracked, so stray ids must not mint label values.
fn normalize_path(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').collect();
    let mut normalized = Vec::new();

    for part in parts {
        if part.is_empty() {
            continue;
        }

        if is_id(part) {
            normalized.push("{id}");
        } else {
            normalized.push(part);
        }
    }

    format!("/{}", normalized.join("/"))
}

/// Check if a path segment looks like an ID (UUID, numeric, hash)
fn is_id(segment: &str) -> bool {
    // UUID pattern
    if segment.contains('-') && segment.len() >= 32 {
        return true;
    }

    // Numeric ID
    if segment.chars().all(|c| c.is_numeric()) && !segment.is_empty() {
        return true;
    }

    // Looks like a hash or long alphanumeric
    if segment.len() > 20 && segment.chars().all(|c| c.is_alphanumeric()) {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path("/api/stories/550e8400-e29b-41d4-a716-446655440000"),
            "/api/stories/{id}"
        );
        assert_eq!(normalize_path("/api/market-trends"), "/api/market-trends");
        assert_eq!(normalize_path("/health"), "/health");
        assert_eq!(normalize_path("/api/portfolio/12345"), "/api/portfolio/{id}");
    }

    #[test]
    fn test_fixed_routes_untouched() {
        for path in [
            "/api/user",
            "/api/analytics",
            "/api/stories/generate",
            "/api/images/analyze",
            "/api/social/optimize",
            "/api/products/optimize",
            "/api/heritage/generate",
            "/api/portfolio/generate-statement",
            "/api/activity",
        ] {
            assert_eq!(normalize_path(path), path);
        }
    }
}
