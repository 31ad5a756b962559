//! Kala Studio Library
//!
//! Backend for an artisan marketing dashboard. Handlers turn dashboard
//! actions into Gemini generation calls and store the results as in-memory
//! records; everything is lost on restart by design.
//!
//! # Layout
//! - `handlers` - REST API, one submodule per dashboard domain
//! - `gemini` - generation client behind the `Generator` trait
//! - `storage` - DashMap-backed record store with the analytics counters
//! - `models` - stored record and insert payload types

pub mod config;
pub mod errors;
pub mod gemini;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod storage;
pub mod validation;

// Re-export dependencies to ensure tests use the same version
pub use chrono;
pub use uuid;
