//! HTTP API Handlers - Modular organization of the REST API
//!
//! Each submodule handles one domain of the studio dashboard.

// Core modules
pub mod router;
pub mod state;

// Health and metrics
pub mod health;

// User and analytics
pub mod users;

// Generation endpoints
pub mod heritage;
pub mod images;
pub mod portfolio;
pub mod products;
pub mod social;
pub mod stories;

// Read-only dashboard feeds
pub mod activity;
pub mod trends;

// Re-export commonly used items
pub use router::{build_router, AppState};
pub use state::StudioState;
