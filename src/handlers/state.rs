//! Shared application state
//!
//! One `StudioState` lives for the life of the process, behind an `Arc`.
//! It holds the in-memory record store, the generation client (as a trait
//! object so tests can substitute a canned one), and the resolved config.

use std::sync::Arc;

use crate::config::StudioConfig;
use crate::gemini::Generator;
use crate::storage::StudioStorage;

/// Central state for the studio server.
pub struct StudioState {
    /// In-memory record store, demo user pre-seeded
    pub storage: StudioStorage,

    /// Generation client behind the [`Generator`] seam
    pub generator: Arc<dyn Generator>,

    /// Resolved server configuration
    pub config: StudioConfig,
}

impl StudioState {
    pub fn new(config: StudioConfig, generator: Arc<dyn Generator>) -> Self {
        Self {
            storage: StudioStorage::new(),
            generator,
            config,
        }
    }
}
