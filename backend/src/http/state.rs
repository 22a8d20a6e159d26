//! Application state for the HTTP server.

use std::sync::Arc;

use super::error::FailurePolicy;
use crate::db::repository::GlyphRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Glyph store, owned by the server's composition root
    pub repository: Arc<dyn GlyphRepository>,
    /// How backend failures are reported to callers
    pub failure_policy: FailurePolicy,
}

impl AppState {
    /// Create a new application state with the default failure policy.
    pub fn new(repository: Arc<dyn GlyphRepository>) -> Self {
        Self {
            repository,
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }
}
