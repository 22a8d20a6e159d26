//! Read-only repository trait over the `glyphs` table.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::RepositoryResult;
use crate::api::{GlyphQuery, GlyphResultSet};

/// Snapshot of a repository's connection pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStatus {
    /// Upper bound on simultaneous connections
    pub max_size: u32,
    /// Connections currently checked out by requests
    pub in_use: u32,
    /// Connections open and waiting in the pool
    pub idle: u32,
}

/// Repository trait for glyph lookups.
///
/// Each call acquires one connection from the implementation's bounded pool
/// and releases it before returning, on success and on failure.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across request tasks.
#[async_trait]
pub trait GlyphRepository: Send + Sync {
    /// Check that the store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Run one of the three glyph query shapes.
    ///
    /// # Returns
    /// * `Ok(GlyphResultSet)` - Column names and rows in fetch order (possibly empty)
    /// * `Err(RepositoryError)` - Connection, query or row decoding failure
    async fn fetch_glyphs(&self, query: &GlyphQuery) -> RepositoryResult<GlyphResultSet>;

    /// Current connection pool usage. Does not touch the store.
    fn pool_status(&self) -> PoolStatus;
}
