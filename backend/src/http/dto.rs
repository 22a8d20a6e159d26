//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::db::repository::PoolStatus;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Glyph store connectivity: `connected`, `disconnected` or `error: ...`
    pub database: String,
    /// Connection pool usage at the time of the check
    pub pool: PoolStatus,
}
