//! In-memory glyph repository for unit testing and local development.
//!
//! Holds a single table (column list plus ordered rows) and answers the same
//! three query shapes as the Postgres implementation. Connections are modelled
//! with a semaphore so callers can observe acquire/release behaviour, and the
//! store can be flagged unreachable to simulate an outage.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::api::{GlyphQuery, GlyphResultSet, GlyphRow, CODEPOINT_COLUMN, GLYPHS_TABLE};
use crate::db::repository::{
    ErrorContext, GlyphRepository, PoolStatus, RepositoryError, RepositoryResult,
};

/// Default number of simulated connections.
pub const DEFAULT_LOCAL_POOL_SIZE: usize = 15;

#[derive(Debug, Default)]
struct GlyphTable {
    columns: Vec<String>,
    rows: Vec<GlyphRow>,
}

/// In-memory repository over a single glyph table.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    table: Arc<RwLock<GlyphTable>>,
    connections: Arc<Semaphore>,
    pool_size: usize,
    reachable: Arc<AtomicBool>,
    total_queries: Arc<AtomicU64>,
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalRepository {
    /// Create an empty repository with no columns.
    pub fn new() -> Self {
        Self::with_pool_size(DEFAULT_LOCAL_POOL_SIZE)
    }

    pub fn with_pool_size(pool_size: usize) -> Self {
        Self {
            table: Arc::new(RwLock::new(GlyphTable::default())),
            connections: Arc::new(Semaphore::new(pool_size)),
            pool_size,
            reachable: Arc::new(AtomicBool::new(true)),
            total_queries: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Create a repository with the given schema and rows.
    ///
    /// Row values are looked up by column name; columns missing from a row
    /// are stored as `null` so every row matches the schema.
    pub fn with_table(columns: Vec<String>, rows: Vec<GlyphRow>) -> Self {
        let repo = Self::new();
        repo.replace_table(columns, rows);
        repo
    }

    /// A small sample of Unicode 5.2.0 character data for local runs.
    pub fn with_sample_glyphs() -> Self {
        let repo = Self::new();
        repo.load_sample_glyphs();
        repo
    }

    /// Replace the table with the bundled sample glyphs.
    pub fn load_sample_glyphs(&self) {
        let columns = ["cp", "name", "gc", "age", "bidi_m", "upper"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        let rows = [
            json!({"cp": "0020", "name": "SPACE", "gc": "Zs", "age": "1.1", "bidi_m": false, "upper": null}),
            json!({"cp": "0028", "name": "LEFT PARENTHESIS", "gc": "Ps", "age": "1.1", "bidi_m": true, "upper": null}),
            json!({"cp": "0041", "name": "LATIN CAPITAL LETTER A", "gc": "Lu", "age": "1.1", "bidi_m": false, "upper": null}),
            json!({"cp": "0042", "name": "LATIN CAPITAL LETTER B", "gc": "Lu", "age": "1.1", "bidi_m": false, "upper": null}),
            json!({"cp": "0061", "name": "LATIN SMALL LETTER A", "gc": "Ll", "age": "1.1", "bidi_m": false, "upper": "0041"}),
            json!({"cp": "00E9", "name": "LATIN SMALL LETTER E WITH ACUTE", "gc": "Ll", "age": "1.1", "bidi_m": false, "upper": "00C9"}),
            json!({"cp": "03A9", "name": "GREEK CAPITAL LETTER OMEGA", "gc": "Lu", "age": "1.1", "bidi_m": false, "upper": null}),
            json!({"cp": "20AC", "name": "EURO SIGN", "gc": "Sc", "age": "2.1", "bidi_m": false, "upper": null}),
            json!({"cp": "2C6D", "name": "LATIN CAPITAL LETTER ALPHA", "gc": "Lu", "age": "5.1", "bidi_m": false, "upper": null}),
            json!({"cp": "1F100", "name": "DIGIT ZERO FULL STOP", "gc": "No", "age": "5.2", "bidi_m": false, "upper": null}),
        ]
        .into_iter()
        .filter_map(|v| v.as_object().cloned())
        .collect();
        self.replace_table(columns, rows);
    }

    /// Replace the schema and contents of the table.
    pub fn replace_table(&self, columns: Vec<String>, rows: Vec<GlyphRow>) {
        let rows = rows
            .into_iter()
            .map(|row| conform_row(&columns, row))
            .collect();
        *self.table.write() = GlyphTable { columns, rows };
    }

    /// Append a row, conformed to the current schema.
    pub fn insert_row(&self, row: GlyphRow) {
        let mut table = self.table.write();
        let row = conform_row(&table.columns, row);
        table.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.table.read().rows.len()
    }

    /// Mark the store reachable or unreachable.
    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    /// Number of connections currently free in the pool.
    pub fn available_connections(&self) -> usize {
        self.connections.available_permits()
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    pub fn total_queries(&self) -> u64 {
        self.total_queries.load(Ordering::Relaxed)
    }

    fn run_query(&self, query: &GlyphQuery) -> GlyphResultSet {
        let table = self.table.read();
        let rows: Vec<GlyphRow> = match query {
            GlyphQuery::ByCodepoints(codepoints) => {
                let wanted: HashSet<&str> = codepoints.iter().map(String::as_str).collect();
                table
                    .rows
                    .iter()
                    .filter(|row| {
                        matches!(row.get(CODEPOINT_COLUMN), Some(Value::String(cp)) if wanted.contains(cp.as_str()))
                    })
                    .cloned()
                    .collect()
            }
            GlyphQuery::PageFrom { offset, limit } => table
                .rows
                .iter()
                .skip(*offset as usize)
                .take(*limit as usize)
                .cloned()
                .collect(),
            GlyphQuery::Page { limit } => {
                table.rows.iter().take(*limit as usize).cloned().collect()
            }
        };
        GlyphResultSet::new(table.columns.clone(), rows)
    }
}

fn conform_row(columns: &[String], mut row: GlyphRow) -> GlyphRow {
    columns
        .iter()
        .map(|column| (column.clone(), row.remove(column).unwrap_or(Value::Null)))
        .collect()
}

#[async_trait]
impl GlyphRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.reachable.load(Ordering::SeqCst))
    }

    async fn fetch_glyphs(&self, query: &GlyphQuery) -> RepositoryResult<GlyphResultSet> {
        // Held for the duration of the query; dropping it releases the connection.
        let _connection = self.connections.acquire().await.map_err(|e| {
            RepositoryError::connection_with_context(
                e.to_string(),
                ErrorContext::new("get_connection").with_entity(GLYPHS_TABLE),
            )
        })?;

        if !self.reachable.load(Ordering::SeqCst) {
            return Err(RepositoryError::connection_with_context(
                "glyph store unreachable",
                ErrorContext::new("fetch_glyphs")
                    .with_entity(GLYPHS_TABLE)
                    .with_details(format!("shape={}", query.shape())),
            ));
        }

        self.total_queries.fetch_add(1, Ordering::Relaxed);
        Ok(self.run_query(query))
    }

    fn pool_status(&self) -> PoolStatus {
        let max_size = self.pool_size as u32;
        let idle = self.available_connections() as u32;
        PoolStatus {
            max_size,
            in_use: max_size.saturating_sub(idle),
            idle,
        }
    }
}
