//! Shared data types for the UCD lookup API.
//!
//! These types flow between the request parser, the repository layer and the
//! HTTP response encoder. Rows are schema-less: the column set is whatever the
//! `glyphs` table returns at query time, so rows and records are ordered
//! key/value maps rather than fixed structs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the table holding one row per codepoint.
pub const GLYPHS_TABLE: &str = "glyphs";

/// Column the codepoint filter matches against.
pub const CODEPOINT_COLUMN: &str = "cp";

/// Maximum number of codepoint tokens honoured in a single request.
pub const MAX_CODEPOINTS: usize = 100;

/// Upper bound of the `limit` parameter.
pub const MAX_LIMIT: u32 = 100;

/// Effective `limit` when the parameter is missing or invalid.
///
/// The published API documentation advertises 5; the service has always used 100.
pub const DEFAULT_LIMIT: u32 = 100;

/// A raw row from the glyph table, column name to scalar value, in storage order.
pub type GlyphRow = Map<String, Value>;

/// A response record restricted to the eligible column set.
pub type OutputRecord = Map<String, Value>;

/// The three query shapes issued against the glyph table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphQuery {
    /// Every row whose codepoint column matches one of the tokens. Not paginated.
    ByCodepoints(Vec<String>),
    /// Rows in storage order, skipping `offset`, at most `limit`.
    PageFrom { offset: u32, limit: u32 },
    /// Rows in storage order, at most `limit`.
    Page { limit: u32 },
}

impl GlyphQuery {
    /// Short label used in logs and error contexts.
    pub fn shape(&self) -> &'static str {
        match self {
            GlyphQuery::ByCodepoints(_) => "by_codepoints",
            GlyphQuery::PageFrom { .. } => "page_from",
            GlyphQuery::Page { .. } => "page",
        }
    }
}

/// Columns and rows returned by a single glyph query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphResultSet {
    /// Column names as reported by the row store for this query
    pub columns: Vec<String>,
    /// Rows in fetch order
    pub rows: Vec<GlyphRow>,
}

impl GlyphResultSet {
    pub fn new(columns: Vec<String>, rows: Vec<GlyphRow>) -> Self {
        Self { columns, rows }
    }

    /// Build a result set whose columns are taken from the first row.
    ///
    /// Every row of a single query shares the table schema, so the first row's
    /// keys are the query's column list. An empty result has no columns.
    pub fn from_rows(rows: Vec<GlyphRow>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
