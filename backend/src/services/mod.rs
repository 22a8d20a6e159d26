//! Service layer for the UCD lookup.
//!
//! A lookup runs in four steps: select the query shape, fetch from the glyph
//! store, compute the eligible columns, and assemble the output records.

pub mod assembler;
pub mod projection;
pub mod query_selector;

pub use assembler::assemble_records;
pub use projection::eligible_columns;
pub use query_selector::{run_query, select_query};

use crate::api::OutputRecord;
use crate::db::repository::{GlyphRepository, RepositoryResult};
use crate::routes::ucd::QueryParameters;

/// Run a full lookup for already-normalized parameters.
pub async fn lookup_glyphs(
    repo: &dyn GlyphRepository,
    params: &QueryParameters,
) -> RepositoryResult<Vec<OutputRecord>> {
    let query = select_query(params);
    let result = run_query(repo, &query).await?;
    let eligible = eligible_columns(&result.columns, &params.requested_fields);
    Ok(assemble_records(result.rows, &eligible))
}
