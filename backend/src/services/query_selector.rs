//! Chooses the query shape for a lookup and runs it against the glyph store.

use crate::api::{GlyphQuery, GlyphResultSet};
use crate::db::repository::{GlyphRepository, RepositoryResult};
use crate::routes::ucd::QueryParameters;

/// Pick one of the three query shapes.
///
/// A codepoint filter wins and ignores pagination entirely. Without a filter,
/// a non-zero offset selects the offset form; otherwise only the limit applies.
pub fn select_query(params: &QueryParameters) -> GlyphQuery {
    if params.has_codepoint_filter() {
        GlyphQuery::ByCodepoints(params.codepoints.clone())
    } else if params.offset != 0 {
        GlyphQuery::PageFrom {
            offset: params.offset,
            limit: params.limit,
        }
    } else {
        GlyphQuery::Page {
            limit: params.limit,
        }
    }
}

/// Run a query against the store. Failures are returned as-is, never retried here.
pub async fn run_query(
    repo: &dyn GlyphRepository,
    query: &GlyphQuery,
) -> RepositoryResult<GlyphResultSet> {
    repo.fetch_glyphs(query)
        .await
        .map_err(|e| e.with_operation(format!("fetch_glyphs:{}", query.shape())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(codepoints: &[&str], limit: u32, offset: u32) -> QueryParameters {
        QueryParameters {
            codepoints: codepoints.iter().map(|s| s.to_string()).collect(),
            requested_fields: Vec::new(),
            limit,
            offset,
        }
    }

    #[test]
    fn test_codepoints_select_filter_and_drop_pagination() {
        let query = select_query(&params(&["0041", "0042"], 5, 10));
        assert_eq!(
            query,
            GlyphQuery::ByCodepoints(vec!["0041".to_string(), "0042".to_string()])
        );
    }

    #[test]
    fn test_offset_selects_page_from() {
        let query = select_query(&params(&[], 5, 10));
        assert_eq!(query, GlyphQuery::PageFrom { offset: 10, limit: 5 });
    }

    #[test]
    fn test_zero_offset_selects_page() {
        let query = select_query(&params(&[], 100, 0));
        assert_eq!(query, GlyphQuery::Page { limit: 100 });

        let query = select_query(&params(&[], 0, 0));
        assert_eq!(query, GlyphQuery::Page { limit: 0 });
    }
}
