use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::api::GlyphRow;
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult};

/// One glyph row rendered by `row_to_json`.
///
/// The table schema is not declared here; each row arrives as a JSON object
/// whose keys are the table's columns in storage order. Numbers keep the exact
/// text Postgres rendered, so `numeric` values are not rounded through `f64`.
#[derive(Debug, Clone, QueryableByName)]
pub struct GlyphRecordRow {
    #[diesel(sql_type = Text)]
    pub record: String,
}

impl GlyphRecordRow {
    pub fn into_glyph_row(self) -> RepositoryResult<GlyphRow> {
        serde_json::from_str(&self.record).map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Failed to decode glyph row: {e}"),
                ErrorContext::new("scan_row").with_entity(crate::api::GLYPHS_TABLE),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_row_in_column_order() {
        let row = GlyphRecordRow {
            record: r#"{"cp":"0041","name":"LATIN CAPITAL LETTER A","combining":0,"mirrored":false,"upper":null}"#
                .to_string(),
        };
        let row = row.into_glyph_row().unwrap();
        let keys: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["cp", "name", "combining", "mirrored", "upper"]);
        assert_eq!(row["combining"], serde_json::json!(0));
        assert!(row["upper"].is_null());
    }

    #[test]
    fn test_numeric_values_keep_their_digits() {
        let record = r#"{"cp":"0041","weight":1.10,"rank":123456789012345678901234567890}"#;
        let row = GlyphRecordRow {
            record: record.to_string(),
        }
        .into_glyph_row()
        .unwrap();
        assert_eq!(serde_json::to_string(&row).unwrap(), record);
    }

    #[test]
    fn test_non_object_is_scan_error() {
        let row = GlyphRecordRow {
            record: "[1,2,3]".to_string(),
        };
        let err = row.into_glyph_row().unwrap_err();
        assert!(matches!(err, RepositoryError::InternalError { .. }));
    }
}
