//! Builds output records from raw glyph rows.

use std::collections::HashSet;

use crate::api::{GlyphRow, OutputRecord};

/// Project each row onto the eligible columns, keeping fetch order.
///
/// Values are moved through untouched; no type coercion happens here.
pub fn assemble_records(rows: Vec<GlyphRow>, eligible: &[String]) -> Vec<OutputRecord> {
    let eligible: HashSet<&str> = eligible.iter().map(String::as_str).collect();
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .filter(|(column, _)| eligible.contains(column.as_str()))
                .collect()
        })
        .collect()
}
