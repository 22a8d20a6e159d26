//! Column projection: which result columns may appear in the response.

use std::collections::HashSet;

/// Compute the eligible column set.
///
/// Keeps the requested fields that exist in `columns`, in request order. When
/// nothing matches (or nothing was requested) every column is eligible, so a
/// response never loses all of its columns to the `fields` parameter.
pub fn eligible_columns(columns: &[String], requested_fields: &[String]) -> Vec<String> {
    let available: HashSet<&str> = columns.iter().map(String::as_str).collect();
    let intersection: Vec<String> = requested_fields
        .iter()
        .filter(|field| available.contains(field.as_str()))
        .cloned()
        .collect();

    if intersection.is_empty() {
        columns.to_vec()
    } else {
        intersection
    }
}
