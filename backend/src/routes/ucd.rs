//! Request parsing for `GET /5.2.0/ucd`.
//!
//! Every malformed input degrades to a default; nothing in here fails.

use serde::{Deserialize, Serialize};

use crate::api::{DEFAULT_LIMIT, MAX_CODEPOINTS, MAX_LIMIT};

pub const UCD_PATH: &str = "/5.2.0/ucd";

/// Raw query string values, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUcdQuery {
    pub cp: Option<String>,
    pub fields: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl RawUcdQuery {
    /// Collect the recognised keys from decoded query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "cp" => &mut raw.cp,
                "fields" => &mut raw.fields,
                "limit" => &mut raw.limit,
                "offset" => &mut raw.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.as_ref().to_string());
            }
        }
        raw
    }
}

/// Normalized lookup inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    /// Codepoint tokens, at most [`MAX_CODEPOINTS`]. Empty means no filter.
    pub codepoints: Vec<String>,
    /// Requested column names. Empty means no restriction.
    pub requested_fields: Vec<String>,
    /// Row limit in `0..=MAX_LIMIT`.
    pub limit: u32,
    pub offset: u32,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            codepoints: Vec::new(),
            requested_fields: Vec::new(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl QueryParameters {
    pub fn from_raw(raw: &RawUcdQuery) -> Self {
        Self {
            codepoints: parse_codepoints(raw.cp.as_deref()),
            requested_fields: split_list(raw.fields.as_deref()),
            limit: parse_limit(raw.limit.as_deref()),
            offset: parse_offset(raw.offset.as_deref()),
        }
    }

    pub fn has_codepoint_filter(&self) -> bool {
        !self.codepoints.is_empty()
    }
}

fn split_list(value: Option<&str>) -> Vec<String> {
    match value {
        None | Some("") => Vec::new(),
        Some(v) => v.split(',').map(str::to_string).collect(),
    }
}

/// Comma separated codepoint tokens, truncated to the first [`MAX_CODEPOINTS`].
pub fn parse_codepoints(value: Option<&str>) -> Vec<String> {
    let mut codepoints = split_list(value);
    codepoints.truncate(MAX_CODEPOINTS);
    codepoints
}

/// `limit` accepts `0..=100`; anything else, including unparsable input, becomes 100.
pub fn parse_limit(value: Option<&str>) -> u32 {
    match value.map(str::parse::<i32>) {
        Some(Ok(limit)) if (0..=MAX_LIMIT as i32).contains(&limit) => limit as u32,
        _ => DEFAULT_LIMIT,
    }
}

/// `offset` accepts any non-negative 32-bit value; anything else becomes 0.
pub fn parse_offset(value: Option<&str>) -> u32 {
    match value.map(str::parse::<i32>) {
        Some(Ok(offset)) if offset > 0 => offset as u32,
        _ => 0,
    }
}
