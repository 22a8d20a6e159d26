//! # FontPeek UCD
//!
//! Read-only lookup service over Unicode 5.2.0 character data.
//!
//! One endpoint, `GET /5.2.0/ucd`, answers lookups against a `glyphs` table
//! holding one row per codepoint. Callers filter by codepoints or page through
//! the table, and choose which columns appear in the JSON response.
//!
//! ## Architecture
//!
//! - [`api`]: Shared row, record and query types
//! - [`routes`]: Query string parsing and normalization
//! - [`services`]: Query selection, column projection, record assembly
//! - [`db`]: Repository trait with Postgres and in-memory implementations
//! - [`http`]: Axum-based HTTP server and request handlers

#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
