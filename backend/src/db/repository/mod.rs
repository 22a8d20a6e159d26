//! Repository trait and error types for the glyph store.

pub mod error;
pub mod glyphs;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use glyphs::{GlyphRepository, PoolStatus};
