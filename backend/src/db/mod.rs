//! Database module for the glyph store.
//!
//! Access to the `glyphs` table goes through the [`GlyphRepository`] trait so
//! the HTTP layer never depends on a concrete backend.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / lookup service                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │  Arc<dyn GlyphRepository>
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/glyphs.rs)                 │
//! └───────────┬─────────────────────────────┬───────────────┘
//!             │                             │
//!   ┌─────────▼──────────┐       ┌──────────▼──────────┐
//!   │ PostgresRepository │       │   LocalRepository    │
//!   │ (diesel + r2d2)    │       │   (in-memory)        │
//!   └────────────────────┘       └─────────────────────┘
//! ```
//!
//! Repositories are created once by the server's composition root through
//! [`RepositoryFactory`] and passed explicitly to request handlers.

#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

// Postgres config is colocated with the repository implementation.
#[cfg(feature = "postgres-repo")]
pub use repositories::postgres::PostgresConfig;
#[cfg(not(feature = "postgres-repo"))]
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    _private: (),
}

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use repositories::PostgresRepository;
pub use repository::{ErrorContext, GlyphRepository, PoolStatus, RepositoryError, RepositoryResult};
