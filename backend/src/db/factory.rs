//! Repository factory for dependency injection.
//!
//! The server's composition root calls into this module once at startup and
//! hands the resulting `Arc<dyn GlyphRepository>` to the HTTP state.

use log::info;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
use super::repositories::PostgresRepository;
use super::repository::{GlyphRepository, RepositoryError, RepositoryResult};
use super::PostgresConfig;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryType {
    /// Postgres + Diesel implementation
    #[serde(alias = "pg")]
    Postgres,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "pg" => Ok(Self::Postgres),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE`. Without it, Postgres is selected when any
    /// database connection variable is present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        let has_database = ["DATABASE_URL", "PG_DATABASE_URL", "DB_USERNAME"]
            .iter()
            .any(|key| std::env::var(key).is_ok());
        if has_database {
            Self::Postgres
        } else {
            Self::Local
        }
    }
}

#[cfg(not(feature = "postgres-repo"))]
fn postgres_disabled() -> RepositoryError {
    RepositoryError::configuration("Postgres repository feature not enabled")
}

/// Repository factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type, with a single connection attempt.
    pub async fn create(
        repo_type: RepositoryType,
        postgres_config: Option<&PostgresConfig>,
    ) -> RepositoryResult<Arc<dyn GlyphRepository>> {
        match repo_type {
            RepositoryType::Postgres => {
                #[cfg(feature = "postgres-repo")]
                {
                    let config = postgres_config.ok_or_else(|| {
                        RepositoryError::configuration("Postgres repository requires PostgresConfig")
                    })?;
                    let pg = Self::create_postgres(config).await?;
                    Ok(pg as Arc<dyn GlyphRepository>)
                }
                #[cfg(not(feature = "postgres-repo"))]
                {
                    let _ = postgres_config;
                    Err(postgres_disabled())
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create a Postgres repository.
    ///
    /// Pool construction blocks while connections are opened, so it runs on
    /// the blocking thread pool.
    #[cfg(feature = "postgres-repo")]
    pub async fn create_postgres(
        config: &PostgresConfig,
    ) -> RepositoryResult<Arc<PostgresRepository>> {
        let config = config.clone();
        let repo = tokio::task::spawn_blocking(move || PostgresRepository::new(config))
            .await
            .map_err(|e| RepositoryError::internal(format!("Task join error: {}", e)))??;
        Ok(Arc::new(repo))
    }

    /// Create a Postgres repository, retrying until the database accepts connections.
    ///
    /// Waits `startup_retry_sec` between attempts and never gives up.
    #[cfg(feature = "postgres-repo")]
    pub async fn connect_postgres_with_retry(config: &PostgresConfig) -> Arc<PostgresRepository> {
        let delay = std::time::Duration::from_secs(config.startup_retry_sec);
        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            match Self::create_postgres(config).await {
                Ok(repo) => {
                    info!("Connected to Postgres after {} attempt(s)", attempt);
                    return repo;
                }
                Err(e) => {
                    log::warn!(
                        "Unable to connect to database (attempt {}): {}. Retrying in {:?}",
                        attempt, e, delay
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Create an in-memory repository seeded with sample glyphs.
    pub fn create_local() -> Arc<dyn GlyphRepository> {
        Arc::new(LocalRepository::with_sample_glyphs())
    }

    /// Create the repository selected by the environment.
    ///
    /// Postgres connections are retried until they succeed; see
    /// [`RepositoryFactory::connect_postgres_with_retry`].
    pub async fn from_env() -> RepositoryResult<Arc<dyn GlyphRepository>> {
        match RepositoryType::from_env() {
            RepositoryType::Postgres => {
                #[cfg(feature = "postgres-repo")]
                {
                    let config =
                        PostgresConfig::from_env().map_err(RepositoryError::configuration)?;
                    let pg = Self::connect_postgres_with_retry(&config).await;
                    Ok(pg as Arc<dyn GlyphRepository>)
                }
                #[cfg(not(feature = "postgres-repo"))]
                {
                    Err(postgres_disabled())
                }
            }
            RepositoryType::Local => {
                info!("Using in-memory glyph repository");
                Ok(Self::create_local())
            }
        }
    }

    /// Create the repository for this process at startup.
    ///
    /// Uses `repository.toml` (see [`RepositoryConfig::locate`]) when one is
    /// found and falls back to [`RepositoryFactory::from_env`] otherwise.
    pub async fn from_startup_settings() -> RepositoryResult<Arc<dyn GlyphRepository>> {
        match RepositoryConfig::locate() {
            Some(path) => {
                let config = RepositoryConfig::load(&path)?;
                info!("Repository settings loaded from {}", path.display());
                Self::from_repository_config(&config).await
            }
            None => Self::from_env().await,
        }
    }

    /// Create the repository described by a settings file.
    pub async fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn GlyphRepository>> {
        match config.backend {
            RepositoryType::Postgres => {
                #[cfg(feature = "postgres-repo")]
                {
                    let pg_config = config.postgres_config()?;
                    let pg = Self::connect_postgres_with_retry(&pg_config).await;
                    Ok(pg as Arc<dyn GlyphRepository>)
                }
                #[cfg(not(feature = "postgres-repo"))]
                {
                    Err(postgres_disabled())
                }
            }
            RepositoryType::Local => {
                info!(
                    "Using in-memory glyph repository ({} connections)",
                    config.local.pool_size
                );
                let repo = LocalRepository::with_pool_size(config.local.pool_size);
                repo.load_sample_glyphs();
                Ok(Arc::new(repo))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GlyphQuery;

    #[test]
    fn test_repository_type_from_str() {
        assert_eq!(
            RepositoryType::from_str("local").unwrap(),
            RepositoryType::Local
        );
        assert_eq!(
            RepositoryType::from_str("postgres").unwrap(),
            RepositoryType::Postgres
        );
        assert_eq!(
            RepositoryType::from_str("Pg").unwrap(),
            RepositoryType::Postgres
        );
        assert!(RepositoryType::from_str("invalid").is_err());
    }

    #[tokio::test]
    async fn test_create_local_repository_has_sample_glyphs() {
        let repo = RepositoryFactory::create_local();
        assert!(repo.health_check().await.unwrap());
        let result = repo
            .fetch_glyphs(&GlyphQuery::ByCodepoints(vec!["0041".to_string()]))
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
    }

    #[cfg(not(feature = "postgres-repo"))]
    #[tokio::test]
    async fn test_create_postgres_without_feature_fails() {
        let result = RepositoryFactory::create(RepositoryType::Postgres, None).await;
        assert!(matches!(
            result,
            Err(RepositoryError::ConfigurationError { .. })
        ));
    }
}
