//! `repository.toml`: glyph store selection and tuning.
//!
//! ```toml
//! backend = "postgres"          # or "local"
//!
//! [postgres]
//! url = "postgres://reader@db:5432/unicode"
//! pool_max = 15
//! acquire_timeout_sec = 30
//!
//! [local]
//! pool_size = 4
//! ```
//!
//! Every `[postgres]` key is optional. A missing key takes the matching `PG_*`
//! environment variable, then the built-in default. A missing `url` resolves
//! the same way `PostgresConfig::from_env` does.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repositories::local::DEFAULT_LOCAL_POOL_SIZE;
use super::repository::{RepositoryError, RepositoryResult};
#[cfg(feature = "postgres-repo")]
use crate::db::PostgresConfig;

/// Environment variable naming the settings file explicitly.
pub const CONFIG_PATH_ENV: &str = "UCD_REPOSITORY_CONFIG";

/// File picked up from the working directory when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "repository.toml";

/// Parsed `repository.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    pub backend: RepositoryType,
    #[serde(default)]
    pub postgres: PostgresOverrides,
    #[serde(default)]
    pub local: LocalSettings,
}

/// `[postgres]` keys layered over the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostgresOverrides {
    pub url: Option<String>,
    pub pool_max: Option<u32>,
    pub pool_min: Option<u32>,
    pub acquire_timeout_sec: Option<u64>,
    pub idle_timeout_sec: Option<u64>,
    pub query_retries: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    pub startup_retry_sec: Option<u64>,
}

#[cfg(feature = "postgres-repo")]
impl PostgresOverrides {
    fn apply(&self, config: &mut PostgresConfig) {
        if let Some(v) = self.pool_max {
            config.max_pool_size = v;
        }
        if let Some(v) = self.pool_min {
            config.min_pool_size = v;
        }
        if let Some(v) = self.acquire_timeout_sec {
            config.connection_timeout_sec = v;
        }
        if let Some(v) = self.idle_timeout_sec {
            config.idle_timeout_sec = v;
        }
        if let Some(v) = self.query_retries {
            config.max_retries = v;
        }
        if let Some(v) = self.retry_delay_ms {
            config.retry_delay_ms = v;
        }
        if let Some(v) = self.startup_retry_sec {
            config.startup_retry_sec = v;
        }
    }
}

/// `[local]` keys for the in-memory sample store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalSettings {
    #[serde(default = "default_local_pool_size")]
    pub pool_size: usize,
}

impl Default for LocalSettings {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_LOCAL_POOL_SIZE,
        }
    }
}

fn default_local_pool_size() -> usize {
    DEFAULT_LOCAL_POOL_SIZE
}

impl FromStr for RepositoryConfig {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(s).map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository settings: {}", e))
        })?;
        if config.local.pool_size == 0 {
            return Err(RepositoryError::configuration("local.pool_size must be at least 1"));
        }
        Ok(config)
    }
}

impl RepositoryConfig {
    /// Read and parse a settings file.
    pub fn load(path: &Path) -> RepositoryResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!("Cannot read {}: {}", path.display(), e))
        })?;
        content.parse()
    }

    /// Find the settings file for this process, if any.
    ///
    /// A path in [`CONFIG_PATH_ENV`] is returned even if it does not exist, so
    /// a typo fails loudly on load. Otherwise [`DEFAULT_CONFIG_FILE`] is used
    /// when present.
    pub fn locate() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        let default = PathBuf::from(DEFAULT_CONFIG_FILE);
        default.is_file().then_some(default)
    }

    /// Resolve the Postgres connection settings.
    #[cfg(feature = "postgres-repo")]
    pub fn postgres_config(&self) -> RepositoryResult<PostgresConfig> {
        let url = match &self.postgres.url {
            Some(url) if !url.is_empty() => url.clone(),
            Some(_) => {
                return Err(RepositoryError::configuration("postgres.url must not be empty"))
            }
            None => super::repositories::postgres::database_url_from_env()
                .map_err(RepositoryError::configuration)?,
        };
        let mut config = PostgresConfig::tuned_from_env(url);
        self.postgres.apply(&mut config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_backend_defaults() {
        let config: RepositoryConfig = "backend = \"local\"".parse().unwrap();
        assert_eq!(config.backend, RepositoryType::Local);
        assert_eq!(config.local.pool_size, DEFAULT_LOCAL_POOL_SIZE);
        assert_eq!(config.postgres, PostgresOverrides::default());
    }

    #[test]
    fn test_pg_alias_and_local_pool() {
        let config: RepositoryConfig = "backend = \"pg\"\n[local]\npool_size = 2\n"
            .parse()
            .unwrap();
        assert_eq!(config.backend, RepositoryType::Postgres);
        assert_eq!(config.local.pool_size, 2);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = "backend = \"local\"\n[postgres]\nmax_connections = 3\n"
            .parse::<RepositoryConfig>()
            .unwrap_err();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }

    #[test]
    fn test_zero_local_pool_rejected() {
        let err = "backend = \"local\"\n[local]\npool_size = 0\n"
            .parse::<RepositoryConfig>()
            .unwrap_err();
        assert!(err.to_string().contains("pool_size"));
    }

    #[test]
    fn test_missing_backend_rejected() {
        assert!("[local]\npool_size = 2\n".parse::<RepositoryConfig>().is_err());
    }

    #[cfg(feature = "postgres-repo")]
    #[test]
    fn test_postgres_overrides_apply_over_defaults() {
        let config: RepositoryConfig = r#"
backend = "postgres"

[postgres]
url = "postgres://reader:secret@db:5432/unicode"
pool_max = 20
acquire_timeout_sec = 3
query_retries = 2
startup_retry_sec = 1
"#
        .parse()
        .unwrap();

        let pg = config.postgres_config().unwrap();
        assert_eq!(pg.database_url, "postgres://reader:secret@db:5432/unicode");
        assert_eq!(pg.max_pool_size, 20);
        assert_eq!(pg.connection_timeout_sec, 3);
        assert_eq!(pg.max_retries, 2);
        assert_eq!(pg.startup_retry_sec, 1);
        assert_eq!(pg.idle_timeout_sec, PostgresConfig::default().idle_timeout_sec);
    }

    #[cfg(feature = "postgres-repo")]
    #[test]
    fn test_empty_postgres_url_rejected() {
        let config: RepositoryConfig = "backend = \"postgres\"\n[postgres]\nurl = \"\"\n"
            .parse()
            .unwrap();
        assert!(config.postgres_config().is_err());
    }
}
