//! Server configuration from environment variables.

use std::env;
use std::net::SocketAddr;

use super::error::FailurePolicy;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Label for log output
    pub service_name: String,
    pub failure_policy: FailurePolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            service_name: "unicode".to_string(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: `0.0.0.0`)
    /// - `PORT` (optional, default: `8080`)
    /// - `SERVICE_NAME` (optional, default: `unicode`)
    /// - `UCD_FAILURE_POLICY` (optional): `strict` | `legacy`, default `strict`
    ///
    /// # Errors
    /// Returns an error if `PORT` or `UCD_FAILURE_POLICY` is set but invalid.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .map_err(|_| format!("PORT must be a valid port number, got '{}'", v))?,
            Err(_) => defaults.port,
        };
        let service_name = env::var("SERVICE_NAME")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.service_name);
        let failure_policy = match env::var("UCD_FAILURE_POLICY") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.failure_policy,
        };

        Ok(Self {
            host,
            port,
            service_name,
            failure_policy,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid bind address {}:{}: {}", self.host, self.port, e))
    }
}
