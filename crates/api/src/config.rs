use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Every field except the database URL and JWT secret has a default suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Postgres connection string.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Where uploaded files live and how they are served.
    pub storage: StorageConfig,
    /// JWT token configuration.
    pub jwt: JwtConfig,
}

/// Location of the public disk.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory uploaded files are written to (default: `storage/public`).
    pub root: PathBuf,
    /// URL path the directory is served under (default: `/storage`).
    pub public_url_prefix: String,
    /// Request body limit for upload routes, in bytes (default: 8 MiB).
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `DATABASE_URL`         | required                   |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORAGE_ROOT`         | `storage/public`           |
    /// | `PUBLIC_URL_PREFIX`    | `/storage`                 |
    /// | `MAX_UPLOAD_BYTES`     | `8388608`                  |
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = env_or("PORT", 3000u16)?;
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs = env_or("REQUEST_TIMEOUT_SECS", 30u64)?;

        let public_url_prefix = normalize_prefix(
            &std::env::var("PUBLIC_URL_PREFIX").unwrap_or_else(|_| "/storage".into()),
        );
        anyhow::ensure!(
            public_url_prefix != "/",
            "PUBLIC_URL_PREFIX must not be the site root"
        );

        let storage = StorageConfig {
            root: std::env::var("STORAGE_ROOT")
                .unwrap_or_else(|_| "storage/public".into())
                .into(),
            public_url_prefix,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 8 * 1024 * 1024usize)?,
        };

        let jwt = JwtConfig::from_env()?;

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            storage,
            jwt,
        })
    }
}

/// Read and parse `key`, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Ensure the prefix starts with `/` and has no trailing slash.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
