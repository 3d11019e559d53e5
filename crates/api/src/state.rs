use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::PublicDisk;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and the rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upload storage served under the public URL prefix.
    pub disk: Arc<PublicDisk>,
}

impl AppState {
    pub fn new(pool: folio_db::DbPool, config: ServerConfig) -> Self {
        let disk = PublicDisk::new(
            config.storage.root.clone(),
            config.storage.public_url_prefix.clone(),
        );
        Self {
            pool,
            config: Arc::new(config),
            disk: Arc::new(disk),
        }
    }
}
