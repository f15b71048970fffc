use std::sync::Arc;

use estate_db::lifecycle::EntityService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: estate_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The generic lifecycle engine behind every resource.
    pub entities: EntityService,
}

impl AppState {
    pub fn new(pool: estate_db::DbPool, config: ServerConfig) -> Self {
        let entities = EntityService::new(
            pool.clone(),
            std::time::Duration::from_secs(config.store_timeout_secs),
        );
        Self {
            pool,
            config: Arc::new(config),
            entities,
        }
    }
}
