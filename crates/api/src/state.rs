use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable. The pool is the only store handle; every
/// request checks out its own connection and nothing else is shared.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinema_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
