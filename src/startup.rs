use std::sync::Arc;

use tokio::net::TcpListener;

use crate::{
    config::Config,
    db,
    error::StartupError,
    repos::{InMemoryUserRepo, PgUserRepo, UserRepository},
    types::AppState,
};

/// Builds every component the router needs, leaves first.
pub async fn bootstrap(config: &Config) -> Result<AppState, StartupError> {
    let users = connect_user_repo(config).await?;
    tracing::info!(backend = users.backend(), "user repository ready");

    Ok(AppState {
        users,
        version: config.version.clone(),
    })
}

/// Builds the user repository selected by `DATABASE_URL` and proves it answers.
pub async fn connect_user_repo(config: &Config) -> Result<Arc<dyn UserRepository>, StartupError> {
    if config.uses_memory_store() {
        return Ok(Arc::new(InMemoryUserRepo::new()));
    }

    let pool = db::make_db_pool(
        &config.database_url,
        config.db_max_connections,
        config.db_acquire_timeout,
    )
    .await?;
    db::run_migrations(&pool).await?;

    let repo = PgUserRepo::new(pool);
    let existing = repo.count().await?;
    tracing::debug!(existing, "users table reachable");
    Ok(Arc::new(repo))
}

pub async fn bind(config: &Config) -> Result<TcpListener, StartupError> {
    TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.bind_addr.clone(),
            source,
        })
}
