use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

use crate::error::DatabaseError;

pub async fn make_db_pool(
    db_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<sqlx::PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(db_url)
        .await
        .map_err(DatabaseError::ConnectionError)?;
    Ok(pool)
}

pub async fn run_migrations(pool: &sqlx::PgPool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
