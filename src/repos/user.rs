use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::DatabaseError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub uid: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct CreateUserDbPayload {
    pub email: String,
}

/// Storage for user records. The service is wired against this trait so the
/// composition root can pick the backend at startup.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Cheap round trip proving the backend answers.
    async fn ping(&self) -> Result<(), DatabaseError>;
    async fn count(&self) -> Result<i64, DatabaseError>;
    async fn list(&self) -> Result<Vec<User>, DatabaseError>;
    async fn get(&self, uid: Uuid) -> Result<User, DatabaseError>;
    async fn get_by_email(&self, email: &str) -> Result<User, DatabaseError>;
    async fn create(&self, payload: CreateUserDbPayload) -> Result<User, DatabaseError>;
    fn backend(&self) -> &'static str;
}

pub struct PgUserRepo {
    pool: sqlx::PgPool,
}

impl PgUserRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    pub fn get_table_name() -> &'static str {
        "users"
    }
}

#[async_trait]
impl UserRepository for PgUserRepo {
    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::ConnectionError)?;
        Ok(())
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        let query = format!("SELECT COUNT(*) FROM {}", Self::get_table_name());
        let count: i64 = sqlx::query_scalar(&query).fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn list(&self) -> Result<Vec<User>, DatabaseError> {
        let query = format!(
            "SELECT uid, email, created_at FROM {} ORDER BY created_at DESC",
            Self::get_table_name()
        );
        let rows = sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, uid: Uuid) -> Result<User, DatabaseError> {
        sqlx::query_as::<_, User>(r#"SELECT uid, email, created_at FROM users WHERE uid = $1"#)
            .bind(uid)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::from_sqlx_error(e, &format!("user {}", uid)))
    }

    async fn get_by_email(&self, email: &str) -> Result<User, DatabaseError> {
        sqlx::query_as::<_, User>(r#"SELECT uid, email, created_at FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::from_sqlx_error(e, &format!("user {}", email)))
    }

    async fn create(&self, payload: CreateUserDbPayload) -> Result<User, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (uid, email)
               VALUES ($1, $2)
               RETURNING uid, email, created_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(&payload.email)
        .fetch_one(tx.as_mut())
        .await
        .map_err(|e| DatabaseError::from_sqlx_error(e, &format!("users.email {}", payload.email)))?;
        tx.commit().await?;
        Ok(row)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
