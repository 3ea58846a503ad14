//! In-process user repository, selected with `DATABASE_URL=memory`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::DatabaseError;
use crate::repos::user::{CreateUserDbPayload, User, UserRepository};

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        Ok(self.users.read().await.len() as i64)
    }

    async fn list(&self) -> Result<Vec<User>, DatabaseError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn get(&self, uid: Uuid) -> Result<User, DatabaseError> {
        self.users
            .read()
            .await
            .get(&uid)
            .cloned()
            .ok_or_else(|| DatabaseError::NotFound(format!("user {}", uid)))
    }

    async fn get_by_email(&self, email: &str) -> Result<User, DatabaseError> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| DatabaseError::NotFound(format!("user {}", email)))
    }

    async fn create(&self, payload: CreateUserDbPayload) -> Result<User, DatabaseError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == payload.email) {
            return Err(DatabaseError::ConstraintViolation(format!(
                "Unique constraint violation: users.email {}",
                payload.email
            )));
        }
        let user = User {
            uid: Uuid::new_v4(),
            email: payload.email,
            created_at: Utc::now(),
        };
        users.insert(user.uid, user.clone());
        Ok(user)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
