//! In-memory repository implementation.
//!
//! Backs the user directory with a `HashMap` behind a `parking_lot`
//! `RwLock`. Data lives for the process lifetime only; intended for unit
//! tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::UserId;
use crate::db::models::{NewUser, User};
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, UserRepository};

/// In-memory user store.
#[derive(Debug)]
pub struct LocalRepository {
    users: RwLock<HashMap<UserId, User>>,
    next_id: RwLock<i64>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: RwLock::new(1),
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for LocalRepository {
    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        let users = self.users.read();
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.id);
        Ok(all)
    }

    async fn get_user(&self, id: UserId) -> RepositoryResult<User> {
        self.users.read().get(&id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("User {} not found", id),
                ErrorContext::new("get_user")
                    .with_entity("user")
                    .with_entity_id(id),
            )
        })
    }

    async fn create_user(&self, new_user: NewUser) -> RepositoryResult<User> {
        if new_user.name.trim().is_empty() {
            return Err(RepositoryError::validation_with_context(
                "User name must not be empty",
                ErrorContext::new("create_user").with_entity("user"),
            ));
        }

        let id = {
            let mut next_id = self.next_id.write();
            let id = UserId::new(*next_id);
            *next_id += 1;
            id
        };

        let user = User {
            id,
            name: new_user.name,
            email: new_user.email,
        };
        self.users.write().insert(id, user.clone());
        Ok(user)
    }

    async fn health_check(&self) -> RepositoryResult<()> {
        // Nothing can fail in-memory; taking the lock proves liveness.
        let _ = self.users.read();
        Ok(())
    }
}
