//! `UserRepositoryImpl` — Repository layer implementation.
//!
//! Implements the [`UserRepository`] domain interface by delegating to a
//! [`UserDao`].
//!
//! ```text
//! UserRepositoryImpl          ← applies domain logic, logs
//!   ↓ Arc<dyn UserDao>
//! MySqlUserDaoImpl / …
//!   ↓
//! MySQL
//! ```
//!
//! [`UserRepository`]: crate::traits::UserRepository
//! [`UserDao`]: crate::dao::UserDao

use crate::{dao::UserDao, traits::UserRepository};
use async_trait::async_trait;
use gavel_core::{GavelResult, User, UserId};
use std::sync::Arc;
use tracing::debug;

/// Repository implementation that orchestrates [`UserDao`] access.
///
/// [`UserDao`]: crate::dao::UserDao
pub struct UserRepositoryImpl {
    user_dao: Arc<dyn UserDao>,
}

impl UserRepositoryImpl {
    /// Creates a new `UserRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(user_dao: Arc<dyn UserDao>) -> Self {
        Self { user_dao }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, id: UserId) -> GavelResult<Option<User>> {
        debug!("Repository: find_by_id {}", id);
        self.user_dao.find_by_id(id).await
    }

    async fn find_by_name_and_email(
        &self,
        name: &str,
        email: &str,
    ) -> GavelResult<Option<User>> {
        debug!("Repository: find_by_name_and_email {}", name);
        self.user_dao.find_by_name_and_email(name, email).await
    }

    async fn save(&self, user: &User) -> GavelResult<User> {
        debug!("Repository: save user {}", user.name);
        self.user_dao.save(user).await
    }

    async fn update(&self, user: &User) -> GavelResult<User> {
        debug!("Repository: update user {}", user.id);
        self.user_dao.update(user).await
    }

    async fn delete(&self, id: UserId) -> GavelResult<bool> {
        debug!("Repository: delete user {}", id);
        self.user_dao.delete(id).await
    }
}

impl std::fmt::Debug for UserRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRepositoryImpl").finish_non_exhaustive()
    }
}
