//! `UserDao` trait — low-level user data access abstraction.
//!
//! [`UserRepository`] uses a `UserDao` instance to fulfil domain-level
//! operations; each DAO implementation targets a single data source.
//!
//! [`UserRepository`]: crate::traits::UserRepository

use async_trait::async_trait;
use gavel_core::{GavelResult, User, UserId};

/// Low-level user data access object.
#[async_trait]
pub trait UserDao: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> GavelResult<Option<User>>;

    /// Finds a user by exact name and email.
    async fn find_by_name_and_email(&self, name: &str, email: &str)
        -> GavelResult<Option<User>>;

    /// Persists a new user.
    async fn save(&self, user: &User) -> GavelResult<User>;

    /// Updates an existing user.
    async fn update(&self, user: &User) -> GavelResult<User>;

    /// Deletes a user by ID. Returns `true` if deleted.
    async fn delete(&self, id: UserId) -> GavelResult<bool>;
}
