use async_trait::async_trait;

use crate::domain::{UserId, UserProfile, UserStats};

use super::RepositoryError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `ConstraintViolation` when the username is taken.
    async fn create_user(&self, user: &UserProfile) -> Result<(), RepositoryError>;

    async fn get_user(&self, id: UserId) -> Result<Option<UserProfile>, RepositoryError>;

    async fn get_user_stats(&self, id: UserId) -> Result<UserStats, RepositoryError>;
}
