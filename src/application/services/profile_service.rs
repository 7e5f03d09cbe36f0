use std::sync::Arc;

use tracing::info;

use crate::application::ports::{RepositoryError, UserRepository};
use crate::domain::{UserId, UserProfile, UserStats};

/// Registration and lookup of business profiles.
pub struct ProfileService {
    users: Arc<dyn UserRepository>,
}

impl ProfileService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn register(
        &self,
        username: &str,
        business_name: &str,
        specialization: &str,
    ) -> Result<UserProfile, ProfileServiceError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ProfileServiceError::InvalidProfile("username is required".into()));
        }
        if specialization.trim().is_empty() {
            return Err(ProfileServiceError::InvalidProfile(
                "specialization is required".into(),
            ));
        }

        let profile = UserProfile::new(
            username.to_string(),
            business_name.trim().to_string(),
            specialization.trim().to_string(),
        );

        match self.users.create_user(&profile).await {
            Ok(()) => {
                info!(user_id = %profile.id, "Registered business profile");
                Ok(profile)
            }
            Err(RepositoryError::ConstraintViolation(_)) => {
                Err(ProfileServiceError::UsernameTaken(profile.username))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn profile(
        &self,
        user_id: UserId,
    ) -> Result<(UserProfile, UserStats), ProfileServiceError> {
        let profile = self
            .users
            .get_user(user_id)
            .await?
            .ok_or(ProfileServiceError::UserNotFound)?;
        let stats = self.users.get_user_stats(user_id).await?;
        Ok((profile, stats))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
    #[error("username already taken: {0}")]
    UsernameTaken(String),
    #[error("user not found")]
    UserNotFound,
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
