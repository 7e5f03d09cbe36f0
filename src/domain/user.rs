use chrono::{DateTime, Utc};
use serde::Serialize;

use super::UserId;

/// Business owner registered with the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub business_name: String,
    pub specialization: String,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(username: String, business_name: String, specialization: String) -> Self {
        Self {
            id: UserId::new(),
            username,
            business_name,
            specialization,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub files_count: u64,
    pub messages_count: u64,
}
