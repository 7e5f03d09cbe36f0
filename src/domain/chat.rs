use chrono::{DateTime, Utc};

use super::{ChatId, UserId};

pub const DEFAULT_CHAT_TITLE: &str = "New chat";
const TITLE_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: ChatId,
    pub user_id: UserId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chat {
    pub fn new(user_id: UserId, title: Option<String>) -> Self {
        let now = Utc::now();
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_CHAT_TITLE.to_string());
        Self {
            id: ChatId::new(),
            user_id,
            title,
            created_at: now,
            updated_at: now,
        }
    }

    /// Opens a chat titled after the first question, cut to 50 characters.
    pub fn from_first_question(user_id: UserId, question: &str) -> Self {
        let title = if question.chars().count() > TITLE_MAX_CHARS {
            let head: String = question.chars().take(TITLE_MAX_CHARS).collect();
            format!("{head}...")
        } else {
            question.to_string()
        };
        Self::new(user_id, Some(title))
    }
}
