use chrono::{DateTime, Utc};

use super::{ChatId, MessageId, UserId};

/// One chat turn: the question as asked and the answer that was returned for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(
        chat_id: ChatId,
        user_id: UserId,
        question: String,
        answer: String,
        category: String,
    ) -> Self {
        Self {
            id: MessageId::new(),
            chat_id,
            user_id,
            question,
            answer,
            category,
            created_at: Utc::now(),
        }
    }
}
