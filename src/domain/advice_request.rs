use super::{Category, UserProfile};

/// Everything one chat turn knows when composing an answer.
///
/// `category` keeps the raw tag sent by the client; unknown tags are carried
/// along and simply match no category-specific behavior. Each entry of
/// `file_texts` is one extracted file, already prefixed with its display name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdviceRequest {
    pub question: String,
    pub category: String,
    pub username: String,
    pub business_name: String,
    pub specialization: String,
    pub file_texts: Vec<String>,
}

impl AdviceRequest {
    pub fn new(question: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_profile(mut self, profile: &UserProfile) -> Self {
        self.username = profile.username.clone();
        self.business_name = profile.business_name.clone();
        self.specialization = profile.specialization.clone();
        self
    }

    pub fn with_file_texts(mut self, file_texts: Vec<String>) -> Self {
        self.file_texts = file_texts;
        self
    }

    pub fn parsed_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    pub fn has_identity(&self) -> bool {
        !self.username.is_empty() || !self.business_name.is_empty() || !self.specialization.is_empty()
    }
}
