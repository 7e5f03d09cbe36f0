use std::fmt;

use super::{FileId, UserId};

/// Location of an uploaded file inside the staging store, scoped by owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(user_id: &UserId, file_id: &FileId, extension: &str) -> Self {
        if extension.is_empty() {
            Self(format!("{}/{}", user_id.as_uuid(), file_id.as_uuid()))
        } else {
            Self(format!(
                "{}/{}.{}",
                user_id.as_uuid(),
                file_id.as_uuid(),
                extension
            ))
        }
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
