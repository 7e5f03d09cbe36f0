mod advice_request;
mod category;
mod chat;
mod chat_id;
mod content_type;
mod file_id;
mod message;
mod message_id;
mod storage_path;
mod uploaded_file;
mod user;
mod user_id;

pub use advice_request::AdviceRequest;
pub use category::Category;
pub use chat::{Chat, DEFAULT_CHAT_TITLE};
pub use chat_id::ChatId;
pub use content_type::{ContentType, extension_of};
pub use file_id::FileId;
pub use message::Message;
pub use message_id::MessageId;
pub use storage_path::StoragePath;
pub use uploaded_file::UploadedFile;
pub use user::{UserProfile, UserStats};
pub use user_id::UserId;
