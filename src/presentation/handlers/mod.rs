mod chats;
mod files;
mod health;
mod messages;
mod users;

pub use chats::{create_chat_handler, delete_chat_handler, list_chats_handler};
pub use files::{delete_file_handler, list_files_handler, upload_file_handler};
pub use health::health_handler;
pub use messages::{chat_history_handler, send_message_handler};
pub use users::{current_user_handler, register_handler};
