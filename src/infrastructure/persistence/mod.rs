mod in_memory_repository;
mod pg_chat_repository;
mod pg_file_repository;
mod pg_pool;
mod pg_user_repository;

pub use in_memory_repository::InMemoryRepository;
pub use pg_chat_repository::PgChatRepository;
pub use pg_file_repository::PgFileRepository;
pub use pg_pool::{create_pool, run_migrations};
pub use pg_user_repository::PgUserRepository;
