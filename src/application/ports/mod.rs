mod chat_repository;
mod file_loader;
mod file_repository;
mod llm_client;
mod repository_error;
mod staging_store;
mod user_repository;

pub use chat_repository::ChatRepository;
pub use file_loader::{FileLoader, FileLoaderError};
pub use file_repository::FileRepository;
pub use llm_client::{LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
pub use staging_store::{ByteStream, StagingStore, StagingStoreError};
pub use user_repository::UserRepository;
