mod advisor_service;
mod chat_service;
mod document_service;
mod heuristic_responder;
mod model_gateway;
mod profile_service;
mod prompt_builder;
mod response_cleaner;

pub use advisor_service::AdvisorService;
pub use chat_service::{ChatService, ChatServiceError};
pub use document_service::{DocumentService, DocumentServiceError};
pub use heuristic_responder::{NO_FILES_NOTICE, heuristic_answer};
pub use model_gateway::{AnswerSource, GatewayAnswer, ModelGateway};
pub use profile_service::{ProfileService, ProfileServiceError};
pub use prompt_builder::{ANSWER_MARKER, QUESTION_MARKER, SECTION_RULE, build_prompt};
pub use response_cleaner::clean_completion;
