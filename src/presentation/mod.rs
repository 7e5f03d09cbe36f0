pub mod config;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod router;
pub mod state;

pub use config::{Environment, Settings};
pub use error::{ApiError, ErrorResponse};
pub use identity::{CurrentUser, USER_ID_HEADER};
pub use router::create_router;
pub use state::AppState;
