use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::FileLoader;
use crate::domain::{UserId, UserProfile, UserStats};
use crate::presentation::error::ApiError;
use crate::presentation::identity::CurrentUser;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    #[serde(default)]
    pub business_name: String,
    pub specialization: String,
}

#[derive(Serialize)]
pub struct UserView {
    pub id: UserId,
    pub username: String,
    pub business_name: String,
    pub specialization: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserView {
    fn from(p: UserProfile) -> Self {
        Self {
            id: p.id,
            username: p.username,
            business_name: p.business_name,
            specialization: p.specialization,
            created_at: p.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub user: UserView,
}

#[derive(Serialize)]
pub struct CurrentUserResponse {
    pub user: UserView,
    pub stats: UserStats,
}

#[tracing::instrument(skip(state, request), fields(username = %request.username))]
pub async fn register_handler<F>(
    State(state): State<AppState<F>>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    F: FileLoader + 'static,
{
    let profile = state
        .profile_service
        .register(
            &request.username,
            &request.business_name,
            &request.specialization,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: profile.into(),
        }),
    ))
}

#[tracing::instrument(skip(state), fields(user_id = %user.0))]
pub async fn current_user_handler<F>(
    State(state): State<AppState<F>>,
    user: CurrentUser,
) -> Result<Json<CurrentUserResponse>, ApiError>
where
    F: FileLoader + 'static,
{
    let (profile, stats) = state.profile_service.profile(user.0).await?;
    Ok(Json(CurrentUserResponse {
        user: profile.into(),
        stats,
    }))
}
