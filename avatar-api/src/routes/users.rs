use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::{
        models::{NewUser, User, UserId},
        Email, UserError,
    },
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/:user_id", get(get_user))
        .route("/:user_id/avatar", get(get_avatar).delete(delete_avatar))
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub id: i32,
    pub name: String,
    pub job: String,
    pub email: String,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = UserError;

    fn try_from(body: CreateUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(body.id),
            name: body.name,
            job: body.job,
            email: Email::try_from(body.email)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub job: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_i32(),
            name: user.name,
            job: user.job,
            email: user.email.to_string(),
        }
    }
}

#[instrument(name = "POST /api/users", skip(app_state))]
async fn create_user(
    State(app_state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let new_user = NewUser::try_from(body)?;
    let user = app_state.user_service.create_user(new_user).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

#[instrument(name = "GET /api/users/:user_id", skip(app_state))]
async fn get_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let payload = app_state
        .user_service
        .get_remote_user(UserId::new(user_id))
        .await?;

    Ok(Json(payload))
}

/// The avatar is returned as a base64 JSON string.
#[instrument(name = "GET /api/users/:user_id/avatar", skip(app_state))]
async fn get_avatar(
    State(app_state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<String>, ApiError> {
    let bytes = app_state
        .avatar_service
        .get_avatar(UserId::new(user_id))
        .await?;

    Ok(Json(STANDARD.encode(bytes)))
}

#[instrument(name = "DELETE /api/users/:user_id/avatar", skip(app_state))]
async fn delete_avatar(
    State(app_state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    app_state
        .avatar_service
        .delete_avatar(UserId::new(user_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
