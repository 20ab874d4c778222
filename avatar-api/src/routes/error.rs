use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    UserNotFound,
    UserAlreadyExists,
    InvalidEmail,
    RemoteUnavailable,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
}

use crate::domain::{AvatarError, UserError};

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: Option<ErrorCode>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            code: self.code,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<AvatarError> for ApiError {
    fn from(err: AvatarError) -> Self {
        match err {
            AvatarError::UserNotFound(_) => {
                Self::not_found(err.to_string()).with_code(ErrorCode::UserNotFound)
            }
            AvatarError::RemoteLookup(_) | AvatarError::RemoteDownload(_) => {
                tracing::warn!("Remote avatar source failed: {}", err);
                Self::bad_gateway(err.to_string()).with_code(ErrorCode::RemoteUnavailable)
            }
            AvatarError::StorageRead(_)
            | AvatarError::StorageWrite(_)
            | AvatarError::RecordStore(_) => {
                tracing::error!("Avatar operation failed: {}", err);
                Self::internal("avatar operation failed")
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidEmail(_) => {
                Self::bad_request(err.to_string()).with_code(ErrorCode::InvalidEmail)
            }
            UserError::AlreadyExists(_) => {
                Self::conflict(err.to_string()).with_code(ErrorCode::UserAlreadyExists)
            }
            UserError::NotFound(_) => {
                Self::not_found(err.to_string()).with_code(ErrorCode::UserNotFound)
            }
            UserError::Remote(_) => {
                tracing::warn!("Remote user API failed: {}", err);
                Self::bad_gateway(err.to_string()).with_code(ErrorCode::RemoteUnavailable)
            }
            UserError::Storage(_) => {
                tracing::error!("User operation failed: {}", err);
                Self::internal("user operation failed")
            }
        }
    }
}
