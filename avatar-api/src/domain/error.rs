use thiserror::Error;

use super::{models::UserId, EmailError};

/// Errors raised along the avatar cache path.
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("user {0} not found on remote API")]
    UserNotFound(UserId),
    #[error("remote user lookup failed: {0}")]
    RemoteLookup(String),
    #[error("remote avatar download failed: {0}")]
    RemoteDownload(String),
    #[error("failed to read cached avatar: {0}")]
    StorageRead(String),
    #[error("failed to write cached avatar: {0}")]
    StorageWrite(String),
    #[error("avatar record store failed: {0}")]
    RecordStore(String),
}

/// Errors raised by user management.
#[derive(Debug, Error)]
pub enum UserError {
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),
    #[error("user {0} already exists")]
    AlreadyExists(UserId),
    #[error("user {0} not found")]
    NotFound(UserId),
    #[error("remote user API failed: {0}")]
    Remote(String),
    #[error("user storage failed: {0}")]
    Storage(String),
}

impl From<AvatarError> for UserError {
    fn from(err: AvatarError) -> Self {
        match err {
            AvatarError::UserNotFound(id) => Self::NotFound(id),
            other => Self::Remote(other.to_string()),
        }
    }
}
