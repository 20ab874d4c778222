use serde::Serialize;

use super::UserId;
use crate::domain::Email;

/// A locally stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub job: String,
    pub email: Email,
}

/// Validated input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: UserId,
    pub name: String,
    pub job: String,
    pub email: Email,
}

impl From<NewUser> for User {
    fn from(user: NewUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            job: user.job,
            email: user.email,
        }
    }
}

/// The parts of a remote user profile the avatar cache cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUser {
    pub id: UserId,
    pub email: String,
    pub avatar_url: String,
}
