use serde::{Deserialize, Serialize};

/// Body of `GET /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReqResUserResponse {
    pub data: ReqResUser,
    pub support: ReqResSupport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReqResUser {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Absolute URL of the user's avatar image.
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReqResSupport {
    pub url: String,
    pub text: String,
}
