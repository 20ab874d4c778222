use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::UserId;

const AVATAR_EXTENSION: &str = "jpg";

/// Name of a cached avatar file inside the avatar directory.
///
/// Always `{user_id}_{uuid}.jpg` when generated, so names never collide and
/// every file can be traced back to its owner by prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AvatarFilename(String);

impl AvatarFilename {
    pub fn generate(user_id: UserId) -> Self {
        Self(format!(
            "{}{}.{AVATAR_EXTENSION}",
            Self::owner_prefix(user_id),
            Uuid::new_v4()
        ))
    }

    /// Accepts a stored filename, refusing anything that could escape the
    /// avatar directory.
    pub fn parse(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let is_flat = !value.is_empty()
            && !value.contains('/')
            && !value.contains('\\')
            && value != "."
            && value != "..";

        is_flat.then_some(Self(value))
    }

    pub fn owner_prefix(user_id: UserId) -> String {
        format!("{user_id}_")
    }

    pub fn belongs_to(&self, user_id: UserId) -> bool {
        self.0.starts_with(&Self::owner_prefix(user_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AvatarFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for AvatarFilename {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Maps a user to the file holding their cached avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarRecord {
    pub user_id: UserId,
    /// Hex SHA-256 of the file contents at the time it was cached.
    pub content_hash: String,
    pub filename: AvatarFilename,
}

impl AvatarRecord {
    pub fn new(user_id: UserId, content_hash: impl Into<String>, filename: AvatarFilename) -> Self {
        Self {
            user_id,
            content_hash: content_hash.into(),
            filename,
        }
    }
}

/// Outcome reported by the record store for a bulk delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteReceipt {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// What a call to delete a user's cached avatars actually removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarDeletion {
    pub records_removed: u64,
    pub files_removed: usize,
    pub files_failed: usize,
}
