use async_trait::async_trait;

use crate::domain::{
    models::{RemoteUser, UserId},
    AvatarError,
};

/// The third-party API that owns user profiles and avatar images.
#[async_trait]
pub trait RemoteUserClient: Send + Sync + 'static {
    /// Fails with `UserNotFound` for unknown users and `RemoteLookup` otherwise.
    async fn get_user_by_id(&self, user_id: UserId) -> Result<RemoteUser, AvatarError>;

    /// Fails with `RemoteDownload`.
    async fn download_bytes(&self, url: &str) -> Result<Vec<u8>, AvatarError>;

    /// The remote profile exactly as the API returned it.
    async fn get_user_payload(&self, user_id: UserId) -> Result<serde_json::Value, AvatarError>;
}
