use async_trait::async_trait;

use crate::domain::{
    models::{AvatarDeletion, AvatarRecord, UserId},
    AvatarError,
};

#[async_trait]
pub trait AvatarService: Send + Sync + 'static {
    /// Cached bytes if present, otherwise fetched from the remote API and cached.
    async fn get_avatar(&self, user_id: UserId) -> Result<Vec<u8>, AvatarError>;

    /// Always goes to the remote API; nothing is cached.
    async fn fetch_avatar(&self, user_id: UserId) -> Result<Vec<u8>, AvatarError>;

    async fn save_avatar(&self, user_id: UserId, bytes: &[u8])
        -> Result<AvatarRecord, AvatarError>;

    async fn delete_avatar(&self, user_id: UserId) -> Result<AvatarDeletion, AvatarError>;
}
