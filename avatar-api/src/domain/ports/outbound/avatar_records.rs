use async_trait::async_trait;

use crate::domain::{
    models::{AvatarRecord, DeleteReceipt, UserId},
    AvatarError,
};

/// Persistence for the user → cached file mapping.
///
/// No uniqueness is enforced per user; callers decide how many records a
/// user ends up with.
#[async_trait]
pub trait AvatarRecordStore: Send + Sync + 'static {
    async fn insert(&self, record: &AvatarRecord) -> Result<AvatarRecord, AvatarError>;

    async fn find_one(&self, user_id: UserId) -> Result<Option<AvatarRecord>, AvatarError>;

    async fn delete_all(&self, user_id: UserId) -> Result<DeleteReceipt, AvatarError>;
}
