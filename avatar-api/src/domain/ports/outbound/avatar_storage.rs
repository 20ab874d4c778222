use async_trait::async_trait;

use crate::domain::{models::AvatarFilename, AvatarError};

/// Flat byte storage for cached avatar files.
#[async_trait]
pub trait AvatarStorage: Send + Sync + 'static {
    async fn read(&self, filename: &AvatarFilename) -> Result<Vec<u8>, AvatarError>;

    async fn write(&self, filename: &AvatarFilename, bytes: &[u8]) -> Result<(), AvatarError>;

    async fn delete(&self, filename: &AvatarFilename) -> Result<(), AvatarError>;

    /// Names of every stored file, in no particular order.
    async fn list(&self) -> Result<Vec<AvatarFilename>, AvatarError>;
}
