use std::sync::Arc;

use async_trait::async_trait;

use super::in_flight::InFlight;
use crate::domain::{
    content_digest,
    models::{AvatarDeletion, AvatarFilename, AvatarRecord, UserId},
    ports::{
        inbound::AvatarService,
        outbound::{AvatarRecordStore, AvatarStorage, RemoteUserClient},
    },
    AvatarError,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct AvatarCacheOptions {
    /// Re-hash cached files on every hit and refetch when they no longer match.
    pub verify_on_read: bool,
}

/// Serves avatars from the local cache, falling back to the remote API.
///
/// Concurrent requests for the same user are serialised, so a cold avatar is
/// fetched once and later requests observe the cached copy.
pub struct AvatarServiceImpl<S, F, R> {
    records: Arc<S>,
    storage: Arc<F>,
    remote: Arc<R>,
    options: AvatarCacheOptions,
    in_flight: InFlight<UserId>,
}

enum CacheLookup {
    Hit(Vec<u8>),
    Miss,
    Corrupt(AvatarRecord),
}

impl<S, F, R> AvatarServiceImpl<S, F, R>
where
    S: AvatarRecordStore,
    F: AvatarStorage,
    R: RemoteUserClient,
{
    pub fn new(
        records: Arc<S>,
        storage: Arc<F>,
        remote: Arc<R>,
        options: AvatarCacheOptions,
    ) -> Self {
        Self {
            records,
            storage,
            remote,
            options,
            in_flight: InFlight::new(),
        }
    }

    async fn lookup(&self, user_id: UserId) -> Result<CacheLookup, AvatarError> {
        let Some(record) = self.records.find_one(user_id).await? else {
            return Ok(CacheLookup::Miss);
        };

        let bytes = self.storage.read(&record.filename).await?;

        if self.options.verify_on_read && content_digest(&bytes) != record.content_hash {
            return Ok(CacheLookup::Corrupt(record));
        }

        Ok(CacheLookup::Hit(bytes))
    }

    async fn fetch_and_cache(&self, user_id: UserId) -> Result<Vec<u8>, AvatarError> {
        let bytes = self.fetch_avatar(user_id).await?;

        match self.save_avatar(user_id, &bytes).await {
            Ok(record) => {
                tracing::info!(%user_id, filename = %record.filename, "cached avatar");
            }
            Err(err) => {
                tracing::warn!(%user_id, "failed to cache avatar, serving fetched bytes: {err}");
            }
        }

        Ok(bytes)
    }

    async fn purge(&self, user_id: UserId) -> Result<AvatarDeletion, AvatarError> {
        let receipt = self.records.delete_all(user_id).await?;
        if !receipt.acknowledged {
            return Err(AvatarError::RecordStore(format!(
                "delete of avatar records for user {user_id} was not acknowledged"
            )));
        }

        let mut deletion = AvatarDeletion {
            records_removed: receipt.deleted_count,
            ..AvatarDeletion::default()
        };

        let owned = self
            .storage
            .list()
            .await?
            .into_iter()
            .filter(|filename| filename.belongs_to(user_id));

        for filename in owned {
            match self.storage.delete(&filename).await {
                Ok(()) => deletion.files_removed += 1,
                Err(err) => {
                    tracing::error!(%user_id, %filename, "failed to delete avatar file: {err}");
                    deletion.files_failed += 1;
                }
            }
        }

        Ok(deletion)
    }
}

#[async_trait]
impl<S, F, R> AvatarService for AvatarServiceImpl<S, F, R>
where
    S: AvatarRecordStore,
    F: AvatarStorage,
    R: RemoteUserClient,
{
    async fn get_avatar(&self, user_id: UserId) -> Result<Vec<u8>, AvatarError> {
        if let CacheLookup::Hit(bytes) = self.lookup(user_id).await? {
            return Ok(bytes);
        }

        let entry = self.in_flight.enter(user_id);
        let _exclusive = entry.lock().await;

        // Another request may have filled the cache while we waited.
        match self.lookup(user_id).await? {
            CacheLookup::Hit(bytes) => Ok(bytes),
            CacheLookup::Miss => self.fetch_and_cache(user_id).await,
            CacheLookup::Corrupt(record) => {
                tracing::warn!(
                    %user_id,
                    filename = %record.filename,
                    "cached avatar does not match its hash, refetching"
                );
                self.purge(user_id).await?;
                self.fetch_and_cache(user_id).await
            }
        }
    }

    async fn fetch_avatar(&self, user_id: UserId) -> Result<Vec<u8>, AvatarError> {
        let user = self.remote.get_user_by_id(user_id).await?;
        tracing::debug!(%user_id, remote_id = %user.id, email = %user.email, "resolved remote user");

        let bytes = self.remote.download_bytes(&user.avatar_url).await?;

        tracing::debug!(%user_id, size = bytes.len(), "fetched avatar from remote");
        Ok(bytes)
    }

    async fn save_avatar(
        &self,
        user_id: UserId,
        bytes: &[u8],
    ) -> Result<AvatarRecord, AvatarError> {
        let record = AvatarRecord::new(
            user_id,
            content_digest(bytes),
            AvatarFilename::generate(user_id),
        );

        self.storage.write(&record.filename, bytes).await?;

        match self.records.insert(&record).await {
            Ok(inserted) => Ok(inserted),
            Err(err) => {
                if let Err(cleanup_err) = self.storage.delete(&record.filename).await {
                    tracing::error!(
                        %user_id,
                        filename = %record.filename,
                        "failed to remove orphaned avatar file: {cleanup_err}"
                    );
                }
                Err(err)
            }
        }
    }

    async fn delete_avatar(&self, user_id: UserId) -> Result<AvatarDeletion, AvatarError> {
        let entry = self.in_flight.enter(user_id);
        let _exclusive = entry.lock().await;

        let deletion = self.purge(user_id).await?;
        tracing::info!(
            %user_id,
            records = deletion.records_removed,
            files = deletion.files_removed,
            failed = deletion.files_failed,
            "deleted cached avatars"
        );

        Ok(deletion)
    }
}
