//! Composition root. Wires concrete outbound adapters into the domain services.
//!
//! This is the ONLY place that imports concrete outbound adapters.

use std::sync::Arc;

use sqlx::PgPool;
use url::Url;

use crate::{
    adapters::outbound::{
        filesystem::LocalAvatarStorage,
        notifications::{LoggingEmailNotifier, LoggingEventPublisher},
        postgres::{PostgresAvatarRecordStore, PostgresUserRepository},
        reqres::ReqResUserAdapter,
    },
    app_state::AppState,
    config::Settings,
    domain::services::{AvatarCacheOptions, AvatarServiceImpl, UserServiceImpl},
};

#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("invalid remote API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to create remote API client: {0}")]
    RemoteClient(#[from] reqres::ReqResError),
    #[error("failed to prepare avatar storage: {0}")]
    Storage(#[from] crate::domain::AvatarError),
}

pub async fn build_app_state(pool: PgPool, settings: &Settings) -> Result<AppState, FactoryError> {
    let base_url =
        Url::parse(&settings.reqres.base_url).map_err(|source| FactoryError::InvalidBaseUrl {
            url: settings.reqres.base_url.clone(),
            source,
        })?;
    let client = reqres::ReqResClient::new(
        base_url,
        settings.reqres.api_key.clone(),
        settings.reqres.timeout(),
    )?;
    let remote = Arc::new(ReqResUserAdapter::new(client));

    let storage = LocalAvatarStorage::new(&settings.storage.avatars_dir);
    storage.init().await?;

    let avatar_service = AvatarServiceImpl::new(
        Arc::new(PostgresAvatarRecordStore::new(pool.clone())),
        Arc::new(storage),
        Arc::clone(&remote),
        AvatarCacheOptions {
            verify_on_read: settings.storage.verify_on_read,
        },
    );

    let user_service = UserServiceImpl::new(
        Arc::new(PostgresUserRepository::new(pool)),
        remote,
        Arc::new(LoggingEmailNotifier),
        Arc::new(LoggingEventPublisher),
    );

    Ok(AppState::new(
        Arc::new(avatar_service),
        Arc::new(user_service),
    ))
}
