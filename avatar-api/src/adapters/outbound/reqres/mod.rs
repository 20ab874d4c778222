mod conversions;

use async_trait::async_trait;

use crate::domain::{
    models::{RemoteUser, UserId},
    ports::outbound::RemoteUserClient,
    AvatarError,
};

use self::conversions::{map_download_error, map_lookup_error, to_remote_user};

/// Adapter that wraps the ReqRes client to implement the RemoteUserClient port.
pub struct ReqResUserAdapter {
    client: reqres::ReqResClient,
}

impl ReqResUserAdapter {
    pub fn new(client: reqres::ReqResClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteUserClient for ReqResUserAdapter {
    async fn get_user_by_id(&self, user_id: UserId) -> Result<RemoteUser, AvatarError> {
        let response = self
            .client
            .fetch_user(user_id.as_i32())
            .await
            .map_err(|err| map_lookup_error(user_id, err))?;

        Ok(to_remote_user(response.data))
    }

    async fn download_bytes(&self, url: &str) -> Result<Vec<u8>, AvatarError> {
        self.client.download(url).await.map_err(map_download_error)
    }

    async fn get_user_payload(&self, user_id: UserId) -> Result<serde_json::Value, AvatarError> {
        let response = self
            .client
            .fetch_user(user_id.as_i32())
            .await
            .map_err(|err| map_lookup_error(user_id, err))?;

        serde_json::to_value(response).map_err(|err| AvatarError::RemoteLookup(err.to_string()))
    }
}
