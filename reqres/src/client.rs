use std::time::Duration;

use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::{ReqResURL, ReqResUserResponse};

const API_KEY_HEADER: &str = "x-api-key";

/// Client for a ReqRes-style user API.
#[derive(Debug, Clone)]
pub struct ReqResClient {
    http: reqwest::Client,
    base_url: ReqResURL,
    api_key: Option<String>,
}

impl ReqResClient {
    pub fn new(
        base_url: Url,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ReqResError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReqResError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: ReqResURL::new(&base_url),
            api_key,
        })
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.http.get(url);
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: impl AsRef<str>) -> Result<T, ReqResError> {
        let resp = self
            .get(url.as_ref())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ReqResError::Response(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ReqResError::Status(status));
        }

        resp.json::<T>().await.map_err(|e| {
            ReqResError::Parsing(format!("Failed to parse response as JSON: {}", e))
        })
    }

    /// Look up a single user, including the URL of their avatar.
    #[tracing::instrument(name = "reqres.fetch_user", skip(self))]
    pub async fn fetch_user(&self, user_id: i32) -> Result<ReqResUserResponse, ReqResError> {
        let url = self.base_url.user(user_id);

        match self.fetch::<ReqResUserResponse>(&url).await {
            Err(ReqResError::Status(StatusCode::NOT_FOUND)) => {
                Err(ReqResError::UserNotFound(user_id))
            }
            other => other,
        }
    }

    /// Download the raw bytes behind `url`. The URL is used as-is and does not
    /// have to point at the configured base.
    #[tracing::instrument(name = "reqres.download", skip(self))]
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, ReqResError> {
        let resp = self
            .get(url)
            .send()
            .await
            .map_err(|e| ReqResError::Response(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ReqResError::Status(status));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ReqResError::Response(e.to_string()))?;

        tracing::debug!(size = bytes.len(), "downloaded remote content");
        Ok(bytes.to_vec())
    }
}

#[derive(Error, Debug)]
pub enum ReqResError {
    #[error("User {0} not found")]
    UserNotFound(i32),
    #[error("Unexpected status: {0}")]
    Status(StatusCode),
    #[error("ResponseError: {0}")]
    Response(String),
    #[error("ParsingError: {0}")]
    Parsing(String),
    #[error("Other: {0}")]
    Other(String),
}
