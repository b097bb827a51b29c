//! REST client for the hosting backend.
//!
//! Every call is a single request/response round trip. There are no
//! retries and no client-side timeout unless one is configured.

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::errors::ApiError;
use crate::config::PanelConfig;
use crate::resources::{Project, Resource};

/// HTTP client for one backend instance.
#[derive(Debug, Clone)]
pub struct PanelApi {
    client: reqwest::Client,
    base_url: String,
}

impl PanelApi {
    /// Create a client for `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Build a client from the resolved configuration.
    pub fn from_config(config: &PanelConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, config.base_url()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /projects/{guid}`
    pub async fn get_project(&self, guid: &str) -> Result<Project, ApiError> {
        let url = self.endpoint(&["projects", guid])?;
        debug!(event = "core.api.get_project_started", guid = guid);

        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /{collection}/by-project/{guid}`
    pub async fn list_by_project<R: Resource>(
        &self,
        project_guid: &str,
    ) -> Result<Vec<R>, ApiError> {
        let url = self.endpoint(&[R::KIND.collection(), "by-project", project_guid])?;
        debug!(
            event = "core.api.list_started",
            kind = R::KIND.label(),
            project = project_guid
        );

        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /{collection}` with the full record as body.
    pub async fn create<R: Resource>(&self, record: &R) -> Result<R, ApiError> {
        let url = self.endpoint(&[R::KIND.collection()])?;
        debug!(event = "core.api.create_started", kind = R::KIND.label());

        let response = self.client.post(url).json(record).send().await?;
        Self::parse_response(response).await
    }

    /// `PUT /{collection}/{guid}` with the full record as body.
    pub async fn update<R: Resource>(&self, record: &R) -> Result<R, ApiError> {
        if record.guid().is_empty() {
            return Err(ApiError::MissingGuid {
                kind: R::KIND.label(),
            });
        }
        let url = self.endpoint(&[R::KIND.collection(), record.guid()])?;
        debug!(
            event = "core.api.update_started",
            kind = R::KIND.label(),
            guid = record.guid()
        );

        let response = self.client.put(url).json(record).send().await?;
        Self::parse_response(response).await
    }

    /// `DELETE /{collection}/{guid}`
    ///
    /// Returns the success status so callers can tell `200 OK` from other
    /// 2xx answers; non-2xx statuses are errors.
    pub async fn delete<R: Resource>(&self, guid: &str) -> Result<StatusCode, ApiError> {
        if guid.is_empty() {
            return Err(ApiError::MissingGuid {
                kind: R::KIND.label(),
            });
        }
        let url = self.endpoint(&[R::KIND.collection(), guid])?;
        debug!(
            event = "core.api.delete_started",
            kind = R::KIND.label(),
            guid = guid
        );

        let response = self.client.delete(url).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.status())
    }

    // ---- private helpers ----

    /// Append `segments` to the base URL, percent-encoding each one so an
    /// identifier can never leave its path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let invalid = || ApiError::InvalidBaseUrl {
            url: self.base_url.clone(),
        };
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Return the response unchanged on 2xx, or an [`ApiError::Status`]
    /// carrying the `message` of the JSON error body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));

        warn!(
            event = "core.api.status_error",
            status = status.as_u16(),
            message = ?message
        );

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
