//! API client for the Alpine Club REST API.
//!
//! `ApiClient` wraps a single `reqwest::Client` and exposes the four verbs the
//! UI needs plus one helper per endpoint. Every call resolves to either an
//! `ApiError` (transport failure or non-2xx status) or a leniently parsed
//! `Payload`.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use tracing::{debug, warn};

use super::{ApiError, Payload};
use crate::config::Config;
use crate::models::{DateRange, MountainForm, NewGroup};

/// API client for the Alpine Club service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_prefix: String,
}

impl ApiClient {
    /// Create a new API client for the configured server
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_prefix: config.api_prefix.clone(),
        })
    }

    /// Absolute URL for an endpoint path such as `/mountains/1`.
    pub fn url(&self, path: &str) -> String {
        let full = format!("{}{}", self.api_prefix, path);
        if full.starts_with('/') {
            format!("{}{}", self.base_url, full)
        } else {
            format!("{}/{}", self.base_url, full)
        }
    }

    pub async fn get(&self, path: &str) -> Result<Payload, ApiError> {
        let url = self.url(path);
        let request = self.client.get(&url);
        Self::execute("GET", &url, request).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Payload, ApiError> {
        let url = self.url(path);
        let request = self.client.post(&url).json(body);
        Self::execute("POST", &url, request).await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<Payload, ApiError> {
        let url = self.url(path);
        let request = self.client.put(&url).json(body);
        Self::execute("PUT", &url, request).await
    }

    pub async fn delete(&self, path: &str) -> Result<Payload, ApiError> {
        let url = self.url(path);
        let request = self.client.delete(&url);
        Self::execute("DELETE", &url, request).await
    }

    /// Send one request. Non-2xx statuses become errors; the body of a
    /// successful response is parsed without ever failing.
    async fn execute(method: &str, url: &str, request: RequestBuilder) -> Result<Payload, ApiError> {
        debug!(method, url, "Sending request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(method, url, error = %e, "Request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            warn!(method, url, status = %status, "Request returned error status");
            return Err(ApiError::from_status(status, &String::from_utf8_lossy(&body)));
        }

        let payload = Payload::from_bytes(&body);
        if payload.is_absent() && !body.is_empty() {
            debug!(method, url, bytes = body.len(), "Response body is not JSON");
        }
        Ok(payload)
    }

    // ===== Endpoints =====

    pub async fn fetch_mountains(&self) -> Result<Payload, ApiError> {
        self.get("/mountains/").await
    }

    pub async fn fetch_mountain(&self, id: i64) -> Result<Payload, ApiError> {
        self.get(&format!("/mountains/{}", id)).await
    }

    pub async fn create_mountain(&self, form: &MountainForm) -> Result<Payload, ApiError> {
        self.post("/mountains/", form).await
    }

    pub async fn update_mountain(&self, id: i64, form: &MountainForm) -> Result<Payload, ApiError> {
        self.put(&format!("/mountains/{}", id), form).await
    }

    pub async fn fetch_mountain_groups(&self, id: i64) -> Result<Payload, ApiError> {
        self.get(&format!("/mountains/{}/groups", id)).await
    }

    pub async fn fetch_mountain_stats(&self) -> Result<Payload, ApiError> {
        self.get("/mountains/stats").await
    }

    pub async fn fetch_climbers(&self) -> Result<Payload, ApiError> {
        self.get("/climbers/").await
    }

    pub async fn fetch_climbers_by_range(&self, range: &DateRange) -> Result<Payload, ApiError> {
        self.get(&format!("/climbers/by-date-range?{}", range.query())).await
    }

    pub async fn fetch_groups(&self) -> Result<Payload, ApiError> {
        self.get("/groups/").await
    }

    pub async fn create_group(&self, group: &NewGroup) -> Result<Payload, ApiError> {
        self.post("/groups/", group).await
    }

    pub async fn fetch_group_members(&self, group_id: i64) -> Result<Payload, ApiError> {
        self.get(&format!("/groups/{}/members", group_id)).await
    }

    pub async fn fetch_ascents_by_range(&self, range: &DateRange) -> Result<Payload, ApiError> {
        self.get(&format!("/ascents/by-date-range?{}", range.query())).await
    }

    pub async fn fetch_upcoming_ascents(&self) -> Result<Payload, ApiError> {
        self.get("/ascents/upcoming").await
    }
}
