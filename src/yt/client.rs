use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::channels::{self, ChannelsRequest};
use super::playlists::{self, PlaylistItemsRequest, PlaylistsRequest};
use super::search::{self, SearchRequest};
use super::types::{ListResponse, SearchListResponse};
use super::videos::{self, VideosRequest};
use super::DataApi;
use crate::config::Config;
use crate::error::{Error, Result};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize, Debug)]
struct GoogleApiErrorResponse {
    error: GoogleApiError,
}

#[derive(Deserialize, Debug)]
struct GoogleApiError {
    message: String,
    #[serde(default)]
    errors: Vec<GoogleApiErrorDetail>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Deserialize, Debug)]
struct GoogleApiErrorDetail {
    reason: Option<String>,
}

/// Turns a Google error envelope into one readable line, falling back to the raw body.
pub fn format_api_error(status: StatusCode, body: &str, endpoint: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<GoogleApiErrorResponse>(body) else {
        return format!(
            "YouTube {}.list failed (HTTP {}): {}",
            endpoint,
            status.as_u16(),
            body.trim()
        );
    };

    let reason = parsed
        .error
        .errors
        .first()
        .and_then(|e| e.reason.as_deref())
        .unwrap_or("");
    let status_str = parsed.error.status.unwrap_or_default();
    if reason.is_empty() && status_str.is_empty() {
        return format!(
            "YouTube {}.list failed (HTTP {}): {}",
            endpoint,
            status.as_u16(),
            parsed.error.message
        );
    }
    format!(
        "YouTube {}.list failed (HTTP {}, {}{}): {}",
        endpoint,
        status.as_u16(),
        status_str,
        if reason.is_empty() {
            String::new()
        } else {
            format!(", reason={reason}")
        },
        parsed.error.message
    )
}

/// Data API v3 client authenticated with an API key.
pub struct YtClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YtClient {
    pub fn new(config: &Config, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self {
            http,
            api_key: config.api_key.trim().to_owned(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}/{}?", self.base_url, endpoint);
        for (k, v) in params {
            url.push_str(k);
            url.push('=');
            url.push_str(&urlencoding::encode(v));
            url.push('&');
        }
        url.push_str("key=");
        url.push_str(&urlencoding::encode(&self.api_key));
        url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&str, String)],
    ) -> Result<T> {
        debug!(endpoint, ?params, "GET");
        let resp = self.http.get(self.url(endpoint, params)).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes);
            return Err(Error::Api {
                endpoint,
                status,
                message: format_api_error(status, &body, endpoint),
            });
        }
        serde_json::from_slice::<T>(&bytes).map_err(|source| Error::Decode { endpoint, source })
    }
}

impl DataApi for YtClient {
    async fn search_list(&self, req: &SearchRequest) -> Result<SearchListResponse> {
        self.get(search::ENDPOINT, &req.params()).await
    }

    async fn videos_list(&self, req: &VideosRequest) -> Result<ListResponse> {
        self.get(videos::ENDPOINT, &req.params()).await
    }

    async fn playlist_items_list(&self, req: &PlaylistItemsRequest) -> Result<ListResponse> {
        self.get(playlists::ITEMS_ENDPOINT, &req.params()).await
    }

    async fn playlists_list(&self, req: &PlaylistsRequest) -> Result<ListResponse> {
        self.get(playlists::ENDPOINT, &req.params()).await
    }

    async fn channels_list(&self, req: &ChannelsRequest) -> Result<ListResponse> {
        self.get(channels::ENDPOINT, &req.params()).await
    }
}
