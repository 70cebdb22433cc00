// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Typed client for the content API. The API is the service of record;
//! this crate never caches beyond what was last fetched and re-fetches
//! after every successful mutation.

pub mod authors;
pub mod blog;
pub mod categories;
pub mod changelog;
pub mod tags;
mod types;

pub use blog::BlogListParams;
pub use changelog::ChangelogListParams;
pub use types::{
    ApiEnvelope, BlogAuthor, BlogCategory, BlogPost, BlogStats, BulkDeleteReceipt,
    ChangelogEntry, ChangelogStats, EntryStatus, MessageReceipt, Pagination, PopularTag,
    RecentPost,
};

use crate::config::ValidatedConfig;
use reqwest::Method;
use reqwest::header;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

pub const API_PREFIX: &str = "/api/v1";

const GENERIC_ERROR_MESSAGE: &str = "API request failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never completed.
    Transport,
    /// The server answered with a non-success status.
    Server,
    /// A success body could not be decoded.
    Decode,
}

#[derive(Debug)]
pub struct ApiError {
    kind: ApiErrorKind,
    status: Option<u16>,
    message: String,
    reported: bool,
}

impl ApiError {
    fn transport(err: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            status: None,
            message: err.to_string(),
            reported: false,
        }
    }

    fn decode(err: serde_json::Error) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            status: None,
            message: format!("Failed to decode API response: {}", err),
            reported: false,
        }
    }

    fn server(status: u16, reported_message: Option<String>) -> Self {
        let reported = reported_message.is_some();
        Self {
            kind: ApiErrorKind::Server,
            status: Some(status),
            message: reported_message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            reported,
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The server's own error text, verbatim, when the error body parsed.
    pub fn server_message(&self) -> Option<&str> {
        self.reported.then_some(self.message.as_str())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ValidatedConfig) -> Result<Self, ApiError> {
        Self::with_base_url(&config.api.base_url, config.api.timeout_secs)
    }

    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(ApiError::transport)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute::<T, ()>(Method::GET, path, None).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::PATCH, path, Some(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute::<T, ()>(Method::DELETE, path, None).await
    }

    pub(crate) async fn delete_with_body<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::DELETE, path, Some(body)).await
    }

    async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}{}", self.base_url, API_PREFIX, path);
        log::debug!("API request {} {}", method, url);
        let mut request = self
            .http
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(ApiError::transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::transport)?;
        if !status.is_success() {
            let reported = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.error);
            return Err(ApiError::server(status.as_u16(), reported));
        }
        serde_json::from_slice(&bytes).map_err(ApiError::decode)
    }
}
