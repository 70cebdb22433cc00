// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::api::{ApiClient, ApiEnvelope, ApiError};
use crate::tags::{OperationReceipt, StoreError, SuggestionSource, TagStore};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A tag name with its server-computed reference count. The count is
/// read-only here; the server derives it from the posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: u64,
}

#[derive(Serialize)]
struct RenameBody<'a> {
    from: &'a str,
    to: &'a str,
}

#[derive(Serialize)]
struct MergeBody<'a> {
    tags: &'a [String],
    into: &'a str,
}

impl ApiClient {
    pub async fn list_tags(&self) -> Result<Vec<TagCount>, ApiError> {
        self.get::<ApiEnvelope<Vec<TagCount>>>("/blog/tags")
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn tag_suggestions(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<String>, ApiError> {
        let mut path = format!("/blog/tags/suggestions?q={}", urlencoding::encode(query));
        if let Some(limit) = limit {
            path.push_str(&format!("&limit={}", limit));
        }
        self.get::<ApiEnvelope<Vec<String>>>(&path)
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn rename_tag(&self, from: &str, to: &str) -> Result<OperationReceipt, ApiError> {
        self.post("/blog/tags/rename", &RenameBody { from, to })
            .await
    }

    pub async fn merge_tags(
        &self,
        tags: &[String],
        into: &str,
    ) -> Result<OperationReceipt, ApiError> {
        self.post("/blog/tags/merge", &MergeBody { tags, into })
            .await
    }

    pub async fn delete_tag(&self, slug: &str) -> Result<OperationReceipt, ApiError> {
        self.delete(&format!("/blog/tags/{}", urlencoding::encode(slug)))
            .await
    }
}

impl From<ApiError> for StoreError {
    fn from(err: ApiError) -> Self {
        match err.server_message() {
            Some(message) => StoreError::reported(message),
            None => StoreError::opaque(),
        }
    }
}

#[async_trait]
impl TagStore for ApiClient {
    async fn rename(&self, from: &str, to: &str) -> Result<OperationReceipt, StoreError> {
        self.rename_tag(from, to).await.map_err(StoreError::from)
    }

    async fn merge(&self, sources: &[String], into: &str) -> Result<OperationReceipt, StoreError> {
        self.merge_tags(sources, into).await.map_err(StoreError::from)
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<OperationReceipt, StoreError> {
        self.delete_tag(slug).await.map_err(StoreError::from)
    }
}

#[async_trait]
impl SuggestionSource for ApiClient {
    async fn suggest(&self, query: &str, limit: usize) -> Result<Vec<String>, String> {
        self.tag_suggestions(query, Some(limit))
            .await
            .map_err(|err| err.to_string())
    }
}
