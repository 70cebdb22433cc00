// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::api::types::{
    ApiEnvelope, BlogPost, BlogStats, BulkDeleteReceipt, MessageReceipt,
};
use crate::api::{ApiClient, ApiError};
use serde::Serialize;

/// Filters for the paginated post listing. `categories` and `tags` repeat
/// as multi-value query parameters.
#[derive(Debug, Clone, Default)]
pub struct BlogListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl BlogListParams {
    fn query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(page) = self.page {
            pairs.push(format!("page={}", page));
        }
        if let Some(limit) = self.limit {
            pairs.push(format!("limit={}", limit));
        }
        if let Some(search) = &self.search {
            pairs.push(format!("search={}", urlencoding::encode(search)));
        }
        if let Some(category) = &self.category {
            pairs.push(format!("category={}", urlencoding::encode(category)));
        }
        if let Some(author) = &self.author {
            pairs.push(format!("author={}", urlencoding::encode(author)));
        }
        for category in &self.categories {
            pairs.push(format!("categories={}", urlencoding::encode(category)));
        }
        for tag in &self.tags {
            pairs.push(format!("tags={}", urlencoding::encode(tag)));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

#[derive(Serialize)]
struct BulkDeleteBody<'a> {
    ids: &'a [i64],
}

impl ApiClient {
    pub async fn list_posts(
        &self,
        params: &BlogListParams,
    ) -> Result<ApiEnvelope<Vec<BlogPost>>, ApiError> {
        self.get(&format!("/blog{}", params.query_string())).await
    }

    pub async fn post_by_id(&self, id: i64) -> Result<BlogPost, ApiError> {
        self.get::<ApiEnvelope<BlogPost>>(&format!("/blog/id/{}", id))
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn post_by_slug(&self, slug: &str) -> Result<BlogPost, ApiError> {
        self.get::<ApiEnvelope<BlogPost>>(&format!("/blog/{}", urlencoding::encode(slug)))
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn create_post(&self, post: &BlogPost) -> Result<BlogPost, ApiError> {
        self.post::<ApiEnvelope<BlogPost>, _>("/blog", post)
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn update_post(&self, id: i64, post: &BlogPost) -> Result<BlogPost, ApiError> {
        self.put::<ApiEnvelope<BlogPost>, _>(&format!("/blog/{}", id), post)
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn delete_post(&self, id: i64) -> Result<MessageReceipt, ApiError> {
        self.delete(&format!("/blog/{}", id)).await
    }

    pub async fn bulk_delete_posts(&self, ids: &[i64]) -> Result<BulkDeleteReceipt, ApiError> {
        self.delete_with_body("/blog/bulk", &BulkDeleteBody { ids })
            .await
    }

    pub async fn blog_stats(&self) -> Result<BlogStats, ApiError> {
        self.get::<ApiEnvelope<BlogStats>>("/blog/stats")
            .await
            .map(|envelope| envelope.data)
    }
}
