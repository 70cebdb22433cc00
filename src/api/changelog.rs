// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::api::types::{
    ApiEnvelope, BulkDeleteReceipt, ChangelogEntry, ChangelogStats, EntryStatus, MessageReceipt,
};
use crate::api::{ApiClient, ApiError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default)]
pub struct ChangelogListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

impl ChangelogListParams {
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
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

#[derive(Serialize)]
struct StatusBody {
    status: EntryStatus,
}

#[derive(Serialize)]
struct BulkDeleteBody<'a> {
    ids: &'a [i64],
}

/// Acknowledgement of a status change.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusChange {
    pub id: i64,
    pub status: EntryStatus,
}

impl ApiClient {
    pub async fn list_changelog(
        &self,
        params: &ChangelogListParams,
    ) -> Result<ApiEnvelope<Vec<ChangelogEntry>>, ApiError> {
        self.get(&format!("/changelog{}", params.query_string()))
            .await
    }

    pub async fn changelog_by_id(&self, id: i64) -> Result<ChangelogEntry, ApiError> {
        self.get::<ApiEnvelope<ChangelogEntry>>(&format!("/changelog/{}", id))
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn create_changelog(
        &self,
        entry: &ChangelogEntry,
    ) -> Result<ChangelogEntry, ApiError> {
        self.post::<ApiEnvelope<ChangelogEntry>, _>("/changelog", entry)
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn update_changelog(
        &self,
        id: i64,
        entry: &ChangelogEntry,
    ) -> Result<ChangelogEntry, ApiError> {
        self.put::<ApiEnvelope<ChangelogEntry>, _>(&format!("/changelog/{}", id), entry)
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn delete_changelog(&self, id: i64) -> Result<MessageReceipt, ApiError> {
        self.delete(&format!("/changelog/{}", id)).await
    }

    pub async fn bulk_delete_changelog(&self, ids: &[i64]) -> Result<BulkDeleteReceipt, ApiError> {
        self.delete_with_body("/changelog/bulk", &BulkDeleteBody { ids })
            .await
    }

    pub async fn set_changelog_status(
        &self,
        id: i64,
        status: EntryStatus,
    ) -> Result<StatusChange, ApiError> {
        self.patch::<ApiEnvelope<StatusChange>, _>(
            &format!("/changelog/{}/status", id),
            &StatusBody { status },
        )
        .await
        .map(|envelope| envelope.data)
    }

    pub async fn changelog_stats(&self) -> Result<ChangelogStats, ApiError> {
        self.get::<ApiEnvelope<ChangelogStats>>("/changelog/stats")
            .await
            .map(|envelope| envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_includes_only_set_fields() {
        let params = ChangelogListParams {
            page: Some(3),
            limit: None,
            search: Some("hotfix 1,2".to_string()),
        };
        assert_eq!(params.query_string(), "?page=3&search=hotfix%201%2C2");
    }
}
