// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::api::types::{ApiEnvelope, BlogCategory, MessageReceipt};
use crate::api::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<BlogCategory>, ApiError> {
        self.get::<ApiEnvelope<Vec<BlogCategory>>>("/blog/categories")
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn create_category(&self, category: &BlogCategory) -> Result<BlogCategory, ApiError> {
        self.post::<ApiEnvelope<BlogCategory>, _>("/blog/categories", category)
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn update_category(
        &self,
        id: i64,
        category: &BlogCategory,
    ) -> Result<BlogCategory, ApiError> {
        self.put::<ApiEnvelope<BlogCategory>, _>(&format!("/blog/categories/{}", id), category)
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn delete_category(&self, id: i64) -> Result<MessageReceipt, ApiError> {
        self.delete(&format!("/blog/categories/{}", id)).await
    }
}
