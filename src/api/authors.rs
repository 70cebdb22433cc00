// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::api::types::{ApiEnvelope, BlogAuthor, MessageReceipt};
use crate::api::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_authors(&self) -> Result<Vec<BlogAuthor>, ApiError> {
        self.get::<ApiEnvelope<Vec<BlogAuthor>>>("/blog/authors")
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn create_author(&self, author: &BlogAuthor) -> Result<BlogAuthor, ApiError> {
        self.post::<ApiEnvelope<BlogAuthor>, _>("/blog/authors", author)
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn update_author(&self, id: i64, author: &BlogAuthor) -> Result<BlogAuthor, ApiError> {
        self.put::<ApiEnvelope<BlogAuthor>, _>(&format!("/blog/authors/{}", id), author)
            .await
            .map(|envelope| envelope.data)
    }

    pub async fn delete_author(&self, id: i64) -> Result<MessageReceipt, ApiError> {
        self.delete(&format!("/blog/authors/{}", id)).await
    }
}
