// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::api::BlogAuthor;
use crate::forms::{FormError, max_chars, required, slug_field};
use validator::ValidateUrl;

pub const MAX_AUTHOR_SLUG_CHARS: usize = 100;
pub const MAX_AUTHOR_NAME_CHARS: usize = 100;
pub const MAX_AUTHOR_BIO_CHARS: usize = 500;

/// Uncommitted author form state. Empty optional fields are sent as absent.
#[derive(Debug, Clone, Default)]
pub struct AuthorDraft {
    pub slug: String,
    pub name: String,
    pub bio: String,
    pub avatar: String,
}

impl AuthorDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        slug_field("slug", &self.slug, MAX_AUTHOR_SLUG_CHARS)?;
        required("name", &self.name, "Name is required")?;
        max_chars("name", "Name", &self.name, MAX_AUTHOR_NAME_CHARS)?;
        max_chars("bio", "Bio", &self.bio, MAX_AUTHOR_BIO_CHARS)?;
        if !self.avatar.is_empty() && !self.avatar.as_str().validate_url() {
            return Err(FormError::new("avatar", "Invalid URL"));
        }
        Ok(())
    }

    pub fn to_author(&self) -> BlogAuthor {
        BlogAuthor {
            id: None,
            slug: self.slug.clone(),
            name: self.name.clone(),
            bio: (!self.bio.is_empty()).then(|| self.bio.clone()),
            avatar: (!self.avatar.is_empty()).then(|| self.avatar.clone()),
        }
    }
}
