// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::api::BlogCategory;
use crate::forms::{FormError, max_chars, required, slug_field};

pub const MAX_CATEGORY_NAME_CHARS: usize = 50;
pub const MAX_CATEGORY_SLUG_CHARS: usize = 50;
pub const MAX_CATEGORY_DESCRIPTION_CHARS: usize = 200;

#[derive(Debug, Clone, Default)]
pub struct CategoryDraft {
    pub slug: String,
    pub name: String,
    pub description: String,
}

impl CategoryDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        required("name", &self.name, "Name is required")?;
        max_chars("name", "Name", &self.name, MAX_CATEGORY_NAME_CHARS)?;
        slug_field("slug", &self.slug, MAX_CATEGORY_SLUG_CHARS)?;
        max_chars(
            "description",
            "Description",
            &self.description,
            MAX_CATEGORY_DESCRIPTION_CHARS,
        )?;
        Ok(())
    }

    pub fn to_category(&self) -> BlogCategory {
        BlogCategory {
            id: None,
            slug: self.slug.clone(),
            name: self.name.clone(),
            description: (!self.description.is_empty()).then(|| self.description.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_charset_enforced() {
        let draft = CategoryDraft {
            slug: "Release Notes".to_string(),
            name: "Release Notes".to_string(),
            description: String::new(),
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field(), "slug");
    }

    #[test]
    fn description_length_enforced() {
        let draft = CategoryDraft {
            slug: "news".to_string(),
            name: "News".to_string(),
            description: "d".repeat(MAX_CATEGORY_DESCRIPTION_CHARS + 1),
        };
        assert!(draft.validate().is_err());
    }
}
