// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Client-side validation for the authoring forms. Validation runs before
//! any request is issued; the first violation wins and is reported with
//! the field it belongs to.

pub mod author;
pub mod category;
pub mod changelog;
pub mod post;

pub use author::AuthorDraft;
pub use category::CategoryDraft;
pub use changelog::ChangelogDraft;
pub use post::PostDraft;

use crate::util::slug::slugify_trimmed;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    field: &'static str,
    message: String,
}

impl FormError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FormError {}

pub(crate) fn required(
    field: &'static str,
    value: &str,
    message: &str,
) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::new(field, message));
    }
    Ok(())
}

pub(crate) fn max_chars(
    field: &'static str,
    label: &str,
    value: &str,
    max: usize,
) -> Result<(), FormError> {
    if value.chars().count() > max {
        return Err(FormError::new(
            field,
            format!("{} must be at most {} characters", label, max),
        ));
    }
    Ok(())
}

/// Shared slug-field rules: required, bounded, lowercase letters, numbers,
/// and hyphens only.
pub(crate) fn slug_field(field: &'static str, value: &str, max: usize) -> Result<(), FormError> {
    if value.is_empty() {
        return Err(FormError::new(field, "Slug is required"));
    }
    max_chars(field, "Slug", value, max)?;
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(FormError::new(
            field,
            "Slug must be lowercase letters, numbers, and hyphens only",
        ));
    }
    Ok(())
}

/// Auto-fill state for a slug input: the slug follows its source text
/// until the user touches the slug field, and never on an existing record.
#[derive(Debug, Default)]
pub struct SlugField {
    value: String,
    manual: bool,
}

impl SlugField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editing an existing record never auto-overwrites its slug.
    pub fn from_existing(slug: &str) -> Self {
        Self {
            value: slug.to_string(),
            manual: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The source text (title or name) changed. The slug fills in once
    /// it is empty and not hand-edited; it does not chase later edits.
    pub fn source_changed(&mut self, source: &str) -> &str {
        if !self.manual && self.value.is_empty() {
            self.value = slugify_trimmed(source);
        }
        &self.value
    }

    /// The user edited the slug field directly. Clearing it hands control
    /// back to auto-fill.
    pub fn edited(&mut self, slug: &str) {
        self.value = slug.to_string();
        self.manual = !slug.is_empty();
    }
}
