// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::fmt;

pub const DEFAULT_MAX_TAGS: usize = 10;
pub const DEFAULT_MIN_TAG_CHARS: usize = 2;
pub const DEFAULT_MAX_TAG_CHARS: usize = 30;

/// Limits applied to a single post's tag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagLimits {
    pub max_tags: usize,
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for TagLimits {
    fn default() -> Self {
        Self {
            max_tags: DEFAULT_MAX_TAGS,
            min_chars: DEFAULT_MIN_TAG_CHARS,
            max_chars: DEFAULT_MAX_TAG_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagValidationError {
    message: String,
}

impl TagValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TagValidationError {}

/// Validate a single tag token against the configured limits.
///
/// Tokens are ASCII letters, digits, spaces, and hyphens, with no
/// consecutive spaces or hyphens. Length is counted in characters.
pub fn validate_token(token: &str, limits: &TagLimits) -> Result<(), TagValidationError> {
    let len = token.chars().count();
    if len < limits.min_chars {
        return Err(TagValidationError::new(format!(
            "Tag must be at least {} characters",
            limits.min_chars
        )));
    }
    if len > limits.max_chars {
        return Err(TagValidationError::new(format!(
            "Tag must be less than {} characters",
            limits.max_chars
        )));
    }
    if !token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
    {
        return Err(TagValidationError::new(
            "Tag can only contain letters, numbers, spaces, and hyphens",
        ));
    }
    if token.contains("  ") || token.contains("--") {
        return Err(TagValidationError::new(
            "Tag cannot contain consecutive spaces or hyphens",
        ));
    }
    Ok(())
}

/// Case-insensitive membership test; two tags differing only in case are
/// the same tag.
pub fn contains_ignore_case(tags: &[String], candidate: &str) -> bool {
    tags.iter().any(|tag| tag.eq_ignore_ascii_case(candidate))
}
