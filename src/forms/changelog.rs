// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::api::ChangelogEntry;
use crate::forms::{FormError, max_chars, required};

pub const MAX_CHANGELOG_TITLE_CHARS: usize = 200;
pub const MAX_CHANGELOG_SUMMARY_CHARS: usize = 500;

#[derive(Debug, Clone, Default)]
pub struct ChangelogDraft {
    pub version: String,
    pub date: String,
    pub title: String,
    pub summary: String,
    pub improvements: Vec<String>,
    pub fixes: Vec<String>,
}

impl ChangelogDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        required("version", &self.version, "Version is required")?;
        if !version_pattern_ok(&self.version) {
            return Err(FormError::new(
                "version",
                "Version must be in format 1.0.0 (numbers and commas allowed)",
            ));
        }
        required("date", &self.date, "Date is required")?;
        required("title", &self.title, "Title is required")?;
        max_chars("title", "Title", &self.title, MAX_CHANGELOG_TITLE_CHARS)?;
        required("summary", &self.summary, "Summary is required")?;
        max_chars(
            "summary",
            "Summary",
            &self.summary,
            MAX_CHANGELOG_SUMMARY_CHARS,
        )?;
        if self.improvements.is_empty() {
            return Err(FormError::new(
                "improvements",
                "At least one improvement is required",
            ));
        }
        if self.improvements.iter().any(|item| item.trim().is_empty()) {
            return Err(FormError::new(
                "improvements",
                "Improvement entries cannot be empty",
            ));
        }
        if self.fixes.iter().any(|item| item.trim().is_empty()) {
            return Err(FormError::new("fixes", "Fix entries cannot be empty"));
        }
        Ok(())
    }

    pub fn to_entry(&self) -> ChangelogEntry {
        ChangelogEntry {
            id: None,
            version: self.version.clone(),
            date: self.date.clone(),
            title: self.title.clone(),
            summary: self.summary.clone(),
            improvements: self.improvements.clone(),
            fixes: self.fixes.clone(),
            status: None,
        }
    }
}

// Three dot-separated groups of digits or commas, e.g. "1.0.0" or the
// grouped form "1,2.0.10".
fn version_pattern_ok(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts.iter().all(|part| {
            !part.is_empty() && part.chars().all(|c| c.is_ascii_digit() || c == ',')
        })
}
