// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::api::BlogPost;
use crate::forms::{FormError, max_chars, required, slug_field};
use crate::tags::{TagLimits, contains_ignore_case, validate_token};

pub const MAX_POST_TITLE_CHARS: usize = 200;
pub const MAX_POST_SLUG_CHARS: usize = 200;
pub const MAX_POST_SUMMARY_CHARS: usize = 500;

const DEFAULT_READ_TIME: &str = "5 min read";
const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    /// 0 means not chosen yet.
    pub author_id: i64,
    pub category_id: i64,
    pub date: String,
    pub summary: String,
    pub content: String,
    pub read_time: String,
    pub tags: Vec<String>,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            author_id: 0,
            category_id: 0,
            date: String::new(),
            summary: String::new(),
            content: String::new(),
            read_time: DEFAULT_READ_TIME.to_string(),
            tags: Vec::new(),
        }
    }
}

impl PostDraft {
    pub fn validate(&self, limits: &TagLimits) -> Result<(), FormError> {
        required("title", &self.title, "Title is required")?;
        max_chars("title", "Title", &self.title, MAX_POST_TITLE_CHARS)?;
        slug_field("slug", &self.slug, MAX_POST_SLUG_CHARS)?;
        if self.author_id < 1 {
            return Err(FormError::new("authorId", "Author is required"));
        }
        if self.category_id < 1 {
            return Err(FormError::new("categoryId", "Category is required"));
        }
        required("date", &self.date, "Date is required")?;
        required("summary", &self.summary, "Summary is required")?;
        max_chars("summary", "Summary", &self.summary, MAX_POST_SUMMARY_CHARS)?;
        required("content", &self.content, "Content is required")?;
        self.validate_tags(limits)?;
        Ok(())
    }

    fn validate_tags(&self, limits: &TagLimits) -> Result<(), FormError> {
        if self.tags.len() > limits.max_tags {
            return Err(FormError::new(
                "tags",
                format!("Maximum {} tags allowed", limits.max_tags),
            ));
        }
        for (index, tag) in self.tags.iter().enumerate() {
            validate_token(tag, limits)
                .map_err(|err| FormError::new("tags", err.message().to_string()))?;
            if contains_ignore_case(&self.tags[..index], tag) {
                return Err(FormError::new("tags", "Tag already exists"));
            }
        }
        Ok(())
    }

    pub fn to_post(&self) -> BlogPost {
        BlogPost {
            id: None,
            slug: self.slug.clone(),
            title: self.title.clone(),
            summary: self.summary.clone(),
            content: self.content.clone(),
            author_id: Some(self.author_id),
            category_id: Some(self.category_id),
            author: None,
            category: None,
            date: self.date.clone(),
            read_time: self.read_time.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// Estimate reading time from the post body: HTML tags stripped, words
/// counted at 200 per minute, never below one minute.
pub fn estimate_read_time(content: &str) -> String {
    let mut plain = String::with_capacity(content.len());
    let mut in_tag = false;
    for c in content.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                plain.push(' ');
            }
            c if !in_tag => plain.push(c),
            _ => {}
        }
    }
    let words = plain.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> PostDraft {
        PostDraft {
            title: "Shipping the new editor".to_string(),
            slug: "shipping-the-new-editor".to_string(),
            author_id: 1,
            category_id: 2,
            date: "2026-01-15".to_string(),
            summary: "What changed and why.".to_string(),
            content: "<p>Plenty.</p>".to_string(),
            tags: vec!["editor".to_string(), "release".to_string()],
            ..PostDraft::default()
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate(&TagLimits::default()).is_ok());
    }

    #[test]
    fn author_and_category_must_be_chosen() {
        let mut draft = valid_draft();
        draft.author_id = 0;
        assert_eq!(
            draft.validate(&TagLimits::default()).unwrap_err().message(),
            "Author is required"
        );
        draft.author_id = 1;
        draft.category_id = 0;
        assert_eq!(
            draft.validate(&TagLimits::default()).unwrap_err().message(),
            "Category is required"
        );
    }

    #[test]
    fn duplicate_tags_rejected_ignoring_case() {
        let mut draft = valid_draft();
        draft.tags = vec!["API".to_string(), "api".to_string()];
        let err = draft.validate(&TagLimits::default()).unwrap_err();
        assert_eq!(err.field(), "tags");
        assert_eq!(err.message(), "Tag already exists");
    }

    #[test]
    fn tag_limits_apply_to_the_draft() {
        let limits = TagLimits {
            max_tags: 1,
            ..TagLimits::default()
        };
        let mut draft = valid_draft();
        assert_eq!(
            draft.validate(&limits).unwrap_err().message(),
            "Maximum 1 tags allowed"
        );
        draft.tags = vec!["c++".to_string()];
        assert_eq!(
            draft.validate(&limits).unwrap_err().message(),
            "Tag can only contain letters, numbers, spaces, and hyphens"
        );
    }

    #[test]
    fn read_time_strips_markup_and_rounds_up() {
        assert_eq!(estimate_read_time("<p>short</p>"), "1 min read");
        let words = vec!["word"; 401].join(" ");
        assert_eq!(estimate_read_time(&words), "3 min read");
    }

    #[test]
    fn default_read_time_matches_server_default() {
        assert_eq!(PostDraft::default().read_time, "5 min read");
    }
}
