// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::tags::validation::{TagLimits, contains_ignore_case, validate_token};

/// Keys the tag input reacts to beyond plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Enter,
    Tab,
    Comma,
    Backspace,
    ArrowUp,
    ArrowDown,
    Escape,
}

/// A single mutation of the committed tag sequence, drained by the owner
/// after each event so it can mirror the change elsewhere (form state,
/// dirty tracking, logging).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagChange {
    Added(String),
    Removed(String),
}

/// State machine behind the tag autocomplete input.
///
/// The editor owns the committed tag sequence, the in-progress text, the
/// visible suggestion list with an optional highlighted row, and at most
/// one validation message. Every committed tag passed validation and the
/// sequence is duplicate-free ignoring case; callers never observe an
/// invalid sequence.
#[derive(Debug)]
pub struct TagEditor {
    limits: TagLimits,
    tags: Vec<String>,
    input: String,
    suggestions: Vec<String>,
    highlighted: Option<usize>,
    error: Option<String>,
    changes: Vec<TagChange>,
}

impl TagEditor {
    pub fn new(limits: TagLimits) -> Self {
        Self::with_tags(limits, Vec::new())
    }

    /// Seed the editor with a post's existing tag set, e.g. when opening
    /// an edit form. Seeds are taken as-is; they were validated when
    /// first committed.
    pub fn with_tags(limits: TagLimits, tags: Vec<String>) -> Self {
        Self {
            limits,
            tags,
            input: String::new(),
            suggestions: Vec::new(),
            highlighted: None,
            error: None,
            changes: Vec::new(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Drain the add/remove events recorded since the last drain.
    pub fn take_changes(&mut self) -> Vec<TagChange> {
        std::mem::take(&mut self.changes)
    }

    /// Replace the in-progress text, splitting on the first comma: the
    /// head commits as a token (when non-empty) and the remainder becomes
    /// the new in-progress text, re-checked on the next input event.
    pub fn set_input(&mut self, text: &str) {
        if let Some((head, rest)) = text.split_once(',') {
            let token = head.trim();
            if !token.is_empty() {
                self.commit(token.to_string());
            }
            self.input = rest.trim_start().to_string();
        } else {
            self.input = text.to_string();
            self.error = None;
        }
    }

    pub fn press(&mut self, key: EditorKey) {
        match key {
            EditorKey::Enter | EditorKey::Tab | EditorKey::Comma => {
                if let Some(index) = self.highlighted
                    && index < self.suggestions.len()
                {
                    let suggestion = self.suggestions[index].clone();
                    self.commit(suggestion);
                    return;
                }
                let token = self.input.trim().to_string();
                if token.is_empty() {
                    return;
                }
                self.commit(token);
            }
            EditorKey::Backspace => {
                if self.input.is_empty()
                    && let Some(last) = self.tags.pop()
                {
                    self.changes.push(TagChange::Removed(last));
                }
            }
            EditorKey::ArrowDown => {
                if self.suggestions.is_empty() {
                    return;
                }
                self.highlighted = Some(match self.highlighted {
                    Some(index) if index + 1 < self.suggestions.len() => index + 1,
                    Some(index) => index,
                    None => 0,
                });
            }
            EditorKey::ArrowUp => {
                self.highlighted = match self.highlighted {
                    Some(0) | None => None,
                    Some(index) => Some(index - 1),
                };
            }
            EditorKey::Escape => {
                self.close_suggestions();
            }
        }
    }

    /// Remove a committed tag, e.g. via its dismiss control.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|tag| tag != name);
        if self.tags.len() == before {
            return false;
        }
        self.changes.push(TagChange::Removed(name.to_string()));
        true
    }

    /// Present fetched suggestions. Entries already in the tag set are
    /// filtered out (ignoring case); an empty remainder closes the list.
    pub fn show_suggestions(&mut self, items: Vec<String>) {
        self.highlighted = None;
        self.suggestions = items
            .into_iter()
            .filter(|item| !contains_ignore_case(&self.tags, item))
            .collect();
    }

    /// Commit the suggestion at `index`, as when it is clicked.
    pub fn select_suggestion(&mut self, index: usize) {
        if let Some(suggestion) = self.suggestions.get(index).cloned() {
            self.commit(suggestion);
        }
    }

    pub fn close_suggestions(&mut self) {
        self.suggestions.clear();
        self.highlighted = None;
    }

    fn commit(&mut self, token: String) {
        if let Err(err) = validate_token(&token, &self.limits) {
            self.error = Some(err.message().to_string());
            return;
        }
        if contains_ignore_case(&self.tags, &token) {
            self.error = Some("Tag already exists".to_string());
            return;
        }
        if self.tags.len() >= self.limits.max_tags {
            self.error = Some(format!("Maximum {} tags allowed", self.limits.max_tags));
            return;
        }
        self.tags.push(token.clone());
        self.changes.push(TagChange::Added(token));
        self.input.clear();
        self.error = None;
        self.close_suggestions();
    }
}
