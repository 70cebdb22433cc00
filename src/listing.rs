// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! View state for the sortable, paginated entity tables. The state never
//! owns rows; owners fetch through the API client and call
//! [`ListState::refreshed`] with the envelope's pagination after every
//! fetch, including the re-fetch their refresh hook performs after a
//! successful mutation (see [`crate::tags::RefreshHook`]).

use crate::api::Pagination;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug)]
pub struct ListState {
    page: u32,
    limit: u32,
    search: String,
    sort: Option<(String, SortDirection)>,
    selected: BTreeSet<i64>,
    pagination: Option<Pagination>,
}

impl ListState {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            search: String::new(),
            sort: None,
            selected: BTreeSet::new(),
            pagination: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Changing the search text always returns to the first page.
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
        self.page = 1;
    }

    pub fn sort(&self) -> Option<(&str, SortDirection)> {
        self.sort
            .as_ref()
            .map(|(column, direction)| (column.as_str(), *direction))
    }

    /// Clicking a column header: a new column sorts ascending, clicking
    /// the active column flips the direction.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = Some(match &self.sort {
            Some((active, direction)) if active == column => {
                (column.to_string(), direction.flipped())
            }
            _ => (column.to_string(), SortDirection::Ascending),
        });
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn next_page(&mut self) -> bool {
        match &self.pagination {
            Some(pagination) if pagination.has_next_page => {
                self.page += 1;
                true
            }
            _ => false,
        }
    }

    pub fn previous_page(&mut self) -> bool {
        match &self.pagination {
            Some(pagination) if pagination.has_previous_page && self.page > 1 => {
                self.page -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn toggle_selected(&mut self, id: i64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn select_all<I: IntoIterator<Item = i64>>(&mut self, ids: I) {
        self.selected.extend(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Ids currently marked for a bulk operation, in ascending order.
    pub fn selected_ids(&self) -> Vec<i64> {
        self.selected.iter().copied().collect()
    }

    /// Record the outcome of a fetch. Selection does not survive a
    /// refresh; rows may no longer exist.
    pub fn refreshed(&mut self, pagination: Option<Pagination>) {
        if let Some(pagination) = &pagination {
            self.page = pagination.current_page;
        }
        self.pagination = pagination;
        self.selected.clear();
    }
}
