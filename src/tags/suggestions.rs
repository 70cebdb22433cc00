// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Asynchronous source of tag suggestions for a query prefix.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggest(&self, query: &str, limit: usize) -> Result<Vec<String>, String>;
}

/// Sequence-number guard for in-flight suggestion lookups.
///
/// Every keystroke takes a ticket; issuing a new ticket supersedes all
/// earlier ones. A superseded ticket can neither fire its fetch nor apply
/// its result, so a slow response can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct SuggestionProbe {
    latest: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionTicket {
    seq: u64,
}

impl SuggestionProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> SuggestionTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        SuggestionTicket { seq }
    }

    pub fn is_current(&self, ticket: SuggestionTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.seq
    }
}

/// Debounced, last-write-wins suggestion lookup for the tag input.
pub struct SuggestionFetcher {
    source: Arc<dyn SuggestionSource>,
    probe: SuggestionProbe,
    debounce: Duration,
    min_chars: usize,
    limit: usize,
}

impl SuggestionFetcher {
    pub fn new(
        source: Arc<dyn SuggestionSource>,
        debounce: Duration,
        min_chars: usize,
        limit: usize,
    ) -> Self {
        Self {
            source,
            probe: SuggestionProbe::new(),
            debounce,
            min_chars,
            limit,
        }
    }

    /// Build a fetcher wired to the configured debounce, minimum query
    /// length, and result limit.
    pub fn from_config(
        source: Arc<dyn SuggestionSource>,
        config: &crate::config::TagInputConfig,
    ) -> Self {
        Self::new(
            source,
            Duration::from_millis(config.suggestion_debounce_ms),
            config.suggestion_min_chars,
            config.suggestion_limit,
        )
    }

    /// Register a keystroke. Always supersedes any pending lookup; returns
    /// a ticket only when the query is long enough to fetch for. `None`
    /// means the caller should clear its suggestion list.
    pub fn query_changed(&self, query: &str) -> Option<SuggestionTicket> {
        let ticket = self.probe.issue();
        if query.trim().chars().count() < self.min_chars {
            return None;
        }
        Some(ticket)
    }

    /// Debounce, then fetch. Returns `None` when the ticket was superseded
    /// before the debounce elapsed or while the request was in flight.
    /// Lookup failures are logged and presented as an empty list.
    pub async fn fetch(&self, ticket: SuggestionTicket, query: &str) -> Option<Vec<String>> {
        tokio::time::sleep(self.debounce).await;
        if !self.probe.is_current(ticket) {
            return None;
        }
        let results = match self.source.suggest(query, self.limit).await {
            Ok(results) => results,
            Err(err) => {
                log::warn!("Tag suggestion lookup failed: {}", err);
                Vec::new()
            }
        };
        if !self.probe.is_current(ticket) {
            return None;
        }
        Some(results)
    }
}
