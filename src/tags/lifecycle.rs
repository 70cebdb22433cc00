// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::util::slug::slugify;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Outcome of a successful lifecycle operation, announced to the user
/// with its affected-post count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationReceipt {
    pub message: String,
    pub affected: u64,
}

/// Failure reported by the tag store. `message` carries the server's own
/// text when one was available; `None` means the failure had no usable
/// text and the per-operation fallback applies.
#[derive(Debug, Clone)]
pub struct StoreError {
    message: Option<String>,
}

impl StoreError {
    pub fn reported(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn opaque() -> Self {
        Self { message: None }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// The external service of record for tag-to-post associations.
#[async_trait]
pub trait TagStore: Send + Sync {
    async fn rename(&self, from: &str, to: &str) -> Result<OperationReceipt, StoreError>;
    async fn merge(&self, sources: &[String], into: &str) -> Result<OperationReceipt, StoreError>;
    async fn delete_by_slug(&self, slug: &str) -> Result<OperationReceipt, StoreError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// Client-side rejection; no request was issued.
    Validation(String),
    /// Another submission is already in flight.
    Busy,
    /// The store rejected the operation or the request failed.
    Store { message: String },
}

impl fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleError::Validation(message) => write!(f, "{}", message),
            LifecycleError::Busy => write!(f, "Another tag operation is already in progress"),
            LifecycleError::Store { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for LifecycleError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOperation {
    pub from: String,
    pub to: String,
}

impl RenameOperation {
    pub fn validate(&self) -> Result<(), LifecycleError> {
        if self.from.is_empty() || self.to.is_empty() {
            return Err(LifecycleError::Validation(
                "Both fields are required".to_string(),
            ));
        }
        if self.from == self.to {
            return Err(LifecycleError::Validation(
                "New name must be different from the old name".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOperation {
    pub sources: Vec<String>,
    pub into: String,
}

impl MergeOperation {
    pub fn validate(&self) -> Result<(), LifecycleError> {
        if self.sources.is_empty() || self.into.is_empty() {
            return Err(LifecycleError::Validation(
                "Select tags to merge and specify the target tag".to_string(),
            ));
        }
        if self.sources.contains(&self.into) {
            return Err(LifecycleError::Validation(
                "Cannot merge a tag into itself".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOperation {
    pub tag: String,
    /// The tag name re-typed by the user; must match byte-for-byte.
    pub confirmation: String,
}

impl DeleteOperation {
    pub fn validate(&self) -> Result<(), LifecycleError> {
        if self.tag.is_empty() {
            return Err(LifecycleError::Validation(
                "Select a tag to delete".to_string(),
            ));
        }
        if self.confirmation != self.tag {
            return Err(LifecycleError::Validation(format!(
                "Type \"{}\" to confirm deletion",
                self.tag
            )));
        }
        Ok(())
    }
}

/// Invoked after every successful lifecycle operation so the list-owning
/// side re-fetches; the store stays the single source of truth for counts.
pub type RefreshHook = Box<dyn Fn() + Send + Sync>;

/// Executes lifecycle operations against the tag store.
///
/// Validation runs before anything touches the network; a validation
/// failure issues zero requests. Only one submission may be in flight at
/// a time. Nothing is retried automatically; a failed operation returns
/// the executor to idle for resubmission.
pub struct TagLifecycle {
    store: Arc<dyn TagStore>,
    in_flight: Mutex<()>,
    refresh: Option<RefreshHook>,
}

impl TagLifecycle {
    pub fn new(store: Arc<dyn TagStore>) -> Self {
        Self {
            store,
            in_flight: Mutex::new(()),
            refresh: None,
        }
    }

    pub fn with_refresh_hook(mut self, hook: RefreshHook) -> Self {
        self.refresh = Some(hook);
        self
    }

    pub async fn rename(&self, op: RenameOperation) -> Result<OperationReceipt, LifecycleError> {
        op.validate()?;
        let _guard = self.in_flight.try_lock().map_err(|_| LifecycleError::Busy)?;
        let receipt = self
            .store
            .rename(&op.from, &op.to)
            .await
            .map_err(|err| store_failure(err, "Failed to rename tag"))?;
        log::info!(
            "Renamed tag \"{}\" to \"{}\" ({} posts affected)",
            op.from,
            op.to,
            receipt.affected
        );
        self.notify_refresh();
        Ok(receipt)
    }

    pub async fn merge(&self, op: MergeOperation) -> Result<OperationReceipt, LifecycleError> {
        op.validate()?;
        let _guard = self.in_flight.try_lock().map_err(|_| LifecycleError::Busy)?;
        let receipt = self
            .store
            .merge(&op.sources, &op.into)
            .await
            .map_err(|err| store_failure(err, "Failed to merge tags"))?;
        log::info!(
            "Merged {} tags into \"{}\" ({} posts affected)",
            op.sources.len(),
            op.into,
            receipt.affected
        );
        self.notify_refresh();
        Ok(receipt)
    }

    pub async fn delete(&self, op: DeleteOperation) -> Result<OperationReceipt, LifecycleError> {
        op.validate()?;
        let _guard = self.in_flight.try_lock().map_err(|_| LifecycleError::Busy)?;
        let slug = slugify(&op.tag);
        let receipt = self
            .store
            .delete_by_slug(&slug)
            .await
            .map_err(|err| store_failure(err, "Failed to delete tag"))?;
        log::info!(
            "Deleted tag \"{}\" ({} posts affected)",
            op.tag,
            receipt.affected
        );
        self.notify_refresh();
        Ok(receipt)
    }

    fn notify_refresh(&self) {
        if let Some(hook) = &self.refresh {
            hook();
        }
    }
}

fn store_failure(err: StoreError, fallback: &str) -> LifecycleError {
    LifecycleError::Store {
        message: err
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string()),
    }
}
