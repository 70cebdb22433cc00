// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! The tag subsystem: validation and normalization shared by the forms,
//! the autocomplete input engine, debounced suggestion lookup, and the
//! cross-post lifecycle operations (rename, merge, delete).

pub mod editor;
pub mod lifecycle;
pub mod suggestions;
pub mod validation;

pub use editor::{EditorKey, TagChange, TagEditor};
pub use lifecycle::{
    DeleteOperation, LifecycleError, MergeOperation, OperationReceipt, RefreshHook,
    RenameOperation, StoreError, TagLifecycle, TagStore,
};
pub use suggestions::{SuggestionFetcher, SuggestionProbe, SuggestionSource, SuggestionTicket};
pub use validation::{TagLimits, TagValidationError, contains_ignore_case, validate_token};
