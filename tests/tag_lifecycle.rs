// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use common::{Failure, MockStore, post, start_server};
use copydesk::api::ApiClient;
use copydesk::tags::{
    DeleteOperation, LifecycleError, MergeOperation, RenameOperation, TagLifecycle,
};
use std::sync::Arc;
use std::sync::atomic::Ordering;

async fn lifecycle_against(store: &Arc<MockStore>) -> (TagLifecycle, Arc<MockStore>) {
    let base_url = start_server(store.clone()).await;
    let client = ApiClient::with_base_url(&base_url, 5).expect("client");
    (TagLifecycle::new(Arc::new(client)), store.clone())
}

#[actix_web::test]
async fn rename_applies_across_every_post() {
    let store = MockStore::new(vec![
        post(1, "Async in practice", &["js", "web"]),
        post(2, "Modern frontends", &["js"]),
        post(3, "Ownership", &["rust"]),
    ]);
    let (lifecycle, store) = lifecycle_against(&store).await;

    let receipt = lifecycle
        .rename(RenameOperation {
            from: "js".to_string(),
            to: "javascript".to_string(),
        })
        .await
        .expect("rename");

    assert_eq!(receipt.affected, 2);
    assert_eq!(receipt.message, "Renamed \"js\" to \"javascript\"");
    assert_eq!(store.tag_count("js"), 0);
    assert_eq!(store.tag_count("javascript"), 2);
    assert_eq!(store.counters.rename.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn rename_same_name_issues_zero_requests() {
    let store = MockStore::new(vec![post(1, "Post", &["javascript"])]);
    let (lifecycle, store) = lifecycle_against(&store).await;

    let err = lifecycle
        .rename(RenameOperation {
            from: "javascript".to_string(),
            to: "javascript".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LifecycleError::Validation("New name must be different from the old name".to_string())
    );
    assert_eq!(store.counters.rename.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn merge_unions_and_dedupes_per_post() {
    let store = MockStore::new(vec![
        post(1, "Old stack", &["js", "javascript"]),
        post(2, "New stack", &["javascript"]),
        post(3, "No overlap", &["rust"]),
    ]);
    let (lifecycle, store) = lifecycle_against(&store).await;

    let receipt = lifecycle
        .merge(MergeOperation {
            sources: vec!["js".to_string()],
            into: "javascript".to_string(),
        })
        .await
        .expect("merge");

    assert_eq!(receipt.affected, 1);
    assert_eq!(store.post_tags(1), vec!["javascript"]);
    assert_eq!(store.tag_count("javascript"), 2);
    assert_eq!(store.counters.merge.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn merge_into_a_source_issues_zero_requests() {
    let store = MockStore::new(vec![post(1, "Post", &["js", "javascript"])]);
    let (lifecycle, store) = lifecycle_against(&store).await;

    let err = lifecycle
        .merge(MergeOperation {
            sources: vec!["js".to_string(), "javascript".to_string()],
            into: "js".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LifecycleError::Validation("Cannot merge a tag into itself".to_string())
    );
    assert_eq!(store.counters.merge.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn delete_blocked_until_confirmation_matches_exactly() {
    let store = MockStore::new(vec![
        post(1, "Beta notes", &["beta", "release"]),
        post(2, "More beta notes", &["beta"]),
    ]);
    let (lifecycle, store) = lifecycle_against(&store).await;

    let err = lifecycle
        .delete(DeleteOperation {
            tag: "beta".to_string(),
            confirmation: "Beta".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LifecycleError::Validation("Type \"beta\" to confirm deletion".to_string())
    );
    assert_eq!(store.counters.delete.load(Ordering::SeqCst), 0);

    let receipt = lifecycle
        .delete(DeleteOperation {
            tag: "beta".to_string(),
            confirmation: "beta".to_string(),
        })
        .await
        .expect("delete");
    assert_eq!(receipt.affected, 2);
    assert_eq!(store.tag_count("beta"), 0);
    assert_eq!(store.tag_count("release"), 1);
    assert_eq!(store.counters.delete.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn delete_reaches_the_store_by_derived_slug() {
    let store = MockStore::new(vec![post(1, "Requests", &["Feature Request"])]);
    let (lifecycle, store) = lifecycle_against(&store).await;

    let receipt = lifecycle
        .delete(DeleteOperation {
            tag: "Feature Request".to_string(),
            confirmation: "Feature Request".to_string(),
        })
        .await
        .expect("delete");

    assert_eq!(receipt.message, "Deleted tag \"feature-request\"");
    assert_eq!(store.tag_count("Feature Request"), 0);
}

#[actix_web::test]
async fn server_error_text_surfaces_verbatim() {
    let store = MockStore::new(vec![post(1, "Post", &["old"])]);
    let (lifecycle, store) = lifecycle_against(&store).await;

    store.fail_next(Failure::Json {
        status: 409,
        error: "Tag \"new\" already exists".to_string(),
    });
    let err = lifecycle
        .rename(RenameOperation {
            from: "old".to_string(),
            to: "new".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LifecycleError::Store {
            message: "Tag \"new\" already exists".to_string()
        }
    );
}

#[actix_web::test]
async fn unparseable_error_body_falls_back_per_operation() {
    let store = MockStore::new(vec![post(1, "Post", &["old"])]);
    let (lifecycle, store) = lifecycle_against(&store).await;

    store.fail_next(Failure::Raw {
        status: 500,
        body: "upstream exploded".to_string(),
    });
    let err = lifecycle
        .rename(RenameOperation {
            from: "old".to_string(),
            to: "new".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LifecycleError::Store {
            message: "Failed to rename tag".to_string()
        }
    );

    store.fail_next(Failure::Raw {
        status: 500,
        body: "upstream exploded".to_string(),
    });
    let err = lifecycle
        .merge(MergeOperation {
            sources: vec!["old".to_string()],
            into: "new".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LifecycleError::Store {
            message: "Failed to merge tags".to_string()
        }
    );
}

#[actix_web::test]
async fn refresh_hook_fires_after_each_success() {
    let store = MockStore::new(vec![post(1, "Post", &["alpha", "beta"])]);
    let base_url = start_server(store.clone()).await;
    let client = ApiClient::with_base_url(&base_url, 5).expect("client");

    let refreshes = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = refreshes.clone();
    let lifecycle = TagLifecycle::new(Arc::new(client)).with_refresh_hook(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    lifecycle
        .rename(RenameOperation {
            from: "alpha".to_string(),
            to: "gamma".to_string(),
        })
        .await
        .expect("rename");
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);

    // Validation failures refresh nothing.
    let _ = lifecycle
        .delete(DeleteOperation {
            tag: "beta".to_string(),
            confirmation: "wrong".to_string(),
        })
        .await;
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);

    lifecycle
        .delete(DeleteOperation {
            tag: "beta".to_string(),
            confirmation: "beta".to_string(),
        })
        .await
        .expect("delete");
    assert_eq!(refreshes.load(Ordering::SeqCst), 2);
}
