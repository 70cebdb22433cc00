// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::{App, HttpResponse, HttpServer, web};
use copydesk::util::slugify;
use serde::Deserialize;
use serde_json::json;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the content API, backing the client tests. It
/// owns posts with tag sets and counts every request per endpoint so
/// tests can assert that client-side validation issued zero requests.
pub struct MockStore {
    pub posts: Mutex<Vec<MockPost>>,
    pub counters: RequestCounters,
    failure: Mutex<Option<Failure>>,
}

#[derive(Debug, Clone)]
pub struct MockPost {
    pub id: i64,
    pub title: String,
    pub tags: Vec<String>,
}

#[derive(Default)]
pub struct RequestCounters {
    pub tag_list: AtomicUsize,
    pub suggestions: AtomicUsize,
    pub rename: AtomicUsize,
    pub merge: AtomicUsize,
    pub delete: AtomicUsize,
}

/// A one-shot canned failure, consumed by the next mutating request.
pub enum Failure {
    Json { status: u16, error: String },
    Raw { status: u16, body: String },
}

impl MockStore {
    pub fn new(posts: Vec<MockPost>) -> Arc<Self> {
        Arc::new(Self {
            posts: Mutex::new(posts),
            counters: RequestCounters::default(),
            failure: Mutex::new(None),
        })
    }

    pub fn fail_next(&self, failure: Failure) {
        *self.failure.lock().expect("failure lock") = Some(failure);
    }

    fn take_failure(&self) -> Option<HttpResponse> {
        let failure = self.failure.lock().expect("failure lock").take()?;
        Some(match failure {
            Failure::Json { status, error } => {
                HttpResponse::build(status_code(status)).json(json!({ "error": error }))
            }
            Failure::Raw { status, body } => HttpResponse::build(status_code(status)).body(body),
        })
    }

    pub fn tag_count(&self, name: &str) -> usize {
        self.posts
            .lock()
            .expect("posts lock")
            .iter()
            .filter(|post| post.tags.iter().any(|tag| tag == name))
            .count()
    }

    pub fn post_tags(&self, id: i64) -> Vec<String> {
        self.posts
            .lock()
            .expect("posts lock")
            .iter()
            .find(|post| post.id == id)
            .map(|post| post.tags.clone())
            .unwrap_or_default()
    }
}

fn status_code(status: u16) -> actix_web::http::StatusCode {
    actix_web::http::StatusCode::from_u16(status).expect("status code")
}

pub fn post(id: i64, title: &str, tags: &[&str]) -> MockPost {
    MockPost {
        id,
        title: title.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// Bind an ephemeral port and serve the mock API on it for the rest of
/// the test; returns the base URL.
pub async fn start_server(store: Arc<MockStore>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");

    actix_web::rt::spawn(async move {
        let _ = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(store.clone()))
                .configure(configure)
        })
        .workers(1)
        .listen(listener)
        .expect("listen")
        .run()
        .await;
    });

    format!("http://{}", addr)
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/blog/tags", web::get().to(list_tags))
            .route("/blog/tags/suggestions", web::get().to(suggest_tags))
            .route("/blog/tags/rename", web::post().to(rename_tag))
            .route("/blog/tags/merge", web::post().to(merge_tags))
            .route("/blog/tags/{slug}", web::delete().to(delete_tag))
            .route("/blog", web::get().to(list_posts))
            .route("/blog/stats", web::get().to(blog_stats))
            .route("/blog/bulk", web::delete().to(bulk_delete_posts))
            .route("/changelog/{id}/status", web::patch().to(set_changelog_status)),
    );
}

async fn list_tags(store: web::Data<Arc<MockStore>>) -> HttpResponse {
    store.counters.tag_list.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    let posts = store.posts.lock().expect("posts lock");
    let mut names: Vec<String> = Vec::new();
    for post in posts.iter() {
        for tag in &post.tags {
            if !names.contains(tag) {
                names.push(tag.clone());
            }
        }
    }
    let data: Vec<_> = names
        .iter()
        .map(|name| {
            let count = posts
                .iter()
                .filter(|post| post.tags.iter().any(|tag| tag == name))
                .count();
            json!({ "name": name, "count": count })
        })
        .collect();
    HttpResponse::Ok().json(json!({ "data": data }))
}

#[derive(Deserialize)]
struct SuggestQuery {
    q: String,
    limit: Option<usize>,
}

async fn suggest_tags(
    store: web::Data<Arc<MockStore>>,
    query: web::Query<SuggestQuery>,
) -> HttpResponse {
    store.counters.suggestions.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    let posts = store.posts.lock().expect("posts lock");
    let needle = query.q.to_lowercase();
    let mut matches: Vec<String> = Vec::new();
    for post in posts.iter() {
        for tag in &post.tags {
            if tag.to_lowercase().starts_with(&needle) && !matches.contains(tag) {
                matches.push(tag.clone());
            }
        }
    }
    matches.sort();
    matches.truncate(query.limit.unwrap_or(10));
    HttpResponse::Ok().json(json!({ "data": matches }))
}

#[derive(Deserialize)]
struct RenameBody {
    from: String,
    to: String,
}

async fn rename_tag(
    store: web::Data<Arc<MockStore>>,
    body: web::Json<RenameBody>,
) -> HttpResponse {
    store.counters.rename.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    let mut posts = store.posts.lock().expect("posts lock");
    let mut affected = 0;
    for post in posts.iter_mut() {
        if !post.tags.iter().any(|tag| tag == &body.from) {
            continue;
        }
        affected += 1;
        let mut updated = Vec::with_capacity(post.tags.len());
        for tag in &post.tags {
            let value = if tag == &body.from { &body.to } else { tag };
            if !updated.contains(value) {
                updated.push(value.clone());
            }
        }
        post.tags = updated;
    }
    if affected == 0 {
        return HttpResponse::NotFound().json(json!({ "error": "Tag not found" }));
    }
    HttpResponse::Ok().json(json!({
        "message": format!("Renamed \"{}\" to \"{}\"", body.from, body.to),
        "affected": affected,
    }))
}

#[derive(Deserialize)]
struct MergeBody {
    tags: Vec<String>,
    into: String,
}

async fn merge_tags(store: web::Data<Arc<MockStore>>, body: web::Json<MergeBody>) -> HttpResponse {
    store.counters.merge.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    let mut posts = store.posts.lock().expect("posts lock");
    let mut affected = 0;
    for post in posts.iter_mut() {
        if !post
            .tags
            .iter()
            .any(|tag| body.tags.iter().any(|source| source == tag))
        {
            continue;
        }
        affected += 1;
        let mut updated: Vec<String> = Vec::with_capacity(post.tags.len());
        for tag in &post.tags {
            let value = if body.tags.iter().any(|source| source == tag) {
                &body.into
            } else {
                tag
            };
            if !updated.contains(value) {
                updated.push(value.clone());
            }
        }
        post.tags = updated;
    }
    HttpResponse::Ok().json(json!({
        "message": format!("Merged {} tags into \"{}\"", body.tags.len(), body.into),
        "affected": affected,
    }))
}

async fn delete_tag(store: web::Data<Arc<MockStore>>, path: web::Path<String>) -> HttpResponse {
    store.counters.delete.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    let slug = path.into_inner();
    let mut posts = store.posts.lock().expect("posts lock");
    let mut affected = 0;
    for post in posts.iter_mut() {
        let before = post.tags.len();
        post.tags.retain(|tag| slugify(tag) != slug);
        if post.tags.len() != before {
            affected += 1;
        }
    }
    if affected == 0 {
        return HttpResponse::NotFound().json(json!({ "error": "Tag not found" }));
    }
    HttpResponse::Ok().json(json!({
        "message": format!("Deleted tag \"{}\"", slug),
        "affected": affected,
    }))
}

#[derive(Deserialize)]
struct ListQuery {
    page: Option<usize>,
    limit: Option<usize>,
}

async fn list_posts(
    store: web::Data<Arc<MockStore>>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    let posts = store.posts.lock().expect("posts lock");
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).max(1);
    let total_items = posts.len();
    let total_pages = total_items.div_ceil(limit).max(1);
    let data: Vec<_> = posts
        .iter()
        .skip((page - 1) * limit)
        .take(limit)
        .map(|post| {
            json!({
                "id": post.id,
                "slug": slugify(&post.title),
                "title": post.title,
                "summary": "",
                "content": "",
                "date": "2026-01-01",
                "readTime": "5 min read",
                "tags": post.tags,
            })
        })
        .collect();
    HttpResponse::Ok().json(json!({
        "data": data,
        "pagination": {
            "currentPage": page,
            "totalPages": total_pages,
            "totalItems": total_items,
            "hasNextPage": page < total_pages,
            "hasPreviousPage": page > 1,
            "limit": limit,
        }
    }))
}

async fn blog_stats(store: web::Data<Arc<MockStore>>) -> HttpResponse {
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    let posts = store.posts.lock().expect("posts lock");
    let mut tags: Vec<(String, usize)> = Vec::new();
    for post in posts.iter() {
        for tag in &post.tags {
            match tags.iter().position(|(name, _)| name == tag) {
                Some(index) => tags[index].1 += 1,
                None => tags.push((tag.clone(), 1)),
            }
        }
    }
    tags.sort_by(|a, b| b.1.cmp(&a.1));
    let popular: Vec<_> = tags
        .iter()
        .take(5)
        .map(|(tag, count)| json!({ "tag": tag, "count": count }))
        .collect();
    let recent: Vec<_> = posts
        .iter()
        .take(5)
        .map(|post| {
            json!({
                "id": post.id,
                "slug": slugify(&post.title),
                "title": post.title,
                "date": "2026-01-01",
            })
        })
        .collect();
    HttpResponse::Ok().json(json!({
        "data": {
            "totalPosts": posts.len(),
            "totalAuthors": 1,
            "totalCategories": 1,
            "totalTags": tags.len(),
            "recentPosts": recent,
            "popularTags": popular,
        }
    }))
}

#[derive(Deserialize)]
struct BulkDeleteBody {
    ids: Vec<i64>,
}

async fn bulk_delete_posts(
    store: web::Data<Arc<MockStore>>,
    body: web::Json<BulkDeleteBody>,
) -> HttpResponse {
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    let mut posts = store.posts.lock().expect("posts lock");
    let mut deleted_ids: Vec<i64> = Vec::new();
    posts.retain(|post| {
        if body.ids.contains(&post.id) {
            deleted_ids.push(post.id);
            false
        } else {
            true
        }
    });
    HttpResponse::Ok().json(json!({
        "message": format!("Deleted {} posts", deleted_ids.len()),
        "deletedCount": deleted_ids.len(),
        "deletedIds": deleted_ids,
    }))
}

#[derive(Deserialize)]
struct StatusBody {
    status: String,
}

async fn set_changelog_status(
    store: web::Data<Arc<MockStore>>,
    path: web::Path<i64>,
    body: web::Json<StatusBody>,
) -> HttpResponse {
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    HttpResponse::Ok().json(json!({
        "data": { "id": path.into_inner(), "status": body.status.as_str() },
        "message": "Status updated",
    }))
}
