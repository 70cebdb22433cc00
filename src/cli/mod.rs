// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Command-line front end over the library: tokens resolve through a
//! domain/command registry to one API action, executed against the
//! configured endpoint.

pub(crate) mod parse_utils;
pub mod authors;
pub mod categories;
pub mod changelog;
pub mod posts;
pub mod tags;

use crate::api::tags::TagCount;
use crate::api::{
    ApiClient, ApiEnvelope, BlogAuthor, BlogCategory, BlogListParams, BlogPost, ChangelogEntry,
    ChangelogListParams, EntryStatus, Pagination,
};
use crate::config::{Config, LoggingConfig, ValidatedConfig};
use crate::forms::{AuthorDraft, CategoryDraft};
use crate::tags::{
    DeleteOperation, LifecycleError, MergeOperation, OperationReceipt, RenameOperation,
    TagLifecycle,
};
use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    Usage,
    Request,
}

#[derive(Debug, Clone)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Usage,
            message: message.into(),
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Request,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind {
            CliErrorKind::Usage => 2,
            CliErrorKind::Request => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// One resolved API action, ready to execute.
#[derive(Debug, Clone)]
pub enum CliAction {
    TagList,
    TagSuggest {
        query: String,
        limit: Option<usize>,
    },
    TagRename(RenameOperation),
    TagMerge(MergeOperation),
    TagDelete(DeleteOperation),
    PostList(BlogListParams),
    PostShow {
        id: i64,
    },
    PostDelete {
        id: i64,
    },
    PostBulkDelete {
        ids: Vec<i64>,
    },
    AuthorList,
    AuthorAdd(AuthorDraft),
    AuthorChange {
        id: i64,
        draft: AuthorDraft,
    },
    AuthorDelete {
        id: i64,
    },
    CategoryList,
    CategoryAdd(CategoryDraft),
    CategoryChange {
        id: i64,
        draft: CategoryDraft,
    },
    CategoryDelete {
        id: i64,
    },
    ChangelogList(ChangelogListParams),
    ChangelogShow {
        id: i64,
    },
    ChangelogDelete {
        id: i64,
    },
    ChangelogStatus {
        id: i64,
        status: EntryStatus,
    },
}

pub struct CliRegistry {
    domains: Vec<DomainSpec>,
    aliases: BTreeSet<String>,
}

impl Default for CliRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CliRegistry {
    pub fn new() -> Self {
        Self {
            domains: Vec::new(),
            aliases: BTreeSet::new(),
        }
    }

    pub fn register_domain(&mut self, domain: DomainSpec) -> Result<(), CliError> {
        let domain_key = domain.name_lower();
        if self.aliases.contains(&domain_key) {
            return Err(CliError::usage(format!(
                "Duplicate domain alias or name '{}'",
                domain.name
            )));
        }
        self.aliases.insert(domain_key);
        for alias in domain.aliases.iter() {
            let alias_lower = alias.to_ascii_lowercase();
            if self.aliases.contains(&alias_lower) {
                return Err(CliError::usage(format!(
                    "Duplicate domain alias '{}'",
                    alias
                )));
            }
            self.aliases.insert(alias_lower);
        }

        domain.validate_commands()?;
        self.domains.push(domain);
        Ok(())
    }

    pub fn resolve_command(&self, tokens: &[String]) -> Result<CliAction, CliError> {
        if tokens.is_empty() {
            return Err(CliError::usage("Missing command domain"));
        }
        let domain_token = tokens[0].to_ascii_lowercase();
        let domain = resolve_domain(&domain_token, &self.domains)?;
        if tokens.len() < 2 {
            return Err(CliError::usage(format!(
                "Missing command for domain '{}'",
                domain.name
            )));
        }
        let command_token = tokens[1].to_ascii_lowercase();
        let command = resolve_command_spec(&command_token, domain)?;
        let args = &tokens[2..];
        (command.parser)(args)
    }
}

pub struct DomainSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub commands: Vec<CommandSpec>,
}

impl DomainSpec {
    fn name_lower(&self) -> String {
        self.name.to_ascii_lowercase()
    }

    fn validate_commands(&self) -> Result<(), CliError> {
        let mut seen = BTreeSet::new();
        for command in self.commands.iter() {
            let name = command.name.to_ascii_lowercase();
            if !seen.insert(name) {
                return Err(CliError::usage(format!(
                    "Duplicate command name '{}' in domain '{}'",
                    command.name, self.name
                )));
            }
        }
        Ok(())
    }
}

pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static [&'static str],
    pub parser: fn(&[String]) -> Result<CliAction, CliError>,
}

fn resolve_domain<'a>(
    token: &str,
    domains: &'a [DomainSpec],
) -> Result<&'a DomainSpec, CliError> {
    domains
        .iter()
        .find(|domain| {
            domain.name_lower() == token
                || domain
                    .aliases
                    .iter()
                    .any(|alias| alias.to_ascii_lowercase() == token)
        })
        .ok_or_else(|| CliError::usage(format!("Unknown command domain '{}'", token)))
}

fn resolve_command_spec<'a>(
    token: &str,
    domain: &'a DomainSpec,
) -> Result<&'a CommandSpec, CliError> {
    domain
        .commands
        .iter()
        .find(|command| command.name.to_ascii_lowercase() == token)
        .ok_or_else(|| {
            CliError::usage(format!(
                "Unknown command '{}' for domain '{}'",
                token, domain.name
            ))
        })
}

pub fn build_registry() -> Result<CliRegistry, CliError> {
    let mut registry = CliRegistry::new();
    registry.register_domain(tags::domain())?;
    registry.register_domain(posts::domain())?;
    registry.register_domain(authors::domain())?;
    registry.register_domain(categories::domain())?;
    registry.register_domain(changelog::domain())?;
    Ok(registry)
}

pub fn help_text() -> String {
    let registry = match build_registry() {
        Ok(registry) => registry,
        Err(err) => {
            return format!("Failed to build CLI registry: {}", err);
        }
    };

    let mut out = String::new();
    push_line(&mut out, "Usage:");
    push_line(&mut out, "  copydesk [options] <domain> <command> [args]");
    push_line(&mut out, "  copydesk help");
    push_line(&mut out, "");
    push_line(&mut out, "Options:");
    push_line(
        &mut out,
        "  -C <root>   Directory holding config.yaml (default: .).",
    );
    push_line(&mut out, "  -h, --help  Show this help.");
    push_line(&mut out, "");
    push_line(&mut out, "Domains and commands:");
    for domain in registry.domains.iter() {
        let domain_aliases = format_aliases(domain.aliases);
        push_line(&mut out, &format!("  {}{}", domain.name, domain_aliases));
        for command in domain.commands.iter() {
            for usage in command.usage.iter() {
                push_line(&mut out, &format!("    {}", usage));
            }
        }
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn format_aliases(aliases: &[&str]) -> String {
    if aliases.is_empty() {
        String::new()
    } else {
        format!(" ({})", aliases.join(", "))
    }
}

/// Resolve and execute one command. Returns the process exit code.
pub async fn run_cli(runtime_root: &Path, tokens: Vec<String>) -> i32 {
    let registry = match build_registry() {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("{}", err);
            return err.exit_code();
        }
    };
    let action = match registry.resolve_command(&tokens) {
        Ok(action) => action,
        Err(err) => {
            eprintln!("{}", err);
            return err.exit_code();
        }
    };
    let config = match Config::load_and_validate(runtime_root) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return 1;
        }
    };
    init_logging(&config.logging);
    let client = match ApiClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", err);
            return 1;
        }
    };
    match execute(&client, &config, action).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", err);
            err.exit_code()
        }
    }
}

fn init_logging(logging: &LoggingConfig) {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(logging.level_filter())
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

async fn execute(
    client: &ApiClient,
    config: &ValidatedConfig,
    action: CliAction,
) -> Result<i32, CliError> {
    match action {
        CliAction::TagList => {
            let mut tags = client
                .list_tags()
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            print_tag_list(&mut tags);
        }
        CliAction::TagSuggest { query, limit } => {
            let limit = limit.unwrap_or(config.tags.suggestion_limit);
            let suggestions = client
                .tag_suggestions(&query, Some(limit))
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            for suggestion in &suggestions {
                println!("{}", suggestion);
            }
        }
        CliAction::TagRename(op) => {
            let lifecycle = TagLifecycle::new(Arc::new(client.clone()));
            let receipt = lifecycle.rename(op).await.map_err(lifecycle_error)?;
            print_receipt(&receipt);
        }
        CliAction::TagMerge(op) => {
            let lifecycle = TagLifecycle::new(Arc::new(client.clone()));
            let receipt = lifecycle.merge(op).await.map_err(lifecycle_error)?;
            print_receipt(&receipt);
        }
        CliAction::TagDelete(op) => {
            let lifecycle = TagLifecycle::new(Arc::new(client.clone()));
            let receipt = lifecycle.delete(op).await.map_err(lifecycle_error)?;
            print_receipt(&receipt);
        }
        CliAction::PostList(params) => {
            let envelope = client
                .list_posts(&params)
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            print_post_list(&envelope);
        }
        CliAction::PostShow { id } => {
            let post = client
                .post_by_id(id)
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            print_post(&post);
        }
        CliAction::PostDelete { id } => {
            let receipt = client
                .delete_post(id)
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            println!("{}", receipt.message);
        }
        CliAction::PostBulkDelete { ids } => {
            let receipt = client
                .bulk_delete_posts(&ids)
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            println!("{}", receipt.message);
            println!("Deleted posts: {}", receipt.deleted_count);
        }
        CliAction::AuthorList => {
            let authors = client
                .list_authors()
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            print_author_list(&authors);
        }
        CliAction::AuthorAdd(draft) => {
            draft
                .validate()
                .map_err(|err| CliError::usage(err.to_string()))?;
            let author = client
                .create_author(&draft.to_author())
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            println!("Created author {} ({})", author.name, author.slug);
        }
        CliAction::AuthorChange { id, draft } => {
            draft
                .validate()
                .map_err(|err| CliError::usage(err.to_string()))?;
            let author = client
                .update_author(id, &draft.to_author())
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            println!("Updated author {} ({})", author.name, author.slug);
        }
        CliAction::AuthorDelete { id } => {
            let receipt = client
                .delete_author(id)
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            println!("{}", receipt.message);
        }
        CliAction::CategoryList => {
            let categories = client
                .list_categories()
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            print_category_list(&categories);
        }
        CliAction::CategoryAdd(draft) => {
            draft
                .validate()
                .map_err(|err| CliError::usage(err.to_string()))?;
            let category = client
                .create_category(&draft.to_category())
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            println!("Created category {} ({})", category.name, category.slug);
        }
        CliAction::CategoryChange { id, draft } => {
            draft
                .validate()
                .map_err(|err| CliError::usage(err.to_string()))?;
            let category = client
                .update_category(id, &draft.to_category())
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            println!("Updated category {} ({})", category.name, category.slug);
        }
        CliAction::CategoryDelete { id } => {
            let receipt = client
                .delete_category(id)
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            println!("{}", receipt.message);
        }
        CliAction::ChangelogList(params) => {
            let envelope = client
                .list_changelog(&params)
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            print_changelog_list(&envelope);
        }
        CliAction::ChangelogShow { id } => {
            let entry = client
                .changelog_by_id(id)
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            print_changelog_entry(&entry);
        }
        CliAction::ChangelogDelete { id } => {
            let receipt = client
                .delete_changelog(id)
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            println!("{}", receipt.message);
        }
        CliAction::ChangelogStatus { id, status } => {
            let change = client
                .set_changelog_status(id, status)
                .await
                .map_err(|err| CliError::request(err.to_string()))?;
            println!("Entry {} is now {}", change.id, change.status.as_str());
        }
    }
    Ok(0)
}

fn lifecycle_error(err: LifecycleError) -> CliError {
    match err {
        LifecycleError::Validation(message) => CliError::usage(message),
        other => CliError::request(other.to_string()),
    }
}

fn print_receipt(receipt: &OperationReceipt) {
    println!("{}", receipt.message);
    println!("Affected posts: {}", receipt.affected);
}

fn print_tag_list(tags: &mut [TagCount]) {
    // Most used first, the way the tag overview presents them.
    tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    let name_header = "Name";
    let mut name_width = name_header.len();
    for tag in tags.iter() {
        name_width = name_width.max(tag.name.chars().count());
    }
    println!("{:<width$}  {}", name_header, "Posts", width = name_width);
    for tag in tags.iter() {
        println!("{:<width$}  {}", tag.name, tag.count, width = name_width);
    }
}

fn print_post_list(envelope: &ApiEnvelope<Vec<BlogPost>>) {
    let slug_header = "Slug";
    let mut slug_width = slug_header.len();
    for post in &envelope.data {
        slug_width = slug_width.max(post.slug.chars().count());
    }
    println!("{:>6}  {:<width$}  {}", "Id", slug_header, "Title", width = slug_width);
    for post in &envelope.data {
        let id = post.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        println!(
            "{:>6}  {:<width$}  {}",
            id,
            post.slug,
            post.title,
            width = slug_width
        );
    }
    print_pagination(envelope.pagination.as_ref(), "posts");
}

fn print_post(post: &BlogPost) {
    if let Some(id) = post.id {
        println!("Id: {}", id);
    }
    println!("Slug: {}", post.slug);
    println!("Title: {}", post.title);
    if let Some(author) = &post.author {
        println!("Author: {}", author.name);
    }
    if let Some(category) = &post.category {
        println!("Category: {}", category.name);
    }
    println!("Date: {}", post.date);
    println!("Read time: {}", post.read_time);
    if !post.tags.is_empty() {
        println!("Tags: {}", post.tags.join(", "));
    }
    println!("Summary: {}", post.summary);
}

fn print_author_list(authors: &[BlogAuthor]) {
    let slug_header = "Slug";
    let mut slug_width = slug_header.len();
    for author in authors {
        slug_width = slug_width.max(author.slug.chars().count());
    }
    println!("{:>6}  {:<width$}  {}", "Id", slug_header, "Name", width = slug_width);
    for author in authors {
        let id = author.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        println!(
            "{:>6}  {:<width$}  {}",
            id,
            author.slug,
            author.name,
            width = slug_width
        );
    }
}

fn print_category_list(categories: &[BlogCategory]) {
    let slug_header = "Slug";
    let mut slug_width = slug_header.len();
    for category in categories {
        slug_width = slug_width.max(category.slug.chars().count());
    }
    println!("{:>6}  {:<width$}  {}", "Id", slug_header, "Name", width = slug_width);
    for category in categories {
        let id = category
            .id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        println!(
            "{:>6}  {:<width$}  {}",
            id,
            category.slug,
            category.name,
            width = slug_width
        );
    }
}

fn print_changelog_list(envelope: &ApiEnvelope<Vec<ChangelogEntry>>) {
    let version_header = "Version";
    let mut version_width = version_header.len();
    for entry in &envelope.data {
        version_width = version_width.max(entry.version.chars().count());
    }
    println!(
        "{:>6}  {:<width$}  {:<10}  {}",
        "Id",
        version_header,
        "Date",
        "Title",
        width = version_width
    );
    for entry in &envelope.data {
        let id = entry.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        println!(
            "{:>6}  {:<width$}  {:<10}  {}",
            id,
            entry.version,
            entry.date,
            entry.title,
            width = version_width
        );
    }
    print_pagination(envelope.pagination.as_ref(), "entries");
}

fn print_changelog_entry(entry: &ChangelogEntry) {
    if let Some(id) = entry.id {
        println!("Id: {}", id);
    }
    println!("Version: {}", entry.version);
    println!("Date: {}", entry.date);
    println!("Title: {}", entry.title);
    if let Some(status) = entry.status {
        println!("Status: {}", status.as_str());
    }
    println!("Summary: {}", entry.summary);
    if !entry.improvements.is_empty() {
        println!("Improvements:");
        for item in &entry.improvements {
            println!("  - {}", item);
        }
    }
    if !entry.fixes.is_empty() {
        println!("Fixes:");
        for item in &entry.fixes {
            println!("  - {}", item);
        }
    }
}

fn print_pagination(pagination: Option<&Pagination>, noun: &str) {
    if let Some(pagination) = pagination {
        println!(
            "Page {} of {} ({} {})",
            pagination.current_page, pagination.total_pages, pagination.total_items, noun
        );
    }
}
