// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::cli::parse_utils::{next_value, parse_required_arg};
use crate::cli::{CliAction, CliError, CommandSpec, DomainSpec};
use crate::tags::{DeleteOperation, MergeOperation, RenameOperation};

pub fn domain() -> DomainSpec {
    DomainSpec {
        name: "tag",
        aliases: &["t"],
        commands: vec![
            CommandSpec {
                name: "list",
                usage: &["tag list"],
                parser: parse_list,
            },
            CommandSpec {
                name: "suggest",
                usage: &["tag suggest <query> [--limit <n>]"],
                parser: parse_suggest,
            },
            CommandSpec {
                name: "rename",
                usage: &["tag rename <from> --to <name>"],
                parser: parse_rename,
            },
            CommandSpec {
                name: "merge",
                usage: &["tag merge <source> [<source> ...] --into <name>"],
                parser: parse_merge,
            },
            CommandSpec {
                name: "delete",
                usage: &["tag delete <name> --confirm <name>"],
                parser: parse_delete,
            },
        ],
    }
}

fn parse_list(args: &[String]) -> Result<CliAction, CliError> {
    if !args.is_empty() {
        return Err(CliError::usage("tag list does not take any arguments"));
    }
    Ok(CliAction::TagList)
}

fn parse_suggest(args: &[String]) -> Result<CliAction, CliError> {
    let (query, rest) = parse_required_arg(args, "suggestion query")?;
    let mut limit = None;

    let mut idx = 0;
    while idx < rest.len() {
        match rest[idx].as_str() {
            "--limit" => {
                idx += 1;
                let raw = next_value(rest, &mut idx, "--limit")?;
                let parsed: usize = raw
                    .parse()
                    .map_err(|_| CliError::usage("--limit expects a number"))?;
                limit = Some(parsed);
            }
            flag => {
                return Err(CliError::usage(format!(
                    "Unknown flag for tag suggest: {}",
                    flag
                )));
            }
        }
    }

    Ok(CliAction::TagSuggest { query, limit })
}

fn parse_rename(args: &[String]) -> Result<CliAction, CliError> {
    let (from, rest) = parse_required_arg(args, "tag name")?;
    let mut to = None;

    let mut idx = 0;
    while idx < rest.len() {
        match rest[idx].as_str() {
            "--to" => {
                idx += 1;
                to = Some(next_value(rest, &mut idx, "--to")?);
            }
            flag => {
                return Err(CliError::usage(format!(
                    "Unknown flag for tag rename: {}",
                    flag
                )));
            }
        }
    }

    let to = to.ok_or_else(|| CliError::usage("tag rename requires --to"))?;
    Ok(CliAction::TagRename(RenameOperation { from, to }))
}

fn parse_merge(args: &[String]) -> Result<CliAction, CliError> {
    let mut sources = Vec::new();
    let mut into = None;

    let mut idx = 0;
    while idx < args.len() {
        match args[idx].as_str() {
            "--into" => {
                idx += 1;
                into = Some(next_value(args, &mut idx, "--into")?);
            }
            flag if flag.starts_with("--") => {
                return Err(CliError::usage(format!(
                    "Unknown flag for tag merge: {}",
                    flag
                )));
            }
            source => {
                sources.push(source.to_string());
                idx += 1;
            }
        }
    }

    if sources.is_empty() {
        return Err(CliError::usage("tag merge requires at least one source tag"));
    }
    let into = into.ok_or_else(|| CliError::usage("tag merge requires --into"))?;
    Ok(CliAction::TagMerge(MergeOperation { sources, into }))
}

fn parse_delete(args: &[String]) -> Result<CliAction, CliError> {
    let (tag, rest) = parse_required_arg(args, "tag name")?;
    let mut confirmation = String::new();

    let mut idx = 0;
    while idx < rest.len() {
        match rest[idx].as_str() {
            "--confirm" => {
                idx += 1;
                confirmation = next_value(rest, &mut idx, "--confirm")?;
            }
            flag => {
                return Err(CliError::usage(format!(
                    "Unknown flag for tag delete: {}",
                    flag
                )));
            }
        }
    }

    // A missing or mismatched --confirm is rejected by the operation's
    // own validation, with the exact text to type.
    Ok(CliAction::TagDelete(DeleteOperation { tag, confirmation }))
}
