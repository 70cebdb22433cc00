// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::api::BlogListParams;
use crate::cli::parse_utils::{next_value, parse_count, parse_id, parse_required_arg};
use crate::cli::{CliAction, CliError, CommandSpec, DomainSpec};

pub fn domain() -> DomainSpec {
    DomainSpec {
        name: "post",
        aliases: &["p"],
        commands: vec![
            CommandSpec {
                name: "list",
                usage: &[
                    "post list [--page <n>] [--limit <n>] [--search <text>] [--tag <tag> ...] [--category <slug> ...] [--author <slug>]",
                ],
                parser: parse_list,
            },
            CommandSpec {
                name: "show",
                usage: &["post show <id>"],
                parser: parse_show,
            },
            CommandSpec {
                name: "delete",
                usage: &["post delete <id>"],
                parser: parse_delete,
            },
            CommandSpec {
                name: "bulk-delete",
                usage: &["post bulk-delete <id> [<id> ...]"],
                parser: parse_bulk_delete,
            },
        ],
    }
}

fn parse_list(args: &[String]) -> Result<CliAction, CliError> {
    let mut params = BlogListParams::default();

    let mut idx = 0;
    while idx < args.len() {
        match args[idx].as_str() {
            "--page" => {
                idx += 1;
                let raw = next_value(args, &mut idx, "--page")?;
                params.page = Some(parse_count(&raw, "--page")?);
            }
            "--limit" => {
                idx += 1;
                let raw = next_value(args, &mut idx, "--limit")?;
                params.limit = Some(parse_count(&raw, "--limit")?);
            }
            "--search" => {
                idx += 1;
                params.search = Some(next_value(args, &mut idx, "--search")?);
            }
            "--tag" => {
                idx += 1;
                params.tags.push(next_value(args, &mut idx, "--tag")?);
            }
            "--category" => {
                idx += 1;
                params
                    .categories
                    .push(next_value(args, &mut idx, "--category")?);
            }
            "--author" => {
                idx += 1;
                params.author = Some(next_value(args, &mut idx, "--author")?);
            }
            flag => {
                return Err(CliError::usage(format!(
                    "Unknown flag for post list: {}",
                    flag
                )));
            }
        }
    }

    Ok(CliAction::PostList(params))
}

fn parse_show(args: &[String]) -> Result<CliAction, CliError> {
    let (raw, rest) = parse_required_arg(args, "post id")?;
    if !rest.is_empty() {
        return Err(CliError::usage("post show takes only <id>"));
    }
    Ok(CliAction::PostShow {
        id: parse_id(&raw, "post id")?,
    })
}

fn parse_delete(args: &[String]) -> Result<CliAction, CliError> {
    let (raw, rest) = parse_required_arg(args, "post id")?;
    if !rest.is_empty() {
        return Err(CliError::usage("post delete takes only <id>"));
    }
    Ok(CliAction::PostDelete {
        id: parse_id(&raw, "post id")?,
    })
}

fn parse_bulk_delete(args: &[String]) -> Result<CliAction, CliError> {
    if args.is_empty() {
        return Err(CliError::usage("post bulk-delete requires at least one id"));
    }
    let mut ids = Vec::with_capacity(args.len());
    for raw in args {
        ids.push(parse_id(raw, "post id")?);
    }
    Ok(CliAction::PostBulkDelete { ids })
}
