// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::api::{ChangelogListParams, EntryStatus};
use crate::cli::parse_utils::{next_value, parse_count, parse_id, parse_required_arg};
use crate::cli::{CliAction, CliError, CommandSpec, DomainSpec};

pub fn domain() -> DomainSpec {
    DomainSpec {
        name: "changelog",
        aliases: &["cl"],
        commands: vec![
            CommandSpec {
                name: "list",
                usage: &["changelog list [--page <n>] [--limit <n>] [--search <text>]"],
                parser: parse_list,
            },
            CommandSpec {
                name: "show",
                usage: &["changelog show <id>"],
                parser: parse_show,
            },
            CommandSpec {
                name: "delete",
                usage: &["changelog delete <id>"],
                parser: parse_delete,
            },
            CommandSpec {
                name: "status",
                usage: &["changelog status <id> <draft|published>"],
                parser: parse_status,
            },
        ],
    }
}

fn parse_list(args: &[String]) -> Result<CliAction, CliError> {
    let mut params = ChangelogListParams::default();

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
            flag => {
                return Err(CliError::usage(format!(
                    "Unknown flag for changelog list: {}",
                    flag
                )));
            }
        }
    }

    Ok(CliAction::ChangelogList(params))
}

fn parse_show(args: &[String]) -> Result<CliAction, CliError> {
    let (raw, rest) = parse_required_arg(args, "entry id")?;
    if !rest.is_empty() {
        return Err(CliError::usage("changelog show takes only <id>"));
    }
    Ok(CliAction::ChangelogShow {
        id: parse_id(&raw, "entry id")?,
    })
}

fn parse_delete(args: &[String]) -> Result<CliAction, CliError> {
    let (raw, rest) = parse_required_arg(args, "entry id")?;
    if !rest.is_empty() {
        return Err(CliError::usage("changelog delete takes only <id>"));
    }
    Ok(CliAction::ChangelogDelete {
        id: parse_id(&raw, "entry id")?,
    })
}

fn parse_status(args: &[String]) -> Result<CliAction, CliError> {
    let (raw_id, rest) = parse_required_arg(args, "entry id")?;
    let (raw_status, rest) = parse_required_arg(rest, "status")?;
    if !rest.is_empty() {
        return Err(CliError::usage(
            "changelog status takes only <id> and <draft|published>",
        ));
    }
    let status = match raw_status.to_ascii_lowercase().as_str() {
        "draft" => EntryStatus::Draft,
        "published" => EntryStatus::Published,
        _ => {
            return Err(CliError::usage(
                "Status must be either 'draft' or 'published'",
            ));
        }
    };
    Ok(CliAction::ChangelogStatus {
        id: parse_id(&raw_id, "entry id")?,
        status,
    })
}
