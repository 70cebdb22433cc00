// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::cli::parse_utils::{next_value, parse_id, parse_required_arg};
use crate::cli::{CliAction, CliError, CommandSpec, DomainSpec};
use crate::forms::AuthorDraft;

pub fn domain() -> DomainSpec {
    DomainSpec {
        name: "author",
        aliases: &["a"],
        commands: vec![
            CommandSpec {
                name: "list",
                usage: &["author list"],
                parser: parse_list,
            },
            CommandSpec {
                name: "add",
                usage: &["author add --slug <slug> --name <name> [--bio <text>] [--avatar <url>]"],
                parser: parse_add,
            },
            CommandSpec {
                name: "change",
                usage: &[
                    "author change <id> --slug <slug> --name <name> [--bio <text>] [--avatar <url>]",
                ],
                parser: parse_change,
            },
            CommandSpec {
                name: "delete",
                usage: &["author delete <id>"],
                parser: parse_delete,
            },
        ],
    }
}

fn parse_list(args: &[String]) -> Result<CliAction, CliError> {
    if !args.is_empty() {
        return Err(CliError::usage("author list does not take any arguments"));
    }
    Ok(CliAction::AuthorList)
}

fn parse_draft(args: &[String], command: &str) -> Result<AuthorDraft, CliError> {
    let mut draft = AuthorDraft::default();

    let mut idx = 0;
    while idx < args.len() {
        match args[idx].as_str() {
            "--slug" => {
                idx += 1;
                draft.slug = next_value(args, &mut idx, "--slug")?;
            }
            "--name" => {
                idx += 1;
                draft.name = next_value(args, &mut idx, "--name")?;
            }
            "--bio" => {
                idx += 1;
                draft.bio = next_value(args, &mut idx, "--bio")?;
            }
            "--avatar" => {
                idx += 1;
                draft.avatar = next_value(args, &mut idx, "--avatar")?;
            }
            flag => {
                return Err(CliError::usage(format!(
                    "Unknown flag for {}: {}",
                    command, flag
                )));
            }
        }
    }

    Ok(draft)
}

fn parse_add(args: &[String]) -> Result<CliAction, CliError> {
    Ok(CliAction::AuthorAdd(parse_draft(args, "author add")?))
}

fn parse_change(args: &[String]) -> Result<CliAction, CliError> {
    let (raw, rest) = parse_required_arg(args, "author id")?;
    Ok(CliAction::AuthorChange {
        id: parse_id(&raw, "author id")?,
        draft: parse_draft(rest, "author change")?,
    })
}

fn parse_delete(args: &[String]) -> Result<CliAction, CliError> {
    let (raw, rest) = parse_required_arg(args, "author id")?;
    if !rest.is_empty() {
        return Err(CliError::usage("author delete takes only <id>"));
    }
    Ok(CliAction::AuthorDelete {
        id: parse_id(&raw, "author id")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_collects_fields() {
        let args = vec![
            "--slug".to_string(),
            "jane-doe".to_string(),
            "--name".to_string(),
            "Jane Doe".to_string(),
        ];
        match parse_add(&args).expect("parse add") {
            CliAction::AuthorAdd(draft) => {
                assert_eq!(draft.slug, "jane-doe");
                assert_eq!(draft.name, "Jane Doe");
            }
            other => panic!("Expected author add action, got {:?}", other),
        }
    }

    #[test]
    fn change_requires_id_first() {
        let args = vec!["--slug".to_string(), "x".to_string()];
        assert!(parse_change(&args).is_err());
    }
}
