// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::cli::parse_utils::{next_value, parse_id, parse_required_arg};
use crate::cli::{CliAction, CliError, CommandSpec, DomainSpec};
use crate::forms::CategoryDraft;

pub fn domain() -> DomainSpec {
    DomainSpec {
        name: "category",
        aliases: &["c"],
        commands: vec![
            CommandSpec {
                name: "list",
                usage: &["category list"],
                parser: parse_list,
            },
            CommandSpec {
                name: "add",
                usage: &["category add --slug <slug> --name <name> [--description <text>]"],
                parser: parse_add,
            },
            CommandSpec {
                name: "change",
                usage: &[
                    "category change <id> --slug <slug> --name <name> [--description <text>]",
                ],
                parser: parse_change,
            },
            CommandSpec {
                name: "delete",
                usage: &["category delete <id>"],
                parser: parse_delete,
            },
        ],
    }
}

fn parse_list(args: &[String]) -> Result<CliAction, CliError> {
    if !args.is_empty() {
        return Err(CliError::usage("category list does not take any arguments"));
    }
    Ok(CliAction::CategoryList)
}

fn parse_draft(args: &[String], command: &str) -> Result<CategoryDraft, CliError> {
    let mut draft = CategoryDraft::default();

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
            "--description" => {
                idx += 1;
                draft.description = next_value(args, &mut idx, "--description")?;
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
    Ok(CliAction::CategoryAdd(parse_draft(args, "category add")?))
}

fn parse_change(args: &[String]) -> Result<CliAction, CliError> {
    let (raw, rest) = parse_required_arg(args, "category id")?;
    Ok(CliAction::CategoryChange {
        id: parse_id(&raw, "category id")?,
        draft: parse_draft(rest, "category change")?,
    })
}

fn parse_delete(args: &[String]) -> Result<CliAction, CliError> {
    let (raw, rest) = parse_required_arg(args, "category id")?;
    if !rest.is_empty() {
        return Err(CliError::usage("category delete takes only <id>"));
    }
    Ok(CliAction::CategoryDelete {
        id: parse_id(&raw, "category id")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_collects_fields() {
        let args = vec![
            "--slug".to_string(),
            "news".to_string(),
            "--name".to_string(),
            "News".to_string(),
            "--description".to_string(),
            "Product news".to_string(),
        ];
        match parse_add(&args).expect("parse add") {
            CliAction::CategoryAdd(draft) => {
                assert_eq!(draft.slug, "news");
                assert_eq!(draft.description, "Product news");
            }
            other => panic!("Expected category add action, got {:?}", other),
        }
    }

    #[test]
    fn unknown_flag_rejected() {
        let args = vec!["--color".to_string(), "red".to_string()];
        assert!(parse_add(&args).is_err());
    }
}
