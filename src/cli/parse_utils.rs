// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::cli::CliError;

/// Pop the leading positional argument; flags do not qualify.
pub(crate) fn parse_required_arg<'a>(
    args: &'a [String],
    label: &str,
) -> Result<(String, &'a [String]), CliError> {
    match args.split_first() {
        Some((first, rest)) if !first.starts_with("--") => Ok((first.clone(), rest)),
        _ => Err(CliError::usage(format!("Missing {}", label))),
    }
}

/// Consume the value following a flag.
pub(crate) fn next_value(
    args: &[String],
    idx: &mut usize,
    flag: &str,
) -> Result<String, CliError> {
    match args.get(*idx) {
        Some(value) => {
            *idx += 1;
            Ok(value.clone())
        }
        None => Err(CliError::usage(format!("Missing value for {}", flag))),
    }
}

pub(crate) fn parse_id(value: &str, label: &str) -> Result<i64, CliError> {
    value
        .parse()
        .map_err(|_| CliError::usage(format!("{} must be a number", label)))
}

pub(crate) fn parse_count(value: &str, flag: &str) -> Result<u32, CliError> {
    value
        .parse()
        .map_err(|_| CliError::usage(format!("{} expects a number", flag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_arg_rejects_flags_and_absence() {
        let args = vec!["--to".to_string()];
        assert!(parse_required_arg(&args, "tag name").is_err());
        assert!(parse_required_arg(&[], "tag name").is_err());

        let args = vec!["api".to_string(), "--to".to_string()];
        let (first, rest) = parse_required_arg(&args, "tag name").unwrap();
        assert_eq!(first, "api");
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn next_value_advances_index() {
        let args = vec!["value".to_string()];
        let mut idx = 0;
        assert_eq!(next_value(&args, &mut idx, "--to").unwrap(), "value");
        assert_eq!(idx, 1);
        assert!(next_value(&args, &mut idx, "--to").is_err());
    }

    #[test]
    fn id_parsing_reports_the_label() {
        let err = parse_id("abc", "post id").unwrap_err();
        assert!(err.to_string().contains("post id"));
        assert_eq!(parse_id("42", "post id").unwrap(), 42);
    }
}
