// This file is part of the product Copydesk.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use copydesk::cli;
use std::path::PathBuf;

#[derive(Debug)]
enum RunMode {
    Help,
    Command(Vec<String>),
}

#[derive(Debug)]
struct ParsedArgs {
    runtime_root: PathBuf,
    mode: RunMode,
}

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to choose the directory holding config.yaml.");
            return 2;
        }
    };

    match parsed_args.mode {
        RunMode::Help => {
            print!("{}", cli::help_text());
            0
        }
        RunMode::Command(tokens) => {
            System::new().block_on(cli::run_cli(&parsed_args.runtime_root, tokens))
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<ParsedArgs, String> {
    let mut runtime_root = PathBuf::from(".");
    let mut tokens = Vec::new();
    let mut help = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-C" => match args.next() {
                Some(root) => runtime_root = PathBuf::from(root),
                None => return Err("-C requires a directory".to_string()),
            },
            "-h" | "--help" | "help" => help = true,
            _ => tokens.push(arg),
        }
    }

    let mode = if help || tokens.is_empty() {
        RunMode::Help
    } else {
        RunMode::Command(tokens)
    };

    Ok(ParsedArgs { runtime_root, mode })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ParsedArgs {
        parse_args(args.iter().map(|arg| arg.to_string())).expect("parse args")
    }

    #[test]
    fn no_arguments_means_help() {
        assert!(matches!(parse(&[]).mode, RunMode::Help));
        assert!(matches!(parse(&["--help"]).mode, RunMode::Help));
    }

    #[test]
    fn root_flag_sets_runtime_root() {
        let parsed = parse(&["-C", "/tmp/desk", "tag", "list"]);
        assert_eq!(parsed.runtime_root, PathBuf::from("/tmp/desk"));
        match parsed.mode {
            RunMode::Command(tokens) => assert_eq!(tokens, vec!["tag", "list"]),
            RunMode::Help => panic!("Expected command mode"),
        }
    }

    #[test]
    fn missing_root_value_is_an_error() {
        let err = parse_args(["-C".to_string()].into_iter()).unwrap_err();
        assert!(err.contains("-C"));
    }
}
