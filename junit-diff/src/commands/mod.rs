// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod completions;
pub mod diff;

use crate::command::Command;

//
// Constants
//
// Application metadata
pub const APP_NAME: &str = "junit-diff";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
// Commands
pub const DIFF: &str = "diff";
pub const COMPLETIONS: &str = "completions";
// Arguments for diff
pub const BEFORE: &str = "before";
pub const AFTER: &str = "after";
pub const OUTPUT: (&str, char) = ("output", 'o');
pub const COMPACT: (&str, char) = ("compact", 'c');
pub const FAIL_ON_REGRESSION: (&str, char) = ("fail-on-regression", 'f');
pub const SHOW_SUMMARY: (&str, char) = ("show-summary", 'S');
pub const VERBOSE: (&str, char) = ("verbose", 'v');
// Arguments for completions
pub const SHELL: (&str, char) = ("shell", 's');
// A report path of `-` is read from stdin
pub const STDIN: &str = "-";

pub const SUCCESS_STATUS_CODE: i32 = 0;
pub const ERROR_STATUS_CODE: i32 = 5;
pub const FAILURE_STATUS_CODE: i32 = 19;

const ABOUT: &str = r#"
  junit-diff compares two JUnit XML reports, an earlier one and a later one, and
  writes a JUnit XML report that only fails on regressions: tests that passed (or
  did not exist) in the earlier report and fail in the later one. Tests failing in
  both reports are reported as skipped."#;

/// Top level clap command with every subcommand registered.
pub fn app(commands: &[Box<dyn Command>]) -> clap::Command {
    commands.iter().fold(
        clap::Command::new(APP_NAME)
            .version(APP_VERSION)
            .about(ABOUT)
            .arg_required_else_help(true),
        |app, each| app.subcommand(each.command()),
    )
}

// Arguments handled by the top level command itself
const TOP_LEVEL_ARGS: [&str; 5] = ["help", "-h", "--help", "-V", "--version"];

/// `junit-diff [OPTIONS] <before> <after>` without a subcommand name runs
/// `diff`, options may come before the paths.
pub fn with_default_subcommand(mut args: Vec<String>, known: &[&str]) -> Vec<String> {
    let needs_default = match args.get(1) {
        Some(first) => {
            !known.contains(&first.as_str()) && !TOP_LEVEL_ARGS.contains(&first.as_str())
        }
        None => false,
    };
    if needs_default {
        args.insert(1, String::from(DIFF));
    }
    args
}
