// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches};
use colored::Colorize;
use tracing::info;

use crate::command::Command;
use crate::commands::{
    AFTER, BEFORE, COMPACT, DIFF, ERROR_STATUS_CODE, FAILURE_STATUS_CODE, FAIL_ON_REGRESSION,
    OUTPUT, SHOW_SUMMARY, STDIN, SUCCESS_STATUS_CODE, VERBOSE,
};
use crate::diff::errors::Error;
use crate::diff::Result;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;
use crate::{diff_reports, logging, DiffInput, DiffOptions};

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Diff {}

#[allow(clippy::new_without_default)]
impl Diff {
    pub fn new() -> Self {
        Diff {}
    }
}

impl Command for Diff {
    fn name(&self) -> &'static str {
        DIFF
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(DIFF)
            .about("Reports the tests that fail in the later report but not in the earlier one.")
            .arg(
                Arg::new(BEFORE)
                    .help("The earlier JUnit report, `-` reads it from stdin")
                    .action(ArgAction::Set)
                    .required(true),
            )
            .arg(
                Arg::new(AFTER)
                    .help("The later JUnit report, `-` reads it from stdin")
                    .action(ArgAction::Set)
                    .required(true),
            )
            .arg(
                Arg::new(OUTPUT.0)
                    .long(OUTPUT.0)
                    .short(OUTPUT.1)
                    .help("Write the report to a file instead of stdout")
                    .action(ArgAction::Set)
                    .required(false),
            )
            .arg(
                Arg::new(COMPACT.0)
                    .long(COMPACT.0)
                    .short(COMPACT.1)
                    .action(ArgAction::SetTrue)
                    .help("Write the report without indentation"),
            )
            .arg(
                Arg::new(FAIL_ON_REGRESSION.0)
                    .long(FAIL_ON_REGRESSION.0)
                    .short(FAIL_ON_REGRESSION.1)
                    .action(ArgAction::SetTrue)
                    .help(format!(
                        "Exit with status {FAILURE_STATUS_CODE} when at least one test newly fails"
                    )),
            )
            .arg(
                Arg::new(SHOW_SUMMARY.0)
                    .long(SHOW_SUMMARY.0)
                    .short(SHOW_SUMMARY.1)
                    .action(ArgAction::SetTrue)
                    .help("Print a one line summary of the comparison to stderr"),
            )
            .arg(
                Arg::new(VERBOSE.0)
                    .long(VERBOSE.0)
                    .short(VERBOSE.1)
                    .action(ArgAction::SetTrue)
                    .help("Log how suites and test cases were matched to stderr"),
            )
            .arg_required_else_help(true)
    }

    fn execute(&self, app: &ArgMatches, writer: &mut Writer, reader: &mut Reader) -> Result<i32> {
        logging::init(app.get_flag(VERBOSE.0));

        let before = required_path(app, BEFORE)?;
        let after = required_path(app, AFTER)?;
        if before == STDIN && after == STDIN {
            return Err(Error::IllegalArguments(String::from(
                "only one of the reports can be read from stdin",
            )));
        }

        let before_content = read_report(before, reader)?;
        let after_content = read_report(after, reader)?;
        let options = DiffOptions {
            compact: app.get_flag(COMPACT.0),
        };

        let diff = match diff_reports(
            DiffInput {
                content: &before_content,
                file_name: before,
            },
            DiffInput {
                content: &after_content,
                file_name: after,
            },
        ) {
            Ok(diff) => diff,
            Err(e) if e.is_tests_gone() => {
                writer.write_err(format!("{}", "Tests are gone!".red().bold()))?;
                writer.write_err(e.to_string())?;
                return Ok(ERROR_STATUS_CODE);
            }
            Err(e) => return Err(e),
        };

        info!(before, after, summary = %diff.summary, "compared reports");

        match app.get_one::<String>(OUTPUT.0) {
            Some(file) => diff.report.serialize(File::create(file)?, !options.compact)?,
            None => diff.report.serialize(&mut *writer, !options.compact)?,
        }

        if app.get_flag(SHOW_SUMMARY.0) {
            writer.write_err(format!("{APP_SUMMARY_PREFIX}{}", diff.summary))?;
        }

        if app.get_flag(FAIL_ON_REGRESSION.0) && diff.summary.regressions > 0 {
            return Ok(FAILURE_STATUS_CODE);
        }

        Ok(SUCCESS_STATUS_CODE)
    }
}

const APP_SUMMARY_PREFIX: &str = "junit-diff summary: ";

fn required_path<'args>(app: &'args ArgMatches, name: &str) -> Result<&'args str> {
    match app.get_one::<String>(name) {
        Some(path) => Ok(path.as_str()),
        None => Err(Error::IllegalArguments(format!("missing the {name} report"))),
    }
}

fn read_report(path: &str, reader: &mut Reader) -> Result<String> {
    if path == STDIN {
        return reader.read_content();
    }

    if !Path::new(path).exists() {
        return Err(Error::FileNotFoundError(path.to_string()));
    }

    let mut content = String::new();
    BufReader::new(File::open(path)?).read_to_string(&mut content)?;
    Ok(content)
}
