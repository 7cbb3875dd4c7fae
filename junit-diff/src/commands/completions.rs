// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgAction, ArgMatches};
use clap_complete::Shell;

use crate::command::Command;
use crate::commands::{APP_NAME, COMPLETIONS, SHELL, SUCCESS_STATUS_CODE};
use crate::diff::errors::Error;
use crate::diff::Result;
use crate::utils::get_diff_commands;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Completions {}

#[allow(clippy::new_without_default)]
impl Completions {
    pub fn new() -> Self {
        Completions {}
    }
}

impl Command for Completions {
    fn name(&self) -> &'static str {
        COMPLETIONS
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(COMPLETIONS)
            .about("Generates a shell completion script for junit-diff.")
            .arg(
                Arg::new(SHELL.0)
                    .long(SHELL.0)
                    .short(SHELL.1)
                    .help("the shell you are currently running")
                    .value_parser(clap::value_parser!(Shell))
                    .action(ArgAction::Set)
                    .required(true),
            )
    }

    fn execute(&self, app: &ArgMatches, writer: &mut Writer, _: &mut Reader) -> Result<i32> {
        let shell = match app.get_one::<Shell>(SHELL.0) {
            Some(shell) => *shell,
            None => {
                return Err(Error::IllegalArguments(String::from(
                    "a shell is required to generate completions",
                )))
            }
        };

        let mut app = crate::commands::app(&get_diff_commands());
        clap_complete::generate(shell, &mut app, APP_NAME, writer);

        Ok(SUCCESS_STATUS_CODE)
    }
}
