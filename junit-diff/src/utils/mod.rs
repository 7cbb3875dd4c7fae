// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::{command::Command, commands};

pub mod reader;
pub mod writer;

pub fn get_diff_commands() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(commands::diff::Diff::new()),
        Box::new(commands::completions::Completions::new()),
    ]
}
