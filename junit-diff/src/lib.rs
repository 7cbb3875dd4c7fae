// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Compares two JUnit XML reports and produces a JUnit report that only
//! fails on regressions.
//!
//! Test cases are matched by position, anchored on the `name` attribute of
//! suites and cases. A case failing only in the later report keeps its
//! `failure` element, a case failing in both reports gets a `skipped` element
//! with the same attributes and content instead.

pub mod command;
pub mod commands;
pub mod diff;
pub mod logging;
pub mod utils;
pub mod xml;

use crate::diff::compare::{compare_reports, locate_report};
use crate::diff::render::render;
use crate::diff::Summary;
use crate::xml::{parse_document, Element};

pub use crate::diff::errors::Error;

#[derive(Debug, Clone, Copy)]
pub struct DiffInput<'input> {
    pub content: &'input str,
    pub file_name: &'input str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiffOptions {
    pub compact: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiffReport {
    pub report: Element,
    pub summary: Summary,
}

/// Parses both reports and renders the regression report.
pub fn diff_reports(before: DiffInput<'_>, after: DiffInput<'_>) -> diff::Result<DiffReport> {
    let before_document = parse_document(before.content, before.file_name)?;
    let after_document = parse_document(after.content, after.file_name)?;

    let result = compare_reports(
        locate_report(&before_document, before.file_name)?,
        locate_report(&after_document, after.file_name)?,
    )?;

    Ok(DiffReport {
        report: render(&result),
        summary: result.summary(),
    })
}

pub fn run_diff(
    before: DiffInput<'_>,
    after: DiffInput<'_>,
    options: &DiffOptions,
) -> diff::Result<String> {
    diff_reports(before, after)?
        .report
        .to_xml_string(!options.compact)
}
