// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod compare;
pub mod errors;
pub mod render;
pub(crate) mod walker;

use std::fmt::Formatter;

use colored::*;
use indexmap::IndexMap;

use crate::xml::Element;
use errors::Error;

pub type Result<R> = std::result::Result<R, Error>;

pub const TESTSUITES: &str = "testsuites";
pub const FAILURE: &str = "failure";
pub const SKIPPED: &str = "skipped";
pub const NAME: &str = "name";
pub const TIME: &str = "time";

/// The two nesting levels of a JUnit report below the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Suite,
    Case,
}

impl Level {
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Suite => "testsuite",
            Level::Case => "testcase",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Suite => f.write_str("test suite"),
            Level::Case => f.write_str("test case"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Passing,
    NewFailure,
    StillFailing,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Passing => write!(f, "{}", "PASS".green()),
            Status::NewFailure => write!(f, "{}", "NEW FAILURE".red()),
            Status::StillFailing => write!(f, "{}", "STILL FAILING".yellow()),
        }
    }
}

/// Outcome for one test case. Everything is borrowed from the later report.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome<'report> {
    pub time: &'report str,
    pub status: Status,
    pub evidence: Option<&'report Element>,
}

pub type CaseResults<'report> = IndexMap<&'report str, CaseOutcome<'report>>;

/// Suite name to case name to outcome, in the traversal order of the later
/// report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonResult<'report> {
    pub suites: IndexMap<&'report str, CaseResults<'report>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub tests: usize,
    pub passing: usize,
    pub regressions: usize,
    pub still_failing: usize,
}

impl Summary {
    fn record(&mut self, status: Status) {
        self.tests += 1;
        match status {
            Status::Passing => self.passing += 1,
            Status::NewFailure => self.regressions += 1,
            Status::StillFailing => self.still_failing += 1,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} tests, {} {}, {} {}, {} {}",
            self.tests,
            self.regressions,
            Status::NewFailure,
            self.still_failing,
            Status::StillFailing,
            self.passing,
            Status::Passing,
        )
    }
}

impl<'report> ComparisonResult<'report> {
    pub fn summary(&self) -> Summary {
        self.suites
            .values()
            .fold(Summary::default(), |summary, cases| {
                summary_of(cases.values(), summary)
            })
    }

    pub fn has_regressions(&self) -> bool {
        self.summary().regressions > 0
    }
}

pub(crate) fn summary_of<'a, 'report: 'a>(
    cases: impl Iterator<Item = &'a CaseOutcome<'report>>,
    initial: Summary,
) -> Summary {
    cases.fold(initial, |mut summary, case| {
        summary.record(case.status);
        summary
    })
}
