// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::diff::errors::Error;
use crate::diff::walker::{name_of, Step, Walker};
use crate::diff::{
    CaseOutcome, ComparisonResult, Level, Result, Status, FAILURE, TESTSUITES, TIME,
};
use crate::xml::{Document, Element};

/// Finds the `testsuites` container of a parsed report.
pub fn locate_report<'report>(
    document: &'report Document,
    file_name: &str,
) -> Result<&'report Element> {
    document
        .locate_container(TESTSUITES)
        .ok_or_else(|| Error::MissingContainer(file_name.to_string()))
}

/// Compares the suites of two report containers.
///
/// Fails with [`Error::TestsGone`] when the first suite of the earlier report
/// (or the first case of that suite) is missing from the later report. Once a
/// sibling has been compared, a missing element only stops the walk of its
/// level and the remaining tail is left out of the result.
pub fn compare_reports<'report>(
    before: &'report Element,
    after: &'report Element,
) -> Result<ComparisonResult<'report>> {
    let suites = compare_level(Level::Suite, Some(before), after, true, |before, after| {
        let baseline = before.is_some();
        if !baseline {
            debug!(suite = name_of(after), "suite has no counterpart in the earlier report");
        }
        compare_level(Level::Case, before, after, baseline, |before, case| {
            Ok(classify(baseline, before, case))
        })
    })?;

    Ok(ComparisonResult { suites })
}

fn compare_level<'report, T>(
    level: Level,
    before: Option<&'report Element>,
    after: &'report Element,
    baseline: bool,
    mut compare_child: impl FnMut(Option<&'report Element>, &'report Element) -> Result<T>,
) -> Result<IndexMap<&'report str, T>> {
    let mut results = IndexMap::new();
    let mut walker = Walker::new(level, before, after);
    let mut handled = false;

    loop {
        let (before, after) = match walker.advance(baseline) {
            Step::Exhausted => break,
            Step::Vanished { name } if !handled => {
                return Err(Error::TestsGone {
                    level,
                    name: name.to_string(),
                })
            }
            Step::Vanished { name } => {
                warn!(%level, name, "missing from the later report, skipping the rest of this level");
                break;
            }
            Step::Paired { before, after } => (before, after),
        };

        let name = name_of(after);
        match compare_child(before, after) {
            Ok(child) => {
                if name.is_empty() {
                    debug!(%level, "element without a name is not reported");
                } else {
                    results.insert(name, child);
                }
            }
            Err(error) if handled && error.is_tests_gone() => {
                warn!(%level, name, %error, "skipping the rest of this level");
                break;
            }
            Err(error) => return Err(error),
        }

        walker.consume_after();
        handled = true;
    }

    Ok(results)
}

/// Classifies one later-report case. Without a `baseline` suite nothing can
/// be new, a failure only means the case is still failing. Inside a suite
/// with a baseline, a case missing from the earlier report counts as
/// previously passing.
fn classify<'report>(
    baseline: bool,
    before: Option<&'report Element>,
    after: &'report Element,
) -> CaseOutcome<'report> {
    let failed_before = before.and_then(|case| case.first_descendant(FAILURE)).is_some();
    let evidence = after.first_descendant(FAILURE);

    let status = match (evidence, baseline, failed_before) {
        (None, _, _) => Status::Passing,
        (Some(_), false, _) | (Some(_), true, true) => Status::StillFailing,
        (Some(_), true, false) => Status::NewFailure,
    };
    debug!(case = name_of(after), ?status, "classified");

    CaseOutcome {
        time: after.attribute(TIME).unwrap_or_default(),
        status,
        evidence,
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod compare_tests;
