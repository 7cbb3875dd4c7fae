// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::diff::{
    summary_of, CaseOutcome, ComparisonResult, Level, Status, Summary, NAME, SKIPPED, TESTSUITES,
    TIME,
};
use crate::xml::{Element, Node};

pub const REPORT_NAME: &str = "junit-diff";

/// Builds the regression report. New failures keep their `failure` element,
/// failures carried over from the earlier report become `skipped`. Either
/// one is attached verbatim, so indentation never reaches into it.
pub fn render(result: &ComparisonResult<'_>) -> Element {
    let mut root = Element::new(TESTSUITES);
    root.set_attribute(NAME, REPORT_NAME);
    set_counts(&mut root, &result.summary());

    for (suite_name, cases) in &result.suites {
        let mut suite = Element::new(Level::Suite.tag());
        suite.set_attribute(NAME, *suite_name);
        set_counts(&mut suite, &summary_of(cases.values(), Summary::default()));

        for (case_name, outcome) in cases {
            suite.append_element(render_case(case_name, outcome));
        }
        root.append_element(suite);
    }

    root
}

fn render_case(name: &str, outcome: &CaseOutcome<'_>) -> Element {
    let mut case = Element::new(Level::Case.tag());
    case.set_attribute(NAME, name);
    case.set_attribute(TIME, outcome.time);

    match (outcome.status, outcome.evidence) {
        (Status::NewFailure, Some(failure)) => case.append(Node::Verbatim(failure.clone())),
        (Status::StillFailing, Some(failure)) => {
            case.append(Node::Verbatim(failure.renamed(SKIPPED)))
        }
        _ => {}
    }

    case
}

fn set_counts(element: &mut Element, summary: &Summary) {
    element.set_attribute("tests", summary.tests.to_string());
    element.set_attribute("failures", summary.regressions.to_string());
    element.set_attribute("skipped", summary.still_failing.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compare::{compare_reports, locate_report};
    use crate::diff::Result;
    use crate::xml::parse::parse_document;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_render_empty_result() -> Result<()> {
        let rendered = render(&ComparisonResult::default());
        assert_eq!(
            r#"<?xml version="1.0" encoding="UTF-8"?><testsuites name="junit-diff" tests="0" failures="0" skipped="0"/>"#,
            rendered.to_xml_string(false)?
        );
        Ok(())
    }

    #[test]
    fn test_render_failure_and_skip() -> Result<()> {
        let before = parse_document(
            indoc! {r#"
                <testsuites>
                    <testsuite name="api">
                        <testcase name="create" time="0.1"/>
                        <testcase name="delete" time="0.2">
                            <failure type="Timeout" message="took too long">stack</failure>
                        </testcase>
                        <testcase name="update" time="0.3"/>
                    </testsuite>
                </testsuites>
            "#},
            "before.xml",
        )?;
        let after = parse_document(
            indoc! {r#"
                <testsuites>
                    <testsuite name="api">
                        <testcase name="create" time="0.15">
                            <failure type="AssertionError" message="500">line 1<![CDATA[<html/>]]></failure>
                        </testcase>
                        <testcase name="delete" time="0.25">
                            <failure type="Timeout" message="took too long">stack</failure>
                        </testcase>
                        <testcase name="update" time="0.35"/>
                    </testsuite>
                </testsuites>
            "#},
            "after.xml",
        )?;
        let result = compare_reports(
            locate_report(&before, "before.xml")?,
            locate_report(&after, "after.xml")?,
        )?;

        let expected = indoc! {r#"
            <?xml version="1.0" encoding="UTF-8"?>
            <testsuites name="junit-diff" tests="3" failures="1" skipped="1">
                <testsuite name="api" tests="3" failures="1" skipped="1">
                    <testcase name="create" time="0.15">
                        <failure type="AssertionError" message="500">line 1<![CDATA[<html/>]]></failure>
                    </testcase>
                    <testcase name="delete" time="0.25">
                        <skipped type="Timeout" message="took too long">stack</skipped>
                    </testcase>
                    <testcase name="update" time="0.35"/>
                </testsuite>
            </testsuites>
        "#};
        assert_eq!(expected, render(&result).to_xml_string(true)?);
        Ok(())
    }

    #[rstest]
    #[case(r#"<failure type="T">expected <b>1</b> got <b>2</b></failure>"#)]
    #[case(r#"<failure type="T"><detail>x</detail>tail</failure>"#)]
    #[case(r#"<failure type="T">a <b>x</b> <b>y</b></failure>"#)]
    #[case("<failure type=\"T\">\n    at parse (lib.rs:10)\n    <frame line=\"3\"/>\n</failure>")]
    fn test_new_failure_body_is_written_byte_for_byte(
        #[case] failure: &str,
        #[values(true, false)] indent: bool,
    ) -> Result<()> {
        let before = parse_document(
            r#"<testsuites><testsuite name="s"><testcase name="t"/></testsuite></testsuites>"#,
            "before.xml",
        )?;
        let after = parse_document(
            &format!(
                "<testsuites>\n  <testsuite name=\"s\">\n    <testcase name=\"t\">\n      {failure}\n    </testcase>\n  </testsuite>\n</testsuites>"
            ),
            "after.xml",
        )?;
        let result = compare_reports(
            locate_report(&before, "before.xml")?,
            locate_report(&after, "after.xml")?,
        )?;

        let rendered = render(&result).to_xml_string(indent)?;
        assert!(
            rendered.contains(failure),
            "failure body changed in {rendered}"
        );
        Ok(())
    }

    #[test]
    fn test_skip_marker_keeps_failure_content() -> Result<()> {
        let after = parse_document(
            r#"<testsuites><testsuite name="s"><testcase name="t"><failure type="T" message="m"><detail>x</detail>tail</failure></testcase></testsuite></testsuites>"#,
            "after.xml",
        )?;
        let container = locate_report(&after, "after.xml")?;
        let result = compare_reports(container, container)?;

        let rendered = render(&result);
        let skipped = rendered.first_descendant(SKIPPED).unwrap();
        let failure = container.first_descendant("failure").unwrap();
        assert_eq!(
            failure.attributes().collect::<Vec<_>>(),
            skipped.attributes().collect::<Vec<_>>()
        );
        assert_eq!(failure.children(), skipped.children());
        assert!(matches!(skipped.children()[1], Node::Text(ref text) if text == "tail"));
        Ok(())
    }
}
