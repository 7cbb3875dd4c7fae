// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::diff::Result;
use crate::xml::{Element, Node};

impl Element {
    /// Writes an XML declaration followed by this element. With `indent` the
    /// output is indented four spaces per level and ends with a newline.
    pub fn serialize(&self, writer: impl std::io::Write, indent: bool) -> Result<()> {
        let mut writer = match indent {
            true => Writer::new_with_indent(writer, b' ', 4),
            false => Writer::new(writer),
        };
        let decl = BytesDecl::new("1.0", Some("UTF-8"), None);

        writer.write_event(Event::Decl(decl))?;
        self.serialize_element(&mut writer)?;
        writer.write_event(Event::Eof)?;

        Ok(writer.write_indent()?)
    }

    pub fn to_xml_string(&self, indent: bool) -> Result<String> {
        let mut buffer = vec![];
        self.serialize(&mut buffer, indent)?;
        Ok(String::from_utf8(buffer)?)
    }

    fn serialize_element(&self, writer: &mut Writer<impl std::io::Write>) -> Result<()> {
        let mut tag = BytesStart::new(self.name.as_str());
        tag.extend_attributes(
            self.attributes
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );

        if self.children.is_empty() {
            writer.write_event(Event::Empty(tag))?;
            return Ok(());
        }

        writer.write_event(Event::Start(tag))?;
        for child in &self.children {
            match child {
                Node::Element(element) => element.serialize_element(writer)?,
                Node::Verbatim(element) => element.serialize_verbatim(writer)?,
                Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
                Node::CData(cdata) => {
                    writer.write_event(Event::CData(BytesCData::new(cdata.as_str())))?
                }
                Node::Comment(comment) => {
                    writer.write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))?
                }
                Node::ProcessingInstruction(instruction) => writer.write_event(Event::PI(
                    BytesText::from_escaped(instruction.as_str()),
                ))?,
            }
        }

        Ok(writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?)
    }

    /// Writes this element on its own indented line with its content exactly
    /// as stored. `Eof` writes nothing but restores the line break the
    /// unescaped text event clears.
    fn serialize_verbatim(&self, writer: &mut Writer<impl std::io::Write>) -> Result<()> {
        let mut raw = Writer::new(vec![]);
        self.serialize_element(&mut raw)?;
        let raw = String::from_utf8(raw.into_inner())?;

        writer.write_indent()?;
        writer.write_event(Event::Text(BytesText::from_escaped(raw)))?;
        Ok(writer.write_event(Event::Eof)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse::parse_document;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_indented() -> Result<()> {
        let mut suite = Element::new("testsuite");
        suite.set_attribute("name", "a<b");
        let mut case = Element::new("testcase");
        case.set_attribute("name", "first");
        case.set_attribute("time", "0.100");
        suite.append_element(case);
        let mut root = Element::new("testsuites");
        root.append_element(suite);

        let expected = indoc! {r#"
            <?xml version="1.0" encoding="UTF-8"?>
            <testsuites>
                <testsuite name="a&lt;b">
                    <testcase name="first" time="0.100"/>
                </testsuite>
            </testsuites>
        "#};
        assert_eq!(expected, root.to_xml_string(true)?);
        Ok(())
    }

    #[test]
    fn test_serialize_verbatim_child_is_not_reindented() -> Result<()> {
        let document = parse_document(
            r#"<failure type="T"><detail>x</detail>tail</failure>"#,
            "failure.xml",
        )?;
        let mut case = Element::new("testcase");
        case.set_attribute("name", "t");
        case.append(Node::Verbatim(document.root().unwrap().clone()));
        let mut root = Element::new("testsuites");
        root.append_element(case);

        let expected = indoc! {r#"
            <?xml version="1.0" encoding="UTF-8"?>
            <testsuites>
                <testcase name="t">
                    <failure type="T"><detail>x</detail>tail</failure>
                </testcase>
            </testsuites>
        "#};
        assert_eq!(expected, root.to_xml_string(true)?);
        Ok(())
    }

    #[test]
    fn test_serialize_compact_keeps_failure_body() -> Result<()> {
        let content = r#"<failure type="E">line 1 &amp; more<![CDATA[<raw>]]><!-- note --></failure>"#;
        let document = parse_document(content, "failure.xml")?;
        let failure = document.root().unwrap();

        assert_eq!(
            format!(r#"<?xml version="1.0" encoding="UTF-8"?>{content}"#),
            failure.to_xml_string(false)?
        );
        Ok(())
    }
}
