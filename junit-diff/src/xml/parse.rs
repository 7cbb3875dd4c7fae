// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::diff::errors::Error;
use crate::diff::{Level, Result};
use crate::xml::{Document, Element, Node, DOCUMENT_NODE};

/// Deepest element nesting accepted in a report.
pub const MAX_DEPTH: usize = 512;

/// Parses `content` into an owned [`Document`]. Whitespace-only text is
/// dropped down to the test case level and kept inside test cases, every
/// other text, CDATA, comment and processing instruction is kept so failure
/// bodies survive a round trip.
pub fn parse_document(content: &str, file_name: &str) -> Result<Document> {
    let mut reader = Reader::from_str(content);
    reader.check_end_names(true);

    let mut open: Vec<Element> = vec![Element::new(DOCUMENT_NODE)];
    let mut open_cases = 0usize;
    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if open.len() > MAX_DEPTH {
                    return Err(Error::MalformedDocument(format!(
                        "{file_name}: elements nested deeper than {MAX_DEPTH} levels"
                    )));
                }
                let element = element_from(&start)?;
                if element.is_named(Level::Case.tag()) {
                    open_cases += 1;
                }
                open.push(element);
            }
            Event::Empty(start) => {
                let element = element_from(&start)?;
                append(&mut open, Node::Element(element), file_name)?;
            }
            Event::End(_) => {
                if open.len() < 2 {
                    return Err(Error::MalformedDocument(format!(
                        "{file_name}: closing tag without an opening tag"
                    )));
                }
                if let Some(element) = open.pop() {
                    if element.is_named(Level::Case.tag()) {
                        open_cases -= 1;
                    }
                    append(&mut open, Node::Element(element), file_name)?;
                }
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                let inside_case = open_cases > 0
                    && !open
                        .last()
                        .map_or(false, |parent| parent.is_named(Level::Case.tag()));
                if inside_case || !text.trim().is_empty() {
                    append(&mut open, Node::Text(text.into_owned()), file_name)?;
                }
            }
            Event::CData(cdata) => {
                let cdata = String::from_utf8(cdata.into_inner().into_owned())?;
                append(&mut open, Node::CData(cdata), file_name)?;
            }
            Event::Comment(comment) => {
                let comment = String::from_utf8(comment.into_inner().into_owned())?;
                append(&mut open, Node::Comment(comment), file_name)?;
            }
            Event::PI(instruction) => {
                let instruction = String::from_utf8(instruction.into_inner().into_owned())?;
                append(&mut open, Node::ProcessingInstruction(instruction), file_name)?;
            }
            Event::Decl(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if open.len() != 1 {
        return Err(Error::MalformedDocument(format!(
            "{file_name}: unexpected end of document, unclosed element `{}`",
            open.last().map(Element::name).unwrap_or_default()
        )));
    }

    let document = Document::from_node(open.remove(0));

    if document.root().is_none() {
        return Err(Error::MalformedDocument(format!(
            "{file_name}: no root element"
        )));
    }

    Ok(document)
}

fn element_from(start: &BytesStart<'_>) -> Result<Element> {
    let mut element = Element::new(String::from_utf8(start.name().as_ref().to_vec())?);
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8(attribute.key.as_ref().to_vec())?;
        let value = attribute.unescape_value()?;
        element.set_attribute(key, value.into_owned());
    }
    Ok(element)
}

fn append(open: &mut [Element], node: Node, file_name: &str) -> Result<()> {
    match open.last_mut() {
        Some(parent) => {
            parent.append(node);
            Ok(())
        }
        None => Err(Error::MalformedDocument(format!(
            "{file_name}: content outside of the document"
        ))),
    }
}
