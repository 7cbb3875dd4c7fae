// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! A small owned XML tree.
//!
//! Reports are parsed with `quick-xml` into [`Element`]s so that the
//! comparison can walk sibling lists by index and the renderer can copy
//! failure elements verbatim into the output document.

pub(crate) mod parse;
pub(crate) mod serialize;

pub use parse::parse_document;

use std::slice::Iter;

pub(crate) const DOCUMENT_NODE: &str = "#document";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// An element written exactly as it was parsed, never reindented.
    Verbatim(Element),
    Text(String),
    CData(String),
    Comment(String),
    ProcessingInstruction(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) | Node::Verbatim(element) => Some(element),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// ASCII case-insensitive tag comparison.
    pub fn is_named(&self, tag: &str) -> bool {
        self.name.eq_ignore_ascii_case(tag)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> Iter<'_, (String, String)> {
        self.attributes.iter()
    }

    /// Replaces the value of an existing attribute in place, otherwise
    /// appends it so attribute order is preserved on output.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn append(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn append_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Descendant elements in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// First descendant element named `tag` in document order. Matching here
    /// is exact, as DOM `getElementsByTagName`.
    pub fn first_descendant(&self, tag: &str) -> Option<&Element> {
        self.descendants().find(|element| element.name == tag)
    }

    /// Pre-order search over `self` and its descendants with case-insensitive
    /// tag matching.
    pub fn find_self_or_descendant(&self, tag: &str) -> Option<&Element> {
        std::iter::once(self)
            .chain(self.descendants())
            .find(|element| element.is_named(tag))
    }

    /// Copy of this element under another tag, attributes and children unchanged.
    pub fn renamed(&self, name: impl Into<String>) -> Element {
        Element {
            name: name.into(),
            attributes: self.attributes.clone(),
            children: self.children.clone(),
        }
    }
}

/// Pre-order walk over the descendants of an [`Element`], kept on an explicit
/// stack of sibling iterators.
pub struct Descendants<'a> {
    stack: Vec<Iter<'a, Node>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(Node::Element(element)) | Some(Node::Verbatim(element)) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                Some(_) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// A parsed document. The top level nodes (root element plus any leading or
/// trailing comments and processing instructions) hang off a synthetic
/// document node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    node: Element,
}

impl Document {
    pub(crate) fn from_node(node: Element) -> Self {
        Document { node }
    }

    pub fn root(&self) -> Option<&Element> {
        self.node.child_elements().next()
    }

    /// Locates the report container: the root when it is named `tag`,
    /// otherwise the first descendant named `tag`. A document whose root is a
    /// lone `testsuite` has no container, the document node plays that role.
    pub fn locate_container(&self, tag: &str) -> Option<&Element> {
        let root = self.root()?;
        match root.find_self_or_descendant(tag) {
            Some(container) => Some(container),
            None if root.is_named(crate::diff::Level::Suite.tag()) => Some(&self.node),
            None => None,
        }
    }
}
