// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::diff::{Level, NAME};
use crate::xml::{Element, Node};

/// Sibling positions into the earlier and later child lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cursors {
    pub(crate) before: usize,
    pub(crate) after: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Step<'report> {
    /// Neither side has another element for this level.
    Exhausted,
    /// The earlier report has `name` at this position, the later one has no
    /// matching element left.
    Vanished { name: &'report str },
    /// `before` is only set when names were compared, it is the baseline
    /// `after` gets classified against.
    Paired {
        before: Option<&'report Element>,
        after: &'report Element,
    },
}

/// Walks the children of one earlier/later parent pair in lockstep, one
/// [`Level`] tag at a time.
#[derive(Debug, Clone)]
pub(crate) struct Walker<'report> {
    level: Level,
    before: &'report [Node],
    after: &'report [Node],
    cursors: Cursors,
}

impl<'report> Walker<'report> {
    pub(crate) fn new(
        level: Level,
        before: Option<&'report Element>,
        after: &'report Element,
    ) -> Self {
        Walker {
            level,
            before: before.map(Element::children).unwrap_or(&[]),
            after: after.children(),
            cursors: Cursors::default(),
        }
    }

    pub(crate) fn cursors(&self) -> Cursors {
        self.cursors
    }

    /// Moves both cursors to the next element of this level. With
    /// `require_name_match` the later side must also carry the same `name`
    /// as the earlier match; when the earlier side has nothing left, names
    /// are not compared at all.
    ///
    /// On a pair the earlier cursor moves past its match while the later
    /// cursor stays on it until [`Walker::consume_after`].
    pub(crate) fn advance(&mut self, require_name_match: bool) -> Step<'report> {
        let tag = self.level.tag();
        let before = seek(self.before, &mut self.cursors.before, |element| {
            element.is_named(tag)
        });

        let compare = require_name_match && before.is_some();
        let name = before.map(name_of).unwrap_or_default();
        let after = seek(self.after, &mut self.cursors.after, |element| {
            element.is_named(tag) && (!compare || name_of(element) == name)
        });

        match (before, after) {
            (None, None) => Step::Exhausted,
            (Some(_), None) => Step::Vanished { name },
            (before, Some(after)) => {
                if before.is_some() {
                    self.cursors.before += 1;
                }
                Step::Paired {
                    before: before.filter(|_| compare),
                    after,
                }
            }
        }
    }

    pub(crate) fn consume_after(&mut self) {
        self.cursors.after += 1;
    }
}

pub(crate) fn name_of(element: &Element) -> &str {
    element.attribute(NAME).unwrap_or_default()
}

fn seek<'report>(
    siblings: &'report [Node],
    cursor: &mut usize,
    accept: impl Fn(&Element) -> bool,
) -> Option<&'report Element> {
    while let Some(node) = siblings.get(*cursor) {
        if let Node::Element(element) = node {
            if accept(element) {
                return Some(element);
            }
        }
        *cursor += 1;
    }
    None
}
