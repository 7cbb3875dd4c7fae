// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::string::FromUtf8Error;

use thiserror::Error;

use crate::diff::Level;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The tests are gone: {level} `{name}` is missing from the later report")]
    TestsGone { level: Level, name: String },
    #[error("I/O error when reading {0}")]
    IoError(#[from] std::io::Error),
    #[error("Error parsing XML report {0}")]
    XmlError(#[from] quick_xml::Error),
    #[error("Report is not valid UTF-8 {0}")]
    Utf8Error(#[from] FromUtf8Error),
    #[error("Malformed report `{0}`")]
    MalformedDocument(String),
    #[error("Could not locate a `testsuites` container in `{0}`")]
    MissingContainer(String),
    #[error("The path `{0}` does not exist")]
    FileNotFoundError(String),
    #[error("{0}")]
    IllegalArguments(String),
}

impl Error {
    /// The "tests are gone" condition callers special-case when reporting.
    pub fn is_tests_gone(&self) -> bool {
        matches!(self, Error::TestsGone { .. })
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlError(quick_xml::Error::from(err))
    }
}
