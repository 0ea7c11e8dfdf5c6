// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Error types for filter construction

use std::fmt;

/// The category of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The filter parameters provided at construction are invalid.
    InvalidParams,
}

impl ErrorKind {
    /// Returns the kind's name as a static string.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidParams => "InvalidParams",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned by fallible bloomrf functions.
///
/// Only construction can fail; once a filter is built, `add` and the
/// queries are total. The message carries the offending values, so there
/// is nothing to inspect beyond [`kind`](Self::kind) and
/// [`message`](Self::message).
///
/// # Examples
///
/// ```
/// # use bloomrf::error::Error;
/// # use bloomrf::error::ErrorKind;
/// let err = Error::new(ErrorKind::InvalidParams, "filter size cannot be zero");
/// assert_eq!(err.kind(), ErrorKind::InvalidParams);
/// assert_eq!(err.message(), "filter size cannot be zero");
/// assert_eq!(err.to_string(), "InvalidParams: filter size cannot be zero");
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidParams, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}
