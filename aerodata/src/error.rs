// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The source could not be opened or read.
    Io(std::io::Error),
    /// The zip archive is corrupt.
    Zip(zip::result::ZipError),
    /// The OFMX document is not well-formed.
    Xml(ofmx::Error),
    /// An ARINC 424 record could not be parsed.
    InvalidArinc424 { record: Vec<u8>, error: String },
    /// The source format tag is unknown.
    UnsupportedFormat(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Zip(e) => write!(f, "archive error: {e}"),
            Self::Xml(e) => write!(f, "{e}"),
            Self::InvalidArinc424 { record, error } => {
                write!(
                    f,
                    "invalid ARINC 424 record {:?}: {error}",
                    String::from_utf8_lossy(record).trim_end()
                )
            }
            Self::UnsupportedFormat(tag) => write!(f, "unsupported source format: {tag}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Zip(e) => Some(e),
            Self::Xml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Self::Zip(e)
    }
}

impl From<ofmx::Error> for Error {
    fn from(e: ofmx::Error) -> Self {
        Self::Xml(e)
    }
}
