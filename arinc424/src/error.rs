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

use std::error;
use std::fmt;

use crate::RECORD_LENGTH;

/// Error of parsing a record or one of its fields.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The record is not [`RECORD_LENGTH`] bytes long.
    InvalidRecordLength { actual: usize },
    /// The bytes left in the record are fewer than the field's length.
    InvalidFieldLength { expected: usize, actual: usize },
    /// A single byte of the field is not one of the `expected` characters.
    InvalidCharacter {
        field: &'static str,
        byte: u8,
        expected: &'static str,
    },
    /// The field's bytes are not one of its variants.
    InvalidVariant {
        field: &'static str,
        bytes: Vec<u8>,
        expected: &'static str,
    },
    /// A numeric field contains anything but digits.
    NotANumber { bytes: Vec<u8> },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRecordLength { actual } => {
                write!(f, "record has {actual} bytes instead of {RECORD_LENGTH}")
            }
            Self::InvalidFieldLength { expected, actual } => {
                write!(f, "field needs {expected} bytes but only {actual} are left")
            }
            Self::InvalidCharacter {
                field,
                byte,
                expected,
            } => write!(
                f,
                "{field} contains {:?} where {expected} is expected",
                char::from(*byte)
            ),
            Self::InvalidVariant {
                field,
                bytes,
                expected,
            } => write!(
                f,
                "{field} is {:?} but must be {expected}",
                String::from_utf8_lossy(bytes)
            ),
            Self::NotANumber { bytes } => {
                write!(f, "{:?} is not a number", String::from_utf8_lossy(bytes))
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_bytes() {
        let e = Error::NotANumber {
            bytes: b"1 0".to_vec(),
        };
        assert_eq!(e.to_string(), "\"1 0\" is not a number");

        let e = Error::InvalidRecordLength { actual: 80 };
        assert_eq!(e.to_string(), "record has 80 bytes instead of 132");
    }
}
