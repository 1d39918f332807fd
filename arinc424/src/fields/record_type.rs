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

use crate::{Error, FixedField};

/// Whether a record is part of the standard data set or tailored to a
/// customer.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum RecordType {
    Standard,
    Tailored,
}

impl RecordType {
    /// Returns the record type for the first byte of a record.
    pub fn of(byte: u8) -> Option<Self> {
        match byte {
            b'S' => Some(Self::Standard),
            b'T' => Some(Self::Tailored),
            _ => None,
        }
    }
}

impl FixedField<'_> for RecordType {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        let byte = bytes.first().copied().unwrap_or(b' ');
        Self::of(byte).ok_or(Error::InvalidCharacter {
            field: "Record Type",
            byte,
            expected: "S or T",
        })
    }
}
