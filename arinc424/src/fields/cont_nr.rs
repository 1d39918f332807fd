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

/// Continuation record number.
///
/// Only a primary record carries the authoritative data of an entity, the
/// following continuation records add optional details.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ContNr(u8);

impl ContNr {
    /// The marker of a primary record.
    pub const PRIMARY: u8 = b'0';

    /// Returns `true` if this is the primary record.
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.0 == Self::PRIMARY
    }

    #[inline]
    pub fn as_byte(&self) -> u8 {
        self.0
    }
}

impl FixedField<'_> for ContNr {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        bytes
            .first()
            .map(|&b| Self(b))
            .ok_or(Error::InvalidFieldLength {
                expected: 1,
                actual: 0,
            })
    }
}
