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

use crate::{Alphanumeric, Error, FixedField, Numeric};

/// The AIRAC cycle of a record, stored as `YYCC`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Cycle<'a> {
    raw: Alphanumeric<'a, 4>,
    year: Numeric<'a, 2>,
    cycle: Numeric<'a, 2>,
}

impl<'a> Cycle<'a> {
    /// The last two digits of the cycle's year.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a number.
    pub fn year(&self) -> Result<u8, Error> {
        self.year.as_u8()
    }

    /// The numeric identity of the 28-day data update cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a number.
    pub fn cycle(&self) -> Result<u8, Error> {
        self.cycle.as_u8()
    }

    /// Returns the cycle as it is written in the record, e.g. `2407`.
    ///
    /// Returns `None` if the columns are blank.
    pub fn label(&self) -> Option<&'a str> {
        self.raw.value()
    }
}

impl<'a> FixedField<'a> for Cycle<'a> {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        let raw = Alphanumeric::from_bytes(bytes)?;
        Ok(Self {
            raw,
            year: Numeric::from_bytes(&bytes[0..2])?,
            cycle: Numeric::from_bytes(&bytes[2..4])?,
        })
    }
}
