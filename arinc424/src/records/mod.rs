// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! ARINC 424 record types.
//!
//! Use [`RecordKind::of`] to classify a record before parsing it into one of
//! the typed records.

mod airport;
mod controlled_airspace;
mod fir_uir;
mod navaid;
mod restrictive_airspace;
mod runway;
mod waypoint;

pub use airport::Airport;
pub use controlled_airspace::ControlledAirspace;
pub use fir_uir::FirUir;
pub use navaid::{NdbNavaid, VhfNavaid};
pub use restrictive_airspace::RestrictiveAirspace;
pub use runway::Runway;
pub use waypoint::Waypoint;

use crate::fields::{RecordType, SecCode, SubCode, SubCodeKind};
use crate::record::RECORD_LENGTH;
use crate::FixedField;

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum RecordKind {
    Airport,
    Runway,
    Waypoint,
    VhfNavaid,
    NdbNavaid,
    ControlledAirspace,
    RestrictiveAirspace,
    FirUir,
}

impl RecordKind {
    /// Classifies a record by its section and subsection code.
    ///
    /// Returns `None` for records without a typed representation or if the
    /// record is too short to carry the codes. The record is not validated
    /// beyond its codes.
    ///
    /// Airport records carry their subsection code in column 13, but some
    /// providers write it to column 6 instead. Column 6 is used if column 13 is
    /// blank.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arinc424::records::RecordKind;
    /// let record = b"SEURPCEDDHED W1    ED0    V     N53341894E009404512";
    /// assert_eq!(RecordKind::of(record), Some(RecordKind::Waypoint));
    /// ```
    pub fn of(record: &[u8]) -> Option<Self> {
        RecordType::of(*record.first()?)?;
        let sec_code = SecCode::from_bytes(record.get(4..)?).ok()?;
        let mut sub_code = SubCode::from_bytes(record.get(sec_code.sub_code_column() - 1..)?).ok()?;
        if sub_code.is_blank() {
            sub_code = SubCode::from_bytes(record.get(5..)?).ok()?;
        }

        match (sub_code.kind(&sec_code).ok()?, sec_code) {
            (SubCodeKind::ReferencePoint, _) => Some(Self::Airport),
            (SubCodeKind::Runway, _) => Some(Self::Runway),
            (SubCodeKind::Waypoint, _) => Some(Self::Waypoint),
            (SubCodeKind::TerminalWaypoint, SecCode::Airport) => Some(Self::Waypoint),
            (SubCodeKind::VHFNavaid, _) => Some(Self::VhfNavaid),
            (SubCodeKind::NDBNavaid, _) => Some(Self::NdbNavaid),
            (SubCodeKind::ControlledAirspace, _) => Some(Self::ControlledAirspace),
            (SubCodeKind::RestrictiveAirspace, _) => Some(Self::RestrictiveAirspace),
            (SubCodeKind::FirUir, _) => Some(Self::FirUir),
            _ => None,
        }
    }
}

/// Iterator over the classified records of a byte buffer.
///
/// Records are expected to start with their record type (`S` or `T`). Any
/// other byte between records, like a line break, is skipped.
pub struct Records<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Records<'a> {
    /// Creates a new record iterator from a byte slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arinc424::records::{Airport, RecordKind, Records};
    /// # use arinc424::Error;
    /// #
    /// # fn parse_records(data: &[u8]) -> Result<(), Error> {
    /// for (kind, bytes) in Records::new(data) {
    ///     match kind {
    ///         RecordKind::Airport => {
    ///             let arpt = Airport::try_from(bytes)?;
    ///             // now you can read the airport's fields or convert it
    ///             // to some other type
    ///         },
    ///         _ => {},
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = (RecordKind, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(record) = self.data.get(self.pos..self.pos + RECORD_LENGTH) {
            if RecordType::of(record[0]).is_none() {
                self.pos += 1;
                continue;
            }

            self.pos += RECORD_LENGTH;
            if let Some(kind) = RecordKind::of(record) {
                return Some((kind, record));
            }
        }

        None
    }
}
