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

use crate::{Alphanumeric, Error, FixedField};

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum SecCode {
    MORA,
    Navaid,
    Enroute,
    Heliport,
    Airport,
    CompanyRoute,
    Table,
    Airspace,
}

impl SecCode {
    /// Returns the 1-based column holding the subsection code.
    ///
    /// Airport and heliport records keep their subsection code behind the
    /// airport identifier.
    pub fn sub_code_column(&self) -> usize {
        match self {
            Self::Airport | Self::Heliport => 13,
            _ => 6,
        }
    }
}

impl FixedField<'_> for SecCode {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match bytes.first().copied().unwrap_or(b' ') {
            b'A' => Ok(Self::MORA),
            b'D' => Ok(Self::Navaid),
            b'E' => Ok(Self::Enroute),
            b'H' => Ok(Self::Heliport),
            b'P' => Ok(Self::Airport),
            b'R' => Ok(Self::CompanyRoute),
            b'T' => Ok(Self::Table),
            b'U' => Ok(Self::Airspace),
            byte => Err(Error::InvalidCharacter {
                field: "Section Code",
                byte,
                expected: "SEC CODE according to ARINC 424-23 5.4",
            }),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum SubCodeKind {
    // MORA
    GridMORA,
    // Navaid
    VHFNavaid,
    NDBNavaid,
    // Enroute
    Waypoint,
    // Heliport,
    Pad,
    // Airport
    ReferencePoint,
    Gate,
    Runway,
    // Heliport, Airport
    TerminalWaypoint,
    MSA,
    // CompanyRoute
    CompanyRoute,
    AlternateRecord,
    // Tables
    CruisingTable,
    // Airspace
    ControlledAirspace,
    FirUir,
    RestrictiveAirspace,
}

pub type SubCode<'a> = Alphanumeric<'a, 1>;

impl<'a> SubCode<'a> {
    /// Subsection code kind for the section.
    ///
    /// # Errors
    ///
    /// Will return an error if the subsection code is unknown for the section.
    pub fn kind(&self, sec_code: &SecCode) -> Result<SubCodeKind, Error> {
        let kind = match (self.first(), sec_code) {
            (b' ', SecCode::Navaid) => SubCodeKind::VHFNavaid,
            (b' ', SecCode::CompanyRoute) => SubCodeKind::CompanyRoute,
            (b'A', SecCode::Enroute) => SubCodeKind::Waypoint,
            (b'A', SecCode::Heliport) => SubCodeKind::Pad,
            (b'A', SecCode::Airport) => SubCodeKind::ReferencePoint,
            (b'A', SecCode::CompanyRoute) => SubCodeKind::AlternateRecord,
            (b'B', SecCode::Navaid) => SubCodeKind::NDBNavaid,
            (b'B', SecCode::Airport) => SubCodeKind::Gate,
            (b'C', SecCode::Heliport | SecCode::Airport) => SubCodeKind::TerminalWaypoint,
            (b'C', SecCode::Table) => SubCodeKind::CruisingTable,
            (b'C', SecCode::Airspace) => SubCodeKind::ControlledAirspace,
            (b'F', SecCode::Airspace) => SubCodeKind::FirUir,
            (b'G', SecCode::Airport) => SubCodeKind::Runway,
            (b'R', SecCode::Airspace) => SubCodeKind::RestrictiveAirspace,
            (b'S', SecCode::MORA) => SubCodeKind::GridMORA,
            (b'S', SecCode::Heliport | SecCode::Airport) => SubCodeKind::MSA,
            (byte, _) => {
                return Err(Error::InvalidCharacter {
                    field: "Subsection Code",
                    byte,
                    expected: "SUB CODE according to ARINC 424-23 5.5",
                })
            }
        };

        Ok(kind)
    }
}
