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

use crate::fields::*;
use crate::Record;

/// Enroute (`EA`) or terminal (`PC`) waypoint.
#[derive(Record)]
pub struct Waypoint<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    sub_code_6: Option<SubCode<'a>>,
    pub regn_code: RegnCode<'a>,
    /// The ICAO code can either be in column 11 or 20.
    icao_code_11: Option<IcaoCode<'a>>,
    sub_code_13: Option<SubCode<'a>>,
    pub fix_ident: FixIdent<'a>,
    /// The ICAO code can either be in column 11 or 20.
    #[arinc424(field = 20)]
    icao_code_20: Option<IcaoCode<'a>>,
    #[arinc424(field = 22)]
    pub cont_nr: ContNr,
    #[arinc424(skip(4))]
    pub waypoint_type: WaypointType<'a>,
    #[arinc424(field = 33)]
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    #[arinc424(field = 99)]
    pub name_desc: NameDesc<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

impl<'a> Waypoint<'a> {
    /// Returns the subsection code of the waypoint.
    ///
    /// Enroute waypoints have their code in column 6 and terminal waypoints in
    /// column 13. Returns `None` if neither is set.
    pub fn sub_code(&self) -> Option<SubCode<'a>> {
        self.sub_code_6.or(self.sub_code_13)
    }

    /// Returns the ICAO code of the waypoint.
    pub fn icao_code(&self) -> Option<IcaoCode<'a>> {
        self.icao_code_11.or(self.icao_code_20)
    }
}
