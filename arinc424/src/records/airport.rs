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

/// Airport reference point (`PA`).
#[derive(Record)]
pub struct Airport<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    #[arinc424(skip(1))]
    pub arpt_ident: ArptHeliIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub sub_code: SubCode<'a>,
    pub iata: Iata<'a>,
    #[arinc424(skip(5))]
    pub cont_nr: ContNr,
    #[arinc424(skip(10))]
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    pub mag_var: MagVar<'a>,
    /// Airport elevation in feet.
    pub elevation: Elevation<'a>,
    /// Transition altitude in feet.
    #[arinc424(field = 71)]
    pub transition_altitude: TransitionAltitude<'a>,
    #[arinc424(field = 94)]
    pub airport_name: NameField<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}
