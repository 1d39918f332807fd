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
use crate::{Alphanumeric, Record};

/// Restrictive airspace (`UR`), e.g. restricted, danger or prohibited areas.
#[derive(Record)]
pub struct RestrictiveAirspace<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    pub icao_code: IcaoCode<'a>,
    pub restrictive_type: Alphanumeric<'a, 1>,
    pub restrictive_designation: Alphanumeric<'a, 10>,
    pub multi_cd: Alphanumeric<'a, 1>,
    #[arinc424(skip(4))]
    pub cont_nr: ContNr,
    #[arinc424(field = 82)]
    pub lower_limit: Limit<'a>,
    pub lower_unit_indicator: UnitIndicator<'a>,
    pub upper_limit: Limit<'a>,
    pub upper_unit_indicator: UnitIndicator<'a>,
    pub arsp_name: NameField<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}
