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

/// Controlled airspace (`UC`).
///
/// Only the primary record of a sequence carries the vertical limits and the
/// name.
#[derive(Record)]
pub struct ControlledAirspace<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    pub icao_code: IcaoCode<'a>,
    pub arsp_type: Alphanumeric<'a, 1>,
    pub arsp_cntr: Alphanumeric<'a, 5>,
    #[arinc424(field = 17)]
    pub arsp_class: Alphanumeric<'a, 1>,
    #[arinc424(skip(2))]
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

#[cfg(test)]
mod tests {
    use super::*;

    const AIRSPACE: &[u8] = b"SUSAUCK6TKJFK PAB  A00100     R N40394857W074144423N40413000W07409590000402450   GND  A07000MNEW YORK AREA A               676061703";

    #[test]
    fn controlled_airspace_record() {
        let arsp = ControlledAirspace::try_from(AIRSPACE).expect("airspace should parse");

        assert_eq!(arsp.record_type, RecordType::Standard);
        assert_eq!(arsp.sec_code, SecCode::Airspace);
        assert_eq!(
            arsp.sub_code.kind(&arsp.sec_code),
            Ok(SubCodeKind::ControlledAirspace)
        );
        assert_eq!(arsp.icao_code.as_str(), "K6");
        assert_eq!(arsp.arsp_type.as_str(), "T");
        assert_eq!(arsp.arsp_cntr.as_str(), "KJFK");
        assert_eq!(arsp.arsp_class.as_str(), "B");
        assert_eq!(arsp.multi_cd.as_str(), "A");
        assert!(arsp.cont_nr.is_primary());
        assert_eq!(arsp.lower_limit.as_str(), "GND");
        assert_eq!(arsp.lower_unit_indicator.as_str(), "A");
        assert_eq!(arsp.upper_limit.as_str(), "07000");
        assert_eq!(arsp.upper_unit_indicator.as_str(), "M");
        assert_eq!(arsp.arsp_name.as_str(), "NEW YORK AREA A");
        assert_eq!(arsp.frn.as_u32(), Ok(67606));
        assert_eq!(arsp.cycle.label(), Some("1703"));
    }
}
