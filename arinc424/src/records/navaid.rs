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

use crate::fields::*;
use crate::{Alphanumeric, Record};

/// VHF navaid (`D `): VOR, DME, TACAN or a combination of those.
#[derive(Record)]
pub struct VhfNavaid<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    pub arpt_ident: ArptHeliIdent<'a>,
    pub arpt_icao_code: IcaoCode<'a>,
    #[arinc424(skip(1))]
    pub vor_ident: NavaidIdent<'a>,
    #[arinc424(skip(2))]
    pub icao_code: IcaoCode<'a>,
    pub cont_nr: ContNr,
    /// Frequency in tens of kHz, e.g. `11660` for 116.60 MHz.
    pub vor_frequency: Frequency<'a>,
    pub navaid_class: NavaidClass<'a>,
    pub vor_latitude: Option<Latitude<'a>>,
    pub vor_longitude: Option<Longitude<'a>>,
    pub dme_ident: Alphanumeric<'a, 4>,
    pub dme_latitude: Option<Latitude<'a>>,
    pub dme_longitude: Option<Longitude<'a>>,
    pub station_declination: MagVar<'a>,
    /// DME elevation in feet.
    pub dme_elevation: Elevation<'a>,
    #[arinc424(field = 91)]
    pub datum: DatumCode<'a>,
    pub vor_name: NameField<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

impl<'a> VhfNavaid<'a> {
    /// Returns `true` if the facility is a DME or TACAN without VOR.
    pub fn is_dme_only(&self) -> bool {
        !self.navaid_class.is_vor() && self.navaid_class.is_dme()
    }

    /// Returns the position of the VOR or, if the facility has no VOR
    /// position, of the DME.
    pub fn position(&self) -> Option<(Latitude<'a>, Longitude<'a>)> {
        self.vor_latitude
            .zip(self.vor_longitude)
            .or(self.dme_latitude.zip(self.dme_longitude))
    }
}

/// NDB navaid (`DB`).
#[derive(Record)]
pub struct NdbNavaid<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    pub arpt_ident: ArptHeliIdent<'a>,
    pub arpt_icao_code: IcaoCode<'a>,
    #[arinc424(skip(1))]
    pub ndb_ident: NavaidIdent<'a>,
    #[arinc424(skip(2))]
    pub icao_code: IcaoCode<'a>,
    pub cont_nr: ContNr,
    pub ndb_frequency: Frequency<'a>,
    pub navaid_class: NavaidClass<'a>,
    pub latitude: Option<Latitude<'a>>,
    pub longitude: Option<Longitude<'a>>,
    #[arinc424(field = 75)]
    pub mag_var: MagVar<'a>,
    #[arinc424(field = 91)]
    pub datum: DatumCode<'a>,
    pub ndb_name: NameField<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOR: &[u8] = b"SEURD        PAS   LS011660VDHW N46093000E006003500PAS N46093000E006003500E002001443      WGEPASSEIRY                      000442407";
    const NDB: &[u8] = b"SEURDB       GE    LS003840H  W N46143000E006060000                       E0020           WGEGENEVA                        000452407";

    #[test]
    fn vhf_navaid_record() {
        let vor = VhfNavaid::try_from(VOR).expect("VOR should parse");

        assert_eq!(vor.sec_code, SecCode::Navaid);
        assert_eq!(vor.sub_code.kind(&vor.sec_code), Ok(SubCodeKind::VHFNavaid));
        assert_eq!(vor.arpt_ident.value(), None);
        assert_eq!(vor.vor_ident.as_str(), "PAS");
        assert_eq!(vor.icao_code.as_str(), "LS");
        assert!(vor.cont_nr.is_primary());
        assert_eq!(vor.vor_frequency.as_str(), "11660");
        assert!(!vor.is_dme_only());
        assert_eq!(vor.dme_ident.as_str(), "PAS");
        assert_eq!(vor.station_declination.as_str(), "E0020");
        assert_eq!(vor.dme_elevation.as_str(), "01443");
        assert_eq!(vor.datum.as_str(), "WGE");
        assert_eq!(vor.vor_name.as_str(), "PASSEIRY");

        let (lat, lon) = vor.position().expect("VOR should have a position");
        assert_eq!(lat.as_str(), "N46093000");
        assert_eq!(lon.as_str(), "E006003500");
    }

    #[test]
    fn dme_position_is_used_without_vor() {
        let mut record = VOR.to_vec();
        record[27..32].copy_from_slice(b" DUW ");
        record[32..51].copy_from_slice(&[b' '; 19]);
        let dme = VhfNavaid::try_from(record.as_slice()).expect("DME should parse");

        assert!(dme.is_dme_only());
        assert_eq!(dme.vor_latitude, None);
        let (lat, _) = dme.position().expect("DME should have a position");
        assert_eq!(lat.as_str(), "N46093000");
    }

    #[test]
    fn ndb_navaid_record() {
        let ndb = NdbNavaid::try_from(NDB).expect("NDB should parse");

        assert_eq!(ndb.sub_code.kind(&ndb.sec_code), Ok(SubCodeKind::NDBNavaid));
        assert_eq!(ndb.ndb_ident.as_str(), "GE");
        assert_eq!(ndb.icao_code.as_str(), "LS");
        assert_eq!(ndb.ndb_frequency.as_str(), "03840");
        assert_eq!(ndb.mag_var.as_str(), "E0020");
        assert_eq!(ndb.datum.as_str(), "WGE");
        assert_eq!(ndb.ndb_name.as_str(), "GENEVA");
        assert!(ndb.latitude.is_some());
    }
}
