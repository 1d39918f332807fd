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

//! ARINC 424 extraction.
//!
//! Every entity type is read in its own pass over the source. Only primary
//! records are used, continuation records are skipped.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use arinc424::fields::{Cycle, Latitude, Longitude, SecCode};
use arinc424::records::{self, RecordKind};
use arinc424::FixedField;
use geo::Point;
use log::{debug, trace};

use super::{empty, entities, failed, Entities, Extractor};
use crate::decode::{self, Band};
use crate::nd::{
    ident, position, Airport, Airspace, AirspaceShape, Designator, Navaid, NavaidKind, Runway,
    RunwayEnd, RunwayEndRecord, RunwayPairing, VerticalLimit, Waypoint,
};
use crate::source::Lines;
use crate::{ArchiveMember, Error, SourceConfig};

/// Extracts entities from an ARINC 424 file or a zip archive holding one.
///
/// # Examples
///
/// ```no_run
/// use aerodata::nd::{Arinc424, Extractor};
///
/// let source = Arinc424::new("ofmx_ls.zip");
/// println!("cycle {:?}", source.cycle()?);
///
/// for navaid in source.navaids() {
///     let navaid = navaid?;
///     println!("{} {:?} {:?}", navaid.code_id, navaid.frequency, navaid.frequency_uom);
/// }
/// # Ok::<(), aerodata::Error>(())
/// ```
pub struct Arinc424 {
    path: PathBuf,
    member: ArchiveMember,
}

impl Arinc424 {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_config(path, &SourceConfig::default())
    }

    pub fn with_config<P: Into<PathBuf>>(path: P, config: &SourceConfig) -> Self {
        Self {
            path: path.into(),
            member: config.arinc.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn records(&self) -> Result<impl Iterator<Item = Result<Vec<u8>, Error>>, Error> {
        Ok(Lines::open(&self.path, &self.member)?.records())
    }

    /// Lazily converts the records of the `kinds` with `f`.
    fn scan<'a, T, F>(&'a self, kinds: &'static [RecordKind], mut f: F) -> Entities<'a, T>
    where
        T: 'a,
        F: FnMut(RecordKind, &[u8]) -> Result<Option<T>, Error> + 'a,
    {
        let records = match self.records() {
            Ok(records) => records,
            Err(e) => return failed(e),
        };

        Box::new(records.filter_map(move |record| {
            let bytes = match record {
                Ok(bytes) => bytes,
                Err(e) => return Some(Err(e)),
            };

            let kind = RecordKind::of(&bytes).filter(|kind| kinds.contains(kind))?;
            skip(f(kind, &bytes)).map(Ok)
        }))
    }

    /// Reads all records of the `kind` and collects their entities.
    fn collect<T, F>(&self, kind: RecordKind, mut f: F) -> Result<Vec<T>, Error>
    where
        F: FnMut(&[u8]) -> Result<Option<T>, Error>,
    {
        let mut entities = Vec::new();
        for record in self.records()? {
            let bytes = record?;
            if RecordKind::of(&bytes) == Some(kind) {
                entities.extend(skip(f(&bytes)));
            }
        }
        Ok(entities)
    }

    fn collect_airports(&self) -> Result<Vec<Airport>, Error> {
        let mut airports = self.collect(RecordKind::Airport, airport)?;
        let codes: HashSet<String> = airports.iter().map(|a| a.code_id.clone()).collect();

        // runway thresholds of airports without an airport record
        let mut thresholds: Vec<(String, Vec<Point<f64>>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (code, point) in self.collect(RecordKind::Runway, threshold)? {
            if codes.contains(&code) {
                continue;
            }

            match index.get(&code) {
                Some(&i) => thresholds[i].1.push(point),
                None => {
                    index.insert(code.clone(), thresholds.len());
                    thresholds.push((code, vec![point]));
                }
            }
        }

        debug!(
            "synthesized {} airports from runway ends",
            thresholds.len()
        );

        airports.extend(thresholds.into_iter().map(|(code, points)| {
            let n = points.len() as f64;
            let lat = points.iter().map(|p| p.y()).sum::<f64>() / n;
            let lon = points.iter().map(|p| p.x()).sum::<f64>() / n;

            Airport {
                id: ident::airport(&code),
                code_icao: Some(code.clone()),
                code_id: code,
                position: Some(crate::coord!(lat, lon)),
                ..Default::default()
            }
        }));

        Ok(airports)
    }

    fn pairing(&self) -> Result<RunwayPairing, Error> {
        let mut pairing = RunwayPairing::new();
        for record in self.collect(RecordKind::Runway, runway_end)? {
            pairing.add(record);
        }

        debug!(
            "paired {} runway ends into {} runways",
            pairing.ends().len(),
            pairing.runways().len()
        );
        Ok(pairing)
    }
}

impl Extractor for Arinc424 {
    /// Returns the airports of the airport records and synthesizes airports
    /// that have runways but no airport record. The position of a synthesized
    /// airport is the centroid of its runway thresholds.
    fn airports(&self) -> Entities<'_, Airport> {
        entities(self.collect_airports())
    }

    fn runways(&self) -> Entities<'_, Runway> {
        entities(self.pairing().map(|p| p.into_parts().0))
    }

    fn runway_ends(&self) -> Entities<'_, RunwayEnd> {
        entities(self.pairing().map(|p| p.into_parts().1))
    }

    /// Returns controlled, restrictive and FIR/UIR airspaces. An airspace that
    /// is published more than once is returned only the first time.
    fn airspaces(&self) -> Entities<'_, Airspace> {
        let mut seen = HashSet::new();

        self.scan(
            &[
                RecordKind::ControlledAirspace,
                RecordKind::RestrictiveAirspace,
                RecordKind::FirUir,
            ],
            move |kind, bytes| {
                let airspace = match kind {
                    RecordKind::ControlledAirspace => controlled_airspace(parse(bytes)?),
                    RecordKind::RestrictiveAirspace => restrictive_airspace(parse(bytes)?),
                    _ => fir_uir(parse(bytes)?),
                };

                Ok(airspace.filter(|a| seen.insert(a.id.clone())))
            },
        )
    }

    fn navaids(&self) -> Entities<'_, Navaid> {
        self.scan(
            &[RecordKind::VhfNavaid, RecordKind::NdbNavaid],
            |kind, bytes| match kind {
                RecordKind::VhfNavaid => Ok(vhf_navaid(parse(bytes)?)),
                _ => Ok(ndb_navaid(parse(bytes)?)),
            },
        )
    }

    fn waypoints(&self) -> Entities<'_, Waypoint> {
        self.scan(&[RecordKind::Waypoint], |_, bytes| Ok(waypoint(parse(bytes)?)))
    }

    fn airspace_shapes(&self) -> Entities<'_, AirspaceShape> {
        empty()
    }

    /// Returns the cycle of the first record, e.g. `2407`.
    fn cycle(&self) -> Result<Option<String>, Error> {
        let first = match self.records()?.next() {
            Some(record) => record?,
            None => return Ok(None),
        };

        let cycle = first
            .get(arinc424::RECORD_LENGTH - Cycle::LENGTH..)
            .and_then(|bytes| Cycle::from_bytes(bytes).ok());

        Ok(cycle.and_then(|c| c.label()).map(str::to_string))
    }
}

/////////////////////////////////////////////////////////////////////////////
// Record Conversion
/////////////////////////////////////////////////////////////////////////////

fn parse<'a, R>(bytes: &'a [u8]) -> Result<R, Error>
where
    R: TryFrom<&'a [u8], Error = arinc424::Error>,
{
    R::try_from(bytes).map_err(|e| Error::InvalidArinc424 {
        record: bytes.to_vec(),
        error: e.to_string(),
    })
}

fn skip<T>(result: Result<Option<T>, Error>) -> Option<T> {
    result.unwrap_or_else(|e| {
        trace!("skipping record: {e}");
        None
    })
}

fn lat_lon(latitude: Option<Latitude>, longitude: Option<Longitude>) -> Option<Point<f64>> {
    position(
        latitude.and_then(|lat| lat.as_decimal().ok()),
        longitude.and_then(|lon| lon.as_decimal().ok()),
    )
}

fn feet(raw: &str) -> (Option<f64>, Option<String>) {
    let value = decode::int(raw).map(|v| v as f64);
    let uom = (!raw.trim().is_empty()).then(|| "FT".to_string());
    (value, uom)
}

fn airport(bytes: &[u8]) -> Result<Option<Airport>, Error> {
    let arpt: records::Airport = parse(bytes)?;
    if !arpt.cont_nr.is_primary() {
        return Ok(None);
    }

    let Some(code) = arpt.arpt_ident.value() else {
        return Ok(None);
    };

    let (elevation, elevation_uom) = feet(arpt.elevation.as_str());
    let (transition_alt, transition_alt_uom) = feet(arpt.transition_altitude.as_str());

    Ok(Some(Airport {
        id: ident::airport(code),
        region: arpt.icao_code.value().map(str::to_string),
        code_id: code.to_string(),
        code_icao: Some(code.to_string()),
        name: arpt.airport_name.value().map(str::to_string),
        elevation,
        elevation_uom,
        mag_var: decode::mag_var(arpt.mag_var.as_str()),
        transition_alt,
        transition_alt_uom,
        position: lat_lon(Some(arpt.latitude), Some(arpt.longitude)),
        ..Default::default()
    }))
}

/// The airport code and threshold position of a primary runway record.
fn threshold(bytes: &[u8]) -> Result<Option<(String, Point<f64>)>, Error> {
    let rwy: records::Runway = parse(bytes)?;
    if !rwy.cont_nr.is_primary() {
        return Ok(None);
    }

    let code = rwy.arpt_ident.value();
    let point = lat_lon(Some(rwy.threshold_latitude), Some(rwy.threshold_longitude));
    Ok(code.zip(point).map(|(code, point)| (code.to_string(), point)))
}

fn runway_end(bytes: &[u8]) -> Result<Option<RunwayEndRecord>, Error> {
    let rwy: records::Runway = parse(bytes)?;
    if !rwy.cont_nr.is_primary() {
        return Ok(None);
    }

    let Some(airport) = rwy.arpt_ident.value() else {
        return Ok(None);
    };

    let Some(designator) = Designator::parse(rwy.runway_id.as_str()) else {
        trace!("skipping runway {:?} of {airport}", rwy.runway_id);
        return Ok(None);
    };

    Ok(Some(RunwayEndRecord {
        airport: airport.to_string(),
        designator,
        length: rwy.runway_length.and_then(|l| l.as_u32().ok()).map(f64::from),
        width: rwy.runway_width.and_then(|w| w.as_u16().ok()).map(f64::from),
        true_bearing: rwy.rwy_brg.and_then(|brg| brg.true_north()),
        mag_bearing: rwy.rwy_brg.and_then(|brg| brg.magnetic()),
        position: lat_lon(Some(rwy.threshold_latitude), Some(rwy.threshold_longitude)),
    }))
}

fn controlled_airspace(arsp: records::ControlledAirspace) -> Option<Airspace> {
    if !arsp.cont_nr.is_primary() {
        return None;
    }

    let region = arsp.icao_code.as_str();
    let center = arsp.arsp_cntr.value()?;
    let arsp_type = arsp.arsp_type.as_str();

    Some(Airspace {
        id: ident::controlled_airspace(region, center, arsp_type),
        region: arsp.icao_code.value().map(str::to_string),
        code_id: Some(center.to_string()),
        code_type: arsp.arsp_type.value().map(str::to_string),
        name: arsp.arsp_name.value().map(str::to_string),
        class: arsp.arsp_class.value().map(str::to_string),
        upper: VerticalLimit::decode(
            arsp.upper_limit.as_str(),
            arsp.upper_unit_indicator.value().map(str::to_string),
        ),
        lower: VerticalLimit::decode(
            arsp.lower_limit.as_str(),
            arsp.lower_unit_indicator.value().map(str::to_string),
        ),
        ..Default::default()
    })
}

fn restrictive_airspace(arsp: records::RestrictiveAirspace) -> Option<Airspace> {
    if !arsp.cont_nr.is_primary() {
        return None;
    }

    let region = arsp.icao_code.as_str();
    let restrictive_type = arsp.restrictive_type.as_str();
    let designation = arsp.restrictive_designation.value()?;

    Some(Airspace {
        id: ident::restrictive_airspace(region, restrictive_type, designation),
        region: arsp.icao_code.value().map(str::to_string),
        code_id: Some(designation.to_string()),
        code_type: arsp.restrictive_type.value().map(str::to_string),
        name: arsp.arsp_name.value().map(str::to_string),
        upper: VerticalLimit::decode(
            arsp.upper_limit.as_str(),
            arsp.upper_unit_indicator.value().map(str::to_string),
        ),
        lower: VerticalLimit::decode(
            arsp.lower_limit.as_str(),
            arsp.lower_unit_indicator.value().map(str::to_string),
        ),
        ..Default::default()
    })
}

fn fir_uir(arsp: records::FirUir) -> Option<Airspace> {
    if !arsp.cont_nr.is_primary() {
        return None;
    }

    let ident = arsp.fir_uir_ident.value()?;

    Some(Airspace {
        id: ident::fir_uir(ident),
        region: arsp.cust_area.value().map(str::to_string),
        code_id: Some(ident.to_string()),
        code_type: arsp.fir_uir_indicator.value().map(str::to_string),
        name: arsp.fir_uir_name.value().map(str::to_string),
        upper: VerticalLimit::decode(arsp.upper_limit().as_str(), None),
        lower: VerticalLimit::decode(arsp.lower_limit().as_str(), None),
        ..Default::default()
    })
}

fn vhf_navaid(vhf: records::VhfNavaid) -> Option<Navaid> {
    if !vhf.cont_nr.is_primary() {
        return None;
    }

    let code = vhf.vor_ident.value()?;
    let region = vhf.icao_code.as_str();
    let (elevation, elevation_uom) = feet(vhf.dme_elevation.as_str());
    let (latitude, longitude) = vhf.position().unzip();

    Some(Navaid {
        id: ident::navaid("D", region, code),
        region: vhf.icao_code.value().map(str::to_string),
        code_id: code.to_string(),
        name: vhf.vor_name.value().map(str::to_string),
        kind: if vhf.is_dme_only() {
            NavaidKind::Dme
        } else {
            NavaidKind::Vor
        },
        code_type: vhf.navaid_class.value().map(str::to_string),
        frequency: decode::frequency(vhf.vor_frequency.as_str(), Band::Vhf),
        frequency_uom: vhf.vor_frequency.value().map(|_| "MHz".to_string()),
        elevation,
        elevation_uom,
        mag_var: decode::mag_var(vhf.station_declination.as_str()),
        datum: vhf.datum.value().map(str::to_string),
        position: lat_lon(latitude, longitude),
        ..Default::default()
    })
}

fn ndb_navaid(ndb: records::NdbNavaid) -> Option<Navaid> {
    if !ndb.cont_nr.is_primary() {
        return None;
    }

    let code = ndb.ndb_ident.value()?;
    let region = ndb.icao_code.as_str();

    Some(Navaid {
        id: ident::navaid("DB", region, code),
        region: ndb.icao_code.value().map(str::to_string),
        code_id: code.to_string(),
        name: ndb.ndb_name.value().map(str::to_string),
        kind: NavaidKind::Ndb,
        code_type: ndb.navaid_class.value().map(str::to_string),
        frequency: decode::frequency(ndb.ndb_frequency.as_str(), Band::Ndb),
        frequency_uom: ndb.ndb_frequency.value().map(|_| "kHz".to_string()),
        mag_var: decode::mag_var(ndb.mag_var.as_str()),
        datum: ndb.datum.value().map(str::to_string),
        position: lat_lon(ndb.latitude, ndb.longitude),
        ..Default::default()
    })
}

fn waypoint(wp: records::Waypoint) -> Option<Waypoint> {
    if !wp.cont_nr.is_primary() {
        return None;
    }

    let code = wp.fix_ident.value()?;
    let section = match wp.sec_code {
        SecCode::Airport => "PC",
        _ => "EA",
    };

    Some(Waypoint {
        id: ident::waypoint(section, wp.regn_code.as_str(), code),
        region: wp.regn_code.value().map(str::to_string),
        code_id: code.to_string(),
        name: Some(wp.name_desc.value().unwrap_or(code).to_string()),
        point_type: wp.waypoint_type.value().map(str::to_string),
        position: lat_lon(Some(wp.latitude), Some(wp.longitude)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const AIRPORT: &[u8] = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";
    const RUNWAY: &[u8] = b"SUSAP KJFKK6GRW04L   0120790440 N40372318W073470505         -0028300012046057200IIHIQ1                                     305541709";
    const NDB: &[u8] = b"SEURDB       GE    LS003840H  W N46143000E006060000                       E0020           WGEGENEVA                        000452407";
    const FIR: &[u8] = b"SEURUFLSASLSASF00100                                                                 GND  FL195   SWITZERLAND FIR          000432407";

    #[test]
    fn converts_airport() {
        let arpt = airport(AIRPORT)
            .expect("record should parse")
            .expect("airport should be primary");

        assert_eq!(arpt.id, "ARINC:PA:KJFK");
        assert_eq!(arpt.region.as_deref(), Some("K6"));
        assert_eq!(arpt.name.as_deref(), Some("JOHN F KENNEDY INTL"));
        assert_eq!(arpt.elevation, Some(13.0));
        assert_eq!(arpt.elevation_uom.as_deref(), Some("FT"));
        assert_eq!(arpt.mag_var, Some(-13.0));
        assert_eq!(arpt.transition_alt, Some(18000.0));

        let position = arpt.position.expect("airport should have a position");
        assert!(position.y() > 40.0 && position.x() < -73.0);
    }

    #[test]
    fn converts_runway_end() {
        let end = runway_end(RUNWAY)
            .expect("record should parse")
            .expect("runway should be primary");

        assert_eq!(end.airport, "KJFK");
        assert_eq!(end.designator.to_string(), "04L");
        assert_eq!(end.length, Some(12079.0));
        assert_eq!(end.width, Some(200.0));
        assert_eq!(end.mag_bearing, Some(44.0));
        assert_eq!(end.true_bearing, None);
    }

    #[test]
    fn converts_ndb_without_scaling() {
        let ndb = ndb_navaid(parse(NDB).expect("record should parse"))
            .expect("navaid should be primary");

        assert_eq!(ndb.id, "ARINC:DB:LS:GE");
        assert_eq!(ndb.kind, NavaidKind::Ndb);
        assert_eq!(ndb.frequency, Some(3840.0));
        assert_eq!(ndb.frequency_uom.as_deref(), Some("kHz"));
        assert_eq!(ndb.mag_var, Some(2.0));
    }

    #[test]
    fn converts_fir() {
        let fir = fir_uir(parse(FIR).expect("record should parse"))
            .expect("FIR should be primary");

        assert_eq!(fir.id, "ARINC:UF:LSAS");
        assert_eq!(fir.region.as_deref(), Some("EUR"));
        assert_eq!(fir.code_type.as_deref(), Some("F"));
        assert_eq!(fir.lower.reference.as_deref(), Some("GND"));
        assert_eq!(fir.upper.reference.as_deref(), Some("FL"));
        assert_eq!(fir.upper.value, Some(195));
    }

    #[test]
    fn skips_continuation_records() {
        let mut record = AIRPORT.to_vec();
        record[21] = b'1';
        assert_eq!(airport(&record).expect("record should parse"), None);
    }

    #[test]
    fn invalid_record_is_an_error() {
        assert!(matches!(
            airport(b"SUSAP KJFK"),
            Err(Error::InvalidArinc424 { .. })
        ));
    }
}
