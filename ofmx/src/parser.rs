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

use std::io::BufRead;

use log::{trace, warn};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::Error;
use crate::features::*;
use crate::xml;

/// Streaming iterator over OFMX features in an XML document.
///
/// Yields one [`Feature`] at a time as it encounters a selected feature
/// element in the XML stream. Only the subtree of the current element is
/// kept in memory. Unsupported elements are skipped, and so are elements
/// without identity or whose content can't be mapped to a feature.
///
/// If the document is not well-formed, the error is returned and the
/// iteration ends.
///
/// # Examples
///
/// ```
/// use ofmx::{Feature, FeatureKind, Features};
///
/// let xml = br#"
///   <OFMX-Snapshot version="0.1">
///     <Ahp>
///       <AhpUid region="LK"><codeId>LKPR</codeId></AhpUid>
///       <txtName>PRAHA/RUZYNE</txtName>
///     </Ahp>
///     <Dpn>
///       <DpnUid region="LK">
///         <codeId>ABEMI</codeId>
///         <geoLat>49.8N</geoLat>
///         <geoLong>14.5E</geoLong>
///       </DpnUid>
///     </Dpn>
///   </OFMX-Snapshot>"#;
///
/// let features: Vec<_> = Features::new(&xml[..])
///     .kinds(&[FeatureKind::Ahp])
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(features.len(), 1);
/// assert!(matches!(&features[0], Feature::Airport(_)));
/// ```
pub struct Features<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    kinds: Vec<FeatureKind>,
    done: bool,
}

impl<R: BufRead> Features<R> {
    /// Creates a new `Features` iterator over all feature kinds.
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buf: Vec::new(),
            kinds: FeatureKind::ALL.to_vec(),
            done: false,
        }
    }

    /// Restricts the iterator to the given feature kinds.
    ///
    /// Elements of other kinds are skipped without being deserialized.
    pub fn kinds(mut self, kinds: &[FeatureKind]) -> Self {
        self.kinds = kinds.to_vec();
        self
    }

    /// Reads the subtree of `start` back into an XML fragment.
    fn capture(&mut self, start: BytesStart<'static>) -> Result<String, Error> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Start(start))
            .map_err(|e| Error::Xml(e.to_string()))?;

        let mut depth = 1usize;
        let mut buf = Vec::new();
        while depth > 0 {
            buf.clear();
            let event = self.reader.read_event_into(&mut buf)?;
            match event {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth -= 1,
                Event::Eof => {
                    return Err(Error::Xml(
                        "unexpected end of document in feature element".to_string(),
                    ))
                }
                _ => {}
            }
            writer
                .write_event(event)
                .map_err(|e| Error::Xml(e.to_string()))?;
        }

        Ok(String::from_utf8(writer.into_inner())?)
    }
}

impl<R: BufRead> Iterator for Features<R> {
    type Item = Result<Feature, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            let (kind, start) = match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(e)) => {
                    let name = e.name();
                    match FeatureKind::of(local_name(name.as_ref())) {
                        Some(kind) if self.kinds.contains(&kind) => (kind, e.into_owned()),
                        _ => continue,
                    }
                }
                Ok(Event::Eof) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                _ => continue,
            };

            let fragment = match self.capture(start) {
                Ok(fragment) => fragment,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            match deserialize_feature(kind, &fragment) {
                Ok(Some(feature)) => return Some(Ok(feature)),
                Ok(None) => trace!("skipping {kind:?} without identity"),
                Err(e) => warn!("skipping {kind:?}: {e}"),
            }
        }

        None
    }
}

/// Deserializes a feature XML fragment into the public [`Feature`] type.
///
/// Returns `None` if the feature has no identity.
fn deserialize_feature(kind: FeatureKind, xml: &str) -> Result<Option<Feature>, Error> {
    let feature = match kind {
        FeatureKind::Ahp => {
            let x: xml::AhpXml = quick_xml::de::from_str(xml)?;
            airport(x).map(Feature::Airport)
        }
        FeatureKind::Rwy => {
            let x: xml::RwyXml = quick_xml::de::from_str(xml)?;
            runway(x).map(Feature::Runway)
        }
        FeatureKind::Rdn => {
            let x: xml::RdnXml = quick_xml::de::from_str(xml)?;
            runway_direction(x).map(Feature::RunwayDirection)
        }
        FeatureKind::Ase => {
            let x: xml::AseXml = quick_xml::de::from_str(xml)?;
            airspace(x).map(Feature::Airspace)
        }
        FeatureKind::Dpn => {
            let x: xml::DpnXml = quick_xml::de::from_str(xml)?;
            designated_point(x).map(Feature::DesignatedPoint)
        }
        FeatureKind::Vor | FeatureKind::Ndb | FeatureKind::Dme => {
            let x: xml::NavaidXml = quick_xml::de::from_str(xml)?;
            navaid(kind, x).map(Feature::Navaid)
        }
    };

    Ok(feature)
}

/// Returns the local name of an XML element, stripping any namespace prefix.
fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .position(|&b| b == b':')
        .map_or(name, |pos| &name[pos + 1..])
}

/// Trims the text and drops it if nothing is left.
fn text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Conversions from XML structs to public feature types
// ---------------------------------------------------------------------------

fn ahp_uid(x: xml::AhpUid) -> AhpUid {
    AhpUid {
        mid: text(x.mid),
        region: text(x.region),
        code_id: text(x.code_id),
    }
}

fn rwy_uid(x: xml::RwyUid) -> RwyUid {
    RwyUid {
        mid: text(x.mid),
        airport: x.ahp_uid.map(ahp_uid).unwrap_or_default(),
        designator: text(x.designator),
    }
}

fn point_uid(x: xml::PointUid) -> PointUid {
    PointUid {
        mid: text(x.mid),
        region: text(x.region),
        code_id: text(x.code_id),
        geo_lat: text(x.geo_lat),
        geo_long: text(x.geo_long),
    }
}

fn airport(x: xml::AhpXml) -> Option<Airport> {
    Some(Airport {
        uid: ahp_uid(x.uid?),
        name: text(x.name),
        code_icao: text(x.code_icao),
        code_gps: text(x.code_gps),
        code_type: text(x.code_type),
        geo_lat: text(x.geo_lat),
        geo_long: text(x.geo_long),
        elevation: text(x.val_elev),
        elevation_uom: text(x.uom_dist_ver),
        mag_var: text(x.val_mag_var),
        mag_var_date: text(x.date_mag_var),
        transition_alt: text(x.val_transition_alt),
        transition_alt_uom: text(x.uom_transition_alt),
        city: text(x.city),
        remarks: text(x.remarks),
    })
}

fn runway(x: xml::RwyXml) -> Option<Runway> {
    Some(Runway {
        uid: rwy_uid(x.uid?),
        length: text(x.val_len),
        width: text(x.val_wid),
        dimension_uom: text(x.uom_dim_rwy),
        composition: text(x.code_composition),
        preparation: text(x.code_preparation),
        pcn_note: text(x.pcn_note),
        strip_length: text(x.val_len_strip),
        strip_width: text(x.val_wid_strip),
        strip_uom: text(x.uom_dim_strip),
    })
}

fn runway_direction(x: xml::RdnXml) -> Option<RunwayDirection> {
    let uid = x.uid?;
    Some(RunwayDirection {
        uid: RdnUid {
            mid: text(uid.mid),
            runway: uid.rwy_uid.map(rwy_uid).unwrap_or_default(),
            designator: text(uid.designator),
        },
        geo_lat: text(x.geo_lat),
        geo_long: text(x.geo_long),
        true_bearing: text(x.val_true_brg),
        mag_bearing: text(x.val_mag_brg),
    })
}

fn airspace(x: xml::AseXml) -> Option<Airspace> {
    let uid = x.uid?;
    Some(Airspace {
        uid: AseUid {
            mid: text(uid.mid),
            region: text(uid.region),
            code_type: text(uid.code_type),
            code_id: text(uid.code_id),
        },
        name: text(x.name),
        local_type: text(x.local_type),
        class: text(x.code_class),
        upper: DistVer {
            code: text(x.code_dist_ver_upper),
            value: text(x.val_dist_ver_upper),
            uom: text(x.uom_dist_ver_upper),
        },
        lower: DistVer {
            code: text(x.code_dist_ver_lower),
            value: text(x.val_dist_ver_lower),
            uom: text(x.uom_dist_ver_lower),
        },
        remarks: text(x.remarks),
        pos_list: text(x.pos_list),
    })
}

fn designated_point(x: xml::DpnXml) -> Option<DesignatedPoint> {
    Some(DesignatedPoint {
        uid: point_uid(x.uid?),
        code_type: text(x.code_type),
        name: text(x.name),
    })
}

fn navaid(kind: FeatureKind, x: xml::NavaidXml) -> Option<Navaid> {
    let (kind, uid, vor_uid) = match kind {
        FeatureKind::Vor => (NavaidKind::Vor, x.vor_uid?, None),
        FeatureKind::Ndb => (NavaidKind::Ndb, x.ndb_uid?, None),
        _ => (NavaidKind::Dme, x.dme_uid?, x.vor_uid),
    };

    Some(Navaid {
        kind,
        uid: point_uid(uid),
        name: text(x.name),
        code_type: text(x.code_type),
        frequency: text(x.val_freq),
        frequency_uom: text(x.uom_freq),
        channel: text(x.code_channel),
        ghost_frequency: text(x.val_ghost_freq),
        elevation: text(x.val_elev),
        elevation_uom: text(x.uom_dist_ver),
        mag_var: text(x.val_mag_var),
        datum: text(x.code_datum),
        vor_uid: vor_uid.map(point_uid),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<OFMX-Snapshot version="0.1" origin="test" namespace="00000000-0000-0000-0000-000000000000">
  <Ahp source="LK|AD|LKPR">
    <AhpUid mid="ahp-1" region="LK">
      <codeId>LKPR</codeId>
    </AhpUid>
    <txtName>PRAHA/RUZYNE</txtName>
    <codeIcao>LKPR</codeIcao>
    <codeType>AD</codeType>
    <geoLat>50.10083333N</geoLat>
    <geoLong>014.26000000E</geoLong>
    <valElev>1247</valElev>
    <uomDistVer>FT</uomDistVer>
    <valMagVar>4.6</valMagVar>
    <dateMagVar>2018</dateMagVar>
    <txtNameCitySer>PRAHA</txtNameCitySer>
    <valTransitionAlt>5000</valTransitionAlt>
    <uomTransitionAlt>FT</uomTransitionAlt>
    <txtRmk/>
  </Ahp>
  <Rwy>
    <RwyUid mid="rwy-1">
      <AhpUid mid="ahp-1" region="LK"><codeId>LKPR</codeId></AhpUid>
      <txtDesig>06/24</txtDesig>
    </RwyUid>
    <valLen>3715</valLen>
    <valWid>45</valWid>
    <uomDimRwy>M</uomDimRwy>
    <codeComposition>ASPH</codeComposition>
  </Rwy>
  <Rdn>
    <RdnUid>
      <RwyUid mid="rwy-1">
        <AhpUid region="LK"><codeId>LKPR</codeId></AhpUid>
        <txtDesig>06/24</txtDesig>
      </RwyUid>
      <txtDesig>06</txtDesig>
    </RdnUid>
    <geoLat>50.09527778N</geoLat>
    <geoLong>014.22861111E</geoLong>
    <valTrueBrg>67.5</valTrueBrg>
    <valMagBrg>63</valMagBrg>
  </Rdn>
  <Ase>
    <AseUid mid="ase-1" region="LK">
      <codeType>CTR</codeType>
      <codeId>LKPRCTR</codeId>
    </AseUid>
    <txtName>PRAHA CTR</txtName>
    <codeClass>D</codeClass>
    <codeDistVerUpper>ALT</codeDistVerUpper>
    <valDistVerUpper>4000</valDistVerUpper>
    <uomDistVerUpper>FT</uomDistVerUpper>
    <codeDistVerLower>HEI</codeDistVerLower>
    <valDistVerLower>0</valDistVerLower>
    <uomDistVerLower>FT</uomDistVerLower>
  </Ase>
  <Dpn>
    <DpnUid region="LK">
      <codeId>ABEMI</codeId>
      <geoLat>49.81305556N</geoLat>
      <geoLong>014.51083333E</geoLong>
    </DpnUid>
    <codeType>ICAO</codeType>
    <txtName>ABEMI</txtName>
  </Dpn>
  <Vor>
    <VorUid region="LK">
      <codeId>OKL</codeId>
      <geoLat>50.09611111N</geoLat>
      <geoLong>014.26638889E</geoLong>
    </VorUid>
    <txtName>PRAHA</txtName>
    <codeType>VOR</codeType>
    <valFreq>112.6</valFreq>
    <uomFreq>MHZ</uomFreq>
  </Vor>
  <Dme>
    <DmeUid region="LK">
      <codeId>OKL</codeId>
      <geoLat>50.09611111N</geoLat>
      <geoLong>014.26638889E</geoLong>
    </DmeUid>
    <VorUid region="LK">
      <codeId>OKL</codeId>
      <geoLat>50.09611111N</geoLat>
      <geoLong>014.26638889E</geoLong>
    </VorUid>
    <codeChannel>73X</codeChannel>
  </Dme>
</OFMX-Snapshot>"#;

    fn collect(features: Features<&[u8]>) -> Vec<Feature> {
        features
            .collect::<Result<_, _>>()
            .expect("snapshot should be well-formed")
    }

    #[test]
    fn reads_all_feature_kinds() {
        let features = collect(Features::new(SNAPSHOT));
        assert_eq!(features.len(), 7);

        match &features[0] {
            Feature::Airport(ahp) => {
                assert_eq!(ahp.uid.mid.as_deref(), Some("ahp-1"));
                assert_eq!(ahp.uid.region.as_deref(), Some("LK"));
                assert_eq!(ahp.uid.code_id.as_deref(), Some("LKPR"));
                assert_eq!(ahp.name.as_deref(), Some("PRAHA/RUZYNE"));
                assert_eq!(ahp.geo_lat.as_deref(), Some("50.10083333N"));
                assert_eq!(ahp.mag_var_date.as_deref(), Some("2018"));
                assert_eq!(ahp.city.as_deref(), Some("PRAHA"));
                assert_eq!(ahp.remarks, None);
            }
            f => panic!("expected airport but got {f:?}"),
        }
    }

    #[test]
    fn runway_references_nested_identities() {
        let features = collect(Features::new(SNAPSHOT).kinds(&[FeatureKind::Rwy, FeatureKind::Rdn]));
        assert_eq!(features.len(), 2);

        match &features[0] {
            Feature::Runway(rwy) => {
                assert_eq!(rwy.uid.designator.as_deref(), Some("06/24"));
                assert_eq!(rwy.uid.airport.code_id.as_deref(), Some("LKPR"));
                assert_eq!(rwy.length.as_deref(), Some("3715"));
                assert_eq!(rwy.dimension_uom.as_deref(), Some("M"));
            }
            f => panic!("expected runway but got {f:?}"),
        }

        match &features[1] {
            Feature::RunwayDirection(rdn) => {
                assert_eq!(rdn.uid.mid, None);
                assert_eq!(rdn.uid.designator.as_deref(), Some("06"));
                assert_eq!(rdn.uid.runway.mid.as_deref(), Some("rwy-1"));
                assert_eq!(rdn.uid.runway.airport.region.as_deref(), Some("LK"));
                assert_eq!(rdn.true_bearing.as_deref(), Some("67.5"));
            }
            f => panic!("expected runway direction but got {f:?}"),
        }
    }

    #[test]
    fn airspace_limits() {
        let features = collect(Features::new(SNAPSHOT).kinds(&[FeatureKind::Ase]));
        match features.as_slice() {
            [Feature::Airspace(ase)] => {
                assert_eq!(ase.uid.code_type.as_deref(), Some("CTR"));
                assert_eq!(ase.class.as_deref(), Some("D"));
                assert_eq!(ase.upper.code.as_deref(), Some("ALT"));
                assert_eq!(ase.upper.value.as_deref(), Some("4000"));
                assert_eq!(ase.lower.code.as_deref(), Some("HEI"));
                assert!(ase.positions().is_empty());
            }
            f => panic!("expected one airspace but got {f:?}"),
        }
    }

    #[test]
    fn dme_keeps_associated_vor() {
        let features = collect(
            Features::new(SNAPSHOT).kinds(&[FeatureKind::Vor, FeatureKind::Ndb, FeatureKind::Dme]),
        );
        assert_eq!(features.len(), 2);

        match &features[1] {
            Feature::Navaid(dme) => {
                assert_eq!(dme.kind, NavaidKind::Dme);
                assert_eq!(dme.channel.as_deref(), Some("73X"));
                let vor = dme.vor_uid.as_ref().expect("DME should have a VOR");
                assert_eq!(vor.code_id.as_deref(), Some("OKL"));
            }
            f => panic!("expected DME but got {f:?}"),
        }
    }

    #[test]
    fn skips_features_without_identity() {
        let xml = br#"
        <OFMX-Snapshot>
          <Ahp><txtName>NOWHERE</txtName></Ahp>
          <Org><txtName>AUTHORITY</txtName></Org>
          <Ahp><AhpUid region="LK"><codeId>LKKB</codeId></AhpUid></Ahp>
        </OFMX-Snapshot>"#;

        let features = collect(Features::new(&xml[..]));
        assert_eq!(features.len(), 1);
        assert!(matches!(&features[0], Feature::Airport(a) if a.uid.code_id.as_deref() == Some("LKKB")));
    }

    #[test]
    fn reads_shape_extension() {
        let xml = br#"
        <OFMX-Snapshot>
          <Ase>
            <AseUid mid="ase-1" region="LK"><codeType>CTR</codeType><codeId>LKPRCTR</codeId></AseUid>
            <txtName>PRAHA CTR</txtName>
            <gmlPosList>14.1,50.1 14.3,50.1 14.3,50.2 14.1,50.1</gmlPosList>
          </Ase>
        </OFMX-Snapshot>"#;

        let features = collect(Features::new(&xml[..]));
        match features.as_slice() {
            [Feature::Airspace(ase)] => {
                assert_eq!(ase.uid.mid.as_deref(), Some("ase-1"));
                assert_eq!(ase.positions().len(), 4);
                assert_eq!(ase.positions()[1], (14.3, 50.1));
            }
            f => panic!("expected one airspace but got {f:?}"),
        }
    }

    #[test]
    fn malformed_document_ends_iteration() {
        let xml = br#"<OFMX-Snapshot><Ahp><AhpUid><codeId>LKPR</codeId></AhpUid></Rwy></OFMX-Snapshot>"#;

        let mut features = Features::new(&xml[..]);
        assert!(matches!(features.next(), Some(Err(Error::Xml(_)))));
        assert!(features.next().is_none());
    }
}
