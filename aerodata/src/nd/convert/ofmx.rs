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

//! OFMX extraction.
//!
//! Each entity type streams the snapshot once and only deserializes the
//! elements of its own kind.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use geo::{Coord, LineString};
use log::{info, trace};
use ofmx::{Feature, FeatureKind, Features};

use super::{empty, failed, Entities, Extractor};
use crate::decode;
use crate::nd::{
    ident, position, Airport, Airspace, AirspaceShape, Navaid, NavaidKind, Runway, RunwayEnd,
    VerticalLimit, Waypoint,
};
use crate::Error;

/// Extracts entities from an OFMX snapshot and, optionally, airspace shapes
/// from the snapshot's shape extension.
pub struct Ofmx {
    path: PathBuf,
    shapes: Option<PathBuf>,
}

impl Ofmx {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            shapes: None,
        }
    }

    /// Reads airspace shapes from the shape extension at `path`.
    pub fn with_shapes<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.shapes = Some(path.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Streams the features of `kinds` from `path` converted by `f`.
    ///
    /// Features that `f` rejects are skipped.
    fn features<'a, T, F>(path: &Path, kinds: &[FeatureKind], mut f: F) -> Entities<'a, T>
    where
        T: 'a,
        F: FnMut(Feature) -> Option<T> + 'a,
    {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => return failed(e.into()),
        };

        info!("reading {kinds:?} from {}", path.display());

        Box::new(
            Features::new(BufReader::new(file))
                .kinds(kinds)
                .filter_map(move |feature| match feature {
                    Ok(feature) => f(feature).map(Ok),
                    Err(e) => Some(Err(Error::Xml(e))),
                }),
        )
    }
}

impl Extractor for Ofmx {
    fn airports(&self) -> Entities<'_, Airport> {
        Self::features(&self.path, &[FeatureKind::Ahp], |feature| match feature {
            Feature::Airport(ahp) => airport(ahp),
            _ => None,
        })
    }

    fn runways(&self) -> Entities<'_, Runway> {
        Self::features(&self.path, &[FeatureKind::Rwy], |feature| match feature {
            Feature::Runway(rwy) => runway(rwy),
            _ => None,
        })
    }

    fn runway_ends(&self) -> Entities<'_, RunwayEnd> {
        Self::features(&self.path, &[FeatureKind::Rdn], |feature| match feature {
            Feature::RunwayDirection(rdn) => runway_end(rdn),
            _ => None,
        })
    }

    fn airspaces(&self) -> Entities<'_, Airspace> {
        Self::features(&self.path, &[FeatureKind::Ase], |feature| match feature {
            Feature::Airspace(ase) => airspace(ase),
            _ => None,
        })
    }

    fn navaids(&self) -> Entities<'_, Navaid> {
        Self::features(
            &self.path,
            &[FeatureKind::Vor, FeatureKind::Ndb, FeatureKind::Dme],
            |feature| match feature {
                Feature::Navaid(nav) => navaid(nav),
                _ => None,
            },
        )
    }

    fn waypoints(&self) -> Entities<'_, Waypoint> {
        Self::features(&self.path, &[FeatureKind::Dpn], |feature| match feature {
            Feature::DesignatedPoint(dpn) => waypoint(dpn),
            _ => None,
        })
    }

    /// Returns the shapes of the shape extension, or nothing if no extension
    /// was given.
    fn airspace_shapes(&self) -> Entities<'_, AirspaceShape> {
        match &self.shapes {
            Some(path) => Self::features(path, &[FeatureKind::Ase], |feature| match feature {
                Feature::Airspace(ase) => shape(ase),
                _ => None,
            }),
            None => empty(),
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Feature Conversion
/////////////////////////////////////////////////////////////////////////////

fn float(value: &Option<String>) -> Option<f64> {
    value.as_deref().and_then(decode::float)
}

fn point(lat: &Option<String>, lon: &Option<String>) -> Option<geo::Point<f64>> {
    position(
        lat.as_deref().and_then(decode::coordinate),
        lon.as_deref().and_then(decode::coordinate),
    )
}

fn airport(ahp: ofmx::Airport) -> Option<Airport> {
    let Some(id) = ident::ahp(&ahp.uid) else {
        trace!("skipping airport without identity: {:?}", ahp.uid);
        return None;
    };

    Some(Airport {
        id,
        region: ahp.uid.region.clone(),
        code_id: ahp.uid.code_id.clone().unwrap_or_default(),
        code_icao: ahp.code_icao,
        code_gps: ahp.code_gps,
        code_type: ahp.code_type,
        name: ahp.name,
        city: ahp.city,
        elevation: float(&ahp.elevation),
        elevation_uom: ahp.elevation_uom,
        mag_var: float(&ahp.mag_var),
        mag_var_year: ahp.mag_var_date.as_deref().and_then(decode::int),
        transition_alt: float(&ahp.transition_alt),
        transition_alt_uom: ahp.transition_alt_uom,
        remarks: ahp.remarks,
        position: point(&ahp.geo_lat, &ahp.geo_long),
    })
}

fn runway(rwy: ofmx::Runway) -> Option<Runway> {
    let (Some(id), Some(airport_id)) = (ident::rwy(&rwy.uid), ident::ahp(&rwy.uid.airport)) else {
        trace!("skipping runway without identity: {:?}", rwy.uid);
        return None;
    };

    Some(Runway {
        id,
        airport_id,
        designator: rwy.uid.designator.clone().unwrap_or_default(),
        length: float(&rwy.length),
        width: float(&rwy.width),
        uom_dim_rwy: rwy.dimension_uom,
        surface: rwy.composition,
        preparation: rwy.preparation,
        pcn_note: rwy.pcn_note,
        strip_length: float(&rwy.strip_length),
        strip_width: float(&rwy.strip_width),
        uom_dim_strip: rwy.strip_uom,
    })
}

fn runway_end(rdn: ofmx::RunwayDirection) -> Option<RunwayEnd> {
    let (Some(id), Some(runway_id), Some(airport_id)) = (
        ident::rdn(&rdn.uid),
        ident::rwy(&rdn.uid.runway),
        ident::ahp(&rdn.uid.runway.airport),
    ) else {
        trace!("skipping runway direction without identity: {:?}", rdn.uid);
        return None;
    };

    Some(RunwayEnd {
        id,
        runway_id,
        airport_id,
        designator: rdn.uid.designator.clone().unwrap_or_default(),
        true_bearing: float(&rdn.true_bearing),
        mag_bearing: float(&rdn.mag_bearing),
        position: point(&rdn.geo_lat, &rdn.geo_long),
    })
}

fn limit(dist: ofmx::DistVer) -> VerticalLimit {
    VerticalLimit {
        reference: dist.code,
        value: dist.value.as_deref().and_then(decode::int),
        uom: dist.uom,
    }
}

fn airspace(ase: ofmx::Airspace) -> Option<Airspace> {
    let Some(id) = ident::ase(&ase.uid, &ase.name) else {
        trace!("skipping airspace without identity: {:?}", ase.uid);
        return None;
    };

    Some(Airspace {
        id,
        region: ase.uid.region,
        code_id: ase.uid.code_id,
        code_type: ase.uid.code_type,
        name: ase.name,
        local_type: ase.local_type,
        class: ase.class,
        upper: limit(ase.upper),
        lower: limit(ase.lower),
        remarks: ase.remarks,
    })
}

fn navaid(nav: ofmx::Navaid) -> Option<Navaid> {
    let kind = match nav.kind {
        ofmx::NavaidKind::Vor => NavaidKind::Vor,
        ofmx::NavaidKind::Ndb => NavaidKind::Ndb,
        ofmx::NavaidKind::Dme => NavaidKind::Dme,
    };

    let Some(id) = ident::navaid_uid(kind, &nav.uid) else {
        trace!("skipping {kind} without identity: {:?}", nav.uid);
        return None;
    };

    Some(Navaid {
        id,
        region: nav.uid.region.clone(),
        code_id: nav.uid.code_id.clone().unwrap_or_default(),
        name: nav.name,
        kind,
        code_type: nav.code_type,
        frequency: float(&nav.frequency),
        frequency_uom: nav.frequency_uom,
        channel: nav.channel,
        ghost_frequency: float(&nav.ghost_frequency),
        elevation: float(&nav.elevation),
        elevation_uom: nav.elevation_uom,
        mag_var: float(&nav.mag_var),
        datum: nav.datum,
        associated_vor_id: nav
            .vor_uid
            .as_ref()
            .and_then(|vor| ident::navaid_uid(NavaidKind::Vor, vor)),
        position: point(&nav.uid.geo_lat, &nav.uid.geo_long),
    })
}

fn waypoint(dpn: ofmx::DesignatedPoint) -> Option<Waypoint> {
    let Some(id) = ident::dpn(&dpn.uid) else {
        trace!("skipping designated point without identity: {:?}", dpn.uid);
        return None;
    };

    Some(Waypoint {
        id,
        region: dpn.uid.region.clone(),
        code_id: dpn.uid.code_id.clone().unwrap_or_default(),
        name: dpn.name,
        point_type: dpn.code_type,
        position: point(&dpn.uid.geo_lat, &dpn.uid.geo_long),
    })
}

fn shape(ase: ofmx::Airspace) -> Option<AirspaceShape> {
    let ring: LineString<f64> = ase
        .positions()
        .into_iter()
        .map(|(x, y)| Coord { x, y })
        .collect();

    if ring.0.len() < 3 {
        trace!("skipping shape of {:?} with {} points", ase.uid, ring.0.len());
        return None;
    }

    Some(AirspaceShape {
        airspace_id: ident::ase(&ase.uid, &ase.name),
        name: ase.name,
        class: ase.class,
        ring,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ahp(mid: Option<&str>, code_id: Option<&str>) -> ofmx::Airport {
        ofmx::Airport {
            uid: ofmx::AhpUid {
                mid: mid.map(str::to_string),
                region: Some("LK".to_string()),
                code_id: code_id.map(str::to_string),
            },
            name: Some("PRAHA/RUZYNE".to_string()),
            code_icao: code_id.map(str::to_string),
            code_gps: None,
            code_type: Some("AD".to_string()),
            geo_lat: Some("50.10083333N".to_string()),
            geo_long: Some("014.26000000E".to_string()),
            elevation: Some("1247".to_string()),
            elevation_uom: Some("FT".to_string()),
            mag_var: Some("4.6".to_string()),
            mag_var_date: Some("2018".to_string()),
            transition_alt: Some("5000".to_string()),
            transition_alt_uom: Some("FT".to_string()),
            city: None,
            remarks: None,
        }
    }

    #[test]
    fn converts_airport() {
        let arpt = airport(ahp(None, Some("LKPR"))).expect("airport should have identity");

        assert_eq!(arpt.id, "OFMX:Ahp:LK:LKPR");
        assert_eq!(arpt.code_id, "LKPR");
        assert_eq!(arpt.elevation, Some(1247.0));
        assert_eq!(arpt.mag_var, Some(4.6));
        assert_eq!(arpt.mag_var_year, Some(2018));
        assert_eq!(arpt.position, Some(crate::coord!(50.10083333, 14.26)));
    }

    #[test]
    fn mid_is_preferred_identity() {
        let arpt = airport(ahp(Some("ahp-1"), Some("LKPR"))).expect("airport should have identity");
        assert_eq!(arpt.id, "ahp-1");
    }

    #[test]
    fn airport_without_identity_is_skipped() {
        assert_eq!(airport(ahp(None, None)), None);
    }

    #[test]
    fn unparsable_values_are_absent() {
        let mut ahp = ahp(None, Some("LKPR"));
        ahp.elevation = Some("n/a".to_string());
        ahp.geo_lat = Some("50.1X".to_string());

        let arpt = airport(ahp).expect("airport should have identity");
        assert_eq!(arpt.elevation, None);
        assert_eq!(arpt.position, None);
    }

    #[test]
    fn shape_needs_three_points() {
        let ase = ofmx::Airspace {
            uid: ofmx::AseUid {
                mid: Some("ase-1".to_string()),
                ..Default::default()
            },
            name: Some("PRAHA CTR".to_string()),
            local_type: None,
            class: Some("D".to_string()),
            upper: ofmx::DistVer::default(),
            lower: ofmx::DistVer::default(),
            remarks: None,
            pos_list: Some("14.1,50.1 14.2,50.2".to_string()),
        };

        assert_eq!(shape(ase.clone()), None);

        let ase = ofmx::Airspace {
            pos_list: Some("14.1,50.1 14.2,50.2 14.3,50.1".to_string()),
            ..ase
        };
        let shape = shape(ase).expect("shape should have three points");
        assert_eq!(shape.airspace_id.as_deref(), Some("ase-1"));
        assert_eq!(shape.ring.0[0], Coord { x: 14.1, y: 50.1 });
    }
}
