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

//! Public OFMX feature types yielded by the [`Features`](crate::Features)
//! iterator.
//!
//! Each struct is a flat representation of one OFMX element. Values are kept
//! as the published text with surrounding whitespace removed, so callers
//! decide how to decode coordinates, numbers and units. Empty elements are
//! `None`.

/// A parsed OFMX feature yielded by [`Features`](crate::Features).
///
/// # Examples
///
/// ```no_run
/// # let data: &[u8] = &[];
/// for result in ofmx::Features::new(data) {
///     match result.unwrap() {
///         ofmx::Feature::Airport(ahp) => {
///             println!("{:?}: {:?}", ahp.uid.code_id, ahp.name);
///         }
///         ofmx::Feature::Navaid(nav) => {
///             println!("{:?} {:?}", nav.kind, nav.uid.code_id);
///         }
///         _ => {}
///     }
/// }
/// ```
#[derive(Clone, Debug)]
pub enum Feature {
    /// An airport or heliport (`Ahp`).
    Airport(Airport),
    /// A physical runway (`Rwy`).
    Runway(Runway),
    /// One direction of a runway (`Rdn`).
    RunwayDirection(RunwayDirection),
    /// An airspace (`Ase`), including its border in the shape extension.
    Airspace(Airspace),
    /// A designated point (`Dpn`).
    DesignatedPoint(DesignatedPoint),
    /// A VOR (`Vor`), NDB (`Ndb`) or DME (`Dme`).
    Navaid(Navaid),
}

/// The element kinds read by the [`Features`](crate::Features) iterator.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum FeatureKind {
    Ahp,
    Rwy,
    Rdn,
    Ase,
    Dpn,
    Vor,
    Ndb,
    Dme,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 8] = [
        Self::Ahp,
        Self::Rwy,
        Self::Rdn,
        Self::Ase,
        Self::Dpn,
        Self::Vor,
        Self::Ndb,
        Self::Dme,
    ];

    /// Returns the kind for an element's local name.
    pub fn of(local_name: &[u8]) -> Option<Self> {
        match local_name {
            b"Ahp" => Some(Self::Ahp),
            b"Rwy" => Some(Self::Rwy),
            b"Rdn" => Some(Self::Rdn),
            b"Ase" => Some(Self::Ase),
            b"Dpn" => Some(Self::Dpn),
            b"Vor" => Some(Self::Vor),
            b"Ndb" => Some(Self::Ndb),
            b"Dme" => Some(Self::Dme),
            _ => None,
        }
    }
}

/// Identity of an airport (`AhpUid`).
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct AhpUid {
    /// Stable key assigned by the publisher.
    pub mid: Option<String>,
    pub region: Option<String>,
    pub code_id: Option<String>,
}

/// Identity of a runway (`RwyUid`), nested in the identity of its airport.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct RwyUid {
    pub mid: Option<String>,
    pub airport: AhpUid,
    /// Designator of both ends, e.g. `"06/24"`.
    pub designator: Option<String>,
}

/// Identity of a runway direction (`RdnUid`), nested in the identity of its
/// runway.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct RdnUid {
    pub mid: Option<String>,
    pub runway: RwyUid,
    /// Designator of this end, e.g. `"06"`.
    pub designator: Option<String>,
}

/// Identity of an airspace (`AseUid`).
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct AseUid {
    pub mid: Option<String>,
    pub region: Option<String>,
    pub code_type: Option<String>,
    pub code_id: Option<String>,
}

/// Identity of a point feature (`DpnUid`, `VorUid`, `NdbUid` or `DmeUid`).
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct PointUid {
    pub mid: Option<String>,
    pub region: Option<String>,
    pub code_id: Option<String>,
    pub geo_lat: Option<String>,
    pub geo_long: Option<String>,
}

/// An airport or heliport parsed from an `Ahp` element.
#[derive(Clone, Debug)]
pub struct Airport {
    pub uid: AhpUid,
    pub name: Option<String>,
    pub code_icao: Option<String>,
    pub code_gps: Option<String>,
    /// `AD`, `HP`, `AH` or `LS`.
    pub code_type: Option<String>,
    /// Latitude of the reference point, e.g. `"50.10083333N"`.
    pub geo_lat: Option<String>,
    pub geo_long: Option<String>,
    pub elevation: Option<String>,
    pub elevation_uom: Option<String>,
    pub mag_var: Option<String>,
    /// Year of the magnetic variation.
    pub mag_var_date: Option<String>,
    pub transition_alt: Option<String>,
    pub transition_alt_uom: Option<String>,
    pub city: Option<String>,
    pub remarks: Option<String>,
}

/// A physical runway parsed from a `Rwy` element.
#[derive(Clone, Debug)]
pub struct Runway {
    pub uid: RwyUid,
    pub length: Option<String>,
    pub width: Option<String>,
    pub dimension_uom: Option<String>,
    pub composition: Option<String>,
    pub preparation: Option<String>,
    pub pcn_note: Option<String>,
    pub strip_length: Option<String>,
    pub strip_width: Option<String>,
    pub strip_uom: Option<String>,
}

/// One direction of a runway parsed from a `Rdn` element.
#[derive(Clone, Debug)]
pub struct RunwayDirection {
    pub uid: RdnUid,
    pub geo_lat: Option<String>,
    pub geo_long: Option<String>,
    pub true_bearing: Option<String>,
    pub mag_bearing: Option<String>,
}

/// Upper or lower limit of an airspace.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct DistVer {
    /// Reference of the value, e.g. `ALT`, `HEI` or `STD`.
    pub code: Option<String>,
    pub value: Option<String>,
    pub uom: Option<String>,
}

/// An airspace parsed from an `Ase` element.
///
/// In the shape extension, the element carries the airspace's border as
/// [`pos_list`](Self::pos_list) and otherwise only its identity and name.
#[derive(Clone, Debug)]
pub struct Airspace {
    pub uid: AseUid,
    pub name: Option<String>,
    pub local_type: Option<String>,
    pub class: Option<String>,
    pub upper: DistVer,
    pub lower: DistVer,
    pub remarks: Option<String>,
    /// Border as `lon,lat` pairs separated by whitespace.
    pub pos_list: Option<String>,
}

impl Airspace {
    /// Returns the border as `(longitude, latitude)` pairs.
    ///
    /// Pairs that are not two comma separated numbers are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ofmx::{Airspace, AseUid, DistVer};
    /// let ase = Airspace {
    ///     uid: AseUid::default(),
    ///     name: None,
    ///     local_type: None,
    ///     class: None,
    ///     upper: DistVer::default(),
    ///     lower: DistVer::default(),
    ///     remarks: None,
    ///     pos_list: Some("14.1,50.1 14.2,50.2".to_string()),
    /// };
    ///
    /// assert_eq!(ase.positions(), vec![(14.1, 50.1), (14.2, 50.2)]);
    /// ```
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.pos_list
            .as_deref()
            .map(parse_pos_list)
            .unwrap_or_default()
    }
}

/// A designated point parsed from a `Dpn` element.
#[derive(Clone, Debug)]
pub struct DesignatedPoint {
    pub uid: PointUid,
    pub code_type: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum NavaidKind {
    Vor,
    Ndb,
    Dme,
}

/// A radio navigation aid parsed from a `Vor`, `Ndb` or `Dme` element.
#[derive(Clone, Debug)]
pub struct Navaid {
    pub kind: NavaidKind,
    pub uid: PointUid,
    pub name: Option<String>,
    pub code_type: Option<String>,
    pub frequency: Option<String>,
    pub frequency_uom: Option<String>,
    pub channel: Option<String>,
    pub ghost_frequency: Option<String>,
    pub elevation: Option<String>,
    pub elevation_uom: Option<String>,
    pub mag_var: Option<String>,
    pub datum: Option<String>,
    /// Identity of the VOR a DME is associated with.
    pub vor_uid: Option<PointUid>,
}

fn parse_pos_list(text: &str) -> Vec<(f64, f64)> {
    text.split_whitespace()
        .filter_map(|pair| {
            let (lon, lat) = pair.split_once(',')?;
            Some((lon.trim().parse().ok()?, lat.trim().parse().ok()?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pos_list_pairs() {
        assert_eq!(
            parse_pos_list(" 14.1,50.1\n14.2,50.2  14.3,50.3 "),
            vec![(14.1, 50.1), (14.2, 50.2), (14.3, 50.3)]
        );
    }

    #[test]
    fn skips_malformed_pairs() {
        assert_eq!(parse_pos_list("14.1,50.1 14.2 x,50.3"), vec![(14.1, 50.1)]);
        assert!(parse_pos_list("").is_empty());
    }

    #[test]
    fn kind_of_local_name() {
        assert_eq!(FeatureKind::of(b"Ahp"), Some(FeatureKind::Ahp));
        assert_eq!(FeatureKind::of(b"AhpUid"), None);
    }
}
