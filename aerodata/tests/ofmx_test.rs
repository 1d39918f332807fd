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

use std::fs;
use std::path::PathBuf;

use aerodata::nd::{Extractor, NavaidKind, Ofmx, ShapeIndex};
use aerodata::{ofmx_files, summarize, SourceConfig, SourceFormat};
use tempfile::TempDir;

const SNAPSHOT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
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
  </Ahp>
  <Ahp>
    <AhpUid region="LK"/>
    <txtName>WITHOUT CODE</txtName>
  </Ahp>
  <Rwy>
    <RwyUid>
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
      <RwyUid>
        <AhpUid mid="ahp-1" region="LK"><codeId>LKPR</codeId></AhpUid>
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
    <AseUid region="LK">
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
  <Ase>
    <AseUid region="LK">
      <codeType>TMA</codeType>
      <codeId>LKPRTMA</codeId>
    </AseUid>
    <txtName>PRAHA TMA</txtName>
    <codeClass>C</codeClass>
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

const SHAPES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<OFMX-Snapshot>
  <Ase>
    <AseUid region="LK">
      <codeType>CTR</codeType>
      <codeId>LKPRCTR</codeId>
    </AseUid>
    <txtName>PRAHA CTR</txtName>
    <gmlPosList>14.1,50.0 14.4,50.0 14.4,50.2 14.1,50.2</gmlPosList>
  </Ase>
  <Ase>
    <AseUid region="LK">
      <codeType>TMA</codeType>
      <codeId>LKPRTMA2</codeId>
    </AseUid>
    <txtName>Praha TMA 2.0</txtName>
    <codeClass>C</codeClass>
    <gmlPosList>13.9,49.8 14.6,49.8 14.6,50.4</gmlPosList>
  </Ase>
  <Ase>
    <AseUid region="LK">
      <codeType>TMA</codeType>
      <codeId>SHORT</codeId>
    </AseUid>
    <txtName>SHORT</txtName>
    <gmlPosList>13.9,49.8 14.6,49.8</gmlPosList>
  </Ase>
</OFMX-Snapshot>"#;

fn write(dir: &TempDir, name: &str, data: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, data).expect("fixture should be written");
    path
}

fn source(dir: &TempDir) -> Ofmx {
    Ofmx::new(write(dir, "lk.ofmx", SNAPSHOT)).with_shapes(write(dir, "lk_shapes.xml", SHAPES))
}

#[test]
fn extracts_entities() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let source = source(&dir);

    let airports: Vec<_> = source.airports().collect::<Result<_, _>>().expect("airports");
    assert_eq!(airports.len(), 1);
    assert_eq!(airports[0].id, "ahp-1");
    assert_eq!(airports[0].elevation, Some(1247.0));

    let runways: Vec<_> = source.runways().collect::<Result<_, _>>().expect("runways");
    assert_eq!(runways.len(), 1);
    assert_eq!(runways[0].id, "OFMX:Rwy:ahp-1:06/24");
    assert_eq!(runways[0].airport_id, "ahp-1");
    assert_eq!(runways[0].surface.as_deref(), Some("ASPH"));
    assert_eq!(runways[0].length, Some(3715.0));

    let ends: Vec<_> = source.runway_ends().collect::<Result<_, _>>().expect("runway ends");
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].runway_id, runways[0].id);
    assert_eq!(ends[0].true_bearing, Some(67.5));
    assert_eq!(ends[0].mag_bearing, Some(63.0));

    let airspaces: Vec<_> = source.airspaces().collect::<Result<_, _>>().expect("airspaces");
    assert_eq!(airspaces.len(), 2);
    assert_eq!(airspaces[0].id, "OFMX:Ase:LK:CTR:LKPRCTR:PRAHA CTR");
    assert_eq!(airspaces[0].upper.reference.as_deref(), Some("ALT"));
    assert_eq!(airspaces[0].upper.value, Some(4000));
    assert_eq!(airspaces[0].lower.value, Some(0));

    let waypoints: Vec<_> = source.waypoints().collect::<Result<_, _>>().expect("waypoints");
    assert_eq!(waypoints.len(), 1);
    assert_eq!(waypoints[0].point_type.as_deref(), Some("ICAO"));
}

#[test]
fn associates_dme_with_vor() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let source = source(&dir);

    let navaids: Vec<_> = source.navaids().collect::<Result<_, _>>().expect("navaids");
    assert_eq!(navaids.len(), 2);

    let vor = &navaids[0];
    assert_eq!(vor.kind, NavaidKind::Vor);
    assert_eq!(vor.frequency, Some(112.6));

    let dme = &navaids[1];
    assert_eq!(dme.kind, NavaidKind::Dme);
    assert_eq!(dme.channel.as_deref(), Some("73X"));
    assert_eq!(dme.associated_vor_id.as_deref(), Some(vor.id.as_str()));
    assert_ne!(dme.id, vor.id);
}

#[test]
fn resolves_shapes_by_identity_and_name() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let source = source(&dir);

    let shapes = ShapeIndex::from_extractor(&source).expect("shapes should be read");
    assert_eq!(shapes.len(), 2);

    let airspaces: Vec<_> = source.airspaces().collect::<Result<_, _>>().expect("airspaces");

    let ctr = shapes.resolve(&airspaces[0]).expect("CTR should resolve by identity");
    assert_eq!(ctr.ring.0.len(), 4);

    let tma = shapes.resolve(&airspaces[1]).expect("TMA should resolve by name");
    assert_eq!(tma.ring.0.len(), 3);
}

#[test]
fn opens_by_format_tag() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = write(&dir, "lk.ofmx", SNAPSHOT);

    let format = "ofmx".parse::<SourceFormat>().expect("format should be known");
    let source = aerodata::open(format, path, None, &SourceConfig::default());
    let summary = summarize(source.as_ref()).expect("snapshot should be readable");

    assert_eq!(summary.airports, 1);
    assert_eq!(summary.runways, 1);
    assert_eq!(summary.runway_ends, 1);
    assert_eq!(summary.airspaces, 2);
    assert_eq!(summary.navaids, 2);
    assert_eq!(summary.waypoints, 1);
    assert_eq!(summary.airspace_shapes, 0);
    assert_eq!(source.cycle().expect("cycle"), None);
}

#[test]
fn malformed_snapshot_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let source = Ofmx::new(write(&dir, "broken.ofmx", "<OFMX-Snapshot><Ahp><AhpUid></Ahp>"));

    assert!(source
        .airports()
        .any(|airport| matches!(airport, Err(aerodata::Error::Xml(_)))));
}

#[test]
fn discovers_snapshots() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    write(&dir, "lk.ofmx", SNAPSHOT);
    write(&dir, "lk_shapes.xml", SHAPES);

    let files = ofmx_files(dir.path()).expect("dir should be readable");
    assert_eq!(files, vec![dir.path().join("lk.ofmx")]);
}
