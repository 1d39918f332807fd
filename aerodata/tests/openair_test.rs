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
use std::io::Write;
use std::path::PathBuf;

use aerodata::nd::{Airspace, Extractor, OpenAir, ShapeIndex};
use aerodata::{ArchiveMember, SourceConfig};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

const OPENAIR_DATA: &str = "\
* Switzerland
AC D
AN ZÜRICH TMA 1.1
AL 2500ft MSL
AH FL100
DP 47:30:00 N 008:30:00 E
DP 47:35:00 N 008:40:00 E
DP 47:25:00 N 008:45:00 E

AC R
AN LS-R2 MEIRINGEN
DP 46:40:00 N 008:10:00 E
DP 46:45:00 N 008:10:00 E

AC C
AN BERN CTR
DP 46:50:00 N 007:20:00 E
DP 46:55:00 N 007:30:00 E
DP 46:50:00 N 007:40:00 E
";

fn write_zip(dir: &TempDir, members: &[(&str, &str)]) -> PathBuf {
    let path = dir.path().join("ofmx_ls.zip");
    let file = fs::File::create(&path).expect("archive should be created");
    let mut zip = zip::ZipWriter::new(file);
    for (member, data) in members {
        zip.start_file(*member, SimpleFileOptions::default())
            .expect("member should be started");
        zip.write_all(data.as_bytes())
            .expect("member should be written");
    }
    zip.finish().expect("archive should be finished");
    path
}

fn airspace(name: &str, class: Option<&str>) -> Airspace {
    Airspace {
        id: format!("ARINC:UC:LS:{name}"),
        name: Some(name.to_string()),
        class: class.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn reads_blocks_and_shapes() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("ls.txt");
    fs::write(&path, OPENAIR_DATA).expect("fixture should be written");

    let source = OpenAir::new(&path);
    let blocks: Vec<_> = source
        .blocks()
        .expect("source should open")
        .collect::<Result<_, _>>()
        .expect("blocks should be read");
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[1].name, "LS-R2 MEIRINGEN");

    // the restricted area has only two points and no shape
    let shapes: Vec<_> = source
        .airspace_shapes()
        .collect::<Result<_, _>>()
        .expect("shapes should be read");
    assert_eq!(shapes.len(), 2);
    assert!(shapes.iter().all(|shape| shape.airspace_id.is_none()));

    assert_eq!(source.airports().count(), 0);
    assert_eq!(source.airspaces().count(), 0);
}

#[test]
fn correlates_by_name_and_class() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("ls.txt");
    fs::write(&path, OPENAIR_DATA).expect("fixture should be written");

    let shapes = ShapeIndex::from_extractor(&OpenAir::new(&path)).expect("shapes should be read");

    let zurich = shapes
        .resolve(&airspace("ZURICH TMA", Some("D")))
        .expect("shape should resolve by name and class");
    assert_eq!(zurich.name.as_deref(), Some("ZÜRICH TMA 1.1"));

    // an unknown class falls back to the name
    assert!(shapes.resolve(&airspace("ZURICH TMA", Some("E"))).is_some());
    assert!(shapes.resolve(&airspace("Bern CTR", None)).is_some());
    assert!(shapes.resolve(&airspace("GENEVA TMA", Some("D"))).is_none());
}

#[test]
fn selects_seeyou_member_of_isolated_directory() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = write_zip(
        &dir,
        &[
            ("ofmx_ls/isolated/ofmx_ls_openair.txt", "AC D\nAN WRONG\nDP 46:00:00 N 007:00:00 E\n"),
            ("ofmx_ls/isolated/ofmx_ls_seeyou.txt", OPENAIR_DATA),
            ("ofmx_ls/isolated/arinc_ls.pc", ""),
        ],
    );

    let blocks: Vec<_> = OpenAir::new(&path)
        .blocks()
        .expect("archive should open")
        .collect::<Result<_, _>>()
        .expect("blocks should be read");
    assert_eq!(blocks.len(), 3);

    let config = SourceConfig {
        openair: ArchiveMember {
            extension: ".txt".to_string(),
            preferred: vec!["openair".to_string()],
        },
        ..Default::default()
    };
    let blocks: Vec<_> = OpenAir::with_config(&path, &config)
        .blocks()
        .expect("archive should open")
        .collect::<Result<_, _>>()
        .expect("blocks should be read");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].name, "WRONG");
}
