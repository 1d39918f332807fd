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

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::nd::Extractor;
use crate::Error;

/// Number of entities per type of a source.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Summary {
    pub airports: usize,
    pub runways: usize,
    pub runway_ends: usize,
    pub airspaces: usize,
    pub navaids: usize,
    pub waypoints: usize,
    pub airspace_shapes: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "airports:        {}", self.airports)?;
        writeln!(f, "runways:         {}", self.runways)?;
        writeln!(f, "runway ends:     {}", self.runway_ends)?;
        writeln!(f, "airspaces:       {}", self.airspaces)?;
        writeln!(f, "navaids:         {}", self.navaids)?;
        writeln!(f, "waypoints:       {}", self.waypoints)?;
        write!(f, "airspace shapes: {}", self.airspace_shapes)
    }
}

fn count<T>(mut entities: impl Iterator<Item = Result<T, Error>>) -> Result<usize, Error> {
    entities.try_fold(0, |n, entity| entity.map(|_| n + 1))
}

/// Counts the entities of the `extractor` without keeping them.
///
/// # Errors
///
/// Returns the first error of any entity sequence.
pub fn summarize(extractor: &dyn Extractor) -> Result<Summary, Error> {
    Ok(Summary {
        airports: count(extractor.airports())?,
        runways: count(extractor.runways())?,
        runway_ends: count(extractor.runway_ends())?,
        airspaces: count(extractor.airspaces())?,
        navaids: count(extractor.navaids())?,
        waypoints: count(extractor.waypoints())?,
        airspace_shapes: count(extractor.airspace_shapes())?,
    })
}

/// Returns the OFMX files at `path`.
///
/// A file with the extension `ofmx` is returned as is and a directory is
/// searched recursively. The files are sorted by path.
///
/// # Errors
///
/// Returns an error if a directory can't be read.
pub fn ofmx_files<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>, Error> {
    let path = path.as_ref();
    let mut files = Vec::new();

    if path.is_dir() {
        collect(path, &mut files)?;
        files.sort();
    } else if is_ofmx(path) {
        files.push(path.to_path_buf());
    }

    Ok(files)
}

fn is_ofmx(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ofmx"))
}

fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), Error> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect(&path, files)?;
        } else if is_ofmx(&path) {
            files.push(path);
        }
    }
    Ok(())
}
