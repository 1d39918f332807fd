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

//! OpenAIR extraction.
//!
//! OpenAIR only describes airspace volumes, so the extractor provides shapes
//! and no other entities.

use std::mem;
use std::path::{Path, PathBuf};

use geo::Point;
use log::trace;

use super::{empty, failed, Entities, Extractor};
use crate::nd::{Airport, Airspace, AirspaceShape, Navaid, Runway, RunwayEnd, Waypoint};
use crate::source::Lines;
use crate::{ArchiveMember, Error, SourceConfig};

/// An airspace block of an OpenAIR file.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct OpenAirBlock {
    pub name: String,
    pub class: Option<String>,
    pub lower: Option<String>,
    pub upper: Option<String>,
    pub points: Vec<Point<f64>>,
}

/// Extracts airspace shapes from an OpenAIR file or a zip archive holding one.
pub struct OpenAir {
    path: PathBuf,
    member: ArchiveMember,
}

impl OpenAir {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_config(path, &SourceConfig::default())
    }

    pub fn with_config<P: Into<PathBuf>>(path: P, config: &SourceConfig) -> Self {
        Self {
            path: path.into(),
            member: config.openair.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the airspace blocks with a name and at least one point.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be opened.
    pub fn blocks(&self) -> Result<impl Iterator<Item = Result<OpenAirBlock, Error>>, Error> {
        let lines = Lines::open(&self.path, &self.member)?.text();
        Ok(Blocks {
            lines,
            pending: Pending::default(),
            done: false,
        })
    }
}

impl Extractor for OpenAir {
    fn airports(&self) -> Entities<'_, Airport> {
        empty()
    }

    fn runways(&self) -> Entities<'_, Runway> {
        empty()
    }

    fn runway_ends(&self) -> Entities<'_, RunwayEnd> {
        empty()
    }

    fn airspaces(&self) -> Entities<'_, Airspace> {
        empty()
    }

    fn navaids(&self) -> Entities<'_, Navaid> {
        empty()
    }

    fn waypoints(&self) -> Entities<'_, Waypoint> {
        empty()
    }

    /// Returns the blocks with at least three points as shapes.
    fn airspace_shapes(&self) -> Entities<'_, AirspaceShape> {
        let blocks = match self.blocks() {
            Ok(blocks) => blocks,
            Err(e) => return failed(e),
        };

        Box::new(blocks.filter_map(|block| match block {
            Ok(block) if block.points.len() >= 3 => Some(Ok(AirspaceShape {
                airspace_id: None,
                name: Some(block.name),
                class: block.class,
                ring: block.points.into_iter().collect(),
            })),
            Ok(block) => {
                trace!("skipping shape of {} with {} points", block.name, block.points.len());
                None
            }
            Err(e) => Some(Err(e)),
        }))
    }
}

/// The block that is read until the next `AC` directive.
#[derive(Default)]
struct Pending {
    name: Option<String>,
    class: Option<String>,
    lower: Option<String>,
    upper: Option<String>,
    points: Vec<Point<f64>>,
}

impl Pending {
    fn into_block(self) -> Option<OpenAirBlock> {
        match self.name {
            Some(name) if !self.points.is_empty() => Some(OpenAirBlock {
                name,
                class: self.class,
                lower: self.lower,
                upper: self.upper,
                points: self.points,
            }),
            _ => None,
        }
    }
}

struct Blocks<I> {
    lines: I,
    pending: Pending,
    done: bool,
}

impl<I> Iterator for Blocks<I>
where
    I: Iterator<Item = Result<String, Error>>,
{
    type Item = Result<OpenAirBlock, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => return Some(Err(e)),
                None => {
                    self.done = true;
                    return mem::take(&mut self.pending).into_block().map(Ok);
                }
            };

            let line = line.trim();
            if line.is_empty() || line.starts_with('*') {
                continue;
            }

            let Some((directive, value)) = line.split_at_checked(3) else {
                continue;
            };
            let value = Some(value.trim()).filter(|v| !v.is_empty()).map(str::to_string);

            match directive {
                "AC " => {
                    let block = mem::take(&mut self.pending).into_block();
                    self.pending.class = value;
                    if let Some(block) = block {
                        return Some(Ok(block));
                    }
                }
                "AN " => self.pending.name = value,
                "AL " => self.pending.lower = value,
                "AH " => self.pending.upper = value,
                "DP " => match value.as_deref().and_then(point) {
                    Some(point) => self.pending.points.push(point),
                    None => trace!("skipping point {line:?}"),
                },
                _ => {}
            }
        }

        None
    }
}

/// Parses a `DP` coordinate like `46:57:30 N 007:26:00 E`.
fn point(value: &str) -> Option<Point<f64>> {
    let value = value.replace(',', " ");
    let mut tokens = value.split_whitespace();

    let lat = dms(&mut tokens, ['N', 'S'])?;
    let lon = dms(&mut tokens, ['E', 'W'])?;
    Some(crate::coord!(lat, lon))
}

/// Reads tokens up to the first hemisphere letter of `hemispheres`, which may
/// end the last token or stand alone, and parses `deg[:min[:sec]]`.
fn dms<'a, I>(tokens: &mut I, hemispheres: [char; 2]) -> Option<f64>
where
    I: Iterator<Item = &'a str>,
{
    let mut text = String::new();
    let mut hemisphere = None;

    for token in tokens.by_ref() {
        match token.chars().last() {
            Some(c) if hemispheres.contains(&c) => {
                text.push_str(&token[..token.len() - 1]);
                hemisphere = Some(c);
                break;
            }
            _ => text.push_str(token),
        }
    }

    let mut parts = text.split(':');
    let degrees: f64 = parts.next()?.parse().ok()?;
    let minutes: f64 = parts.next().map_or(Ok(0.0), str::parse).ok()?;
    let seconds: f64 = parts.next().map_or(Ok(0.0), str::parse).ok()?;

    let value = degrees + minutes / 60.0 + seconds / 3600.0;
    match hemisphere? {
        'S' | 'W' => Some(-value),
        _ => Some(value),
    }
}
