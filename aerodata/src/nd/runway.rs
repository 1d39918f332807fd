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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{LineString, Point};

/// A physical runway with its pair designator, e.g. `05/23`.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    pub id: String,
    pub airport_id: String,
    pub designator: String,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub uom_dim_rwy: Option<String>,
    pub surface: Option<String>,
    pub preparation: Option<String>,
    pub pcn_note: Option<String>,
    pub strip_length: Option<f64>,
    pub strip_width: Option<f64>,
    pub uom_dim_strip: Option<String>,
}

fn max(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

fn first(a: &Option<String>, b: &Option<String>) -> Option<String> {
    a.as_ref().or(b.as_ref()).cloned()
}

impl Runway {
    /// Merges two records of the same runway.
    ///
    /// Dimensions take the larger value and text fields the first present
    /// value. The identity is kept from `self`.
    ///
    /// ```
    /// # use aerodata::nd::Runway;
    /// let a = Runway { length: Some(1000.0), ..Default::default() };
    /// let b = Runway { length: Some(1200.0), width: Some(30.0), ..Default::default() };
    ///
    /// let merged = a.merge(&b);
    /// assert_eq!(merged.length, Some(1200.0));
    /// assert_eq!(merged.width, Some(30.0));
    /// ```
    pub fn merge(&self, other: &Runway) -> Runway {
        Runway {
            id: self.id.clone(),
            airport_id: self.airport_id.clone(),
            designator: self.designator.clone(),
            length: max(self.length, other.length),
            width: max(self.width, other.width),
            uom_dim_rwy: first(&self.uom_dim_rwy, &other.uom_dim_rwy),
            surface: first(&self.surface, &other.surface),
            preparation: first(&self.preparation, &other.preparation),
            pcn_note: first(&self.pcn_note, &other.pcn_note),
            strip_length: max(self.strip_length, other.strip_length),
            strip_width: max(self.strip_width, other.strip_width),
            uom_dim_strip: first(&self.uom_dim_strip, &other.uom_dim_strip),
        }
    }
}

/// One end of a runway, e.g. `05`.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayEnd {
    pub id: String,
    pub runway_id: String,
    pub airport_id: String,
    pub designator: String,
    pub true_bearing: Option<f64>,
    pub mag_bearing: Option<f64>,
    pub position: Option<Point<f64>>,
}

/// Returns the line between the positions of the first two runway ends.
///
/// Ends without a position are skipped. Returns `None` if fewer than two
/// positions are known.
pub fn runway_centerline(ends: &[RunwayEnd]) -> Option<LineString<f64>> {
    let points: Vec<Point<f64>> = ends.iter().filter_map(|end| end.position).take(2).collect();
    (points.len() == 2).then(|| LineString::from(points))
}
