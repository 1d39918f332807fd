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

use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::decode;

/// Vertical limit of an airspace.
///
/// The `reference` is either a datum like `GND` or `UNL`, the unit of a level
/// like `FL`, or a vertical reference code like `ALT`. Each part may be absent.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VerticalLimit {
    pub reference: Option<String>,
    pub value: Option<i64>,
    pub uom: Option<String>,
}

impl VerticalLimit {
    /// Decodes the limit from its raw token, e.g. `FL095` or `GND`.
    pub fn decode(raw: &str, uom: Option<String>) -> Self {
        let (reference, value) = decode::vertical_limit(raw);
        Self {
            reference,
            value,
            uom,
        }
    }
}

/// Airspace.
///
/// The airspace is enclosed by its [`AirspaceShape`] which is published
/// separately, if at all, and ranges from the `lower` to `upper` limit.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airspace {
    pub id: String,
    pub region: Option<String>,
    pub code_id: Option<String>,
    pub code_type: Option<String>,
    pub name: Option<String>,
    pub local_type: Option<String>,
    pub class: Option<String>,
    pub upper: VerticalLimit,
    pub lower: VerticalLimit,
    pub remarks: Option<String>,
}

/// The border of an airspace.
///
/// Shapes of the OFMX shape extension know the identity of their airspace,
/// OpenAIR shapes are only known by name and class.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirspaceShape {
    pub airspace_id: Option<String>,
    pub name: Option<String>,
    pub class: Option<String>,
    pub ring: geo::LineString<f64>,
}

impl AirspaceShape {
    /// Returns the shape as polygon with a closed exterior.
    ///
    /// Returns `None` if the ring has fewer than three points.
    ///
    /// ```
    /// # use aerodata::nd::AirspaceShape;
    /// use aerodata::ring;
    ///
    /// let shape = AirspaceShape {
    ///     airspace_id: None,
    ///     name: Some("GENEVA CTR".to_string()),
    ///     class: Some("D".to_string()),
    ///     ring: ring![(46.0, 6.0), (46.5, 6.0), (46.5, 6.5)],
    /// };
    ///
    /// let polygon = shape.to_polygon().unwrap();
    /// assert_eq!(polygon.exterior().0.len(), 4);
    /// ```
    pub fn to_polygon(&self) -> Option<geo::Polygon<f64>> {
        (self.ring.0.len() >= 3).then(|| geo::Polygon::new(self.ring.clone(), vec![]))
    }
}

impl Display for VerticalLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match (&self.reference, self.value) {
            (Some(r), Some(v)) if r == "FL" => write!(f, "FL{v:03}")?,
            (Some(r), Some(v)) => write!(f, "{r} {v}")?,
            (Some(r), None) => write!(f, "{r}")?,
            (None, Some(v)) => write!(f, "{v}")?,
            (None, None) => write!(f, "-")?,
        }

        match &self.uom {
            Some(uom) => write!(f, " {uom}"),
            None => Ok(()),
        }
    }
}

impl Display for Airspace {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = self.name.as_deref().unwrap_or(&self.id);
        match &self.class {
            Some(class) => write!(
                f,
                "{name} (Class {class}) | {}/{}",
                self.upper, self.lower
            ),
            None => write!(f, "{name} | {}/{}", self.upper, self.lower),
        }
    }
}
