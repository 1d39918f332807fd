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

use geo::Point;

/// An airport or heliport.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airport {
    pub id: String,
    pub region: Option<String>,
    pub code_id: String,
    pub code_icao: Option<String>,
    pub code_gps: Option<String>,
    pub code_type: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub elevation: Option<f64>,
    pub elevation_uom: Option<String>,
    /// Magnetic variation in degrees, negative to the west.
    pub mag_var: Option<f64>,
    pub mag_var_year: Option<i64>,
    pub transition_alt: Option<f64>,
    pub transition_alt_uom: Option<String>,
    pub remarks: Option<String>,
    pub position: Option<Point<f64>>,
}
