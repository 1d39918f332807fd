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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::Point;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavaidKind {
    #[default]
    Vor,
    Ndb,
    Dme,
}

impl fmt::Display for NavaidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vor => write!(f, "VOR"),
            Self::Ndb => write!(f, "NDB"),
            Self::Dme => write!(f, "DME"),
        }
    }
}

/// A radio navigation aid.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Navaid {
    pub id: String,
    pub region: Option<String>,
    pub code_id: String,
    pub name: Option<String>,
    pub kind: NavaidKind,
    pub code_type: Option<String>,
    pub frequency: Option<f64>,
    pub frequency_uom: Option<String>,
    pub channel: Option<String>,
    pub ghost_frequency: Option<f64>,
    pub elevation: Option<f64>,
    pub elevation_uom: Option<String>,
    pub mag_var: Option<f64>,
    pub datum: Option<String>,
    /// Identity of the VOR a DME is co-located with.
    pub associated_vor_id: Option<String>,
    pub position: Option<Point<f64>>,
}
