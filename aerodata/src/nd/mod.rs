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

//! Navigation data entities and their extraction.

use geo::Point;

mod airport;
mod airspace;
mod convert;
pub mod ident;
mod navaid;
mod pairing;
mod runway;
mod shape;
mod waypoint;

pub use airport::Airport;
pub use airspace::{Airspace, AirspaceShape, VerticalLimit};
pub use convert::{Arinc424, Entities, Extractor, OpenAir, OpenAirBlock, Ofmx};
pub use navaid::{Navaid, NavaidKind};
pub use pairing::{Designator, RunwayEndRecord, RunwayPairing, Side};
pub use runway::{runway_centerline, Runway, RunwayEnd};
pub use shape::{normalize_class, normalize_name, ShapeIndex};
pub use waypoint::Waypoint;

/// Returns the point of a position if both coordinates are known.
fn position(latitude: Option<f64>, longitude: Option<f64>) -> Option<Point<f64>> {
    Some(crate::coord!(latitude?, longitude?))
}
