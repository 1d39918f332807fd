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

//! OFMX parser for OpenFlightMaps snapshots.
//!
//! OFMX is the XML format in which OpenFlightMaps publishes its aeronautical
//! data. A snapshot lists its features (airports, runways, airspaces, ...) as
//! flat elements identified by a nested `<...Uid>` element. The [`Features`]
//! iterator streams those elements from any [`BufRead`](std::io::BufRead)
//! source and yields them as [`Feature`]s.
//!
//! The shape extension of a snapshot uses the same `Ase` elements to publish
//! the border of each airspace. It is read with the same iterator and the
//! border is available through [`Airspace::positions`].

mod error;
mod features;
mod parser;
mod xml;

pub use error::Error;
pub use features::*;
pub use parser::Features;
