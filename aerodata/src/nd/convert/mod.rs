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

//! Extraction of entities from the source formats.
//!
//! Every format implements the [`Extractor`] trait. Each method returns a
//! fresh, lazy sequence that reads its source anew, and the source is closed
//! once the sequence is dropped.

use std::iter;

use super::{Airport, Airspace, AirspaceShape, Navaid, Runway, RunwayEnd, Waypoint};
use crate::Error;

mod arinc424;
mod ofmx;
mod openair;

pub use self::arinc424::Arinc424;
pub use self::ofmx::Ofmx;
pub use self::openair::{OpenAir, OpenAirBlock};

/// A sequence of entities or errors of the source.
///
/// An error is only returned if the source can't be read. Records that can't
/// be decoded into an entity are skipped.
pub type Entities<'a, T> = Box<dyn Iterator<Item = Result<T, Error>> + 'a>;

/// Extracts the entities of a source.
///
/// Formats that don't publish an entity type return an empty sequence for it.
///
/// # Examples
///
/// ```no_run
/// use aerodata::nd::{Arinc424, Extractor};
///
/// let source = Arinc424::new("ofmx_ls.zip");
/// for airport in source.airports() {
///     let airport = airport?;
///     println!("{} {:?}", airport.id, airport.name);
/// }
/// # Ok::<(), aerodata::Error>(())
/// ```
pub trait Extractor {
    fn airports(&self) -> Entities<'_, Airport>;

    fn runways(&self) -> Entities<'_, Runway>;

    fn runway_ends(&self) -> Entities<'_, RunwayEnd>;

    fn airspaces(&self) -> Entities<'_, Airspace>;

    fn navaids(&self) -> Entities<'_, Navaid>;

    fn waypoints(&self) -> Entities<'_, Waypoint>;

    fn airspace_shapes(&self) -> Entities<'_, AirspaceShape>;

    /// The cycle or version label of the data set, if the format has one.
    ///
    /// # Errors
    ///
    /// Returns an error if the source can't be read.
    fn cycle(&self) -> Result<Option<String>, Error> {
        Ok(None)
    }
}

fn empty<'a, T: 'a>() -> Entities<'a, T> {
    Box::new(iter::empty())
}

fn failed<'a, T: 'a>(e: Error) -> Entities<'a, T> {
    Box::new(iter::once(Err(e)))
}

/// Returns the entities of `result` or a sequence of its error.
fn entities<'a, T: 'a>(result: Result<Vec<T>, Error>) -> Entities<'a, T> {
    match result {
        Ok(entities) => Box::new(entities.into_iter().map(Ok)),
        Err(e) => failed(e),
    }
}
