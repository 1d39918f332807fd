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

//! Aeronautical data ingestion.
//!
//! This crate reads aeronautical reference data published as ARINC 424,
//! OFMX or OpenAIR and normalizes it into the entities of the [`nd`] module.
//! Every format is read by an [`Extractor`](nd::Extractor) that returns a lazy
//! sequence per entity type. All entities carry an identity that is derived
//! from the source fields only, so importing the same data twice yields the
//! same identities.
//!
//! # Examples
//!
//! ```no_run
//! use aerodata::nd::{Airspace, ShapeIndex};
//! use aerodata::{SourceConfig, SourceFormat};
//!
//! # fn main() -> Result<(), aerodata::Error> {
//! let config = SourceConfig::default();
//! let arinc = aerodata::open(SourceFormat::Arinc424, "ofmx_ls.zip", None, &config);
//! let openair = aerodata::open(SourceFormat::OpenAir, "ofmx_ls.zip", None, &config);
//!
//! // the ARINC airspaces have no borders, so we join them with OpenAIR shapes
//! let shapes = ShapeIndex::from_extractor(openair.as_ref())?;
//! for airspace in arinc.airspaces() {
//!     let airspace: Airspace = airspace?;
//!     if let Some(shape) = shapes.resolve(&airspace) {
//!         println!("{airspace} has {} points", shape.ring.0.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use log::debug;

#[macro_use]
mod macros;

mod config;
pub mod decode;
mod error;
pub mod nd;
pub mod source;
mod summary;

pub use config::{ArchiveMember, SourceConfig, SourceFormat};
pub use error::Error;
pub use summary::{ofmx_files, summarize, Summary};

use nd::{Arinc424, Extractor, OpenAir, Ofmx};

/// Returns the extractor of the `format` for the source at `path`.
///
/// The `shapes` path is the OFMX shape extension and ignored by other formats.
/// Opening the source is deferred until the first entity is requested.
pub fn open<P: Into<PathBuf>>(
    format: SourceFormat,
    path: P,
    shapes: Option<PathBuf>,
    config: &SourceConfig,
) -> Box<dyn Extractor> {
    if shapes.is_some() && format != SourceFormat::Ofmx {
        debug!("ignoring shape extension for {format} source");
    }

    match format {
        SourceFormat::Arinc424 => Box::new(Arinc424::with_config(path, config)),
        SourceFormat::OpenAir => Box::new(OpenAir::with_config(path, config)),
        SourceFormat::Ofmx => match shapes {
            Some(shapes) => Box::new(Ofmx::new(path).with_shapes(shapes)),
            None => Box::new(Ofmx::new(path)),
        },
    }
}
