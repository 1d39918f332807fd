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

//! ARINC 424 fields.
//!
//! Fields with a meaning beyond their text provide typed accessors. All other
//! fields are aliases of [`Alphanumeric`] or [`Numeric`] named after the
//! column they are read from.

use crate::{Alphanumeric, Numeric};

mod cont_nr;
mod coordinate;
mod cycle;
mod navaid_class;
mod record_type;
mod runway_id;
mod rwy_brg;
mod sec_sub_code;

pub use cont_nr::ContNr;
pub use coordinate::{Latitude, Longitude};
pub use cycle::Cycle;
pub use navaid_class::NavaidClass;
pub use record_type::RecordType;
pub use runway_id::RunwayId;
pub use rwy_brg::RwyBrg;
pub use sec_sub_code::{SecCode, SubCode, SubCodeKind};

pub type ArptHeliIdent<'a> = Alphanumeric<'a, 4>;
pub type CustArea<'a> = Alphanumeric<'a, 3>;
pub type DatumCode<'a> = Alphanumeric<'a, 3>;
/// Elevation in feet, may be signed.
pub type Elevation<'a> = Alphanumeric<'a, 5>;
pub type FileRecordNumber<'a> = Numeric<'a, 5>;
pub type FixIdent<'a> = Alphanumeric<'a, 5>;
pub type Frequency<'a> = Alphanumeric<'a, 5>;
pub type Iata<'a> = Alphanumeric<'a, 3>;
pub type IcaoCode<'a> = Alphanumeric<'a, 2>;
/// Lower or upper limit of an airspace, e.g. `GND`, `FL245` or `05000`.
pub type Limit<'a> = Alphanumeric<'a, 5>;
/// Magnetic variation or station declination, e.g. `E0140`.
pub type MagVar<'a> = Alphanumeric<'a, 5>;
pub type NameDesc<'a> = Alphanumeric<'a, 25>;
pub type NameField<'a> = Alphanumeric<'a, 30>;
pub type NavaidIdent<'a> = Alphanumeric<'a, 4>;
pub type RegnCode<'a> = Alphanumeric<'a, 4>;
pub type RunwayLength<'a> = Numeric<'a, 5>;
pub type RunwayWidth<'a> = Numeric<'a, 3>;
pub type TransitionAltitude<'a> = Alphanumeric<'a, 5>;
pub type UnitIndicator<'a> = Alphanumeric<'a, 1>;
pub type WaypointType<'a> = Alphanumeric<'a, 3>;
