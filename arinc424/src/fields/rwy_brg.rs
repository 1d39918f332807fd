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

use crate::{Error, FixedField};

/// Runway bearing.
///
/// Magnetic bearings are written in tenths of a degree (`2302` is 230.2°).
/// Runways in areas of unreliable magnetic variation are published with a
/// true bearing in whole degrees followed by `T` (`347T`).
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub enum RwyBrg {
    MagneticNorth(f64),
    TrueNorth(f64),
}

impl RwyBrg {
    /// Returns the bearing if it is oriented to magnetic north.
    pub fn magnetic(&self) -> Option<f64> {
        match self {
            Self::MagneticNorth(deg) => Some(*deg),
            Self::TrueNorth(_) => None,
        }
    }

    /// Returns the bearing if it is oriented to true north.
    pub fn true_north(&self) -> Option<f64> {
        match self {
            Self::TrueNorth(deg) => Some(*deg),
            Self::MagneticNorth(_) => None,
        }
    }
}

impl FixedField<'_> for RwyBrg {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        let bytes = bytes.get(..4).ok_or(Error::InvalidFieldLength {
            expected: 4,
            actual: bytes.len(),
        })?;

        match bytes[3] {
            b'T' => Ok(Self::TrueNorth(parse_numeric!(u16, bytes[0..3])? as f64)),
            _ => Ok(Self::MagneticNorth(
                parse_numeric!(u16, bytes[0..4])? as f64 / 10.0,
            )),
        }
    }
}
