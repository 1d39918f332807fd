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

use crate::{Alphanumeric, Error};

/// Decodes the degrees, minutes, seconds and centiseconds after the hemisphere
/// letter. `D` is the number of degree digits.
fn dms<const D: usize>(bytes: &[u8], max_deg: f64) -> Result<f64, Error> {
    let deg = parse_numeric!(u16, bytes[1..1 + D])? as f64;
    let min = parse_numeric!(u8, bytes[1 + D..3 + D])? as f64;
    let sec = parse_numeric!(u16, bytes[3 + D..7 + D])? as f64 / 100.0;

    if min >= 60.0 || sec >= 60.0 {
        return Err(Error::InvalidVariant {
            field: "Coordinate",
            bytes: bytes.to_vec(),
            expected: "minutes and seconds below 60",
        });
    }

    let decimal = deg + min / 60.0 + sec / 3600.0;
    if decimal > max_deg {
        return Err(Error::InvalidVariant {
            field: "Coordinate",
            bytes: bytes.to_vec(),
            expected: "a coordinate within the valid range",
        });
    }

    Ok(decimal)
}

pub type Latitude<'a> = Alphanumeric<'a, 9>;

impl<'a> Latitude<'a> {
    /// Returns the latitude as decimal in the range -90.0 (south) to 90.0 (north).
    ///
    /// # Errors
    ///
    /// Returns an error if blank, out of range or if the hemisphere is neither
    /// `N` nor `S`.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let decimal = dms::<2>(self.0, 90.0)?;

        match self.first() {
            b'N' => Ok(decimal),
            b'S' => Ok(-decimal),
            hem => Err(Error::InvalidCharacter {
                field: "Latitude",
                byte: hem,
                expected: "N or S",
            }),
        }
    }
}

pub type Longitude<'a> = Alphanumeric<'a, 10>;

impl<'a> Longitude<'a> {
    /// Returns the longitude as decimal in the range -180.0 (west) to 180.0 (east).
    ///
    /// # Errors
    ///
    /// Returns an error if blank, out of range or if the hemisphere is neither
    /// `W` nor `E`.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let decimal = dms::<3>(self.0, 180.0)?;

        match self.first() {
            b'E' => Ok(decimal),
            b'W' => Ok(-decimal),
            hem => Err(Error::InvalidCharacter {
                field: "Longitude",
                byte: hem,
                expected: "E or W",
            }),
        }
    }
}
