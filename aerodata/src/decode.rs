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

//! Field decoders.
//!
//! Each decoder converts a raw text slice into a typed value and returns
//! `None` if the slice is blank or malformed. None of them fail.

use arinc424::fields::{Latitude, Longitude};
use arinc424::FixedField;

/// Radio band of a frequency field.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Band {
    /// VHF frequencies are written in hundredths of a MHz (`11660`).
    Vhf,
    /// NDB frequencies are written in kHz.
    Ndb,
}

fn digits(s: &str) -> Option<i64> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Decodes a signed integer.
///
/// ```
/// # use aerodata::decode;
/// assert_eq!(decode::int(" 3900 "), Some(3900));
/// assert_eq!(decode::int("39O0"), None);
/// assert_eq!(decode::int("     "), None);
/// ```
pub fn int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Decodes a finite floating point number.
pub fn float(raw: &str) -> Option<f64> {
    raw.trim().parse().ok().filter(|f: &f64| f.is_finite())
}

/// Decodes a fixed-width latitude `HDDMMSSss` to signed decimal degrees.
pub fn latitude(raw: &str) -> Option<f64> {
    Latitude::from_bytes(raw.trim().as_bytes())
        .ok()
        .filter(|_| raw.trim().len() == Latitude::LENGTH)?
        .as_decimal()
        .ok()
}

/// Decodes a fixed-width longitude `HDDDMMSSss` to signed decimal degrees.
pub fn longitude(raw: &str) -> Option<f64> {
    Longitude::from_bytes(raw.trim().as_bytes())
        .ok()
        .filter(|_| raw.trim().len() == Longitude::LENGTH)?
        .as_decimal()
        .ok()
}

/// Decodes a coordinate in decimal degrees followed by its hemisphere letter,
/// e.g. `50.10083333N` or `014.26000000E`.
pub fn coordinate(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let hemisphere = raw.chars().last()?;
    let degrees = float(&raw[..raw.len() - hemisphere.len_utf8()])?;

    let (sign, max) = match hemisphere.to_ascii_uppercase() {
        'N' => (1.0, 90.0),
        'S' => (-1.0, 90.0),
        'E' => (1.0, 180.0),
        'W' => (-1.0, 180.0),
        _ => return None,
    };

    (0.0..=max).contains(&degrees).then_some(sign * degrees)
}

/// Decodes a magnetic variation.
///
/// A leading `W`, `S` or `-` makes the variation negative. Two or more digits
/// are tenths of a degree, a single digit is whole degrees.
///
/// ```
/// # use aerodata::decode;
/// assert_eq!(decode::mag_var("E0020"), Some(2.0));
/// assert_eq!(decode::mag_var("W0125"), Some(-12.5));
/// assert_eq!(decode::mag_var("W3"), Some(-3.0));
/// ```
pub fn mag_var(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let first = raw.chars().next()?;
    let sign = if matches!(first, 'W' | 'S' | '-') { -1.0 } else { 1.0 };
    let rest = if first.is_ascii_alphabetic() || first == '+' || first == '-' {
        raw[1..].trim()
    } else {
        raw
    };

    let magnitude = digits(rest)? as f64;
    if rest.len() >= 2 {
        Some(sign * magnitude / 10.0)
    } else {
        Some(sign * magnitude)
    }
}

/// Decodes a frequency of the given band.
///
/// VHF frequencies are returned in MHz and NDB frequencies in kHz.
pub fn frequency(raw: &str, band: Band) -> Option<f64> {
    let value = digits(raw.trim())? as f64;
    match band {
        Band::Vhf => Some(value / 100.0),
        Band::Ndb => Some(value),
    }
}

/// Decodes a bearing written in tenths of a degree.
pub fn bearing(raw: &str) -> Option<f64> {
    digits(raw.trim()).map(|tenths| tenths as f64 / 10.0)
}

/// Decodes a vertical limit into its reference and numeric value.
///
/// ```
/// # use aerodata::decode;
/// assert_eq!(decode::vertical_limit("FL065"), (Some("FL".to_string()), Some(65)));
/// assert_eq!(decode::vertical_limit("GND"), (Some("GND".to_string()), None));
/// assert_eq!(decode::vertical_limit("3500"), (None, Some(3500)));
/// ```
pub fn vertical_limit(raw: &str) -> (Option<String>, Option<i64>) {
    let raw = raw.trim();
    if raw.is_empty() {
        return (None, None);
    }

    if matches!(raw, "GND" | "SFC" | "UNL" | "UNLTD") {
        return (Some(raw.to_string()), None);
    }

    if let Some(level) = raw.strip_prefix("FL").and_then(digits) {
        return (Some("FL".to_string()), Some(level));
    }

    if let Some(value) = digits(raw) {
        return (None, Some(value));
    }

    if let (Some(code), Some(value)) = (raw.get(..2), raw.get(2..).and_then(digits)) {
        if code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return (Some(code.to_string()), Some(value));
        }
    }

    (Some(raw.to_string()), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_strict() {
        assert_eq!(int("-12"), Some(-12));
        assert_eq!(int("12.5"), None);
        assert_eq!(int("1 2"), None);
        assert_eq!(int(""), None);
    }

    #[test]
    fn floats_must_be_finite() {
        assert_eq!(float(" 112.6 "), Some(112.6));
        assert_eq!(float("NaN"), None);
        assert_eq!(float("inf"), None);
        assert_eq!(float("abc"), None);
    }

    #[test]
    fn fixed_width_coordinates_are_signed() {
        let lat = latitude("N46093000").expect("latitude should decode");
        assert!((lat - 46.158333).abs() < 1e-6);

        let lat = latitude("S33563800").expect("latitude should decode");
        assert!(lat < 0.0);

        let lon = longitude("W073464329").expect("longitude should decode");
        assert!((lon + 73.778692).abs() < 1e-6);

        let lon = longitude("E006003500").expect("longitude should decode");
        assert!(lon >= 0.0);
    }

    #[test]
    fn malformed_fixed_width_coordinates_are_absent() {
        assert_eq!(latitude("N460930"), None);
        assert_eq!(latitude("X46093000"), None);
        assert_eq!(latitude("         "), None);
        assert_eq!(longitude("E0060035OO"), None);
    }

    #[test]
    fn decimal_coordinates() {
        assert_eq!(coordinate("50.5N"), Some(50.5));
        assert_eq!(coordinate("014.25W"), Some(-14.25));
        assert_eq!(coordinate("33.9S"), Some(-33.9));
        assert_eq!(coordinate("91.0N"), None);
        assert_eq!(coordinate("50.5"), None);
        assert_eq!(coordinate("N"), None);
        assert_eq!(coordinate(""), None);
    }

    #[test]
    fn magnetic_variation() {
        assert_eq!(mag_var("-15"), Some(-1.5));
        assert_eq!(mag_var("E7"), Some(7.0));
        assert_eq!(mag_var("W00X5"), None);
        assert_eq!(mag_var(""), None);
    }

    #[test]
    fn frequencies_by_band() {
        assert_eq!(frequency("11660", Band::Vhf), Some(116.6));
        assert_eq!(frequency("00384", Band::Ndb), Some(384.0));
        assert_eq!(frequency("116.6", Band::Vhf), None);
        assert_eq!(frequency("     ", Band::Ndb), None);
    }

    #[test]
    fn bearing_in_tenths() {
        assert_eq!(bearing("0452"), Some(45.2));
        assert_eq!(bearing("347T"), None);
    }

    #[test]
    fn vertical_limits() {
        assert_eq!(vertical_limit("UNLTD"), (Some("UNLTD".to_string()), None));
        assert_eq!(vertical_limit("SFC"), (Some("SFC".to_string()), None));
        assert_eq!(vertical_limit("AL050"), (Some("AL".to_string()), Some(50)));
        assert_eq!(vertical_limit("FL"), (Some("FL".to_string()), None));
        assert_eq!(vertical_limit("NOTAM"), (Some("NOTAM".to_string()), None));
        assert_eq!(vertical_limit("  "), (None, None));
    }
}
