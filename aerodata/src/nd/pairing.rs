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

//! Runway pairing.
//!
//! Each runway end record is resolved to the physical runway it belongs to.
//! Both ends of a runway yield the same pair key, e.g. `05-23`, regardless of
//! which end is seen first, and records of the same runway are merged.

use std::collections::{HashMap, HashSet};
use std::fmt;

use geo::Point;
use log::trace;

use super::{ident, Runway, RunwayEnd};

/// The side of parallel runways.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Side {
    Center,
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Self::Center => Self::Center,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A runway end designator like `05` or `18L`.
///
/// Designators are ordered by number and then by side.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Designator {
    number: u8,
    side: Option<Side>,
}

impl Designator {
    /// Parses a raw designator, optionally prefixed by `RW`.
    ///
    /// Returns `None` if the designator has no number between 1 and 36 or a
    /// side other than `L`, `R` or `C`.
    ///
    /// ```
    /// # use aerodata::nd::Designator;
    /// let rwy = Designator::parse("RW5").unwrap();
    /// assert_eq!(rwy.to_string(), "05");
    /// assert_eq!(rwy.reciprocal().to_string(), "23");
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let raw = match raw.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("RW") => raw[2..].trim(),
            _ => raw,
        };

        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let number: u8 = digits.parse().ok().filter(|n| (1..=36).contains(n))?;

        let side = match raw.chars().find(char::is_ascii_alphabetic) {
            None => None,
            Some(c) => match c.to_ascii_uppercase() {
                'C' => Some(Side::Center),
                'L' => Some(Side::Left),
                'R' => Some(Side::Right),
                _ => return None,
            },
        };

        Some(Self { number, side })
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    /// Returns the designator of the opposite runway end.
    pub fn reciprocal(&self) -> Self {
        let number = match (self.number + 18) % 36 {
            0 => 36,
            n => n,
        };

        Self {
            number,
            side: self.side.map(Side::opposite),
        }
    }

    /// Returns this and the reciprocal designator in ascending order.
    pub fn pair(&self) -> (Self, Self) {
        let reciprocal = self.reciprocal();
        if *self <= reciprocal {
            (*self, reciprocal)
        } else {
            (reciprocal, *self)
        }
    }

    /// Returns the key of the runway, e.g. `18L-36R`.
    pub fn pair_key(&self) -> String {
        let (first, second) = self.pair();
        format!("{first}-{second}")
    }

    /// Returns the designator of the runway, e.g. `18L/36R`.
    pub fn pair_designator(&self) -> String {
        let (first, second) = self.pair();
        format!("{first}/{second}")
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.number)?;
        match self.side {
            Some(Side::Center) => write!(f, "C"),
            Some(Side::Left) => write!(f, "L"),
            Some(Side::Right) => write!(f, "R"),
            None => Ok(()),
        }
    }
}

/// A runway end as it is read from a record.
#[derive(Clone, PartialEq, Debug)]
pub struct RunwayEndRecord {
    /// The airport's code.
    pub airport: String,
    pub designator: Designator,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub true_bearing: Option<f64>,
    pub mag_bearing: Option<f64>,
    pub position: Option<Point<f64>>,
}

/// Pairs runway end records into runways.
///
/// Runways and ends keep the order in which they were first seen. An end that
/// is seen again is merged into its runway but emitted only once.
#[derive(Default)]
pub struct RunwayPairing {
    runways: Vec<Runway>,
    index: HashMap<String, usize>,
    ends: Vec<RunwayEnd>,
    end_ids: HashSet<String>,
}

impl RunwayPairing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: RunwayEndRecord) {
        let airport_id = ident::airport(&record.airport);
        let runway_id = ident::runway(&record.airport, &record.designator.pair_key());
        let designator = record.designator.to_string();

        let runway = Runway {
            id: runway_id.clone(),
            airport_id: airport_id.clone(),
            designator: record.designator.pair_designator(),
            length: record.length,
            width: record.width,
            uom_dim_rwy: (record.length.is_some() || record.width.is_some())
                .then(|| "FT".to_string()),
            ..Default::default()
        };

        match self.index.get(&runway_id) {
            Some(&i) => {
                trace!("merging runway end {designator} into {runway_id}");
                self.runways[i] = self.runways[i].merge(&runway);
            }
            None => {
                self.index.insert(runway_id.clone(), self.runways.len());
                self.runways.push(runway);
            }
        }

        let end_id = ident::runway_end(&record.airport, &designator);
        if self.end_ids.insert(end_id.clone()) {
            self.ends.push(RunwayEnd {
                id: end_id,
                runway_id,
                airport_id,
                designator,
                true_bearing: record.true_bearing,
                mag_bearing: record.mag_bearing,
                position: record.position,
            });
        }
    }

    pub fn runways(&self) -> &[Runway] {
        &self.runways
    }

    pub fn ends(&self) -> &[RunwayEnd] {
        &self.ends
    }

    pub fn into_parts(self) -> (Vec<Runway>, Vec<RunwayEnd>) {
        (self.runways, self.ends)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn designator(raw: &str) -> Designator {
        Designator::parse(raw).expect("designator should parse")
    }

    fn record(designator: &str, length: Option<f64>) -> RunwayEndRecord {
        RunwayEndRecord {
            airport: "LSGG".to_string(),
            designator: self::designator(designator),
            length,
            width: None,
            true_bearing: None,
            mag_bearing: None,
            position: None,
        }
    }

    #[test]
    fn parses_designators() {
        assert_eq!(designator("RW05").to_string(), "05");
        assert_eq!(designator("rw36l").to_string(), "36L");
        assert_eq!(designator(" 9C ").to_string(), "09C");
        assert_eq!(Designator::parse("RW"), None);
        assert_eq!(Designator::parse("00"), None);
        assert_eq!(Designator::parse("37"), None);
        assert_eq!(Designator::parse("09X"), None);
        assert_eq!(Designator::parse("N"), None);
    }

    #[test]
    fn reciprocal_designators() {
        assert_eq!(designator("05").reciprocal().to_string(), "23");
        assert_eq!(designator("18L").reciprocal().to_string(), "36R");
        assert_eq!(designator("36R").reciprocal().to_string(), "18L");
        assert_eq!(designator("18").reciprocal().to_string(), "36");
        assert_eq!(designator("09C").reciprocal().to_string(), "27C");
    }

    #[test]
    fn pair_is_independent_of_end() {
        for (a, b) in [("05", "23"), ("18L", "36R"), ("09C", "27C")] {
            assert_eq!(designator(a).pair_key(), designator(b).pair_key());
            assert_eq!(designator(a).pair_designator(), designator(b).pair_designator());
        }
        assert_eq!(designator("23").pair_designator(), "05/23");
        assert_eq!(designator("36R").pair_key(), "18L-36R");
    }

    #[test]
    fn merges_both_ends() {
        let mut pairing = RunwayPairing::new();
        pairing.add(record("23", Some(1000.0)));
        pairing.add(record("05", Some(1200.0)));
        pairing.add(record("23", None));

        let (runways, ends) = pairing.into_parts();
        assert_eq!(runways.len(), 1);
        assert_eq!(runways[0].id, "ARINC:PG:LSGG:05-23");
        assert_eq!(runways[0].designator, "05/23");
        assert_eq!(runways[0].length, Some(1200.0));
        assert_eq!(runways[0].uom_dim_rwy.as_deref(), Some("FT"));

        let ends: Vec<&str> = ends.iter().map(|e| e.designator.as_str()).collect();
        assert_eq!(ends, vec!["23", "05"]);
    }

    #[test]
    fn parallel_runways_stay_apart() {
        let mut pairing = RunwayPairing::new();
        pairing.add(record("18L", None));
        pairing.add(record("18R", None));
        pairing.add(record("36L", None));

        let ids: Vec<&str> = pairing.runways().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["ARINC:PG:LSGG:18L-36R", "ARINC:PG:LSGG:18R-36L"]);
        assert_eq!(pairing.ends().len(), 3);
        assert_eq!(pairing.runways()[0].uom_dim_rwy, None);
    }
}
