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

//! Source selection settings.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The format of a source file.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum SourceFormat {
    Arinc424,
    Ofmx,
    OpenAir,
}

impl FromStr for SourceFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arinc" | "arinc424" => Ok(Self::Arinc424),
            "ofmx" => Ok(Self::Ofmx),
            "openair" => Ok(Self::OpenAir),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arinc424 => write!(f, "arinc424"),
            Self::Ofmx => write!(f, "ofmx"),
            Self::OpenAir => write!(f, "openair"),
        }
    }
}

/// Selects the member of a zip archive that holds the data.
#[derive(Clone, PartialEq, Debug)]
pub struct ArchiveMember {
    /// File name extension of candidate members, e.g. `.pc`.
    pub extension: String,
    /// Path fragments that a preferred member contains. All must match.
    pub preferred: Vec<String>,
}

impl ArchiveMember {
    /// Returns the preferred candidate or the first candidate if no candidate
    /// is preferred.
    ///
    /// ```
    /// # use aerodata::ArchiveMember;
    /// let member = ArchiveMember::arinc424();
    /// let names = ["ofm/merged/ed.pc", "ofm/isolated/ed.pc", "readme.txt"];
    /// assert_eq!(member.select(names), Some("ofm/isolated/ed.pc"));
    /// ```
    pub fn select<'a, I>(&self, names: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut first = None;
        for name in names.into_iter().filter(|n| n.ends_with(&self.extension)) {
            if self.preferred.iter().all(|p| name.contains(p.as_str())) {
                return Some(name);
            }
            if first.is_none() {
                first = Some(name);
            }
        }
        first
    }

    /// The ARINC 424 data file of an OpenFlightMaps archive.
    pub fn arinc424() -> Self {
        Self {
            extension: ".pc".to_string(),
            preferred: vec!["/isolated/".to_string()],
        }
    }

    /// The OpenAIR airspace file of an OpenFlightMaps archive.
    pub fn openair() -> Self {
        Self {
            extension: ".txt".to_string(),
            preferred: vec!["/isolated/".to_string(), "seeyou".to_string()],
        }
    }
}

/// Settings of the extractors.
#[derive(Clone, PartialEq, Debug)]
pub struct SourceConfig {
    pub arinc: ArchiveMember,
    pub openair: ArchiveMember,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            arinc: ArchiveMember::arinc424(),
            openair: ArchiveMember::openair(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_tags() {
        assert_eq!("arinc".parse::<SourceFormat>().ok(), Some(SourceFormat::Arinc424));
        assert_eq!("ARINC424".parse::<SourceFormat>().ok(), Some(SourceFormat::Arinc424));
        assert_eq!("ofmx".parse::<SourceFormat>().ok(), Some(SourceFormat::Ofmx));
        assert_eq!("openair".parse::<SourceFormat>().ok(), Some(SourceFormat::OpenAir));
        assert!(matches!(
            "geojson".parse::<SourceFormat>(),
            Err(Error::UnsupportedFormat(tag)) if tag == "geojson"
        ));
    }

    #[test]
    fn falls_back_to_first_candidate() {
        let member = ArchiveMember::openair();
        let names = ["a/isolated/other.txt", "b/merged/seeyou.txt", "c.pc"];
        assert_eq!(member.select(names), Some("a/isolated/other.txt"));

        let names = ["a/isolated/other.txt", "a/isolated/seeyou_ed.txt"];
        assert_eq!(member.select(names), Some("a/isolated/seeyou_ed.txt"));
    }

    #[test]
    fn no_candidate() {
        assert_eq!(ArchiveMember::arinc424().select(["readme.txt"]), None);
    }
}
