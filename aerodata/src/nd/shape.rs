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

//! Airspace shape correlation.

use std::collections::HashMap;

use icu_normalizer::DecomposingNormalizerBorrowed;
use log::debug;

use super::{Airspace, AirspaceShape, Extractor};
use crate::Error;

/// Normalizes an airspace name for matching.
///
/// Diacritics are removed, the name is uppercased and whitespace collapsed. A
/// leading `R` before a region-prefixed designator is dropped, as are trailing
/// version tokens like `1.2`.
///
/// ```
/// # use aerodata::nd::normalize_name;
/// assert_eq!(normalize_name("Genève TMA 1.2"), "GENEVE TMA");
/// assert_eq!(normalize_name("R LSR21 Hinterrhein"), "LSR21 HINTERRHEIN");
/// ```
pub fn normalize_name(name: &str) -> String {
    let decomposed = DecomposingNormalizerBorrowed::new_nfkd().normalize(name);
    let ascii: String = decomposed.chars().filter(char::is_ascii).collect();
    let upper = ascii.to_ascii_uppercase();

    let mut tokens: Vec<&str> = upper.split_whitespace().collect();

    if tokens.len() > 1 && tokens[0] == "R" && is_region_prefixed(tokens[1]) {
        tokens.remove(0);
    }

    while tokens.last().is_some_and(|t| is_version(t)) {
        tokens.pop();
    }

    tokens.join(" ")
}

/// Normalizes an airspace class. A blank class is absent.
pub fn normalize_class(class: Option<&str>) -> Option<String> {
    class
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
}

/// A designator starting with a two-letter region and containing digits, e.g.
/// `LSR21`.
fn is_region_prefixed(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() > 2
        && bytes[..2].iter().all(u8::is_ascii_alphabetic)
        && bytes.iter().any(u8::is_ascii_digit)
}

/// A decimal number like `1.2`.
fn is_version(token: &str) -> bool {
    token.split_once('.').is_some_and(|(int, frac)| {
        !int.is_empty()
            && !frac.is_empty()
            && int.bytes().all(|b| b.is_ascii_digit())
            && frac.bytes().all(|b| b.is_ascii_digit())
    })
}

type NameKey = (String, Option<String>);

/// Index of airspace shapes by airspace identity and by normalized name.
///
/// The first shape seen for a key wins.
#[derive(Default, Debug)]
pub struct ShapeIndex {
    shapes: Vec<AirspaceShape>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<NameKey, usize>,
}

impl ShapeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shapes<I>(shapes: I) -> Self
    where
        I: IntoIterator<Item = AirspaceShape>,
    {
        let mut index = Self::new();
        shapes.into_iter().for_each(|shape| index.insert(shape));
        index
    }

    /// Builds the index from the airspace shapes of a source.
    ///
    /// # Errors
    ///
    /// Returns the first error of the extractor.
    pub fn from_extractor(extractor: &dyn Extractor) -> Result<Self, Error> {
        let mut index = Self::new();
        for shape in extractor.airspace_shapes() {
            index.insert(shape?);
        }

        debug!(
            "indexed {} airspace shapes ({} by identity, {} by name)",
            index.shapes.len(),
            index.by_id.len(),
            index.by_name.len()
        );
        Ok(index)
    }

    pub fn insert(&mut self, shape: AirspaceShape) {
        let i = self.shapes.len();

        if let Some(id) = &shape.airspace_id {
            self.by_id.entry(id.clone()).or_insert(i);
        }

        if let Some(name) = shape.name.as_deref().map(normalize_name) {
            if !name.is_empty() {
                let class = normalize_class(shape.class.as_deref());
                if class.is_some() {
                    self.by_name.entry((name.clone(), class)).or_insert(i);
                }
                self.by_name.entry((name, None)).or_insert(i);
            }
        }

        self.shapes.push(shape);
    }

    /// Resolves the shape of an airspace.
    ///
    /// The airspace's identity is looked up first, then its normalized name
    /// and class, and finally its normalized name alone.
    pub fn resolve(&self, airspace: &Airspace) -> Option<&AirspaceShape> {
        let i = self.by_id.get(&airspace.id).or_else(|| {
            let name = normalize_name(airspace.name.as_deref()?);
            let class = normalize_class(airspace.class.as_deref());
            class
                .and_then(|class| self.by_name.get(&(name.clone(), Some(class))))
                .or_else(|| self.by_name.get(&(name, None)))
        })?;

        self.shapes.get(*i)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
