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

use crate::Alphanumeric;

/// The five character class of a VHF navaid.
///
/// The first character names the facility (`V` for a VOR) and the second the
/// collocated DME or TACAN (`D`, `T` or `M`).
pub type NavaidClass<'a> = Alphanumeric<'a, 5>;

impl<'a> NavaidClass<'a> {
    /// Returns `true` if the facility includes a VOR.
    pub fn is_vor(&self) -> bool {
        self.first() == b'V'
    }

    /// Returns `true` if the facility includes a DME or TACAN.
    pub fn is_dme(&self) -> bool {
        matches!(self.as_bytes().get(1), Some(b'D' | b'T' | b'M'))
    }
}
