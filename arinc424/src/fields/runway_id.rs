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

pub type RunwayId<'a> = Alphanumeric<'a, 5>;

impl<'a> RunwayId<'a> {
    /// Returns the runway's designator without the `RW` prefix.
    ///
    /// The designator is returned as published, e.g. `04L` or `N`, and is not
    /// validated. Returns `None` if nothing follows the prefix.
    pub fn designator(&self) -> Option<&'a str> {
        let s = self.as_str();
        let s = s.strip_prefix("RW").unwrap_or(s).trim();
        Some(s).filter(|s| !s.is_empty())
    }
}
