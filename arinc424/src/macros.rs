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

/// Parses a run of ASCII digits into an unsigned integer of type `$t`.
///
/// Evaluates to `Err(Error::NotANumber)` if the slice is empty or contains
/// anything but digits. Blank padding is not accepted either.
macro_rules! parse_numeric {
    ($t:ty, $b:expr) => {{
        let bytes: &[u8] = &$b;
        if !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit) {
            Ok(bytes
                .iter()
                .fold(0 as $t, |acc, &byte| acc * 10 + (byte & 0x0F) as $t))
        } else {
            Err($crate::Error::NotANumber {
                bytes: bytes.to_vec(),
            })
        }
    }};
}
