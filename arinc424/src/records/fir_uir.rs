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

use crate::fields::*;
use crate::{Alphanumeric, Record};

/// Flight or upper information region (`UF`).
#[derive(Record)]
pub struct FirUir<'a> {
    pub record_type: RecordType,
    pub cust_area: CustArea<'a>,
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    pub fir_uir_ident: Alphanumeric<'a, 4>,
    pub fir_uir_address: Alphanumeric<'a, 4>,
    /// `F` for a FIR, `U` for an UIR or `B` for both.
    pub fir_uir_indicator: Alphanumeric<'a, 1>,
    #[arinc424(skip(4))]
    pub cont_nr: ContNr,
    #[arinc424(field = 81)]
    pub fir_upper_limit: Limit<'a>,
    pub uir_lower_limit: Limit<'a>,
    pub uir_upper_limit: Limit<'a>,
    #[arinc424(field = 99)]
    pub fir_uir_name: NameDesc<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle<'a>,
}

impl<'a> FirUir<'a> {
    /// Returns the lower limit of the region.
    ///
    /// Providers fill either the UIR lower limit or, for a plain FIR, only
    /// the FIR upper limit column. The UIR lower limit is preferred.
    pub fn lower_limit(&self) -> Limit<'a> {
        if self.uir_lower_limit.is_blank() {
            self.fir_upper_limit
        } else {
            self.uir_lower_limit
        }
    }

    /// Returns the upper limit of the region.
    pub fn upper_limit(&self) -> Limit<'a> {
        self.uir_upper_limit
    }
}
