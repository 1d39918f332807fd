// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! Serde-deserializable structs that mirror the OFMX XML structure.
//!
//! These are internal types used by the parser. They map directly to the XML
//! element names, then get converted into the flat public
//! [`Feature`](crate::Feature) types.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Identities
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct AhpUid {
    #[serde(rename = "@mid", default)]
    pub mid: Option<String>,
    #[serde(rename = "@region", default)]
    pub region: Option<String>,
    #[serde(rename = "codeId", default)]
    pub code_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RwyUid {
    #[serde(rename = "@mid", default)]
    pub mid: Option<String>,
    #[serde(rename = "AhpUid")]
    pub ahp_uid: Option<AhpUid>,
    #[serde(rename = "txtDesig", default)]
    pub designator: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RdnUid {
    #[serde(rename = "@mid", default)]
    pub mid: Option<String>,
    #[serde(rename = "RwyUid")]
    pub rwy_uid: Option<RwyUid>,
    #[serde(rename = "txtDesig", default)]
    pub designator: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AseUid {
    #[serde(rename = "@mid", default)]
    pub mid: Option<String>,
    #[serde(rename = "@region", default)]
    pub region: Option<String>,
    #[serde(rename = "codeType", default)]
    pub code_type: Option<String>,
    #[serde(rename = "codeId", default)]
    pub code_id: Option<String>,
}

/// Identity of points, i.e. designated points and navaids.
#[derive(Debug, Deserialize)]
pub(crate) struct PointUid {
    #[serde(rename = "@mid", default)]
    pub mid: Option<String>,
    #[serde(rename = "@region", default)]
    pub region: Option<String>,
    #[serde(rename = "codeId", default)]
    pub code_id: Option<String>,
    #[serde(rename = "geoLat", default)]
    pub geo_lat: Option<String>,
    #[serde(rename = "geoLong", default)]
    pub geo_long: Option<String>,
}

// ---------------------------------------------------------------------------
// Features
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct AhpXml {
    #[serde(rename = "AhpUid")]
    pub uid: Option<AhpUid>,
    #[serde(rename = "txtName", default)]
    pub name: Option<String>,
    #[serde(rename = "codeIcao", default)]
    pub code_icao: Option<String>,
    #[serde(rename = "codeGps", default)]
    pub code_gps: Option<String>,
    #[serde(rename = "codeType", default)]
    pub code_type: Option<String>,
    #[serde(rename = "geoLat", default)]
    pub geo_lat: Option<String>,
    #[serde(rename = "geoLong", default)]
    pub geo_long: Option<String>,
    #[serde(rename = "valElev", default)]
    pub val_elev: Option<String>,
    #[serde(rename = "uomDistVer", default)]
    pub uom_dist_ver: Option<String>,
    #[serde(rename = "valMagVar", default)]
    pub val_mag_var: Option<String>,
    #[serde(rename = "dateMagVar", default)]
    pub date_mag_var: Option<String>,
    #[serde(rename = "valTransitionAlt", default)]
    pub val_transition_alt: Option<String>,
    #[serde(rename = "uomTransitionAlt", default)]
    pub uom_transition_alt: Option<String>,
    #[serde(rename = "txtNameCitySer", default)]
    pub city: Option<String>,
    #[serde(rename = "txtRmk", default)]
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RwyXml {
    #[serde(rename = "RwyUid")]
    pub uid: Option<RwyUid>,
    #[serde(rename = "valLen", default)]
    pub val_len: Option<String>,
    #[serde(rename = "valWid", default)]
    pub val_wid: Option<String>,
    #[serde(rename = "uomDimRwy", default)]
    pub uom_dim_rwy: Option<String>,
    #[serde(rename = "codeComposition", default)]
    pub code_composition: Option<String>,
    #[serde(rename = "codePreparation", default)]
    pub code_preparation: Option<String>,
    #[serde(rename = "txtPcnNote", default)]
    pub pcn_note: Option<String>,
    #[serde(rename = "valLenStrip", default)]
    pub val_len_strip: Option<String>,
    #[serde(rename = "valWidStrip", default)]
    pub val_wid_strip: Option<String>,
    #[serde(rename = "uomDimStrip", default)]
    pub uom_dim_strip: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RdnXml {
    #[serde(rename = "RdnUid")]
    pub uid: Option<RdnUid>,
    #[serde(rename = "geoLat", default)]
    pub geo_lat: Option<String>,
    #[serde(rename = "geoLong", default)]
    pub geo_long: Option<String>,
    #[serde(rename = "valTrueBrg", default)]
    pub val_true_brg: Option<String>,
    #[serde(rename = "valMagBrg", default)]
    pub val_mag_brg: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AseXml {
    #[serde(rename = "AseUid")]
    pub uid: Option<AseUid>,
    #[serde(rename = "txtName", default)]
    pub name: Option<String>,
    #[serde(rename = "txtLocalType", default)]
    pub local_type: Option<String>,
    #[serde(rename = "codeClass", default)]
    pub code_class: Option<String>,
    #[serde(rename = "codeDistVerUpper", default)]
    pub code_dist_ver_upper: Option<String>,
    #[serde(rename = "valDistVerUpper", default)]
    pub val_dist_ver_upper: Option<String>,
    #[serde(rename = "uomDistVerUpper", default)]
    pub uom_dist_ver_upper: Option<String>,
    #[serde(rename = "codeDistVerLower", default)]
    pub code_dist_ver_lower: Option<String>,
    #[serde(rename = "valDistVerLower", default)]
    pub val_dist_ver_lower: Option<String>,
    #[serde(rename = "uomDistVerLower", default)]
    pub uom_dist_ver_lower: Option<String>,
    #[serde(rename = "txtRmk", default)]
    pub remarks: Option<String>,
    /// Only set in the shape extension.
    #[serde(rename = "gmlPosList", default)]
    pub pos_list: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DpnXml {
    #[serde(rename = "DpnUid")]
    pub uid: Option<PointUid>,
    #[serde(rename = "codeType", default)]
    pub code_type: Option<String>,
    #[serde(rename = "txtName", default)]
    pub name: Option<String>,
}

/// Mirror of the `Vor`, `Ndb` and `Dme` elements.
///
/// They share their fields and differ only in the name of their identity. A
/// `Dme` may carry the `VorUid` of its associated VOR next to its own `DmeUid`.
#[derive(Debug, Deserialize)]
pub(crate) struct NavaidXml {
    #[serde(rename = "VorUid")]
    pub vor_uid: Option<PointUid>,
    #[serde(rename = "NdbUid")]
    pub ndb_uid: Option<PointUid>,
    #[serde(rename = "DmeUid")]
    pub dme_uid: Option<PointUid>,
    #[serde(rename = "txtName", default)]
    pub name: Option<String>,
    #[serde(rename = "codeType", default)]
    pub code_type: Option<String>,
    #[serde(rename = "valFreq", default)]
    pub val_freq: Option<String>,
    #[serde(rename = "uomFreq", default)]
    pub uom_freq: Option<String>,
    #[serde(rename = "codeChannel", default)]
    pub code_channel: Option<String>,
    #[serde(rename = "valGhostFreq", default)]
    pub val_ghost_freq: Option<String>,
    #[serde(rename = "valElev", default)]
    pub val_elev: Option<String>,
    #[serde(rename = "uomDistVer", default)]
    pub uom_dist_ver: Option<String>,
    #[serde(rename = "valMagVar", default)]
    pub val_mag_var: Option<String>,
    #[serde(rename = "codeDatum", default)]
    pub code_datum: Option<String>,
}
