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

//! Entity identities.
//!
//! An identity is a string derived only from source fields, so importing the
//! same source twice yields the same identities. ARINC 424 identities are
//! built from record keys. OFMX identities use the `mid` of the element's Uid
//! if it has one, and the Uid's keys otherwise.

use ofmx::{AhpUid, AseUid, PointUid, RdnUid, RwyUid};

use super::NavaidKind;

const ARINC: &str = "ARINC";
const OFMX: &str = "OFMX";

/// Airport `ARINC:PA:<code>`.
pub fn airport(code: &str) -> String {
    format!("{ARINC}:PA:{code}")
}

/// Runway `ARINC:PG:<airport>:<pair key>`.
pub fn runway(airport: &str, pair_key: &str) -> String {
    format!("{ARINC}:PG:{airport}:{pair_key}")
}

/// Runway end `ARINC:RD:<airport>:<designator>`.
pub fn runway_end(airport: &str, designator: &str) -> String {
    format!("{ARINC}:RD:{airport}:{designator}")
}

/// Controlled airspace `ARINC:UC:<region>:<center>:<type>`.
pub fn controlled_airspace(region: &str, center: &str, arsp_type: &str) -> String {
    format!("{ARINC}:UC:{region}:{center}:{arsp_type}")
}

/// Restrictive airspace `ARINC:UR:<region>:<type>:<designation>`.
pub fn restrictive_airspace(region: &str, restrictive_type: &str, designation: &str) -> String {
    format!("{ARINC}:UR:{region}:{restrictive_type}:{designation}")
}

/// FIR or UIR `ARINC:UF:<ident>`.
pub fn fir_uir(ident: &str) -> String {
    format!("{ARINC}:UF:{ident}")
}

/// VHF navaid `ARINC:D:<region>:<ident>` or NDB `ARINC:DB:<region>:<ident>`.
pub fn navaid(section: &str, region: &str, ident: &str) -> String {
    format!("{ARINC}:{section}:{region}:{ident}")
}

/// Waypoint `ARINC:<section>:<region>:<ident>`.
///
/// The section (`EA` or `PC`) keeps enroute and terminal fixes with the same
/// identifier apart.
pub fn waypoint(section: &str, region: &str, ident: &str) -> String {
    format!("{ARINC}:{section}:{region}:{ident}")
}

fn mid(mid: &Option<String>) -> Option<String> {
    mid.as_ref().filter(|m| !m.is_empty()).cloned()
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// Identity of an `Ahp`. Requires a `mid` or a `codeId`.
pub fn ahp(uid: &AhpUid) -> Option<String> {
    mid(&uid.mid).or_else(|| {
        let code = uid.code_id.as_deref()?;
        Some(format!("{OFMX}:Ahp:{}:{code}", opt(&uid.region)))
    })
}

/// Identity of a `Rwy`. Requires a `mid` or the airport and a designator.
pub fn rwy(uid: &RwyUid) -> Option<String> {
    mid(&uid.mid).or_else(|| {
        let designator = uid.designator.as_deref()?;
        Some(format!("{OFMX}:Rwy:{}:{designator}", ahp(&uid.airport)?))
    })
}

/// Identity of a `Rdn`. Requires a `mid` or the runway and a designator.
pub fn rdn(uid: &RdnUid) -> Option<String> {
    mid(&uid.mid).or_else(|| {
        let designator = uid.designator.as_deref()?;
        Some(format!("{OFMX}:Rdn:{}:{designator}", rwy(&uid.runway)?))
    })
}

/// Identity of an `Ase`. Requires a `mid` or a `codeId`, and includes the
/// airspace name.
pub fn ase(uid: &AseUid, name: &Option<String>) -> Option<String> {
    mid(&uid.mid).or_else(|| {
        let code = uid.code_id.as_deref()?;
        Some(format!(
            "{OFMX}:Ase:{}:{}:{code}:{}",
            opt(&uid.region),
            opt(&uid.code_type),
            opt(name)
        ))
    })
}

/// Identity of a `Dpn`. Requires a `mid` or a `codeId`.
pub fn dpn(uid: &PointUid) -> Option<String> {
    point("Dpn", uid)
}

/// Identity of a `Vor`, `Ndb` or `Dme`. Requires a `mid` or a `codeId`.
pub fn navaid_uid(kind: NavaidKind, uid: &PointUid) -> Option<String> {
    match kind {
        NavaidKind::Vor => point("Vor", uid),
        NavaidKind::Ndb => point("Ndb", uid),
        NavaidKind::Dme => point("Dme", uid),
    }
}

fn point(tag: &str, uid: &PointUid) -> Option<String> {
    mid(&uid.mid).or_else(|| {
        let code = uid.code_id.as_deref()?;
        Some(format!("{OFMX}:{tag}:{}:{code}", opt(&uid.region)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ahp_uid(mid: Option<&str>) -> AhpUid {
        AhpUid {
            mid: mid.map(str::to_string),
            region: Some("LK".to_string()),
            code_id: Some("LKPR".to_string()),
        }
    }

    #[test]
    fn arinc_identities() {
        assert_eq!(airport("LSGG"), "ARINC:PA:LSGG");
        assert_eq!(runway("LSGG", "05-23"), "ARINC:PG:LSGG:05-23");
        assert_eq!(runway_end("LSGG", "05"), "ARINC:RD:LSGG:05");
        assert_eq!(waypoint("EA", "LS", "PLAYA"), "ARINC:EA:LS:PLAYA");
        assert_eq!(navaid("D", "LS", "PAS"), "ARINC:D:LS:PAS");
    }

    #[test]
    fn prefers_mid() {
        assert_eq!(ahp(&ahp_uid(Some("1234"))).as_deref(), Some("1234"));
        assert_eq!(ahp(&ahp_uid(Some(""))).as_deref(), Some("OFMX:Ahp:LK:LKPR"));
    }

    #[test]
    fn nested_identities() {
        let rwy_uid = RwyUid {
            mid: None,
            airport: ahp_uid(None),
            designator: Some("06/24".to_string()),
        };
        assert_eq!(rwy(&rwy_uid).as_deref(), Some("OFMX:Rwy:OFMX:Ahp:LK:LKPR:06/24"));

        let rdn_uid = RdnUid {
            mid: None,
            runway: rwy_uid,
            designator: Some("06".to_string()),
        };
        assert_eq!(
            rdn(&rdn_uid).as_deref(),
            Some("OFMX:Rdn:OFMX:Ahp:LK:LKPR:06/24:06")
        );
    }

    #[test]
    fn missing_keys_have_no_identity() {
        assert_eq!(ahp(&AhpUid::default()), None);
        assert_eq!(rwy(&RwyUid::default()), None);
        assert_eq!(navaid_uid(NavaidKind::Dme, &PointUid::default()), None);
    }

    #[test]
    fn identities_are_stable() {
        let uid = AseUid {
            mid: None,
            region: Some("LK".to_string()),
            code_type: Some("CTR".to_string()),
            code_id: Some("LKPRCTR".to_string()),
        };
        let name = Some("PRAHA CTR".to_string());
        assert_eq!(ase(&uid, &name), ase(&uid.clone(), &name.clone()));
        assert_eq!(
            ase(&uid, &name).as_deref(),
            Some("OFMX:Ase:LK:CTR:LKPRCTR:PRAHA CTR")
        );
    }
}
