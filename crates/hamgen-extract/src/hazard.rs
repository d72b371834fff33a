//! Hazard-name classification and family grouping.

use serde::{Deserialize, Serialize};

/// Short codes for the hazard layers that appear on assessment maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HazardCode {
    Af,
    Liqn,
    Eil,
    Tsu,
    Lhr,
    Pf,
    Bs,
    Lf,
}

impl HazardCode {
    /// Filename token for this code.
    pub fn code(&self) -> &'static str {
        match self {
            HazardCode::Af => "AF",
            HazardCode::Liqn => "LIQN",
            HazardCode::Eil => "EIL",
            HazardCode::Tsu => "TSU",
            HazardCode::Lhr => "LHR",
            HazardCode::Pf => "PF",
            HazardCode::Bs => "BS",
            HazardCode::Lf => "LF",
        }
    }

    /// Family the code belongs to.
    pub fn family(&self) -> HazardFamily {
        match self {
            HazardCode::Af | HazardCode::Liqn | HazardCode::Eil | HazardCode::Tsu => {
                HazardFamily::Earthquake
            }
            HazardCode::Lhr | HazardCode::Pf | HazardCode::Bs | HazardCode::Lf => {
                HazardFamily::Volcanic
            }
        }
    }
}

/// Hazard family partition. Disjoint and exhaustive over the codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardFamily {
    Earthquake,
    Volcanic,
}

/// Canonical hazard-name → code table. Declaration order is the canonical
/// code order used everywhere downstream.
pub const HAZARD_TABLE: &[(&str, HazardCode)] = &[
    ("Active Fault", HazardCode::Af),
    ("Liquefaction", HazardCode::Liqn),
    ("Landslide - Earthquake - Induced", HazardCode::Eil),
    ("Tsunami", HazardCode::Tsu),
    ("Lahar", HazardCode::Lhr),
    ("Pyroclastic Flow", HazardCode::Pf),
    ("Base Surge", HazardCode::Bs),
    ("Lava Flow", HazardCode::Lf),
];

/// Split a raw comma-separated hazard list into trimmed names, keeping
/// names the code table does not recognize. Empty tokens are dropped.
pub fn split_raw_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Map a raw comma-separated hazard list to codes.
///
/// Lookup is exact and case-sensitive; unrecognized names are dropped.
/// Output order is table order, not input order.
pub fn classify(raw: &str) -> Vec<HazardCode> {
    let names: Vec<&str> = raw.split(',').map(str::trim).collect();
    HAZARD_TABLE
        .iter()
        .filter(|(name, _)| names.contains(name))
        .map(|(_, code)| *code)
        .collect()
}

/// Partition codes into (earthquake, volcanic) groups, preserving order.
pub fn split_families(codes: &[HazardCode]) -> (Vec<HazardCode>, Vec<HazardCode>) {
    codes
        .iter()
        .copied()
        .partition(|code| code.family() == HazardFamily::Earthquake)
}
