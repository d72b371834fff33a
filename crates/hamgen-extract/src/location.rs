//! Positional splitting of the location field.

use serde::{Deserialize, Serialize};

/// Location triple split out of the `Province, City, Barangay` field.
///
/// Segments are read positionally: first is barangay, second city, third
/// province, regardless of the order the label itself declares. Missing
/// parts default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationParts {
    pub barangay: String,
    pub city: String,
    pub province: String,
}

impl LocationParts {
    /// Split a raw comma-separated location string. Parts beyond the third
    /// are ignored.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(',').map(str::trim);
        Self {
            barangay: parts.next().unwrap_or("").to_string(),
            city: parts.next().unwrap_or("").to_string(),
            province: parts.next().unwrap_or("").to_string(),
        }
    }

    /// Filename location segment: `{province}-{city}-Brgy{barangay}` with
    /// every whitespace character removed.
    pub fn segment(&self) -> String {
        format!("{}-{}-Brgy{}", self.province, self.city, self.barangay)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }
}
