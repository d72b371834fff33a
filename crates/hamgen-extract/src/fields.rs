//! Label-anchored field extraction from raw request-form text.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Extract the value following `label` in `text`.
///
/// Matches `<label><whitespace><value>` case-sensitively at the first
/// occurrence, capturing greedily to the end of the line. Returns the
/// trimmed value, or `""` when the label is absent; a missing field is a
/// valid outcome, not an error.
pub fn extract_field(label: &str, text: &str) -> String {
    let pattern = format!(r"{}\s+(.+)", regex::escape(label));
    match Regex::new(&pattern) {
        Ok(re) => re
            .captures(text)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// The labeled fields pulled out of one raw request form.
///
/// Every field defaults to the empty string when its label is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFields {
    /// Request tracking id (`Request` label).
    pub request_id: String,
    /// Comma-separated hazard names, verbatim (`Hazard Type` label).
    pub hazard_types_raw: String,
    /// Client organization (`Requested For` label).
    pub requested_for: String,
    /// Requesting person (`Requested By` label).
    pub requested_by: String,
    /// Comma-separated location triple (`Province, City, Barangay` label).
    pub location_raw: String,
}

impl RequestFields {
    /// Extract all recognized fields from raw request-form text.
    pub fn parse(text: &str) -> Self {
        Self {
            request_id: extract_field("Request", text),
            hazard_types_raw: extract_field("Hazard Type", text),
            requested_for: extract_field("Requested For", text),
            requested_by: extract_field("Requested By", text),
            location_raw: extract_field("Province, City, Barangay", text),
        }
    }
}
