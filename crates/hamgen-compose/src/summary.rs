//! Clipboard-facing summary record.

use hamgen_core::Result;
use hamgen_extract::{split_raw_names, RequestFields};
use serde::{Deserialize, Serialize};

/// Summary record mirrored to the clipboard alongside the filename list.
///
/// Serialized field names are fixed by the downstream consumers of the
/// clipboard payload; do not rename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSummary {
    #[serde(rename = "Request")]
    pub request_id: String,
    /// Raw hazard names, split and trimmed but not filtered against the
    /// code table. Unknown names stay visible here.
    #[serde(rename = "Hazard Type")]
    pub hazard_types: Vec<String>,
    #[serde(rename = "Hazard Assessment Map filenames")]
    pub filenames: Vec<String>,
    #[serde(rename = "Requested For")]
    pub requested_for: String,
    #[serde(rename = "Requested By")]
    pub requested_by: String,
}

impl RequestSummary {
    /// Aggregate the summary from extracted fields and generated filenames.
    pub fn build(fields: &RequestFields, filenames: Vec<String>) -> Self {
        Self {
            request_id: fields.request_id.clone(),
            hazard_types: split_raw_names(&fields.hazard_types_raw),
            filenames,
            requested_for: fields.requested_for.clone(),
            requested_by: fields.requested_by.clone(),
        }
    }

    /// Pretty-printed JSON payload for the system clipboard.
    pub fn clipboard_text(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
