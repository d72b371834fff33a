//! HamGen Extract — heuristic extraction from raw request-form text:
//! labeled fields, location parts, hazard classification, name formatting.

pub mod fields;
pub mod hazard;
pub mod location;
pub mod names;

pub use fields::{extract_field, RequestFields};
pub use hazard::{classify, split_families, split_raw_names, HazardCode, HazardFamily};
pub use location::LocationParts;
pub use names::{format_client, format_requester};
