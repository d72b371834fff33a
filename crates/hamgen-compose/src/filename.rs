//! Hazard-token sequencing and filename composition.

use hamgen_extract::{
    format_client, format_requester, split_families, HazardCode, LocationParts, RequestFields,
};

/// Build the ordered hazard-token list for a set of classified codes.
///
/// The earthquake family contributes an `AF` base token plus an `AF-{code}`
/// combination per other earthquake code, but only when Active Fault itself
/// is present. Any volcanic codes contribute a `VOL` base token plus a
/// `VOL-{code}` per code. No codes, no tokens; there is no fallback.
pub fn hazard_tokens(codes: &[HazardCode]) -> Vec<String> {
    let (earthquake, volcanic) = split_families(codes);
    let mut tokens = Vec::new();

    if earthquake.contains(&HazardCode::Af) {
        tokens.push("AF".to_string());
        for code in earthquake.iter().filter(|c| **c != HazardCode::Af) {
            tokens.push(format!("AF-{}", code.code()));
        }
    }

    if !volcanic.is_empty() {
        tokens.push("VOL".to_string());
        for code in &volcanic {
            tokens.push(format!("VOL-{}", code.code()));
        }
    }

    tokens
}

/// Compose the final ordered filename list:
/// `{request_id}_{token}_{location}_{client}-{requester}_{suffix}`.
pub fn compose_filenames(
    fields: &RequestFields,
    codes: &[HazardCode],
    suffix: &str,
) -> Vec<String> {
    let location = LocationParts::parse(&fields.location_raw).segment();
    let client = format_client(&fields.requested_for);
    let requester = format_requester(&fields.requested_by);

    hazard_tokens(codes)
        .into_iter()
        .map(|token| {
            format!(
                "{}_{}_{}_{}-{}_{}",
                fields.request_id, token, location, client, requester, suffix
            )
        })
        .collect()
}
