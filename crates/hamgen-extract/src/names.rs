//! Organization and requester name formatting for filename tokens.

use once_cell::sync::Lazy;
use regex::Regex;

/// Whole-word organization abbreviations, applied in declaration order.
/// Later entries see text already rewritten by earlier ones.
const ORG_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Government", "Govt"),
    ("Department", "Dept"),
    ("Company", "Co"),
    ("Development", "Devt"),
    ("Incorporated", "Inc"),
    ("Corporation", "Corp"),
    ("Limited", "Ltd"),
    ("and", "&"),
    ("Association", "Assn"),
    ("Foundation", "Fdn"),
    ("Cooperative", "Coop"),
    ("Services", "Svcs"),
    ("International", "Intl"),
    ("Group", "Grp"),
    ("Construction", "Constr"),
    ("Builders", "Bldrs"),
    ("Consultants", "Cons"),
    ("Enterprises", "Ent"),
    ("Trading", "Trdg"),
    ("Manufacturing", "Mfg"),
    ("Engineering", "Engr"),
];

// Compiled whole-word patterns, one per table entry (compiled once, reused).
static ORG_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    ORG_ABBREVIATIONS
        .iter()
        .map(|(full, abbr)| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(full))).unwrap();
            (re, *abbr)
        })
        .collect()
});

/// Replace whole-word occurrences of known organization words with their
/// abbreviations, case-insensitively.
pub fn abbreviate_org(name: &str) -> String {
    let mut result = name.to_string();
    for (re, abbr) in ORG_PATTERNS.iter() {
        result = re.replace_all(&result, *abbr).into_owned();
    }
    result
}

/// Strip everything outside `[A-Za-z0-9 ]`, then uppercase the first letter
/// of each space-separated word and concatenate without separators.
pub fn pascal_case(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();
    cleaned.split(' ').map(capitalize_first).collect()
}

/// Filename client token: abbreviated organization name, PascalCased.
pub fn format_client(requested_for: &str) -> String {
    pascal_case(&abbreviate_org(requested_for))
}

/// Compact a requester's full name into initials plus surname.
///
/// Three or more tokens keep the first two initials, two tokens keep one,
/// a single token is titlecased as-is. Only the final space-delimited token
/// counts as the surname; multi-word surnames are not merged.
pub fn format_requester(requested_by: &str) -> String {
    if requested_by.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = requested_by.split(' ').collect();
    let surname = title_case(parts[parts.len() - 1]);
    match parts.len() {
        1 => surname,
        2 => format!("{}{}", initial(parts[0]), surname),
        _ => format!("{}{}{}", initial(parts[0]), initial(parts[1]), surname),
    }
}

/// First character, uppercased.
fn initial(word: &str) -> String {
    word.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

/// First character uppercased, remainder lowercased.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
        None => String::new(),
    }
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviate_org_whole_words() {
        assert_eq!(
            abbreviate_org("International Development Company"),
            "Intl Devt Co"
        );
        // Word-boundary safe: no substitution inside longer words.
        assert_eq!(abbreviate_org("Developmental Studies"), "Developmental Studies");
    }

    #[test]
    fn test_abbreviate_org_case_insensitive() {
        assert_eq!(abbreviate_org("ACME CORPORATION"), "ACME Corp");
    }

    #[test]
    fn test_pascal_case_strips_punctuation() {
        assert_eq!(pascal_case("Acme, Inc."), "AcmeInc");
        assert_eq!(pascal_case("san miguel corp"), "SanMiguelCorp");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn test_format_client() {
        assert_eq!(
            format_client("International Development Company"),
            "IntlDevtCo"
        );
        // "and" becomes "&", which the PascalCase pass then strips.
        assert_eq!(format_client("Trading and Services Group"), "TrdgSvcsGrp");
    }

    #[test]
    fn test_format_requester_three_or_more_tokens() {
        assert_eq!(format_requester("Juan Dela Cruz"), "JDCruz");
        assert_eq!(format_requester("Juan Carlos Dela Cruz"), "JCCruz");
    }

    #[test]
    fn test_format_requester_two_tokens() {
        assert_eq!(format_requester("Juan CRUZ"), "JCruz");
    }

    #[test]
    fn test_format_requester_single_token() {
        assert_eq!(format_requester("maria"), "Maria");
    }

    #[test]
    fn test_format_requester_empty() {
        assert_eq!(format_requester(""), "");
    }
}
