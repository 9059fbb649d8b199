//! Text canonicalisation
//!
//! Two posts count as the same when their canonical keys are equal:
//! NFKC-normalised, trimmed, inner whitespace runs collapsed to one space,
//! lowercased. The key is stored next to the original text and carries the
//! unique index.

use unicode_normalization::UnicodeNormalization;

/// Canonical key for duplicate detection
pub fn canonical_key(input: &str) -> String {
    let normalized: String = input.nfkc().collect();
    normalized
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Trim and NFKC-normalise without changing case (what gets displayed)
pub fn normalize_display(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_string()
}
