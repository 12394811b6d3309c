//! Token normalization for sliced capability listings.
//!
//! Turns a located text slice into a canonical identifier set:
//! - Whitespace tokenization (GCC-style run-together listings)
//! - Line-oriented extraction (Clang-style one CPU per line)
//! - Identifier-grammar filtering
//! - Prose stop-word removal
//! - Sort + deduplicate (structural, via `BTreeSet`)

use capmat_core::{is_capability_identifier, IdentifierSet};
use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// English prose words that can leak into a listing slice. Matched
    /// case-sensitively; identifiers are case-sensitive too, so a CPU that
    /// happened to be named `set` would survive a lowercase listing.
    static ref STOP_WORDS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("Known");
        s.insert("valid");
        s.insert("arguments");
        s.insert("for");
        s.insert("option");
        s.insert("values");
        s.insert("are");
        s.insert("the");
        s.insert("following");
        s.insert("See");
        s.insert("Use");
        s.insert("to");
        s.insert("set");
        s
    };
}

fn keep(token: &str) -> bool {
    is_capability_identifier(token) && !STOP_WORDS.contains(token)
}

/// Whitespace-token mode: every whitespace-delimited token that satisfies
/// the identifier grammar and is not a stop word.
pub fn normalize_tokens(slice: &str) -> IdentifierSet {
    slice
        .split_whitespace()
        .filter(|t| keep(t))
        .map(str::to_string)
        .collect()
}

/// Line mode: the first whitespace-delimited field of each line is the
/// identifier, any trailing description is discarded.
pub fn normalize_lines(slice: &str) -> IdentifierSet {
    slice
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter(|t| keep(t))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_mode_dedups_and_sorts() {
        let ids = normalize_tokens("  rocket sifive-e20\n  sifive-e20 rocket");
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["rocket", "sifive-e20"]);
    }

    #[test]
    fn test_token_mode_drops_prose_and_noise() {
        let ids = normalize_tokens("Use the following values for -mcpu= sifive-e21");
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["sifive-e21"]);
    }

    #[test]
    fn test_stop_words_are_case_sensitive() {
        // "Set" is not on the stop-word list, "set" is.
        let ids = normalize_tokens("set Set");
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["Set"]);
    }

    #[test]
    fn test_line_mode_keeps_first_field_only() {
        let slice = "\n\tsifive-e20  little endian rv32\n\tsifive-s21  rv64 core\n";
        let ids = normalize_lines(slice);
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["sifive-e20", "sifive-s21"]);
    }

    #[test]
    fn test_empty_slice_yields_empty_set() {
        assert!(normalize_tokens("").is_empty());
        assert!(normalize_lines("\n \n").is_empty());
    }
}
