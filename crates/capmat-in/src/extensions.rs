//! Extension-listing parser.
//!
//! Instruction-set extension listings differ from CPU listings: one
//! extension per line as `name version [description...]`, framed by prose
//! and column headers that must be skipped. GCC prints no description and
//! occasionally splits a multi-part version across two fields
//! (`"1.0," "2.0"`); Clang prints a trailing free-text description.

use capmat_core::{is_capability_identifier, ExtensionRecord};
use lazy_static::lazy_static;
use regex::Regex;

/// Prose lines that frame a listing. A line containing any of these is
/// dropped wholesale.
const SKIP_LINES: &[&str] = &[
    "All available -march extensions for RISC-V",
    "Experimental extensions",
    "Experimental ",
    "Supported ",
    "Use -march to specify the target's extension.",
    "For example, clang",
];

lazy_static! {
    /// Column-header rows: `Name Version` or `Name Version Description`.
    static ref HEADER_ROW: Regex =
        Regex::new(r"^\s*Name\s+Version(\s+Description)?\s*$").unwrap();
}

/// Parses a raw extension listing into records. Unrecognized lines are
/// skipped silently; the listing format has no in-band error signal.
pub fn parse_extension_listing(text: &str) -> Vec<ExtensionRecord> {
    let mut records = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty()
            || SKIP_LINES.iter().any(|skip| line.contains(skip))
            || HEADER_ROW.is_match(line)
        {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 || !is_capability_identifier(fields[0]) {
            continue;
        }

        let name = fields[0].to_string();
        let mut version = fields[1].to_string();
        let mut rest = &fields[2..];

        // A version field ending in a comma continues into the next field
        // when that field starts with a digit ("1.0," "2.0" -> "1.0,2.0").
        if version.ends_with(',')
            && rest
                .first()
                .map(|f| f.starts_with(|c: char| c.is_ascii_digit()))
                .unwrap_or(false)
        {
            version.push_str(rest[0]);
            rest = &rest[1..];
        }

        records.push(ExtensionRecord {
            name,
            version,
            description: rest.join(" "),
        });
    }

    records
}
