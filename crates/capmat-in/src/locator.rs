//! Section location inside free-form diagnostic text.
//!
//! Tries each dialect of the compiler family in priority order; the first
//! start marker found in the text selects that dialect. The end boundary is
//! resolved by, in order of preference: the paired end marker, the next
//! generic section-header line after the start, end of text.

use crate::dialects::{dialects_for, SectionDialect, SECTION_HEADER};
use capmat_core::CompilerKind;

/// The text slice strictly between the marker lines, or `None` when no
/// known start marker matches. A miss is a recoverable condition, not an
/// error: the caller decides how loudly to complain.
pub fn locate_section(text: &str, family: CompilerKind) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();

    for dialect in dialects_for(family) {
        if let Some(slice) = locate_with(&lines, dialect) {
            tracing::debug!(
                start = dialect.start,
                lines = slice.len(),
                "section dialect matched"
            );
            return Some(slice.join("\n"));
        }
    }
    None
}

fn locate_with<'a>(lines: &[&'a str], dialect: &SectionDialect) -> Option<Vec<&'a str>> {
    let start = lines.iter().position(|l| l.contains(dialect.start))?;

    let rest = &lines[start + 1..];
    let end = match dialect.end {
        Some(marker) => rest.iter().position(|l| l.contains(marker)),
        None => None,
    }
    .or_else(|| rest.iter().position(|l| SECTION_HEADER.is_match(l)))
    .unwrap_or(rest.len());

    Some(rest[..end].to_vec())
}
