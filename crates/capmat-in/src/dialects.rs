//! Section-marker dialects for the known compiler output grammars.
//!
//! The wording that delimits a CPU listing has changed across compiler
//! releases. Each historical variant is one table entry; supporting a new
//! release means adding an entry here, not new control flow.

use capmat_core::CompilerKind;
use lazy_static::lazy_static;
use regex::Regex;

/// One historical variant of the marker text a compiler release uses to
/// delimit its capability listing.
#[derive(Debug, Clone, Copy)]
pub struct SectionDialect {
    pub family: CompilerKind,
    /// Selects this dialect when found anywhere in the text.
    pub start: &'static str,
    /// Paired end marker. `None` falls back to the generic section-header
    /// rule, then to end of text.
    pub end: Option<&'static str>,
}

/// All known dialects in priority order, newest wording first.
///
/// The Clang end marker is matched as a prefix so trailing wording
/// variations ("... to specify the target's processor.") still terminate
/// the section.
pub const DIALECTS: &[SectionDialect] = &[
    SectionDialect {
        family: CompilerKind::Gcc,
        start: "Known valid arguments for -mcpu= option:",
        end: None,
    },
    SectionDialect {
        family: CompilerKind::Gcc,
        start: "Known valid values for -mcpu=",
        end: None,
    },
    SectionDialect {
        family: CompilerKind::Gcc,
        start: "Use -mcpu=",
        end: None,
    },
    SectionDialect {
        family: CompilerKind::Clang,
        start: "Available CPUs for this target:",
        end: Some("Use -mcpu or -mtune"),
    },
];

/// Dialect candidates for one compiler family, still in priority order.
pub fn dialects_for(family: CompilerKind) -> impl Iterator<Item = &'static SectionDialect> {
    DIALECTS.iter().filter(move |d| d.family == family)
}

lazy_static! {
    /// Generic section-header rule: a capitalized first word on a line that
    /// ends in a colon. Header indentation varies across releases; listing
    /// rows are lowercase identifiers, so this cannot fire on data.
    pub static ref SECTION_HEADER: Regex = Regex::new(r"^\s*[A-Z][A-Za-z0-9-]*\b.*:\s*$").unwrap();
}
