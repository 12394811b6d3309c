//! Compiler adapters: one extraction pipeline per compiler family.
//!
//! Both adapters share the same contract: probe the compiler for its
//! diagnostic text, slice the capability listing out of it, normalize the
//! slice, and return the architecture tag with the identifier set. They
//! differ only in which probe invocation they use and which normalization
//! mode fits the family's listing layout.

use crate::locator::locate_section;
use crate::normalizer::{normalize_lines, normalize_tokens};
use capmat_core::{CapmatError, CompilerKind, CompilerProbe, Extraction, IdentifierSet};

/// GCC-style extraction: capability listing lives inside the "describe
/// target options" text as run-together whitespace tokens.
pub fn extract_gcc(probe: &dyn CompilerProbe) -> Result<Extraction, CapmatError> {
    let text = probe.describe_target_options()?;
    extract(probe, CompilerKind::Gcc, &text, normalize_tokens)
}

/// Clang-style extraction: dedicated "list CPU values" text, one CPU per
/// line with a trailing description.
pub fn extract_clang(probe: &dyn CompilerProbe) -> Result<Extraction, CapmatError> {
    let text = probe.list_cpu_values()?;
    extract(probe, CompilerKind::Clang, &text, normalize_lines)
}

fn extract(
    probe: &dyn CompilerProbe,
    family: CompilerKind,
    text: &str,
    normalize: fn(&str) -> IdentifierSet,
) -> Result<Extraction, CapmatError> {
    if text.trim().is_empty() {
        return Err(CapmatError::EmptyOutput(probe.executable().to_string()));
    }

    let slice = locate_section(text, family)
        .ok_or_else(|| CapmatError::SectionNotFound(probe.executable().to_string()))?;

    let identifiers = normalize(&slice);
    if identifiers.is_empty() {
        return Err(CapmatError::NoCapabilitiesFound(
            probe.executable().to_string(),
        ));
    }

    tracing::debug!(
        executable = probe.executable(),
        count = identifiers.len(),
        "capability listing extracted"
    );

    Ok(Extraction {
        architecture: probe.architecture().to_string(),
        identifiers,
    })
}
