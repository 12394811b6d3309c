//! Architecture-tag derivation from compiler executable names.

use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered (pattern, tag) table; the first pattern matching the executable
/// basename wins. The x86 entry requires a literal `x86-64` prefix, which
/// real triples (`x86_64-...`) do not produce, so it effectively never
/// fires; the tag is informational metadata only and no consumer depends
/// on that mapping.
static ARCH_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"^riscv(32|64)?").unwrap(), "riscv"),
        (Regex::new(r"^aarch64").unwrap(), "aarch64"),
        (Regex::new(r"^arm").unwrap(), "arm"),
        (Regex::new(r"^x86-64").unwrap(), "x86"),
    ]
});

/// Coarse architecture label for an executable name or path. `unknown`
/// when no pattern matches (including bare `gcc`/`clang`).
pub fn architecture_tag(executable: &str) -> &'static str {
    let basename = executable
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(executable);

    for (pattern, tag) in ARCH_PATTERNS.iter() {
        if pattern.is_match(basename) {
            return tag;
        }
    }
    "unknown"
}
