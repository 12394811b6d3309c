//! Data Model: capability records, release sets, the version matrix.
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The two compiler front ends a toolchain release bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompilerKind {
    Gcc,
    Clang,
}

impl CompilerKind {
    /// Column label used in merged tables.
    pub fn label(&self) -> &'static str {
        match self {
            CompilerKind::Gcc => "GCC",
            CompilerKind::Clang => "Clang",
        }
    }

    /// Lowercase stem used in output file names.
    pub fn file_stem(&self) -> &'static str {
        match self {
            CompilerKind::Gcc => "gcc",
            CompilerKind::Clang => "clang",
        }
    }
}

/// A capability identifier names an instruction-set extension or a CPU
/// model: non-empty, alphanumerics plus `-` and `_`, case-sensitive.
pub fn is_capability_identifier(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Sorted, deduplicated set of capability identifiers.
pub type IdentifierSet = BTreeSet<String>;

/// One adapter's successful output for one compiler of one release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Coarse label derived from the compiler executable name.
    /// Informational grouping only, never a merge key.
    pub architecture: String,
    pub identifiers: IdentifierSet,
}

/// Support flags for one identifier in one release.
///
/// Records are only created for identifiers present in at least one
/// compiler, so `gcc || clang` holds for every stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRecord {
    pub identifier: String,
    pub architecture: String,
    pub gcc: bool,
    pub clang: bool,
}

/// All capability records for one toolchain release, one per identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecordSet {
    pub release: String,
    pub records: BTreeMap<String, CapabilityRecord>,
}

impl ReleaseRecordSet {
    pub fn new(release: impl Into<String>) -> Self {
        Self {
            release: release.into(),
            records: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, record: CapabilityRecord) {
        self.records.insert(record.identifier.clone(), record);
    }

    /// Presence flags for an identifier; both false when unrecorded.
    pub fn presence(&self, identifier: &str) -> Presence {
        self.records
            .get(identifier)
            .map(|r| Presence {
                gcc: r.gcc,
                clang: r.clang,
            })
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// One cell of the version matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    pub gcc: bool,
    pub clang: bool,
}

/// The final wide comparison table: rows are identifiers observed in any
/// processed release, columns are (release, compiler) pairs in processing
/// order. A missing cell means "neither compiler supported it in that
/// release"; releases that were not processed do not appear at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionMatrix {
    /// Releases in the order they were processed.
    pub releases: Vec<String>,
    /// identifier -> release -> flags. Only recorded cells are stored.
    pub rows: BTreeMap<String, BTreeMap<String, Presence>>,
}

impl VersionMatrix {
    pub fn presence(&self, identifier: &str, release: &str) -> Presence {
        self.rows
            .get(identifier)
            .and_then(|cells| cells.get(release))
            .copied()
            .unwrap_or_default()
    }

    /// Row identifiers in lexicographic order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }
}

/// One row of an extension listing: name and version are distinct fields
/// and together form the merge key; the description rides along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRecord {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// Extension rows merged across sources with per-source presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionTable {
    /// Source listings in input order, one presence column each.
    pub sources: Vec<String>,
    /// (name, version) -> merged entry.
    pub entries: BTreeMap<(String, String), ExtensionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionEntry {
    pub description: String,
    /// Names of the sources that listed this (name, version) pair.
    pub present_in: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_grammar() {
        assert!(is_capability_identifier("sifive-e20"));
        assert!(is_capability_identifier("xventanacondops"));
        assert!(is_capability_identifier("zvl128b"));
        assert!(is_capability_identifier("rocket_rv64"));
        assert!(!is_capability_identifier(""));
        assert!(!is_capability_identifier("option:"));
        assert!(!is_capability_identifier("-mcpu="));
        assert!(!is_capability_identifier("two words"));
    }

    #[test]
    fn test_presence_defaults_to_absent() {
        let set = ReleaseRecordSet::new("2023.09");
        assert_eq!(set.presence("sifive-e20"), Presence::default());
    }

    #[test]
    fn test_record_set_keyed_by_identifier() {
        let mut set = ReleaseRecordSet::new("2023.09");
        set.insert(CapabilityRecord {
            identifier: "sifive-e20".into(),
            architecture: "riscv".into(),
            gcc: true,
            clang: false,
        });
        set.insert(CapabilityRecord {
            identifier: "sifive-e20".into(),
            architecture: "riscv".into(),
            gcc: true,
            clang: true,
        });
        assert_eq!(set.len(), 1);
        let p = set.presence("sifive-e20");
        assert!(p.gcc && p.clang);
    }

    #[test]
    fn test_matrix_serialization_round_trip() {
        let mut rows = BTreeMap::new();
        let mut cells = BTreeMap::new();
        cells.insert(
            "2023.09".to_string(),
            Presence {
                gcc: true,
                clang: false,
            },
        );
        rows.insert("sifive-e21".to_string(), cells);
        let matrix = VersionMatrix {
            releases: vec!["2023.09".to_string()],
            rows,
        };

        let json = serde_json::to_string(&matrix).unwrap();
        let back: VersionMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matrix);
        assert!(back.presence("sifive-e21", "2023.09").gcc);
        assert!(!back.presence("sifive-e21", "2024.03").gcc);
    }
}
