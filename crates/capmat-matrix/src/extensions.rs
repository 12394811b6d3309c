//! Extension table merge across source listings.

use capmat_core::{ExtensionEntry, ExtensionRecord, ExtensionTable};
use std::collections::BTreeMap;

/// Merges named extension listings into one table. The (name, version)
/// pair is the key; each source contributes a presence column in input
/// order; an empty description is backfilled by the first source that
/// supplies a non-empty one.
pub fn merge_extension_listings(sources: &[(String, Vec<ExtensionRecord>)]) -> ExtensionTable {
    let mut entries: BTreeMap<(String, String), ExtensionEntry> = BTreeMap::new();

    for (source, records) in sources {
        for record in records {
            let key = (record.name.clone(), record.version.clone());
            let entry = entries.entry(key).or_insert_with(|| ExtensionEntry {
                description: String::new(),
                present_in: Default::default(),
            });
            if entry.description.is_empty() && !record.description.is_empty() {
                entry.description = record.description.clone();
            }
            entry.present_in.insert(source.clone());
        }
    }

    tracing::info!(
        sources = sources.len(),
        extensions = entries.len(),
        "extension table merged"
    );

    ExtensionTable {
        sources: sources.iter().map(|(name, _)| name.clone()).collect(),
        entries,
    }
}
