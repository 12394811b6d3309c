//! Matrix builder: ordered accumulation of release record sets.

use capmat_core::{Presence, ReleaseRecordSet, VersionMatrix};
use std::collections::BTreeMap;

/// Accumulates the record sets of the releases processed in this run, in
/// processing order, then assembles the wide comparison matrix. Releases
/// that produced no usable records are dropped at `push` so they never
/// contribute a column; releases that were never pushed are simply absent,
/// which is a different statement than "supported by neither compiler".
#[derive(Debug, Default)]
pub struct MatrixBuilder {
    sets: Vec<ReleaseRecordSet>,
}

impl MatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, set: ReleaseRecordSet) {
        if set.is_empty() {
            tracing::warn!(
                release = %set.release,
                "no capabilities recorded, release contributes no column"
            );
            return;
        }
        self.sets.push(set);
    }

    /// Number of releases that will contribute columns.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Rows are the union of identifiers across all pushed sets; each cell
    /// carries the release's recorded flags. Absent records are left out of
    /// the sparse map and read back as both-false.
    pub fn build(self) -> VersionMatrix {
        let releases: Vec<String> = self.sets.iter().map(|s| s.release.clone()).collect();

        let mut rows: BTreeMap<String, BTreeMap<String, Presence>> = BTreeMap::new();
        for set in &self.sets {
            for (identifier, record) in &set.records {
                rows.entry(identifier.clone()).or_default().insert(
                    set.release.clone(),
                    Presence {
                        gcc: record.gcc,
                        clang: record.clang,
                    },
                );
            }
        }

        tracing::info!(
            releases = releases.len(),
            identifiers = rows.len(),
            "version matrix assembled"
        );

        VersionMatrix { releases, rows }
    }
}
