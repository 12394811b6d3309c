//! Pair merge: two per-compiler identifier sets into one record set.

use capmat_core::{CapabilityRecord, IdentifierSet, ReleaseRecordSet};

/// Unions the GCC and Clang identifier sets for one release. Each record's
/// flags are plain set membership, so the merge is commutative and
/// associative in the two inputs and an empty input (compiler missing for
/// that release) is an ordinary zero-sized set, not an error.
///
/// Records exist only for identifiers present in at least one input, which
/// is what keeps the `gcc || clang` record invariant structural.
pub fn merge_pair(
    release: &str,
    architecture: &str,
    gcc: &IdentifierSet,
    clang: &IdentifierSet,
) -> ReleaseRecordSet {
    let mut set = ReleaseRecordSet::new(release);

    for identifier in gcc.union(clang) {
        set.insert(CapabilityRecord {
            identifier: identifier.clone(),
            architecture: architecture.to_string(),
            gcc: gcc.contains(identifier),
            clang: clang.contains(identifier),
        });
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> IdentifierSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_union_with_independent_flags() {
        let gcc = ids(&["sifive-e20", "sifive-e21", "sifive-e24"]);
        let clang = ids(&["sifive-e20", "sifive-s21"]);
        let set = merge_pair("X", "riscv", &gcc, &clang);

        assert_eq!(set.len(), 4);
        let e20 = set.presence("sifive-e20");
        assert!(e20.gcc && e20.clang);
        let e21 = set.presence("sifive-e21");
        assert!(e21.gcc && !e21.clang);
        let s21 = set.presence("sifive-s21");
        assert!(!s21.gcc && s21.clang);
        let e24 = set.presence("sifive-e24");
        assert!(e24.gcc && !e24.clang);
    }

    #[test]
    fn test_merge_is_commutative_up_to_column_swap() {
        let a = ids(&["rocket", "sifive-e20"]);
        let b = ids(&["sifive-e20", "thead-c906"]);

        let forward = merge_pair("X", "riscv", &a, &b);
        let swapped = merge_pair("X", "riscv", &b, &a);

        let forward_ids: Vec<&String> = forward.records.keys().collect();
        let swapped_ids: Vec<&String> = swapped.records.keys().collect();
        assert_eq!(forward_ids, swapped_ids);

        for (identifier, record) in &forward.records {
            let mirror = &swapped.records[identifier];
            assert_eq!(record.gcc, mirror.clang);
            assert_eq!(record.clang, mirror.gcc);
        }
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        let gcc = ids(&["sifive-e20"]);
        let set = merge_pair("X", "riscv", &gcc, &IdentifierSet::new());
        assert_eq!(set.len(), 1);
        let p = set.presence("sifive-e20");
        assert!(p.gcc && !p.clang);

        let both_empty = merge_pair("X", "riscv", &IdentifierSet::new(), &IdentifierSet::new());
        assert!(both_empty.is_empty());
    }

    #[test]
    fn test_every_record_has_at_least_one_flag() {
        let gcc = ids(&["a", "b"]);
        let clang = ids(&["b", "c"]);
        let set = merge_pair("X", "riscv", &gcc, &clang);
        assert!(set.records.values().all(|r| r.gcc || r.clang));
    }
}
