//! End-to-end: raw diagnostic text through extraction, merge, and
//! rendering for one release.

use capmat_core::CompilerKind;
use capmat_in::{locate_section, normalize_lines, normalize_tokens};
use capmat_matrix::{merge_pair, MatrixBuilder};
use capmat_out::{parse_release_cpus, render_matrix, render_release_cpus};

const GCC_TEXT: &str = "Known valid arguments for -mcpu= option:\n  sifive-e20 sifive-e21 sifive-e24\nKnown valid arguments for -mtune= option:\n  rocket sifive-7-series\n";

const CLANG_TEXT: &str = "Available CPUs for this target:\n\n\tsifive-e20\n\tsifive-s21\n\nUse -mcpu or -mtune to specify the target's processor.\n";

#[test]
fn one_release_from_text_to_matrix() {
    let gcc_slice = locate_section(GCC_TEXT, CompilerKind::Gcc).unwrap();
    let gcc = normalize_tokens(&gcc_slice);
    let clang_slice = locate_section(CLANG_TEXT, CompilerKind::Clang).unwrap();
    let clang = normalize_lines(&clang_slice);

    let gcc_ids: Vec<&str> = gcc.iter().map(String::as_str).collect();
    assert_eq!(gcc_ids, vec!["sifive-e20", "sifive-e21", "sifive-e24"]);
    let clang_ids: Vec<&str> = clang.iter().map(String::as_str).collect();
    assert_eq!(clang_ids, vec!["sifive-e20", "sifive-s21"]);

    let set = merge_pair("X", "riscv", &gcc, &clang);
    let mut builder = MatrixBuilder::new();
    builder.push(set);
    let matrix = builder.build();

    assert_eq!(
        render_matrix(&matrix),
        "CPU,X-GCC,X-Clang\n\
         sifive-e20,X,X\n\
         sifive-e21,X,\n\
         sifive-e24,X,\n\
         sifive-s21,,X\n"
    );
}

#[test]
fn extraction_is_idempotent_at_the_byte_level() {
    let run = || {
        let gcc = normalize_tokens(&locate_section(GCC_TEXT, CompilerKind::Gcc).unwrap());
        let clang = normalize_lines(&locate_section(CLANG_TEXT, CompilerKind::Clang).unwrap());
        render_release_cpus(&merge_pair("X", "riscv", &gcc, &clang))
    };
    assert_eq!(run(), run());
}

#[test]
fn cached_release_table_feeds_the_matrix_unchanged() {
    let gcc = normalize_tokens(&locate_section(GCC_TEXT, CompilerKind::Gcc).unwrap());
    let clang = normalize_lines(&locate_section(CLANG_TEXT, CompilerKind::Clang).unwrap());
    let set = merge_pair("X", "riscv", &gcc, &clang);

    let cached = parse_release_cpus("X", &render_release_cpus(&set)).unwrap();

    let mut from_live = MatrixBuilder::new();
    from_live.push(set);
    let mut from_cache = MatrixBuilder::new();
    from_cache.push(cached);

    assert_eq!(
        render_matrix(&from_live.build()),
        render_matrix(&from_cache.build())
    );
}
