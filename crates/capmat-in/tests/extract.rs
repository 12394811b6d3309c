//! Extraction against captured toolchain help texts.

use capmat_core::{CapmatError, CompilerProbe};
use capmat_in::{extract_clang, extract_gcc, parse_extension_listing};

const GCC_HELP_NEW: &str =
    include_str!("../../../testing/fixtures/help_texts/gcc-target-help-2023.09.txt");
const GCC_HELP_OLD: &str =
    include_str!("../../../testing/fixtures/help_texts/gcc-target-help-2019.02.txt");
const CLANG_CPUS: &str =
    include_str!("../../../testing/fixtures/help_texts/clang-print-supported-cpus.txt");
const GCC_MARCH: &str = include_str!("../../../testing/fixtures/help_texts/gcc-march-help.txt");
const CLANG_EXTENSIONS: &str =
    include_str!("../../../testing/fixtures/help_texts/clang-print-supported-extensions.txt");

struct FixtureProbe {
    executable: &'static str,
    target_help: &'static str,
    cpu_values: &'static str,
}

impl CompilerProbe for FixtureProbe {
    fn executable(&self) -> &str {
        self.executable
    }
    fn architecture(&self) -> &str {
        "riscv"
    }
    fn describe_target_options(&self) -> Result<String, CapmatError> {
        Ok(self.target_help.to_string())
    }
    fn list_cpu_values(&self) -> Result<String, CapmatError> {
        Ok(self.cpu_values.to_string())
    }
    fn list_extensions(&self) -> Result<String, CapmatError> {
        Ok(String::new())
    }
}

fn gcc_probe(target_help: &'static str) -> FixtureProbe {
    FixtureProbe {
        executable: "riscv64-unknown-elf-gcc",
        target_help,
        cpu_values: "",
    }
}

#[test]
fn gcc_extraction_takes_only_the_mcpu_section() {
    let extraction = extract_gcc(&gcc_probe(GCC_HELP_NEW)).unwrap();

    assert_eq!(extraction.identifiers.len(), 14);
    assert!(extraction.identifiers.contains("sifive-e20"));
    assert!(extraction.identifiers.contains("thead-c906"));
    // ABI values sit before the section, tune values after it.
    assert!(!extraction.identifiers.contains("ilp32"));
    assert!(!extraction.identifiers.contains("rocket"));
    assert!(!extraction.identifiers.contains("size"));
}

#[test]
fn oldest_gcc_dialect_yields_the_same_set() {
    let new = extract_gcc(&gcc_probe(GCC_HELP_NEW)).unwrap();
    let old = extract_gcc(&gcc_probe(GCC_HELP_OLD)).unwrap();
    assert_eq!(new.identifiers, old.identifiers);
}

#[test]
fn clang_extraction_drops_banner_and_trailer() {
    let probe = FixtureProbe {
        executable: "riscv64-unknown-elf-clang",
        target_help: "",
        cpu_values: CLANG_CPUS,
    };
    let extraction = extract_clang(&probe).unwrap();

    assert_eq!(extraction.identifiers.len(), 20);
    assert!(extraction.identifiers.contains("generic-rv64"));
    assert!(extraction.identifiers.contains("syntacore-scr1-base"));
    assert!(!extraction.identifiers.contains("clang"));
    assert!(!extraction.identifiers.contains("posix"));
    assert!(!extraction.identifiers.contains("For"));
}

#[test]
fn gcc_extension_listing_parses_data_rows_only() {
    let records = parse_extension_listing(GCC_MARCH);

    assert_eq!(records.len(), 13);
    assert_eq!(records[0].name, "i");
    assert_eq!(records[0].version, "2.0,2.1");
    assert!(records.iter().all(|r| r.description.is_empty()));
    assert!(records.iter().any(|r| r.name == "zba" && r.version == "1.0"));
}

#[test]
fn clang_extension_listing_keeps_descriptions_and_experimental_rows() {
    let records = parse_extension_listing(CLANG_EXTENSIONS);

    assert_eq!(records.len(), 14);
    let zbb = records.iter().find(|r| r.name == "zbb").unwrap();
    assert_eq!(zbb.version, "1.0");
    assert_eq!(zbb.description, "'Zbb' (Basic Bit-Manipulation)");
    let e = records.iter().find(|r| r.name == "e").unwrap();
    assert!(e.description.is_empty());
    assert!(records.iter().any(|r| r.name == "zicfiss"));
}
