//! Capmat Core: error taxonomy, data model, run context, probe seam.
//!
//! Everything the extraction and merge crates share lives here. The crate
//! has no knowledge of any concrete compiler or file format.

pub mod context;
pub mod error;
pub mod model;
pub mod probe;

pub use context::RunContext;
pub use error::CapmatError;
pub use model::{
    is_capability_identifier, CapabilityRecord, CompilerKind, ExtensionEntry, ExtensionRecord,
    ExtensionTable, Extraction, IdentifierSet, Presence, ReleaseRecordSet, VersionMatrix,
};
pub use probe::CompilerProbe;

/// Engine version, stamped into logs at startup.
pub const CAPMAT_VERSION: &str = "1.0.0";
