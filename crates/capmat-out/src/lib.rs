//! Capmat-OUT: Typed Results to On-Disk Tables
//!
//! Renders record sets and matrices to their CSV shapes, reads merged
//! tables back for the cache short-circuit, and owns the output-directory
//! file layout. No decision logic: every table is a fixed-shape projection
//! of an already-merged value.

pub mod layout;
pub mod tables;

pub use layout::OutputLayout;
pub use tables::{
    parse_extension_rows, parse_release_cpus, render_compiler_cpus, render_compiler_extensions,
    render_extension_table, render_matrix, render_release_cpus, PRESENT,
};
