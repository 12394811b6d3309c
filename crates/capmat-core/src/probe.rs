//! Compiler Probe: the seam between extraction logic and a live toolchain.
//!
//! Adapters only ever see this trait, so the whole extraction path can be
//! exercised against canned diagnostic text in tests.
use crate::error::CapmatError;

pub trait CompilerProbe {
    /// Configured executable name, used in logs and error messages.
    fn executable(&self) -> &str;

    /// Architecture tag derived from the executable name. Informational
    /// metadata only.
    fn architecture(&self) -> &str;

    /// Raw text of the "describe target options" invocation (GCC-style
    /// capability listings live inside this).
    fn describe_target_options(&self) -> Result<String, CapmatError>;

    /// Raw text of the "list CPU values" invocation (Clang-style one CPU
    /// per line).
    fn list_cpu_values(&self) -> Result<String, CapmatError>;

    /// Raw text of the "list supported extensions" invocation.
    fn list_extensions(&self) -> Result<String, CapmatError>;
}
