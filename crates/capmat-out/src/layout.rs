//! Output-directory layout and file access.
//!
//! Single-writer: concurrent runs against one directory are not supported
//! and must be serialized by the operator.

use capmat_core::{CapmatError, CompilerKind};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct OutputLayout {
    dir: PathBuf,
}

impl OutputLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn compiler_cpus_path(&self, release: &str, kind: CompilerKind) -> PathBuf {
        self.dir
            .join(format!("{release}-{}-cpus.csv", kind.file_stem()))
    }

    pub fn release_cpus_path(&self, release: &str) -> PathBuf {
        self.dir.join(format!("{release}-cpus.csv"))
    }

    pub fn matrix_path(&self) -> PathBuf {
        self.dir.join("cpu-matrix.csv")
    }

    pub fn compiler_extensions_path(&self, release: &str, kind: CompilerKind) -> PathBuf {
        self.dir
            .join(format!("{release}-{}-extensions.csv", kind.file_stem()))
    }

    pub fn extension_matrix_path(&self) -> PathBuf {
        self.dir.join("extension-matrix.csv")
    }

    /// The cache short-circuit keys on the merged file only: per-compiler
    /// files are operator-facing and may be deleted freely.
    pub fn has_release_cache(&self, release: &str) -> bool {
        self.release_cpus_path(release).is_file()
    }

    pub fn write(&self, path: &Path, contents: &str) -> Result<(), CapmatError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| CapmatError::Report(format!("{}: {e}", self.dir.display())))?;
        fs::write(path, contents)
            .map_err(|e| CapmatError::Report(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "table written");
        Ok(())
    }

    pub fn read(&self, path: &Path) -> Result<String, CapmatError> {
        fs::read_to_string(path)
            .map_err(|e| CapmatError::Report(format!("{}: {e}", path.display())))
    }
}
