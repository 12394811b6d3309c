//! Release configuration loading.
//!
//! `releases.yaml` describes every toolchain release the operator may ask
//! for: the two compiler executables and whatever environment the release
//! needs to run (a PATH prefix into the vendor tree, license variables,
//! sysroot overrides).

use capmat_core::CapmatError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Top-level configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolchainConfig {
    pub releases: Vec<ReleaseSpec>,
}

/// One toolchain release: a GCC-family and a Clang-family compiler plus
/// the environment that makes them runnable. Either compiler may be
/// absent; a release with neither is rejected at activation, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseSpec {
    pub name: String,
    #[serde(default)]
    pub gcc: Option<String>,
    #[serde(default)]
    pub clang: Option<String>,
    /// Extra environment variables for every invocation in this release.
    #[serde(default)]
    pub env: HashMap<String, String>,
    /// Directories prepended to PATH for every invocation in this release.
    #[serde(default)]
    pub path: Vec<PathBuf>,
}

impl ToolchainConfig {
    pub fn load(path: &Path) -> Result<Self, CapmatError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CapmatError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, CapmatError> {
        let config: ToolchainConfig =
            serde_yaml::from_str(yaml).map_err(|e| CapmatError::Config(e.to_string()))?;
        if config.releases.is_empty() {
            return Err(CapmatError::Config("no releases configured".to_string()));
        }
        Ok(config)
    }

    pub fn release(&self, name: &str) -> Option<&ReleaseSpec> {
        self.releases.iter().find(|r| r.name == name)
    }
}
