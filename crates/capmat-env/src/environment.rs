//! Scoped toolchain activation and live compiler probes.
//!
//! Invocations are blocking `Command::output()` calls with no timeout:
//! every probe is a short-lived help/usage invocation.

use crate::arch::architecture_tag;
use crate::config::ReleaseSpec;
use capmat_core::{CapmatError, CompilerKind, CompilerProbe};
use std::ffi::OsString;
use std::io;
use std::process::Command;

/// An activated toolchain release. Construction validates that at least
/// one configured compiler actually runs; nothing global is mutated, so
/// dropping the value is the whole deactivation story.
#[derive(Debug, Clone)]
pub struct ToolchainEnvironment {
    spec: ReleaseSpec,
}

impl ToolchainEnvironment {
    pub fn activate(spec: &ReleaseSpec) -> Result<Self, CapmatError> {
        let env = Self { spec: spec.clone() };

        let usable = [CompilerKind::Gcc, CompilerKind::Clang]
            .iter()
            .any(|kind| {
                env.configured_executable(*kind)
                    .map(|exe| env.is_available(exe))
                    .unwrap_or(false)
            });
        if !usable {
            return Err(CapmatError::ActivationFailure(format!(
                "release {}: no configured compiler is runnable",
                spec.name
            )));
        }

        tracing::info!(release = %spec.name, "toolchain release activated");
        Ok(env)
    }

    pub fn release(&self) -> &str {
        &self.spec.name
    }

    /// Probe for one compiler of this release. `MissingCompiler` when the
    /// release does not configure that front end or the executable does
    /// not run.
    pub fn probe(&self, kind: CompilerKind) -> Result<ToolchainProbe, CapmatError> {
        let executable = self
            .configured_executable(kind)
            .ok_or_else(|| {
                CapmatError::MissingCompiler(format!(
                    "release {}: no {} compiler configured",
                    self.spec.name,
                    kind.label()
                ))
            })?
            .to_string();

        if !self.is_available(&executable) {
            return Err(CapmatError::MissingCompiler(format!(
                "release {}: {executable} is not runnable",
                self.spec.name
            )));
        }

        Ok(ToolchainProbe {
            environment: self.clone(),
            architecture: architecture_tag(&executable),
            executable,
            kind,
        })
    }

    fn configured_executable(&self, kind: CompilerKind) -> Option<&str> {
        match kind {
            CompilerKind::Gcc => self.spec.gcc.as_deref(),
            CompilerKind::Clang => self.spec.clang.as_deref(),
        }
    }

    fn is_available(&self, executable: &str) -> bool {
        self.command(executable)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Builds a command with this release's environment applied: extra
    /// variables set, configured directories prepended to PATH.
    fn command(&self, executable: &str) -> Command {
        let mut cmd = Command::new(executable);
        for (key, value) in &self.spec.env {
            cmd.env(key, value);
        }
        if !self.spec.path.is_empty() {
            let mut entries: Vec<OsString> = self
                .spec
                .path
                .iter()
                .map(|p| p.as_os_str().to_os_string())
                .collect();
            if let Some(existing) = std::env::var_os("PATH") {
                entries.extend(std::env::split_paths(&existing).map(OsString::from));
            }
            if let Ok(joined) = std::env::join_paths(entries) {
                cmd.env("PATH", joined);
            }
        }
        cmd
    }
}

/// Live probe bound to one compiler of one activated release.
#[derive(Debug)]
pub struct ToolchainProbe {
    environment: ToolchainEnvironment,
    executable: String,
    architecture: &'static str,
    kind: CompilerKind,
}

impl ToolchainProbe {
    fn run(&self, args: &[&str]) -> Result<String, CapmatError> {
        let output = self
            .environment
            .command(&self.executable)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => CapmatError::MissingCompiler(self.executable.clone()),
                _ => CapmatError::EmptyOutput(format!("{}: {e}", self.executable)),
            })?;

        // Some compiler releases print help listings on stderr, others on
        // stdout; a nonzero exit with usable text is also common for help
        // invocations. Keep everything and let the adapter judge it.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}

impl CompilerProbe for ToolchainProbe {
    fn executable(&self) -> &str {
        &self.executable
    }

    fn architecture(&self) -> &str {
        self.architecture
    }

    fn describe_target_options(&self) -> Result<String, CapmatError> {
        self.run(&["--target-help"])
    }

    fn list_cpu_values(&self) -> Result<String, CapmatError> {
        self.run(&["--print-supported-cpus"])
    }

    fn list_extensions(&self) -> Result<String, CapmatError> {
        match self.kind {
            CompilerKind::Gcc => self.run(&["-march=help"]),
            CompilerKind::Clang => self.run(&["--print-supported-extensions"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReleaseSpec;
    use std::collections::HashMap;

    fn spec(gcc: Option<&str>, clang: Option<&str>) -> ReleaseSpec {
        ReleaseSpec {
            name: "test".to_string(),
            gcc: gcc.map(String::from),
            clang: clang.map(String::from),
            env: HashMap::new(),
            path: Vec::new(),
        }
    }

    #[test]
    fn test_activation_requires_a_runnable_compiler() {
        // `echo --version` exits zero everywhere this test runs.
        assert!(ToolchainEnvironment::activate(&spec(Some("echo"), None)).is_ok());

        let err = ToolchainEnvironment::activate(&spec(Some("no-such-compiler-exe"), None));
        assert!(matches!(err, Err(CapmatError::ActivationFailure(_))));

        let err = ToolchainEnvironment::activate(&spec(None, None));
        assert!(matches!(err, Err(CapmatError::ActivationFailure(_))));
    }

    #[test]
    fn test_unconfigured_compiler_is_missing() {
        let env = ToolchainEnvironment::activate(&spec(Some("echo"), None)).unwrap();
        assert!(matches!(
            env.probe(CompilerKind::Clang),
            Err(CapmatError::MissingCompiler(_))
        ));
    }

    #[test]
    fn test_probe_captures_invocation_output() {
        let env = ToolchainEnvironment::activate(&spec(Some("echo"), None)).unwrap();
        let probe = env.probe(CompilerKind::Gcc).unwrap();
        assert_eq!(probe.executable(), "echo");
        assert_eq!(probe.architecture(), "unknown");
        let text = probe.describe_target_options().unwrap();
        assert_eq!(text.trim(), "--target-help");
    }
}
