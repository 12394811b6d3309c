//! The CPU matrix flow: extract, merge, and aggregate across releases.

use capmat_core::{
    CapmatError, CompilerKind, Extraction, IdentifierSet, ReleaseRecordSet, RunContext,
    CAPMAT_VERSION,
};
use capmat_env::{ToolchainConfig, ToolchainEnvironment};
use capmat_in::{extract_clang, extract_gcc};
use capmat_matrix::{merge_pair, MatrixBuilder};
use capmat_out::{parse_release_cpus, render_compiler_cpus, render_matrix, render_release_cpus, OutputLayout};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct CpusArgs {
    /// Toolchain releases to process, in column order
    #[arg(required = true)]
    pub releases: Vec<String>,

    /// Release configuration file
    #[arg(short, long, default_value = "releases.yaml")]
    pub config: PathBuf,

    /// Output directory for generated tables
    #[arg(short, long, default_value = "out")]
    pub out_dir: PathBuf,

    /// Regenerate per-release files even when cached copies exist
    #[arg(short, long)]
    pub force: bool,
}

pub fn execute(args: CpusArgs) -> Result<(), CapmatError> {
    let config = ToolchainConfig::load(&args.config)?;
    let ctx = RunContext::new(args.out_dir.clone(), args.force);
    let layout = OutputLayout::new(&ctx.out_dir);

    tracing::info!(
        run_id = %ctx.run_id,
        started_at = %ctx.started_at,
        engine = CAPMAT_VERSION,
        releases = args.releases.len(),
        "cpu matrix run"
    );

    let mut builder = MatrixBuilder::new();
    for release in &args.releases {
        match process_release(&config, &layout, &ctx, release) {
            Ok(set) => builder.push(set),
            Err(err) if err.is_recoverable() => {
                tracing::warn!(release = release.as_str(), error = %err, "release skipped");
            }
            Err(err) => return Err(err),
        }
    }

    let matrix = builder.build();
    let path = layout.matrix_path();
    layout.write(&path, &render_matrix(&matrix))?;
    tracing::info!(path = %path.display(), rows = matrix.rows.len(), "cpu matrix written");
    Ok(())
}

/// One release: reuse the cached merged table when allowed, otherwise
/// activate the release, run both adapters, merge, and persist. A failed
/// adapter contributes an empty set; only file I/O can abort.
fn process_release(
    config: &ToolchainConfig,
    layout: &OutputLayout,
    ctx: &RunContext,
    release: &str,
) -> Result<ReleaseRecordSet, CapmatError> {
    if !ctx.force_refresh && layout.has_release_cache(release) {
        tracing::info!(release, "reusing cached merged table");
        let text = layout.read(&layout.release_cpus_path(release))?;
        return parse_release_cpus(release, &text);
    }

    let spec = config.release(release).ok_or_else(|| {
        CapmatError::ActivationFailure(format!("release {release} is not configured"))
    })?;
    let env = ToolchainEnvironment::activate(spec)?;

    let gcc = extract_one(&env, CompilerKind::Gcc);
    let clang = extract_one(&env, CompilerKind::Clang);

    for (kind, extraction) in [(CompilerKind::Gcc, &gcc), (CompilerKind::Clang, &clang)] {
        if let Some(extraction) = extraction {
            layout.write(
                &layout.compiler_cpus_path(release, kind),
                &render_compiler_cpus(&extraction.architecture, &extraction.identifiers),
            )?;
        }
    }

    let architecture = gcc
        .as_ref()
        .or(clang.as_ref())
        .map(|e| e.architecture.as_str())
        .unwrap_or("unknown");
    let empty = IdentifierSet::new();
    let set = merge_pair(
        release,
        architecture,
        gcc.as_ref().map(|e| &e.identifiers).unwrap_or(&empty),
        clang.as_ref().map(|e| &e.identifiers).unwrap_or(&empty),
    );

    // An all-empty release writes no merged table: a header-only file
    // would be reused as a cache on the next run and hide the failure.
    if !set.is_empty() {
        layout.write(&layout.release_cpus_path(release), &render_release_cpus(&set))?;
    }
    Ok(set)
}

fn extract_one(env: &ToolchainEnvironment, kind: CompilerKind) -> Option<Extraction> {
    let probe = match env.probe(kind) {
        Ok(probe) => probe,
        Err(err) => {
            tracing::warn!(release = env.release(), error = %err, "compiler unavailable");
            return None;
        }
    };

    let result = match kind {
        CompilerKind::Gcc => extract_gcc(&probe),
        CompilerKind::Clang => extract_clang(&probe),
    };
    match result {
        Ok(extraction) => Some(extraction),
        Err(err) => {
            tracing::warn!(release = env.release(), error = %err, "extraction failed");
            None
        }
    }
}
