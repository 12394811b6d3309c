//! The extension matrix flow: one source listing per (release, compiler).

use capmat_core::{CapmatError, CompilerKind, CompilerProbe, ExtensionRecord, RunContext};
use capmat_env::{ToolchainConfig, ToolchainEnvironment};
use capmat_in::parse_extension_listing;
use capmat_matrix::merge_extension_listings;
use capmat_out::{
    parse_extension_rows, render_compiler_extensions, render_extension_table, OutputLayout,
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ExtensionsArgs {
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

pub fn execute(args: ExtensionsArgs) -> Result<(), CapmatError> {
    let config = ToolchainConfig::load(&args.config)?;
    let ctx = RunContext::new(args.out_dir.clone(), args.force);
    let layout = OutputLayout::new(&ctx.out_dir);

    tracing::info!(
        run_id = %ctx.run_id,
        releases = args.releases.len(),
        "extension matrix run"
    );

    let mut sources: Vec<(String, Vec<ExtensionRecord>)> = Vec::new();
    for release in &args.releases {
        match process_release(&config, &layout, &ctx, release) {
            Ok(mut listings) => sources.append(&mut listings),
            Err(err) if err.is_recoverable() => {
                tracing::warn!(release = release.as_str(), error = %err, "release skipped");
            }
            Err(err) => return Err(err),
        }
    }

    let table = merge_extension_listings(&sources);
    let path = layout.extension_matrix_path();
    layout.write(&path, &render_extension_table(&table))?;
    tracing::info!(path = %path.display(), rows = table.entries.len(), "extension matrix written");
    Ok(())
}

/// One release: up to two source listings, each cached independently in
/// its per-compiler file. The release is only activated when some listing
/// actually needs extracting.
fn process_release(
    config: &ToolchainConfig,
    layout: &OutputLayout,
    ctx: &RunContext,
    release: &str,
) -> Result<Vec<(String, Vec<ExtensionRecord>)>, CapmatError> {
    let mut env: Option<ToolchainEnvironment> = None;
    let mut listings = Vec::new();

    for kind in [CompilerKind::Gcc, CompilerKind::Clang] {
        let label = format!("{release}-{}", kind.file_stem());
        let path = layout.compiler_extensions_path(release, kind);

        if !ctx.force_refresh && path.is_file() {
            tracing::info!(source = %label, "reusing cached extension table");
            listings.push((label, parse_extension_rows(&layout.read(&path)?)?));
            continue;
        }

        if env.is_none() {
            let spec = config.release(release).ok_or_else(|| {
                CapmatError::ActivationFailure(format!("release {release} is not configured"))
            })?;
            env = Some(ToolchainEnvironment::activate(spec)?);
        }

        let records = match extract_one(env.as_ref().unwrap(), kind) {
            Some(records) => records,
            None => continue,
        };
        layout.write(&path, &render_compiler_extensions(&records))?;
        listings.push((label, records));
    }

    Ok(listings)
}

fn extract_one(env: &ToolchainEnvironment, kind: CompilerKind) -> Option<Vec<ExtensionRecord>> {
    let probe = match env.probe(kind) {
        Ok(probe) => probe,
        Err(err) => {
            tracing::warn!(release = env.release(), error = %err, "compiler unavailable");
            return None;
        }
    };

    let text = match probe.list_extensions() {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(release = env.release(), error = %err, "extension listing failed");
            return None;
        }
    };

    let records = parse_extension_listing(&text);
    if records.is_empty() {
        tracing::warn!(
            release = env.release(),
            executable = probe.executable(),
            "extension listing held no rows"
        );
        return None;
    }
    Some(records)
}
