use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "capmat")]
#[command(author, version, about = "Toolchain capability matrix generator", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the CPU support matrix across toolchain releases
    Cpus(commands::cpus::CpusArgs),

    /// Build the extension support matrix across toolchain releases
    Extensions(commands::extensions::ExtensionsArgs),

    /// Show version information
    Version,
}
