//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tofukit - Project context documents from declarative kits.
#[derive(Debug, Parser)]
#[command(name = "tofukit")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the manifest (defaults to tofukit.yml in the project root)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Output format: json, yaml or markdown
    #[arg(long, global = true, env = "TOFUKIT_OUTPUT_FORMAT")]
    pub format: Option<String>,

    /// Directory receiving project documents
    #[arg(short, long, global = true, env = "TOFUKIT_OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The manifest and settings overrides shared by every command.
    pub fn manifest_args(&self) -> ManifestArgs {
        ManifestArgs {
            file: self.file.clone(),
            format: self.format.clone(),
            output: self.output.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Declare every kit and project and write project documents
    Apply,

    /// Resolve every project and show its dependencies without writing
    Plan,

    /// Print the rendered document of one project
    Show(ShowArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Name of the project to render
    #[arg(value_name = "PROJECT")]
    pub name: String,
}

/// Where to find the manifest and how to override its settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestArgs {
    pub file: Option<PathBuf>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
}
