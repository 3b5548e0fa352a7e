//! CLI argument definitions for the Serdict binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Serdict: inspect and repair flattened key/value documents
#[derive(Parser, Debug)]
#[command(name = "serdict")]
#[command(about = "Serdict: inspect and repair flattened key/value documents")]
#[command(version)]
pub struct Cli {
    /// Output format for reports
    #[arg(long, global = true, default_value = "human", env = "SERDICT_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a {keys, values} document and report its conflicts
    Check(CheckArgs),
    /// Import a {keys, values} document and write it back without conflicts
    Normalize(NormalizeArgs),
    /// Flatten a plain JSON object into a {keys, values} document
    Pack(PackArgs),
    /// Expand a {keys, values} document into a plain JSON object
    Unpack(UnpackArgs),
}

/// Arguments for the check command
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Document to check
    pub file: PathBuf,

    /// Fail when any entry would be dropped
    #[arg(long, env = "SERDICT_STRICT")]
    pub strict: bool,
}

/// Arguments for the normalize command
#[derive(clap::Args, Debug)]
pub struct NormalizeArgs {
    /// Document to normalize
    pub file: PathBuf,

    /// Write here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Put dropped entries back at their original slots
    #[arg(long)]
    pub keep_conflicts: bool,
}

/// Arguments for the pack command
#[derive(clap::Args, Debug)]
pub struct PackArgs {
    /// Plain JSON object to flatten
    pub file: PathBuf,

    /// Write here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the unpack command
#[derive(clap::Args, Debug)]
pub struct UnpackArgs {
    /// Document to expand
    pub file: PathBuf,

    /// Write here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
