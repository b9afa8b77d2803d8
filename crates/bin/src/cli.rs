//! CLI argument definitions for the autoviv binary.

use std::path::PathBuf;

use autoviv::node::ListAction;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Merge, prune and query nested JSON documents
#[derive(Parser, Debug)]
#[command(name = "autoviv")]
#[command(about = "autoviv: nested documents that build themselves")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(
        short,
        long,
        global = true,
        default_value = "human",
        env = "AUTOVIV_FORMAT"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge documents left to right into a new document
    Extend(ExtendArgs),
    /// Recursively merge documents into a base document
    Update(UpdateArgs),
    /// Strip empty and falsy content from a document
    Prune(PruneArgs),
    /// Print the value at a dotted path
    Get(GetArgs),
}

/// Arguments for the extend command
#[derive(clap::Args, Debug)]
pub struct ExtendArgs {
    /// Documents to merge, in order ("-" reads stdin)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Merge colliding maps recursively instead of overwriting them
    #[arg(short, long)]
    pub deep: bool,

    /// How colliding sequences combine: replace, append or ammend
    #[arg(short, long, default_value = "replace", env = "AUTOVIV_LIST_ACTION")]
    pub list_action: ListAction,
}

/// Arguments for the update command
#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Base document ("-" reads stdin)
    pub base: PathBuf,

    /// Documents merged into the base, in order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the prune command
#[derive(clap::Args, Debug)]
pub struct PruneArgs {
    /// Document to prune ("-" reads stdin)
    pub file: PathBuf,

    /// Also remove 0, 0.0 and false
    #[arg(long)]
    pub prune_zero: bool,

    /// Keep sequences that end up empty
    #[arg(long)]
    pub keep_empty_lists: bool,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Document to read ("-" reads stdin)
    pub file: PathBuf,

    /// Dotted path, e.g. `server.http.port`
    pub path: String,
}
