/// CLI argument definitions for the `cred` command.
///
/// Defines all subcommands and their arguments using the `clap` derive
/// macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "cred", version, about = "Contribution attribution tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// File-selection arguments shared by the analysis subcommands.
#[derive(Args)]
pub struct SelectionArgs {
    /// Directory to analyze (default: current directory)
    pub path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Extra directory names to exclude (repeatable)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// Glob patterns to exclude, relative to the root (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude_globs: Vec<String>,

    /// Maximum file size in bytes (default: 1000000)
    #[arg(long)]
    pub max_file_bytes: Option<u64>,

    /// Maximum lines per file (default: 4000)
    #[arg(long)]
    pub max_file_lines: Option<usize>,

    /// Maximum number of files to consider (default: 5000)
    #[arg(long)]
    pub max_files: Option<usize>,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Attribute complexity and ownership per contributor
    #[command(long_about = "\
Attribute complexity and ownership per contributor.

Every function in the repository is blamed through its file's line-author
map. Each contributor receives a complexity contribution proportional to
their line share of the function; the contributor(s) with the most lines own
it, with ties split evenly. Functions above the mean complexity are hotspots
and attribute hotspot shares to the same owners.

The report merges three passes:
  attribution  -- average complexity, function and hotspot ownership
  LOC          -- share of all blamed lines
  history      -- commits and edited lines per author

Caps and the --budget deadline stop work early while keeping partial
results; the report is then marked partial and its percentages cover the
processed subset only.")]
    Score {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Wall-clock budget in seconds; expiry keeps partial results
        #[arg(long, value_name = "SECS")]
        budget: Option<u64>,

        /// Maximum number of functions to extract (default: 20000)
        #[arg(long)]
        max_functions: Option<usize>,
    },

    /// Show each author's share of total lines of code
    Loc {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// List functions with their cyclomatic complexity
    Functions {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Show only the top N functions (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
