//! Command line definition.
//!
//! Lives in the library so that xtask can render man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string with build metadata.
///
/// Dev builds carry the git commit, release builds only the build date.
pub fn version() -> &'static str {
    #[cfg(not(feature = "release"))]
    {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (",
            env!("VERGEN_GIT_SHA"),
            " ",
            env!("VBSCOUT_BUILD_DATE"),
            ")"
        )
    }
    #[cfg(feature = "release")]
    {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (",
            env!("VBSCOUT_BUILD_DATE"),
            ")"
        )
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "vbscout",
    version = version(),
    about = "Turn volleyball scouting transcripts into statistics",
    long_about = "Decode rally transcripts written in run-length scouting notation and \
                  tally serves, receptions, sets, attacks and breakpoints per player."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a transcript and write the statistics
    Analyze(AnalyzeArgs),

    /// Rewrite lines typed with display keys into notation
    Preprocess(PreprocessArgs),

    /// Decode a transcript and report failures without writing anything
    Validate {
        /// Transcript file
        file: PathBuf,
    },

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Transcript file
    pub file: PathBuf,

    /// Directory for the JSON files (defaults to the configured directory)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Also print a text summary to stdout
    #[arg(short, long)]
    pub summary: bool,

    /// Stop at the first rally that fails to decode
    #[arg(long)]
    pub strict: bool,

    /// Decode rallies on all cores
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Debug, Args)]
pub struct PreprocessArgs {
    /// Transcript file
    pub file: PathBuf,

    /// Overwrite the input file
    #[arg(short, long, conflicts_with = "output")]
    pub in_place: bool,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}
