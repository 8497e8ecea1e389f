use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// buildprep - install dependencies, then collect static files
#[derive(Parser, Debug)]
#[command(name = "buildprep")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Run 'buildprep' without arguments to install dependencies and collect static files."
)]
pub struct Cli {
    /// Output format for CI (NDJSON on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Project root (default: current directory)
    #[arg(short = 'C', long, value_name = "DIR", global = true)]
    pub project_dir: Option<PathBuf>,

    /// Config file to use instead of discovery
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Install dependencies, then collect static files (default)
    Run {
        /// Empty the static root before collecting
        #[arg(long, conflicts_with = "no_clear")]
        clear: bool,

        /// Keep existing files in the static root
        #[arg(long)]
        no_clear: bool,
    },

    /// Show the commands a build would run, without running them
    Plan,

    /// Write a buildprep.toml template in the project root
    Init {
        /// Overwrite an existing buildprep.toml
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// The command used when none is given on the command line.
    pub fn default_run() -> Self {
        Commands::Run {
            clear: false,
            no_clear: false,
        }
    }
}

/// `--clear` / `--no-clear` as an override of `collect.clear`
pub fn clear_override(clear: bool, no_clear: bool) -> Option<bool> {
    match (clear, no_clear) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}
