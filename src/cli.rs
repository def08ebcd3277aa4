use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Shipmate - release planning and CI matrix tool
#[derive(Parser, Debug)]
#[command(name = "shipmate")]
#[command(author, version, long_about = None)]
#[command(
    after_help = "App selectors accept a comma-separated list of: full ids \
(demo-hello_go), domain/name paths (demo/hello_go), domains (demo), unique \
short names (hello_go), or 'all'."
)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to shipmate.toml (default: walk up from the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog apps (or domains)
    List {
        /// List domains instead of apps
        #[arg(long)]
        domains: bool,
    },

    /// Resolve app selectors into a release plan
    Plan {
        /// Comma-separated app selectors (prompts interactively when omitted)
        #[arg(short, long, value_name = "LIST")]
        apps: Option<String>,

        /// Let 'all' include the default-excluded domain
        #[arg(long)]
        include_excluded: bool,

        /// Release tag, e.g. v1.4.0 or v2.0.0-rc.1
        #[arg(short, long, value_name = "REL")]
        release: Option<String>,

        /// Write the plan document to this path
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print a GitHub Actions build matrix for the selected apps
    Matrix {
        /// Comma-separated app selectors
        #[arg(short, long, value_name = "LIST")]
        apps: Option<String>,

        /// Let 'all' include the default-excluded domain
        #[arg(long)]
        include_excluded: bool,

        /// Release tag to stamp into every matrix entry
        #[arg(short, long, value_name = "REL")]
        release: Option<String>,

        /// Also append matrix=<json> to the $GITHUB_OUTPUT file
        #[arg(long)]
        github_output: bool,
    },

    /// Validate the catalog (exits non-zero on errors)
    Check {
        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },
}
