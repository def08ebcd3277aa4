//! Shipmate CLI - release planning and CI matrix tool
//!
//! Usage: shipmate <COMMAND>
//!
//! Commands:
//!   list    List catalog apps or domains
//!   plan    Resolve app selectors into a release plan
//!   matrix  Print a GitHub Actions build matrix
//!   check   Validate the catalog

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::List { domains } => {
            commands::list::cmd_list(cli.catalog.as_deref(), domains, cli.json, cli.verbose)
        }
        Commands::Plan {
            apps,
            include_excluded,
            release,
            output,
        } => commands::plan::cmd_plan(
            cli.catalog.as_deref(),
            apps.as_deref(),
            include_excluded,
            release.as_deref(),
            output.as_deref(),
            cli.json,
            cli.verbose,
        ),
        Commands::Matrix {
            apps,
            include_excluded,
            release,
            github_output,
        } => commands::matrix::cmd_matrix(
            cli.catalog.as_deref(),
            apps.as_deref(),
            include_excluded,
            release.as_deref(),
            github_output,
            cli.json,
            cli.verbose,
        ),
        Commands::Check { strict_warnings } => {
            commands::check::cmd_check(cli.catalog.as_deref(), strict_warnings, cli.json, cli.verbose)
        }
    }
}
