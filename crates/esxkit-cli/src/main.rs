//! Esxkit CLI: the `esxkit` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            project,
            profile,
            profile_file,
            json,
        } => commands::validate::run(project, profile, profile_file, json),

        Commands::List { project } => commands::list::run(project),

        Commands::Notes { project } => commands::notes::run(project),

        Commands::Rename {
            project,
            order,
            output,
        } => commands::rename::run(project, order, output),

        Commands::Profiles => commands::profiles::run(),
    }
}
