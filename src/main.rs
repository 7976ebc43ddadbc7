//! Astrical - modular site scaffolding
//!
//! A command line tool for managing the modules of an Astrical site: modules
//! live in git repositories, declare their own module dependencies, and are
//! installed into the project as git submodules.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod git;
mod installer;
mod source;
mod ui;
mod workspace;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Module(args) => commands::module::run(cli.project, cli.verbose, args),
        Commands::Clean => commands::clean::run(cli.project),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
