//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - module: `module add|remove|update|list|init` arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod module;

pub use completions::CompletionsArgs;
pub use module::{AddArgs, InitArgs, ModuleArgs, ModuleCommand, RemoveArgs, UpdateArgs};

/// Astrical - modular site scaffolding
///
/// Install, update, and scaffold project modules backed by git repositories.
#[derive(Parser, Debug)]
#[command(
    name = "astrical",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Manage the modules of an Astrical site",
    long_about = "Astrical installs site modules from git repositories as submodules under \
                  src/modules, following each module's declared dependencies.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  astrical module add gh@acme/blog         \x1b[90m# Install a module and its dependencies\x1b[0m\n   \
                  astrical module list                     \x1b[90m# List installed modules\x1b[0m\n   \
                  astrical module update blog              \x1b[90m# Pull the latest blog module\x1b[0m\n   \
                  astrical module init gallery             \x1b[90m# Scaffold a new module\x1b[0m\n   \
                  astrical clean                           \x1b[90m# Remove generated build files\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "ASTRICAL_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage project modules
    Module(ModuleArgs),

    /// Remove generated and installed build artifacts
    Clean,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
