use clap::{Parser, Subcommand};

/// Starter repository used by `module init`
pub const DEFAULT_STARTER: &str = "gh@astrical-modules/starter";

/// Arguments for the module command
#[derive(Parser, Debug)]
pub struct ModuleArgs {
    #[command(subcommand)]
    pub command: ModuleCommand,
}

#[derive(Subcommand, Debug)]
pub enum ModuleCommand {
    /// Install a module and its dependencies
    Add(AddArgs),

    /// Remove an installed module
    #[command(visible_alias = "rm")]
    Remove(RemoveArgs),

    /// Update one or all installed modules
    Update(UpdateArgs),

    /// List installed modules
    #[command(visible_alias = "ls")]
    List,

    /// Create a new module from a starter repository
    Init(InitArgs),
}

/// Arguments for `module add`
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install from GitHub shorthand:\n    astrical module add gh@acme/blog\n\n\
                  Install from a URL:\n    astrical module add https://gitlab.com/acme/blog\n\n\
                  Install a module whose manifest lives in a subdirectory:\n    astrical module add gh@acme/monorepo//packages/blog\n\n\
                  Install from a local repository:\n    astrical module add ../blog")]
pub struct AddArgs {
    /// Module reference (gh@owner/repo, URL, or local path, optionally with //subpath)
    pub reference: String,
}

/// Arguments for `module remove`
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a module:\n    astrical module remove blog\n\n\
                  Remove without confirmation:\n    astrical module remove blog -y")]
pub struct RemoveArgs {
    /// Installed module name
    pub name: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for `module update`
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Installed module name (updates all modules when omitted)
    pub name: Option<String>,
}

/// Arguments for `module init`
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Scaffold a module from the default starter:\n    astrical module init gallery\n\n\
                  Scaffold from your own starter:\n    astrical module init gallery --repo gh@acme/module-starter")]
pub struct InitArgs {
    /// Name of the new module
    pub name: String,

    /// Starter repository reference
    #[arg(long, default_value = DEFAULT_STARTER)]
    pub repo: String,
}
